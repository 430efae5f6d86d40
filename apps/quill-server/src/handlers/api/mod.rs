//! JSON API, mounted under `/api`.

mod authors;
mod login;
mod posts;

use actix_web::http::Method;

use crate::routing::{Handler, RouteTree, leaf};

pub fn routes() -> RouteTree<Handler> {
    RouteTree::new()
        .route(Method::GET, "/authors", leaf(authors::list))
        .route(Method::GET, "/authors/:id", leaf(authors::show))
        .route(Method::GET, "/posts", leaf(posts::list))
        .route(Method::POST, "/posts", leaf(posts::create))
        .route(Method::DELETE, "/posts", leaf(posts::delete_all))
        .route(Method::GET, "/posts/:id", leaf(posts::show))
        .route(Method::PUT, "/posts/:id", leaf(posts::update))
        .route(Method::DELETE, "/posts/:id", leaf(posts::delete))
        .route(Method::POST, "/login", leaf(login::login))
}
