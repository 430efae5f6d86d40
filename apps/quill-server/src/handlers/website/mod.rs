//! Server-rendered website.

mod auth;
mod pages;

use actix_web::http::Method;

use crate::routing::{Handler, RouteTree, leaf};

pub fn routes() -> RouteTree<Handler> {
    RouteTree::new()
        .route(Method::GET, "/", leaf(pages::home))
        .route(Method::GET, "/author/:id", leaf(pages::author))
        .route(Method::GET, "/authors/:id", leaf(pages::author))
        .route(Method::GET, "/post/:id", leaf(pages::post))
        .route(Method::GET, "/auth/signup", leaf(auth::signup_form))
        .route(Method::POST, "/auth/signup", leaf(auth::signup))
        .route(Method::POST, "/auth/signup/finish", leaf(auth::signup))
        .route(Method::GET, "/auth/signin", leaf(auth::signin_form))
        .route(Method::POST, "/auth/signin", leaf(auth::signin))
        .route(Method::POST, "/auth/signin/finish", leaf(auth::signin))
}
