//! Leaf handlers and the route tables that reach them.

mod api;
mod session;
mod view;
mod website;

use crate::routing::Router;

/// Build the API and website route trees.
pub fn router() -> Router {
    Router::new(api::routes(), website::routes())
}
