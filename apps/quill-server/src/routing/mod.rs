//! Request routing.
//!
//! Every request enters through [`dispatch`], registered as the actix
//! default service. The first path segment selects a tree: `api` peels off
//! into the JSON tree, anything else is matched against the website tree.

mod context;
mod tree;

pub use context::{FormData, RequestContext};
pub use tree::{Match, RouteError, RouteTree};

use actix_web::http::Method;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, web};
use futures::future::LocalBoxFuture;
use percent_encoding::percent_decode_str;
use quill_core::path::shift_path;

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

/// Boxed leaf handler stored in the trie.
pub type Handler = Box<
    dyn Fn(RequestContext) -> LocalBoxFuture<'static, AppResult<HttpResponse>> + Send + Sync,
>;

/// Box an async fn into a [`Handler`].
pub fn leaf<F, Fut>(f: F) -> Handler
where
    F: Fn(RequestContext) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = AppResult<HttpResponse>> + 'static,
{
    Box::new(move |ctx| -> LocalBoxFuture<'static, AppResult<HttpResponse>> { Box::pin(f(ctx)) })
}

/// Which tree served a request; decides how errors are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Api,
    Website,
}

impl Surface {
    pub fn render_error(self, err: &AppError) -> HttpResponse {
        match self {
            Surface::Api => actix_web::ResponseError::error_response(err),
            Surface::Website => err.page_response(),
        }
    }
}

/// The two route trees.
pub struct Router {
    api: RouteTree<Handler>,
    website: RouteTree<Handler>,
}

impl Router {
    pub fn new(api: RouteTree<Handler>, website: RouteTree<Handler>) -> Self {
        Self { api, website }
    }

    pub fn resolve(
        &self,
        method: &Method,
        path: &str,
    ) -> (Surface, Result<Match<'_, Handler>, RouteError>) {
        let (head, tail) = shift_path(path);
        if head == "api" {
            (Surface::Api, self.api.lookup(method, &tail))
        } else {
            (Surface::Website, self.website.lookup(method, path))
        }
    }

    /// Every route, API routes under their `/api` prefix.
    pub fn routes(&self) -> Vec<(Method, String)> {
        let api = self.api.routes().into_iter().map(|(method, path)| {
            let path = if path == "/" {
                "/api".to_string()
            } else {
                format!("/api{path}")
            };
            (method, path)
        });
        api.chain(self.website.routes()).collect()
    }
}

/// Actix entry point for every request.
pub async fn dispatch(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<AppState>,
    router: web::Data<Router>,
) -> HttpResponse {
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map(|id| id.as_str().to_string())
        .unwrap_or_default();

    let path = percent_decode_str(req.path())
        .decode_utf8_lossy()
        .into_owned();
    let (surface, resolved) = router.resolve(req.method(), &path);
    tracing::debug!(
        request_id = %request_id,
        method = %req.method(),
        path = %path,
        surface = ?surface,
        "Dispatching request"
    );

    let matched = match resolved {
        Ok(matched) => matched,
        Err(err) => return surface.render_error(&AppError::from(err)),
    };

    let form = match FormData::from_request(&req, &body) {
        Ok(form) => form,
        Err(err) => return surface.render_error(&err),
    };

    let ctx = RequestContext {
        state,
        form,
        params: matched.params,
        request: req,
    };

    match (matched.handler)(ctx).await {
        Ok(response) => response,
        Err(err) => surface.render_error(&err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> Handler {
        leaf(|_ctx: RequestContext| async { Ok(HttpResponse::Ok().finish()) })
    }

    fn router() -> Router {
        Router::new(
            RouteTree::new()
                .route(Method::GET, "/posts", noop())
                .route(Method::GET, "/posts/:id", noop()),
            RouteTree::new()
                .route(Method::GET, "/", noop())
                .route(Method::GET, "/post/:id", noop()),
        )
    }

    #[test]
    fn test_api_prefix_selects_api_tree() {
        let router = router();
        let (surface, found) = router.resolve(&Method::GET, "/api/posts/42");
        assert_eq!(surface, Surface::Api);
        assert_eq!(found.unwrap().params, vec!["42".to_string()]);
    }

    #[test]
    fn test_other_paths_use_website_tree() {
        let router = router();
        let (surface, found) = router.resolve(&Method::GET, "/post/42");
        assert_eq!(surface, Surface::Website);
        assert!(found.is_ok());

        let (surface, found) = router.resolve(&Method::GET, "/posts/42");
        assert_eq!(surface, Surface::Website);
        assert!(matches!(found, Err(RouteError::NotFound)));
    }

    #[test]
    fn test_api_root_is_not_found() {
        let router = router();
        let (surface, found) = router.resolve(&Method::GET, "/api");
        assert_eq!(surface, Surface::Api);
        assert!(matches!(found, Err(RouteError::NotFound)));
    }

    #[test]
    fn test_routes_are_prefixed() {
        let routes = router().routes();
        assert!(routes.contains(&(Method::GET, "/api/posts/:id".to_string())));
        assert!(routes.contains(&(Method::GET, "/post/:id".to_string())));
        assert!(routes.contains(&(Method::GET, "/".to_string())));
    }
}
