use actix_web::HttpResponse;
use quill_core::DomainError;
use quill_core::domain::{AuthorId, AuthorPosts};

use crate::handlers::view;
use crate::middleware::error::AppResult;
use crate::routing::RequestContext;

/// GET /api/authors
pub async fn list(ctx: RequestContext) -> AppResult<HttpResponse> {
    let authors = ctx.state.authors.list().await?;
    Ok(view::success(
        authors.iter().map(view::author).collect::<Vec<_>>(),
    ))
}

/// GET /api/authors/:id
pub async fn show(ctx: RequestContext) -> AppResult<HttpResponse> {
    let id = AuthorId::from(ctx.param(0));

    let author = ctx
        .state
        .authors
        .find_by_id(&id)
        .await?
        .ok_or_else(|| DomainError::NotFound {
            entity_type: "Author",
            id: id.to_string(),
        })?;
    let posts = ctx.state.posts.list_by_author(&id).await?;

    Ok(view::success(view::author_posts(AuthorPosts {
        author,
        posts,
    })))
}
