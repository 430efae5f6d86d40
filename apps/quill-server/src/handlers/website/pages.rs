use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use quill_core::DomainError;
use quill_core::domain::{AuthorId, AuthorPosts, PostId};
use serde_json::json;

use crate::handlers::view;
use crate::middleware::error::AppResult;
use crate::routing::RequestContext;

/// GET /
pub async fn home(ctx: RequestContext) -> AppResult<HttpResponse> {
    let posts: Vec<_> = ctx
        .state
        .posts
        .list()
        .await?
        .into_iter()
        .map(view::post)
        .collect();

    view::page(
        ctx.state.pages.as_ref(),
        StatusCode::OK,
        "home.html",
        &json!({ "posts": posts }),
    )
}

/// GET /author/:id
pub async fn author(ctx: RequestContext) -> AppResult<HttpResponse> {
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

    view::page(
        ctx.state.pages.as_ref(),
        StatusCode::OK,
        "author.html",
        &view::author_posts(AuthorPosts { author, posts }),
    )
}

/// GET /post/:id
pub async fn post(ctx: RequestContext) -> AppResult<HttpResponse> {
    let id = PostId::from(ctx.param(0));

    let post = ctx
        .state
        .posts
        .find_by_id(&id)
        .await?
        .ok_or_else(|| DomainError::NotFound {
            entity_type: "Post",
            id: id.to_string(),
        })?;

    view::page(
        ctx.state.pages.as_ref(),
        StatusCode::OK,
        "post.html",
        &view::post(post),
    )
}
