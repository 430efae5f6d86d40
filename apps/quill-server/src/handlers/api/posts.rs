use actix_web::HttpResponse;
use quill_core::DomainError;
use quill_core::domain::{PostDraft, PostId};

use crate::handlers::view;
use crate::middleware::error::{AppError, AppResult, NO_WRITE_ACCESS};
use crate::routing::RequestContext;

fn draft(ctx: &RequestContext) -> PostDraft {
    PostDraft {
        title: ctx.form.get("title").to_string(),
        body: ctx.form.get("body").to_string(),
    }
}

/// GET /api/posts
pub async fn list(ctx: RequestContext) -> AppResult<HttpResponse> {
    let posts = ctx.state.posts.list().await?;
    Ok(view::success(
        posts.into_iter().map(view::post).collect::<Vec<_>>(),
    ))
}

/// POST /api/posts
pub async fn create(ctx: RequestContext) -> AppResult<HttpResponse> {
    let author_id = ctx.require_author()?;

    let post = ctx.state.posts.create(&author_id, draft(&ctx)).await?;
    tracing::info!(post_id = %post.id, author_id = %author_id, "Post created");

    Ok(view::success(post.id))
}

/// DELETE /api/posts - removes every post of the caller.
pub async fn delete_all(ctx: RequestContext) -> AppResult<HttpResponse> {
    let author_id = ctx.require_author()?;

    let deleted = ctx.state.posts.delete_all_owned(&author_id).await?;
    tracing::info!(author_id = %author_id, deleted, "Posts deleted");

    Ok(view::done(format!("Deleted {} post(s)!", deleted)))
}

/// GET /api/posts/:id
pub async fn show(ctx: RequestContext) -> AppResult<HttpResponse> {
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

    Ok(view::success(view::post(post)))
}

/// PUT /api/posts/:id
pub async fn update(ctx: RequestContext) -> AppResult<HttpResponse> {
    let author_id = ctx.require_author()?;
    let id = PostId::from(ctx.param(0));

    match ctx
        .state
        .posts
        .update_owned(&author_id, &id, draft(&ctx))
        .await?
    {
        Some(post) => Ok(view::success(post.id)),
        None => Err(AppError::BadRequest(NO_WRITE_ACCESS.to_string())),
    }
}

/// DELETE /api/posts/:id
pub async fn delete(ctx: RequestContext) -> AppResult<HttpResponse> {
    let author_id = ctx.require_author()?;
    let id = PostId::from(ctx.param(0));

    if !ctx.state.posts.delete_owned(&author_id, &id).await? {
        return Err(AppError::BadRequest(NO_WRITE_ACCESS.to_string()));
    }

    tracing::info!(post_id = %id, author_id = %author_id, "Post deleted");
    Ok(view::done("Post deleted!"))
}
