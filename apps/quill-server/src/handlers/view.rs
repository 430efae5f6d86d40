//! Response formatting: domain values to wire views, JSON envelopes, pages.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use quill_core::domain::{Author, AuthorPosts, Post, PostWithAuthor};
use quill_core::ports::TemplateRenderer;
use quill_shared::ApiResponse;
use quill_shared::dto::{AuthorPostsView, AuthorView, PostSummary, PostView};
use serde::Serialize;

use crate::middleware::error::{AppError, AppResult};

pub fn author(author: &Author) -> AuthorView {
    AuthorView {
        id: author.id.to_string(),
        username: author.username.clone(),
        created_at: author.created_at,
    }
}

pub fn post(entry: PostWithAuthor) -> PostView {
    let PostWithAuthor { post, author: owner } = entry;
    PostView {
        id: post.id.into_inner(),
        title: post.title,
        body: post.body,
        created_at: post.created_at,
        updated_at: post.updated_at,
        author: author(&owner),
    }
}

pub fn post_summary(post: Post) -> PostSummary {
    PostSummary {
        id: post.id.into_inner(),
        title: post.title,
        body: post.body,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

pub fn author_posts(entry: AuthorPosts) -> AuthorPostsView {
    AuthorPostsView {
        author: author(&entry.author),
        posts: entry.posts.into_iter().map(post_summary).collect(),
    }
}

/// `200 {"status":"success","content":...}`
pub fn success<T: Serialize>(content: T) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(content))
}

/// `200 {"status":"success","message":...}`
pub fn done(message: impl Into<String>) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::done(message))
}

/// `200 {"status":"failure","message":...}`
pub fn failure(message: impl Into<String>) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::failure(message))
}

/// Render a page template with `data` as its context.
pub fn page<T: Serialize>(
    renderer: &dyn TemplateRenderer,
    status: StatusCode,
    template: &str,
    data: &T,
) -> AppResult<HttpResponse> {
    let context = serde_json::to_value(data).map_err(|e| AppError::Internal(e.to_string()))?;
    let html = renderer.render(template, &context)?;

    Ok(HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::domain::{AuthorId, PostDraft, PostId};

    #[test]
    fn test_post_view_embeds_author() {
        let owner = Author::new(
            AuthorId::from("100000123456789"),
            "ada".to_string(),
            "$argon2id$secret".to_string(),
        );
        let post = Post::new(
            PostId::from("500000123456789"),
            owner.id.clone(),
            PostDraft {
                title: "T".to_string(),
                body: "B".to_string(),
            },
        );

        let view = super::post(PostWithAuthor {
            post,
            author: owner,
        });

        assert_eq!(view.id, "500000123456789");
        assert_eq!(view.author.username, "ada");

        let json = serde_json::to_value(&view).unwrap();
        assert!(json["author"].get("password_hash").is_none());
    }
}
