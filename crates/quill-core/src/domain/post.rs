use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::author::Author;
use super::id::{AuthorId, PostId};

/// Post entity - a blog post owned by exactly one author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub author_id: AuthorId,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post.
    pub fn new(id: PostId, author_id: AuthorId, draft: PostDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            author_id,
            title: draft.title,
            body: draft.body,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Title and body submitted for a create or update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
}

/// A post joined with its author.
#[derive(Debug, Clone)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author: Author,
}
