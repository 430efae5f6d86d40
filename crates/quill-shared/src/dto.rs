//! Data Transfer Objects - public views of authors and posts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An author's public information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorView {
    pub id: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// A post with its author embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostView {
    pub id: String,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: AuthorView,
}

/// A post listed under its author, without repeating the author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An author and all of their posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorPostsView {
    pub author: AuthorView,
    pub posts: Vec<PostSummary>,
}
