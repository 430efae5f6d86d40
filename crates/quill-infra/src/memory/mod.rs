//! In-memory resource store - used for tests and when no database is configured.
//!
//! Note: Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use quill_core::domain::{
    Author, AuthorId, Post, PostDraft, PostId, PostWithAuthor, with_fresh_id,
};
use quill_core::error::RepoError;
use quill_core::ports::{AuthorRepository, PostRepository};

#[derive(Default)]
struct Tables {
    authors: HashMap<AuthorId, Author>,
    posts: HashMap<PostId, Post>,
}

impl Tables {
    fn joined(&self, post: &Post) -> Option<PostWithAuthor> {
        self.authors.get(&post.author_id).map(|author| PostWithAuthor {
            post: post.clone(),
            author: author.clone(),
        })
    }
}

/// Author and post tables behind a single async `RwLock`.
///
/// Every mutation runs under one write lock, so the ownership predicate of
/// [`PostRepository::update_owned`] and [`PostRepository::delete_owned`] is
/// checked atomically with the change.
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuthorRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Author>, RepoError> {
        let tables = self.tables.read().await;
        let mut authors: Vec<Author> = tables.authors.values().cloned().collect();
        authors.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(authors)
    }

    async fn find_by_id(&self, id: &AuthorId) -> Result<Option<Author>, RepoError> {
        Ok(self.tables.read().await.authors.get(id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Author>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables
            .authors
            .values()
            .find(|a| a.username == username)
            .cloned())
    }

    async fn create(&self, username: &str, password_hash: &str) -> Result<Author, RepoError> {
        with_fresh_id(AuthorId::generate, |id| async move {
            let mut tables = self.tables.write().await;

            if tables.authors.contains_key(&id) {
                return Err(RepoError::DuplicateId);
            }
            if tables.authors.values().any(|a| a.username == username) {
                return Err(RepoError::Constraint(format!(
                    "username {username:?} is already taken"
                )));
            }

            let author = Author::new(id.clone(), username.to_string(), password_hash.to_string());
            tables.authors.insert(id, author.clone());
            Ok(author)
        })
        .await
    }
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<PostWithAuthor>, RepoError> {
        let tables = self.tables.read().await;
        let mut posts: Vec<PostWithAuthor> =
            tables.posts.values().filter_map(|p| tables.joined(p)).collect();
        posts.sort_by(|a, b| b.post.updated_at.cmp(&a.post.updated_at));
        Ok(posts)
    }

    async fn list_by_author(&self, author_id: &AuthorId) -> Result<Vec<Post>, RepoError> {
        let tables = self.tables.read().await;
        let mut posts: Vec<Post> = tables
            .posts
            .values()
            .filter(|p| &p.author_id == author_id)
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<PostWithAuthor>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables.posts.get(id).and_then(|p| tables.joined(p)))
    }

    async fn create(&self, author_id: &AuthorId, draft: PostDraft) -> Result<Post, RepoError> {
        with_fresh_id(PostId::generate, |id| {
            let draft = draft.clone();
            async move {
                let mut tables = self.tables.write().await;

                if tables.posts.contains_key(&id) {
                    return Err(RepoError::DuplicateId);
                }
                if !tables.authors.contains_key(author_id) {
                    return Err(RepoError::Constraint(format!(
                        "author {author_id} does not exist"
                    )));
                }

                let post = Post::new(id.clone(), author_id.clone(), draft);
                tables.posts.insert(id, post.clone());
                Ok(post)
            }
        })
        .await
    }

    async fn update_owned(
        &self,
        author_id: &AuthorId,
        id: &PostId,
        draft: PostDraft,
    ) -> Result<Option<Post>, RepoError> {
        let mut tables = self.tables.write().await;

        let Some(post) = tables
            .posts
            .get_mut(id)
            .filter(|p| &p.author_id == author_id)
        else {
            return Ok(None);
        };

        post.title = draft.title;
        post.body = draft.body;
        post.updated_at = Utc::now();
        Ok(Some(post.clone()))
    }

    async fn delete_owned(&self, author_id: &AuthorId, id: &PostId) -> Result<bool, RepoError> {
        let mut tables = self.tables.write().await;

        let owned = tables
            .posts
            .get(id)
            .is_some_and(|p| &p.author_id == author_id);
        if owned {
            tables.posts.remove(id);
        }
        Ok(owned)
    }

    async fn delete_all_owned(&self, author_id: &AuthorId) -> Result<u64, RepoError> {
        let mut tables = self.tables.write().await;

        let before = tables.posts.len();
        tables.posts.retain(|_, p| &p.author_id != author_id);
        Ok((before - tables.posts.len()) as u64)
    }
}
