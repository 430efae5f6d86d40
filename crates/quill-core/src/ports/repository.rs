use async_trait::async_trait;

use crate::domain::{Author, AuthorId, Post, PostDraft, PostId, PostWithAuthor};
use crate::error::RepoError;

/// Author repository.
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// All authors, ordered by username.
    async fn list(&self) -> Result<Vec<Author>, RepoError>;

    /// Find an author by id.
    async fn find_by_id(&self, id: &AuthorId) -> Result<Option<Author>, RepoError>;

    /// Find an author by their unique username.
    async fn find_by_username(&self, username: &str) -> Result<Option<Author>, RepoError>;

    /// Create an author under a freshly generated id.
    ///
    /// A taken username yields [`RepoError::Constraint`].
    async fn create(&self, username: &str, password_hash: &str) -> Result<Author, RepoError>;
}

/// Post repository.
///
/// Mutations are qualified by the owning author: a post that does not exist
/// and a post owned by someone else are indistinguishable, and the ownership
/// check happens in the same statement as the mutation.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts with their authors, most recently updated first.
    async fn list(&self) -> Result<Vec<PostWithAuthor>, RepoError>;

    /// Posts of one author, most recently created first.
    async fn list_by_author(&self, author_id: &AuthorId) -> Result<Vec<Post>, RepoError>;

    async fn find_by_id(&self, id: &PostId) -> Result<Option<PostWithAuthor>, RepoError>;

    /// Create a post under a freshly generated id.
    async fn create(&self, author_id: &AuthorId, draft: PostDraft) -> Result<Post, RepoError>;

    /// Update a post if and only if `author_id` owns it.
    /// Returns `None` when no post matched.
    async fn update_owned(
        &self,
        author_id: &AuthorId,
        id: &PostId,
        draft: PostDraft,
    ) -> Result<Option<Post>, RepoError>;

    /// Delete a post if and only if `author_id` owns it.
    /// Returns whether a post was removed.
    async fn delete_owned(&self, author_id: &AuthorId, id: &PostId) -> Result<bool, RepoError>;

    /// Delete every post owned by `author_id`, returning how many were removed.
    async fn delete_all_owned(&self, author_id: &AuthorId) -> Result<u64, RepoError>;
}
