//! Domain entities - the core business objects.

mod author;
mod id;
mod post;

pub use author::{Author, AuthorPosts, Credentials};
pub use id::{AUTHOR_ID_PREFIX, AuthorId, MAX_ID_ATTEMPTS, POST_ID_PREFIX, PostId, with_fresh_id};
pub use post::{Post, PostDraft, PostWithAuthor};
