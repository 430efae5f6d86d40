//! SeaORM entities for the `authors` and `posts` tables.

pub mod author;
pub mod post;
