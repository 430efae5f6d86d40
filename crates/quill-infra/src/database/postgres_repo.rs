//! PostgreSQL repository implementations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use quill_core::domain::{
    Author, AuthorId, Post, PostDraft, PostId, PostWithAuthor, with_fresh_id,
};
use quill_core::error::RepoError;
use quill_core::ports::{AuthorRepository, PostRepository};

use super::entity::author::{self, Entity as AuthorEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, insert_error, query_error};

/// PostgreSQL author repository.
pub type PostgresAuthorRepository = PostgresBaseRepository<AuthorEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

fn join(row: (post::Model, Option<author::Model>)) -> Option<PostWithAuthor> {
    let (post, author) = row;
    author.map(|author| PostWithAuthor {
        post: post.into(),
        author: author.into(),
    })
}

#[async_trait]
impl AuthorRepository for PostgresAuthorRepository {
    async fn list(&self) -> Result<Vec<Author>, RepoError> {
        let result = AuthorEntity::find()
            .order_by_asc(author::Column::Username)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &AuthorId) -> Result<Option<Author>, RepoError> {
        let result = AuthorEntity::find_by_id(id.as_str())
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Author>, RepoError> {
        let result = AuthorEntity::find()
            .filter(author::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn create(&self, username: &str, password_hash: &str) -> Result<Author, RepoError> {
        let db = &self.db;

        let author = with_fresh_id(AuthorId::generate, move |id| {
            let model: author::ActiveModel =
                Author::new(id, username.to_string(), password_hash.to_string()).into();
            async move { model.insert(db).await.map_err(insert_error) }
        })
        .await?;

        tracing::debug!(author_id = %author.author_id, "Created author");
        Ok(author.into())
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list(&self) -> Result<Vec<PostWithAuthor>, RepoError> {
        let rows = PostEntity::find()
            .find_also_related(AuthorEntity)
            .order_by_desc(post::Column::UpdatedAt)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(rows.into_iter().filter_map(join).collect())
    }

    async fn list_by_author(&self, author_id: &AuthorId) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::AuthorId.eq(author_id.as_str()))
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<PostWithAuthor>, RepoError> {
        let row = PostEntity::find_by_id(id.as_str())
            .find_also_related(AuthorEntity)
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(row.and_then(join))
    }

    async fn create(&self, author_id: &AuthorId, draft: PostDraft) -> Result<Post, RepoError> {
        let db = &self.db;

        let post = with_fresh_id(PostId::generate, move |id| {
            let model: post::ActiveModel = Post::new(id, author_id.clone(), draft.clone()).into();
            async move { model.insert(db).await.map_err(insert_error) }
        })
        .await?;

        tracing::debug!(post_id = %post.post_id, author_id = %author_id, "Created post");
        Ok(post.into())
    }

    async fn update_owned(
        &self,
        author_id: &AuthorId,
        id: &PostId,
        draft: PostDraft,
    ) -> Result<Option<Post>, RepoError> {
        // Ownership and mutation in one statement: UPDATE .. WHERE post_id AND author_id.
        let updated = PostEntity::update_many()
            .col_expr(post::Column::Title, Expr::value(draft.title))
            .col_expr(post::Column::Body, Expr::value(draft.body))
            .col_expr(
                post::Column::UpdatedAt,
                Expr::value(DateTimeWithTimeZone::from(Utc::now())),
            )
            .filter(post::Column::PostId.eq(id.as_str()))
            .filter(post::Column::AuthorId.eq(author_id.as_str()))
            .exec_with_returning(&self.db)
            .await
            .map_err(query_error)?;

        Ok(updated.into_iter().next().map(Into::into))
    }

    async fn delete_owned(&self, author_id: &AuthorId, id: &PostId) -> Result<bool, RepoError> {
        let result = PostEntity::delete_many()
            .filter(post::Column::PostId.eq(id.as_str()))
            .filter(post::Column::AuthorId.eq(author_id.as_str()))
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.rows_affected > 0)
    }

    async fn delete_all_owned(&self, author_id: &AuthorId) -> Result<u64, RepoError> {
        let result = PostEntity::delete_many()
            .filter(post::Column::AuthorId.eq(author_id.as_str()))
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        tracing::debug!(author_id = %author_id, deleted = result.rows_affected, "Deleted posts");
        Ok(result.rows_affected)
    }
}
