//! Author entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use quill_core::domain::{Author, AuthorId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "authors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub author_id: String,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Author.
impl From<Model> for Author {
    fn from(model: Model) -> Self {
        Self {
            id: AuthorId::from(model.author_id),
            username: model.username,
            password_hash: model.password_hash,
            created_at: model.created_at.into(),
        }
    }
}

/// Conversion from Domain Author to SeaORM ActiveModel.
impl From<Author> for ActiveModel {
    fn from(author: Author) -> Self {
        Self {
            author_id: Set(author.id.into_inner()),
            username: Set(author.username),
            password_hash: Set(author.password_hash),
            created_at: Set(author.created_at.into()),
        }
    }
}
