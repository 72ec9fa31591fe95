//! Book database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Book;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub title: String,
    pub excerpt: String,
    pub user_id: Uuid,
    #[sea_orm(unique)]
    pub isbn: String,
    pub category: String,
    pub subcategory: String,
    pub released_at: Date,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    /// Soft delete timestamp (NULL = active, set = deleted)
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Book {
    fn from(model: Model) -> Self {
        Book {
            id: model.id,
            title: model.title,
            excerpt: model.excerpt,
            user_id: model.user_id,
            isbn: model.isbn,
            category: model.category,
            subcategory: model.subcategory,
            released_at: model.released_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}
