//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Address, User};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub name: String,
    #[sea_orm(unique)]
    pub phone: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub street: Option<String>,
    pub city: Option<String>,
    pub pincode: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::book::Entity")]
    Books,
}

impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Books.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        let address = Address {
            street: model.street,
            city: model.city,
            pincode: model.pincode,
        };

        User {
            id: model.id,
            title: model.title,
            name: model.name,
            phone: model.phone,
            email: model.email,
            password_hash: model.password_hash,
            address: if address.is_empty() { None } else { Some(address) },
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
