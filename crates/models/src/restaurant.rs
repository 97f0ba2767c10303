//! `restaurants` table.
//!
//! The table carries more columns (owner, coordinates, images, fee, status,
//! timestamps) than are mapped here. Only the columns this service reads,
//! writes or filters on are part of the entity.
use sea_orm::{entity::prelude::*, DatabaseConnection, NotSet, Set};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "restaurants")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub addr: String,
    pub city_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub const BLANK_NAME: &str = "restaurant name can not be blank";

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation(BLANK_NAME.into()));
    }
    Ok(())
}

/// Insert a restaurant; `id` is assigned by the store and `city_id` is left
/// to its column default. Callers are expected to have run `validate_name`.
pub async fn create(db: &DatabaseConnection, name: &str, addr: &str) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        addr: Set(addr.to_string()),
        city_id: NotSet,
    };
    Ok(am.insert(db).await?)
}
