//! In-memory sqlite helpers for tests.
//!
//! The service never creates its table; tests build a throwaway one from the
//! entity definition instead.
use sea_orm::{
    ActiveModelTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, NotSet,
    Schema, Set,
};

use crate::restaurant;

/// Single-connection pool so every query sees the same in-memory database.
pub async fn sqlite_memory() -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await?;
    create_restaurants_table(&db).await?;
    Ok(db)
}

pub async fn create_restaurants_table(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let stmt = Schema::new(backend).create_table_from_entity(restaurant::Entity);
    db.execute(backend.build(&stmt)).await?;
    Ok(())
}

/// Insert a row with a city, which the HTTP surface never writes.
pub async fn insert_in_city(
    db: &DatabaseConnection,
    name: &str,
    addr: &str,
    city_id: Option<i32>,
) -> Result<restaurant::Model, DbErr> {
    restaurant::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        addr: Set(addr.to_string()),
        city_id: Set(city_id),
    }
    .insert(db)
    .await
}
