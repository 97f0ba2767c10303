#![cfg(test)]
use sea_orm::DatabaseConnection;

use crate::restaurant::repo::SeaOrmRestaurantRepository;

/// Fresh in-memory database with the `restaurants` table, one per test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    Ok(models::testing::sqlite_memory().await?)
}

pub async fn get_repo() -> Result<SeaOrmRestaurantRepository, anyhow::Error> {
    Ok(SeaOrmRestaurantRepository::new(get_db().await?))
}
