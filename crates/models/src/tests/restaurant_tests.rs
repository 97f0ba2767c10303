use anyhow::Result;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use crate::errors::ModelError;
use crate::restaurant;
use crate::testing::{insert_in_city, sqlite_memory};

#[test]
fn validate_name_rejects_blank() {
    assert!(restaurant::validate_name("Joe's").is_ok());
    for blank in ["", "   ", "\t\n"] {
        match restaurant::validate_name(blank) {
            Err(ModelError::Validation(msg)) => assert_eq!(msg, restaurant::BLANK_NAME),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn create_assigns_id_and_leaves_city_unset() -> Result<()> {
    let db = sqlite_memory().await?;

    let first = restaurant::create(&db, "Joe's", "1 Main St").await?;
    let second = restaurant::create(&db, "Ann's", "2 Main St").await?;
    assert!(second.id > first.id);
    assert_eq!(first.name, "Joe's");
    assert_eq!(first.addr, "1 Main St");
    assert_eq!(first.city_id, None);

    let found = restaurant::Entity::find_by_id(first.id).one(&db).await?;
    assert_eq!(found, Some(first));
    Ok(())
}

#[tokio::test]
async fn create_stores_name_as_given() -> Result<()> {
    let db = sqlite_memory().await?;

    // name checks belong to the service layer
    let row = restaurant::create(&db, "", "1 Main St").await?;
    assert_eq!(row.name, "");
    assert_eq!(restaurant::Entity::find().count(&db).await?, 1);
    Ok(())
}

#[tokio::test]
async fn city_column_is_filterable() -> Result<()> {
    let db = sqlite_memory().await?;
    insert_in_city(&db, "a", "x", Some(1)).await?;
    insert_in_city(&db, "b", "y", Some(2)).await?;
    insert_in_city(&db, "c", "z", None).await?;

    let in_one = restaurant::Entity::find()
        .filter(restaurant::Column::CityId.eq(1))
        .all(&db)
        .await?;
    assert_eq!(in_one.len(), 1);
    assert_eq!(in_one[0].name, "a");
    Ok(())
}
