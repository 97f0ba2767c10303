use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use models::restaurant;

use crate::errors::ServiceError;
use crate::restaurant::domain::{NewRestaurant, Restaurant, RestaurantFilter, RestaurantPatch};
use crate::restaurant::repository::RestaurantRepository;

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmRestaurantRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmRestaurantRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl RestaurantRepository for SeaOrmRestaurantRepository {
    async fn create(&self, input: &NewRestaurant) -> Result<Restaurant, ServiceError> {
        let created = restaurant::create(&self.db, &input.name, &input.addr).await?;
        Ok(created.into())
    }

    async fn get(&self, id: i32) -> Result<Option<Restaurant>, ServiceError> {
        let found = restaurant::Entity::find_by_id(id).one(&self.db).await?;
        Ok(found.map(Restaurant::from))
    }

    async fn list(&self, filter: RestaurantFilter) -> Result<Vec<Restaurant>, ServiceError> {
        let mut q = restaurant::Entity::find();
        if let Some(city_id) = filter.city() {
            q = q.filter(restaurant::Column::CityId.eq(city_id));
        }
        let rows = q.order_by_asc(restaurant::Column::Id).all(&self.db).await?;
        Ok(rows.into_iter().map(Restaurant::from).collect())
    }

    async fn update(&self, id: i32, patch: &RestaurantPatch) -> Result<u64, ServiceError> {
        if patch.is_empty() {
            return Ok(0);
        }
        let mut q = restaurant::Entity::update_many();
        if let Some(name) = &patch.name {
            q = q.col_expr(restaurant::Column::Name, Expr::value(name.clone()));
        }
        if let Some(addr) = &patch.addr {
            q = q.col_expr(restaurant::Column::Addr, Expr::value(addr.clone()));
        }
        let res = q.filter(restaurant::Column::Id.eq(id)).exec(&self.db).await?;
        Ok(res.rows_affected)
    }

    async fn delete(&self, id: i32) -> Result<u64, ServiceError> {
        let res = restaurant::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_repo;
    use models::testing::insert_in_city;
    use sea_orm::ConnectionTrait;

    fn input(name: &str, addr: &str) -> NewRestaurant {
        NewRestaurant { name: name.into(), addr: addr.into() }
    }

    #[tokio::test]
    async fn create_then_get_round_trips_fields() -> Result<(), anyhow::Error> {
        let repo = get_repo().await?;
        let created = repo.create(&input("Joe's", "1 Main St")).await?;
        let missing_id = created.id + 100;
        let found = repo.get(created.id).await?;
        assert_eq!(found, Some(created));
        assert_eq!(repo.get(missing_id).await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn list_filters_by_positive_city_only() -> Result<(), anyhow::Error> {
        let repo = get_repo().await?;
        insert_in_city(&repo.db, "a", "x", Some(1)).await?;
        insert_in_city(&repo.db, "b", "y", Some(2)).await?;
        insert_in_city(&repo.db, "c", "z", Some(1)).await?;
        insert_in_city(&repo.db, "d", "w", None).await?;

        let names = |rs: Vec<Restaurant>| rs.into_iter().map(|r| r.name).collect::<Vec<_>>();
        assert_eq!(names(repo.list(RestaurantFilter::by_city(1)).await?), ["a", "c"]);
        assert_eq!(names(repo.list(RestaurantFilter::by_city(3)).await?), Vec::<String>::new());
        assert_eq!(names(repo.list(RestaurantFilter::default()).await?), ["a", "b", "c", "d"]);
        assert_eq!(names(repo.list(RestaurantFilter::by_city(0)).await?).len(), 4);
        Ok(())
    }

    #[tokio::test]
    async fn update_touches_only_present_fields() -> Result<(), anyhow::Error> {
        let repo = get_repo().await?;
        let r = repo.create(&input("Joe's", "1 Main St")).await?;

        let patch = RestaurantPatch { addr: Some("2 Main St".into()), ..Default::default() };
        assert_eq!(repo.update(r.id, &patch).await?, 1);
        let after = repo.get(r.id).await?.unwrap();
        assert_eq!(after.name, "Joe's");
        assert_eq!(after.addr, "2 Main St");

        let patch = RestaurantPatch { name: Some("".into()), ..Default::default() };
        assert_eq!(repo.update(r.id, &patch).await?, 1);
        let after = repo.get(r.id).await?.unwrap();
        assert_eq!(after.name, "");
        assert_eq!(after.addr, "2 Main St");
        Ok(())
    }

    #[tokio::test]
    async fn update_and_delete_report_zero_rows_for_missing_ids() -> Result<(), anyhow::Error> {
        let repo = get_repo().await?;
        let patch = RestaurantPatch { name: Some("x".into()), ..Default::default() };
        assert_eq!(repo.update(404, &patch).await?, 0);
        assert_eq!(repo.update(404, &RestaurantPatch::default()).await?, 0);
        assert_eq!(repo.delete(404).await?, 0);

        let r = repo.create(&input("Joe's", "1 Main St")).await?;
        assert_eq!(repo.delete(r.id).await?, 1);
        assert_eq!(repo.get(r.id).await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn unique_violation_maps_to_conflict() -> Result<(), anyhow::Error> {
        let repo = get_repo().await?;
        repo.db
            .execute_unprepared("CREATE UNIQUE INDEX uniq_restaurants_name ON restaurants (name)")
            .await?;
        repo.create(&input("Joe's", "1 Main St")).await?;
        let err = repo.create(&input("Joe's", "2 Main St")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)), "got {err:?}");
        Ok(())
    }
}
