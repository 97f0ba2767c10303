use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{NewRestaurant, Restaurant, RestaurantFilter, RestaurantPatch};
use super::repository::RestaurantRepository;
use crate::errors::ServiceError;

/// Service over a type-erased repository, as held in router state.
pub type DynRestaurantService = RestaurantService<dyn RestaurantRepository>;

/// Restaurant business service independent of web framework
pub struct RestaurantService<R: RestaurantRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: RestaurantRepository + ?Sized> RestaurantService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Create a restaurant after checking its name is not blank.
    ///
    /// # Examples
    /// ```
    /// use service::restaurant::{RestaurantService, domain::NewRestaurant, repository::mock::MockRestaurantRepository};
    /// use std::sync::Arc;
    /// let svc = RestaurantService::new(Arc::new(MockRestaurantRepository::default()));
    /// let r = tokio_test::block_on(svc.create(NewRestaurant { name: "Joe's".into(), addr: "1 Main St".into() })).unwrap();
    /// assert_eq!(r.name, "Joe's");
    /// assert!(tokio_test::block_on(svc.create(NewRestaurant { name: " ".into(), addr: "x".into() })).is_err());
    /// ```
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: NewRestaurant) -> Result<Restaurant, ServiceError> {
        models::restaurant::validate_name(&input.name)?;
        let created = self.repo.create(&input).await?;
        info!(id = created.id, "restaurant_created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<Restaurant, ServiceError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("restaurant"))
    }

    #[instrument(skip(self))]
    pub async fn list(&self, filter: RestaurantFilter) -> Result<Vec<Restaurant>, ServiceError> {
        let rows = self.repo.list(filter).await?;
        debug!(count = rows.len(), city_id = ?filter.city(), "restaurants_listed");
        Ok(rows)
    }

    /// Apply a sparse update and return the number of rows affected.
    /// A missing id is not an error; it just affects zero rows.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i32, patch: RestaurantPatch) -> Result<u64, ServiceError> {
        let rows = self.repo.update(id, &patch).await?;
        info!(
            rows,
            name = patch.name.is_some(),
            addr = patch.addr.is_some(),
            "restaurant_updated"
        );
        Ok(rows)
    }

    /// Delete by id and return the number of rows removed.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<u64, ServiceError> {
        let rows = self.repo.delete(id).await?;
        info!(rows, "restaurant_deleted");
        Ok(rows)
    }
}
