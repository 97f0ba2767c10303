use async_trait::async_trait;

use super::domain::{NewRestaurant, Restaurant, RestaurantFilter, RestaurantPatch};
use crate::errors::ServiceError;

/// Repository abstraction over the `restaurants` table.
///
/// `update` and `delete` report the number of rows affected and never treat
/// zero as an error.
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    async fn create(&self, input: &NewRestaurant) -> Result<Restaurant, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<Restaurant>, ServiceError>;
    async fn list(&self, filter: RestaurantFilter) -> Result<Vec<Restaurant>, ServiceError>;
    async fn update(&self, id: i32, patch: &RestaurantPatch) -> Result<u64, ServiceError>;
    async fn delete(&self, id: i32) -> Result<u64, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard, PoisonError};

    #[derive(Default)]
    struct Inner {
        next_id: i32,
        rows: BTreeMap<i32, (Restaurant, Option<i32>)>, // value: (record, city_id)
    }

    #[derive(Default)]
    pub struct MockRestaurantRepository {
        inner: Mutex<Inner>,
    }

    impl MockRestaurantRepository {
        fn lock(&self) -> MutexGuard<'_, Inner> {
            self.inner.lock().unwrap_or_else(PoisonError::into_inner)
        }

        /// Seed a row with a city, which the public API never writes.
        pub fn insert_in_city(&self, name: &str, addr: &str, city_id: Option<i32>) -> Restaurant {
            let mut inner = self.lock();
            inner.next_id += 1;
            let r = Restaurant { id: inner.next_id, name: name.to_string(), addr: addr.to_string() };
            inner.rows.insert(r.id, (r.clone(), city_id));
            r
        }

        pub fn len(&self) -> usize {
            self.lock().rows.len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    #[async_trait]
    impl RestaurantRepository for MockRestaurantRepository {
        async fn create(&self, input: &NewRestaurant) -> Result<Restaurant, ServiceError> {
            Ok(self.insert_in_city(&input.name, &input.addr, None))
        }

        async fn get(&self, id: i32) -> Result<Option<Restaurant>, ServiceError> {
            Ok(self.lock().rows.get(&id).map(|(r, _)| r.clone()))
        }

        async fn list(&self, filter: RestaurantFilter) -> Result<Vec<Restaurant>, ServiceError> {
            let city = filter.city();
            Ok(self
                .lock()
                .rows
                .values()
                .filter(|(_, c)| city.is_none() || *c == city)
                .map(|(r, _)| r.clone())
                .collect())
        }

        async fn update(&self, id: i32, patch: &RestaurantPatch) -> Result<u64, ServiceError> {
            if patch.is_empty() {
                return Ok(0);
            }
            let mut inner = self.lock();
            let Some((r, _)) = inner.rows.get_mut(&id) else { return Ok(0) };
            if let Some(name) = &patch.name {
                r.name = name.clone();
            }
            if let Some(addr) = &patch.addr {
                r.addr = addr.clone();
            }
            Ok(1)
        }

        async fn delete(&self, id: i32) -> Result<u64, ServiceError> {
            Ok(self.lock().rows.remove(&id).map_or(0, |_| 1))
        }
    }
}
