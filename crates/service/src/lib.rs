//! Service layer providing the restaurant CRUD operations on top of models.
//! - Separates business rules from data access behind `RestaurantRepository`.
//! - Reuses validation and entity definitions in `models` crate.
//! - Provides clear error types for the HTTP layer to map.

pub mod errors;
pub mod restaurant;
#[cfg(test)]
pub mod test_support;
