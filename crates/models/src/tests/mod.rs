/// Restaurant entity CRUD against in-memory sqlite
pub mod restaurant_tests;
