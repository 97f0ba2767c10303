pub mod errors;
pub mod db;
pub mod restaurant;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

#[cfg(test)]
mod tests;
