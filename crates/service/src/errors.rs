use models::errors::ModelError;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => return Self::Conflict(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => return Self::Conflict(msg),
            _ => {}
        }
        match e {
            DbErr::RecordNotFound(msg) => Self::NotFound(msg),
            other => Self::Db(other.to_string()),
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => Self::Validation(msg),
            ModelError::Db(db) => db.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_not_found_maps_to_not_found() {
        let e: ServiceError = DbErr::RecordNotFound("restaurant 7".into()).into();
        assert!(matches!(e, ServiceError::NotFound(ref m) if m == "restaurant 7"));
    }

    #[test]
    fn other_db_errors_map_to_db() {
        let e: ServiceError = DbErr::Custom("boom".into()).into();
        assert!(matches!(e, ServiceError::Db(_)));
        assert!(e.to_string().contains("boom"));
    }

    #[test]
    fn model_validation_keeps_message() {
        let e: ServiceError = ModelError::Validation("restaurant name can not be blank".into()).into();
        assert_eq!(e.to_string(), "restaurant name can not be blank");
    }
}
