use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("{0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(#[from] DbErr),
}
