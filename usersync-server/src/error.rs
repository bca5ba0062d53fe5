use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Failed to fetch remote data: {0:#}")]
    Fetch(anyhow::Error),

    #[error("User {0} not found")]
    NotFound(i64),

    #[error("User {0} already exists")]
    Conflict(i64),

    #[error("Storage error: {0:#}")]
    Storage(#[from] anyhow::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
