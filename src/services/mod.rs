use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod auth;
pub mod client;
pub mod order;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
