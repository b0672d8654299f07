use diesel::r2d2::{Error as R2D2Error, PoolError};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No compatible database driver is compiled into this build. Fatal
    /// configuration problem, raised before any connection attempt.
    #[error("no supported database driver available (wanted one of: {0})")]
    DriverUnavailable(String),

    /// The handshake with the database failed or the pool timed out.
    #[error("connection error: {0}")]
    ConnectionError(String),

    /// The backend rejected or failed to execute a query.
    #[error("query error: {0}")]
    QueryError(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::DatabaseError(kind, info) => {
                let message = info.message().to_string();
                match kind {
                    DatabaseErrorKind::ClosedConnection => {
                        RepositoryError::ConnectionError(message)
                    }
                    _ => RepositoryError::QueryError(message),
                }
            }

            DieselError::DeserializationError(e) => {
                RepositoryError::QueryError(format!("deserialization error: {e}"))
            }

            DieselError::QueryBuilderError(e) => {
                RepositoryError::QueryError(format!("query builder error: {e}"))
            }

            _ => RepositoryError::QueryError(err.to_string()),
        }
    }
}

impl From<R2D2Error> for RepositoryError {
    fn from(err: R2D2Error) -> Self {
        RepositoryError::ConnectionError(err.to_string())
    }
}

impl From<PoolError> for RepositoryError {
    fn from(err: PoolError) -> Self {
        RepositoryError::ConnectionError(err.to_string())
    }
}
