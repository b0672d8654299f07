//! Database connection helpers.
//!
//! Reproduces the connection policy of the desktop tool this service
//! replaces: a configured driver name is honoured when the build supports
//! it, otherwise the preference list below is walked in order, and a build
//! with no usable driver fails fast instead of handing an unvalidated
//! driver name to the backend. Connections are pooled; a pooled connection
//! is released back to the pool when dropped, on every exit path.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use log::{error, warn};

use crate::models::config::ServerConfig;
use crate::normalize::coerce_timeout;
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Driver names this build can open, in fallback preference order.
pub const PREFERRED_DRIVERS: &[&str] = &["sqlite"];

/// Seconds to wait for a connection when no timeout is configured.
pub const DEFAULT_LOGIN_TIMEOUT: u64 = 5;

#[derive(Debug)]
/// Options applied each time a connection is acquired from the pool.
struct ConnectionOptions {
    /// Timeout to wait for a locked database.
    busy_timeout: Option<Duration>,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        if let Some(d) = self.busy_timeout {
            conn.batch_execute(&format!("PRAGMA busy_timeout = {};", d.as_millis()))
                .map_err(diesel::r2d2::Error::QueryError)?;
        }
        Ok(())
    }
}

/// Drivers the running binary can actually use. Diesel backends are
/// compiled in, so unlike an ODBC driver scan the set is static.
fn available_drivers() -> &'static [&'static str] {
    PREFERRED_DRIVERS
}

/// Picks the database driver: the configured name when supported, otherwise
/// the first supported entry of [`PREFERRED_DRIVERS`].
pub fn resolve_driver(configured: Option<&str>) -> RepositoryResult<&'static str> {
    let available = available_drivers();

    if let Some(configured) = configured.map(str::trim).filter(|s| !s.is_empty()) {
        if let Some(found) = available.iter().copied().find(|c| *c == configured) {
            return Ok(found);
        }
        warn!(
            "Configured database driver '{configured}' is not supported by this build. \
             Falling back to auto-detection."
        );
    }

    for candidate in PREFERRED_DRIVERS.iter().copied() {
        if available.contains(&candidate) {
            return Ok(candidate);
        }
    }

    Err(RepositoryError::DriverUnavailable(
        PREFERRED_DRIVERS.join(", "),
    ))
}

/// Assembles the connection descriptor for the resolved driver. The
/// configured URL may carry a scheme prefix (`sqlite://...`); the sqlite
/// backend wants a bare path.
fn connection_descriptor(driver: &str, database_url: &str) -> String {
    let scheme = format!("{driver}://");
    database_url
        .strip_prefix(&scheme)
        .unwrap_or(database_url)
        .to_string()
}

/// Create a connection pool for the configured database, resolving the
/// driver first and applying the configured login timeout to both pool
/// acquisition and the sqlite busy handler.
pub fn establish_connection_pool(config: &ServerConfig) -> RepositoryResult<DbPool> {
    let driver = resolve_driver(config.db_driver.as_deref())?;
    let descriptor = connection_descriptor(driver, &config.database_url);
    let timeout = Duration::from_secs(coerce_timeout(
        config.db_login_timeout.as_deref(),
        DEFAULT_LOGIN_TIMEOUT,
    ));

    let manager = ConnectionManager::<SqliteConnection>::new(descriptor);
    Pool::builder()
        .connection_timeout(timeout)
        .connection_customizer(Box::new(ConnectionOptions {
            busy_timeout: Some(timeout),
        }))
        .build(manager)
        .map_err(RepositoryError::from)
}

/// Retrieve a connection from the pool.
pub fn get_connection(pool: &DbPool) -> RepositoryResult<DbConnection> {
    pool.get().map_err(|e| {
        error!("Failed to get connection from pool: {e}");
        RepositoryError::from(e)
    })
}

/// Attempt to open and drop a connection to verify connectivity.
pub fn try_connection(pool: &DbPool) -> bool {
    get_connection(pool).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_driver_is_honoured() {
        assert_eq!(resolve_driver(Some("sqlite")).unwrap(), "sqlite");
        assert_eq!(resolve_driver(Some("  sqlite  ")).unwrap(), "sqlite");
    }

    #[test]
    fn unknown_driver_falls_back_to_preference_list() {
        assert_eq!(
            resolve_driver(Some("ODBC Driver 18 for SQL Server")).unwrap(),
            "sqlite"
        );
    }

    #[test]
    fn missing_driver_name_auto_detects() {
        assert_eq!(resolve_driver(None).unwrap(), "sqlite");
        assert_eq!(resolve_driver(Some("")).unwrap(), "sqlite");
    }

    #[test]
    fn scheme_prefix_is_stripped_from_descriptor() {
        assert_eq!(
            connection_descriptor("sqlite", "sqlite:///tmp/app.db"),
            "/tmp/app.db"
        );
        assert_eq!(connection_descriptor("sqlite", "app.db"), "app.db");
    }
}
