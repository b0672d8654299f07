//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Preferred database driver name; auto-detected when unset or unknown.
    pub db_driver: Option<String>,
    /// Login timeout in seconds, kept as the raw environment string and
    /// coerced where it is used.
    pub db_login_timeout: Option<String>,
    pub templates_dir: String,
    pub secret: String,
}
