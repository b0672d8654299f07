use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use gestionale_web::db::{DbPool, establish_connection_pool};
use gestionale_web::models::config::ServerConfig;
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Temporary SQLite database mirroring the legacy schema. The backing file
/// lives in a scratch directory removed on drop.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create a scratch directory");
        let database_url = dir.path().join(name).to_string_lossy().into_owned();

        let pool =
            establish_connection_pool(&test_config(database_url)).expect("failed to build pool");

        let mut conn = pool.get().expect("failed to open a connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("failed to run migrations");

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

pub fn test_config(database_url: String) -> ServerConfig {
    ServerConfig {
        domain: "localhost".into(),
        address: "127.0.0.1".into(),
        port: 0,
        database_url,
        db_driver: None,
        db_login_timeout: Some("5".into()),
        templates_dir: "templates/**/*".into(),
        secret: "0123456789012345678901234567890123456789012345678901234567890123".into(),
    }
}
