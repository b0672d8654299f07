use gestionale_web::models::config::ServerConfig;

fn load_config() -> Result<ServerConfig, config::ConfigError> {
    config::Config::builder()
        .set_default("domain", "localhost")?
        .set_default("address", "127.0.0.1")?
        .set_default("port", 8080)?
        .set_default("templates_dir", "templates/**/*")?
        .set_default("secret", "unsafe-development-secret-unsafe-development-secret-unsafe-secret")?
        .add_source(config::Environment::default())
        .build()?
        .try_deserialize()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let server_config =
        load_config().map_err(|e| std::io::Error::other(format!("Configuration error: {e}")))?;

    gestionale_web::run(server_config).await
}
