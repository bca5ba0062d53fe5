use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct Database {
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct Remote {
    pub base_url: String,
    /// Number of users kept from the remote collection, in source order
    pub user_limit: usize,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub database: Database,
    pub remote: Remote,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        // 1. Optional settings.toml
        let config_file_name = "settings.toml";

        let current_dir_path = PathBuf::from(config_file_name);
        if current_dir_path.exists() {
            builder = builder.add_source(File::from(current_dir_path).required(false));
        }

        // Development layout: running from the workspace root
        let dev_path = PathBuf::from("usersync-server").join(config_file_name);
        if dev_path.exists() {
            builder = builder.add_source(File::from(dev_path).required(false));
        }

        // 2. Defaults, then environment variables (highest priority)
        builder = builder
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("database.path", "users.db")?
            .set_default("remote.base_url", "https://jsonplaceholder.typicode.com")?
            .set_default("remote.user_limit", 10)?;

        if let Ok(db_path) = std::env::var("DATABASE_PATH") {
            builder = builder.set_override("database.path", db_path)?;
        }
        if let Ok(port) = std::env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }
        if let Ok(host) = std::env::var("HOST") {
            builder = builder.set_override("server.host", host)?;
        }
        if let Ok(base_url) = std::env::var("REMOTE_BASE_URL") {
            builder = builder.set_override("remote.base_url", base_url)?;
        }
        if let Ok(limit) = std::env::var("REMOTE_USER_LIMIT") {
            builder = builder.set_override("remote.user_limit", limit)?;
        }

        let s = builder.build()?;
        s.try_deserialize()
    }
}
