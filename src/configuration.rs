use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_aux::field_attributes::{deserialize_bool_from_anything, deserialize_number_from_string};
use sqlx::sqlite::SqliteConnectOptions;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

#[derive(Deserialize, Clone, Debug)]
pub struct DatabaseSettings {
    pub path: PathBuf,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub max_connections: u32,
    #[serde(deserialize_with = "deserialize_bool_from_anything")]
    pub create_if_missing: bool,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseSettings {
    pub fn connect_options(&self) -> SqliteConnectOptions {
        SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(self.create_if_missing)
    }
}

/// Loads settings from defaults, an optional config file, `APP_*` variables
/// and finally the `DB_PATH` variable.
///
/// Without an explicit `path` a `configuration.{toml,yaml,json}` file in the
/// working directory is picked up if it exists.
pub fn get_configuration(path: Option<&Path>) -> Result<Settings, config::ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name("configuration").required(false),
    };

    config::Config::builder()
        .set_default("application.host", "0.0.0.0")?
        .set_default("application.port", 8080)?
        .set_default("database.path", "trivia.sqlite")?
        .set_default("database.max_connections", 5)?
        .set_default("database.create_if_missing", true)?
        .add_source(file)
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .set_override_option("database.path", std::env::var("DB_PATH").ok())?
        .build()?
        .try_deserialize::<Settings>()
}
