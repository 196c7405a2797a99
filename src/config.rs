use rocket::config::Config;
use rocket::fairing::AdHoc;
use rocket::figment::Figment;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Timestamps are exposed in the shape JavaScript's `toISOString` produces.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

const DEFAULT_DATABASE_PATH: &str = "db.json";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// JSON document holding every collection.
    pub db_path: PathBuf,
    /// Populate demo data when the store has no users yet.
    #[serde(default)]
    pub seed: bool,
}

impl AppConfig {
    pub fn manage() -> AdHoc {
        AdHoc::config::<AppConfig>()
    }
}

/// Create rocket config from environment variables
pub fn from_env() -> Figment {
    let port = env::var("PORT")
        .ok()
        .and_then(|port| port.parse::<u16>().ok())
        .unwrap_or(8000);

    let db_path = env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string());

    let seed = env::var("SEED_DEMO_DATA")
        .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false);

    Config::figment()
        .merge(("port", port))
        .merge(("db_path", db_path))
        .merge(("seed", seed))
}
