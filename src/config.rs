//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the durable slot holding the serialized activity store
    pub storage_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables, with defaults suitable
    /// for local use.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self {
            storage_path: env::var("WAYMARK_STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/activities.json")),
        }
    }
}
