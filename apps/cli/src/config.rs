use std::path::PathBuf;

pub const DEFAULT_DB_PATH: &str = "./data/travel_planner.db";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Reads settings from the environment after loading `.env`, if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let db_path =
            std::env::var("VOYAGE_DB_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
        let log_format = match std::env::var("VOYAGE_LOG_FORMAT") {
            Ok(value) if value.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };
        Self {
            db_path,
            log_format,
        }
    }

    /// Applies the `--db` flag on top of the environment.
    pub fn with_db_override(mut self, db: Option<PathBuf>) -> Self {
        if let Some(path) = db {
            self.db_path = path.to_string_lossy().to_string();
        }
        self
    }
}
