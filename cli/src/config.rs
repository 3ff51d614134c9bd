use std::path::PathBuf;
use tracing::Level;

/// Database file used when nothing else is configured, relative to the
/// working directory.
pub const DEFAULT_DB_PATH: &str = "storage.db";

/// Runtime settings for the `notes` binary.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            log_level: Level::WARN,
        }
    }
}
