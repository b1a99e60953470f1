use shared::models::UserProfile;
use std::path::PathBuf;

/// Menu store configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | ./data | Working directory (database, logs) |
/// | DB_FILE | menu.redb | Database file name inside WORK_DIR |
/// | LOG_LEVEL | info | Log level, overridden by RUST_LOG |
/// | LOG_JSON | false | JSON console logs |
/// | LOG_DIR | (unset) | Directory for daily rotated log files |
/// | SEED_ON_EMPTY | true | Use the sample menu when no catalog is stored |
/// | USER_NAME | Owner | Profile name shown in the drawer |
/// | RESTAURANT_NAME | My Restaurant | Name printed on bills |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/tmp/menu LOG_LEVEL=debug cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub work_dir: String,
    pub db_file: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    pub seed_on_empty: bool,
    pub user_name: String,
    pub restaurant_name: String,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            db_file: std::env::var("DB_FILE").unwrap_or_else(|_| "menu.redb".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            seed_on_empty: std::env::var("SEED_ON_EMPTY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            user_name: std::env::var("USER_NAME").unwrap_or_else(|_| "Owner".into()),
            restaurant_name: std::env::var("RESTAURANT_NAME")
                .unwrap_or_else(|_| "My Restaurant".into()),
        }
    }

    /// Override the working directory, keeping everything else from the environment
    ///
    /// Mostly used by tests
    pub fn with_work_dir(work_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config
    }

    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(&self.db_file)
    }

    pub fn profile(&self) -> UserProfile {
        UserProfile::new(&self.user_name, &self.restaurant_name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
