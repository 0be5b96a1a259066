//! Configuration module for the student registry.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::AppError;

const DEFAULT_PROGRAMMES: &[&str] = &[
    "CS",
    "Biology",
    "Mathematics",
    "Physics",
    "Engineering",
    "Business",
];
const DEFAULT_YEARS: &[&str] = &["1", "2", "3", "4"];

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file holding the key-value slot
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Key under which the serialized profile collection is stored
    pub storage_key: String,
    /// Photo URL used when a profile is submitted without one
    pub placeholder_photo_url: String,
    /// Choices offered by the programme select
    pub programmes: Vec<String>,
    /// Choices offered by the year select
    pub years: Vec<String>,
    /// How long a status announcement stays in the live region
    pub announcement_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: "./data/registry.sqlite".into(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            log_level: "info".to_string(),
            storage_key: "studentProfiles".to_string(),
            placeholder_photo_url: "https://via.placeholder.com/100".to_string(),
            programmes: DEFAULT_PROGRAMMES.iter().map(|p| p.to_string()).collect(),
            years: DEFAULT_YEARS.iter().map(|y| y.to_string()).collect(),
            announcement_ttl: Duration::from_millis(1000),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let db_path = env::var("REGISTRY_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.db_path);

        let bind_addr = match env::var("REGISTRY_BIND_ADDR") {
            Ok(raw) => raw
                .parse::<SocketAddr>()
                .map_err(|e| AppError::Config(format!("Invalid REGISTRY_BIND_ADDR {raw:?}: {e}")))?,
            Err(_) => defaults.bind_addr,
        };

        let log_level = env::var("REGISTRY_LOG_LEVEL").unwrap_or(defaults.log_level);

        let storage_key = env::var("REGISTRY_STORAGE_KEY").unwrap_or(defaults.storage_key);

        let placeholder_photo_url =
            env::var("REGISTRY_PLACEHOLDER_PHOTO_URL").unwrap_or(defaults.placeholder_photo_url);

        let programmes = match env::var("REGISTRY_PROGRAMMES") {
            Ok(raw) => parse_choices("REGISTRY_PROGRAMMES", &raw)?,
            Err(_) => defaults.programmes,
        };

        let years = match env::var("REGISTRY_YEARS") {
            Ok(raw) => parse_choices("REGISTRY_YEARS", &raw)?,
            Err(_) => defaults.years,
        };

        let announcement_ttl = match env::var("REGISTRY_ANNOUNCEMENT_TTL_MS") {
            Ok(raw) => raw.trim().parse().map(Duration::from_millis).map_err(|e| {
                AppError::Config(format!("Invalid REGISTRY_ANNOUNCEMENT_TTL_MS {raw:?}: {e}"))
            })?,
            Err(_) => defaults.announcement_ttl,
        };

        Ok(Self {
            db_path,
            bind_addr,
            log_level,
            storage_key,
            placeholder_photo_url,
            programmes,
            years,
            announcement_ttl,
        })
    }
}

/// Split a comma-separated option list, dropping blank entries.
fn parse_choices(var: &str, raw: &str) -> Result<Vec<String>, AppError> {
    let choices: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();

    if choices.is_empty() {
        return Err(AppError::Config(format!("{var} must list at least one choice")));
    }
    Ok(choices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("REGISTRY_DB_PATH");
        env::remove_var("REGISTRY_BIND_ADDR");
        env::remove_var("REGISTRY_LOG_LEVEL");
        env::remove_var("REGISTRY_STORAGE_KEY");
        env::remove_var("REGISTRY_PLACEHOLDER_PHOTO_URL");
        env::remove_var("REGISTRY_PROGRAMMES");
        env::remove_var("REGISTRY_YEARS");
        env::remove_var("REGISTRY_ANNOUNCEMENT_TTL_MS");

        let config = Config::from_env().unwrap();

        assert_eq!(config.db_path, PathBuf::from("./data/registry.sqlite"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.storage_key, "studentProfiles");
        assert_eq!(config.placeholder_photo_url, "https://via.placeholder.com/100");
        assert!(config.programmes.contains(&"CS".to_string()));
        assert_eq!(config.years, vec!["1", "2", "3", "4"]);
        assert_eq!(config.announcement_ttl, Duration::from_secs(1));
    }

    #[test]
    fn test_parse_choices() {
        assert_eq!(
            parse_choices("X", " CS , Biology,,").unwrap(),
            vec!["CS".to_string(), "Biology".to_string()]
        );
        assert!(parse_choices("X", " , ").is_err());
    }
}
