use std::collections::HashMap;
use std::env;
use std::time::Duration;

use crate::modules::portfolio::adapter::outgoing::gviz::DEFAULT_SHEETS_BASE_URL;
use crate::modules::portfolio::application::service::SheetNames;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {key} value: '{value}'")]
    InvalidNumber { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` disables the remote source entirely.
    pub spreadsheet_id: Option<String>,
    pub sheets_base_url: String,
    pub sheet_names: SheetNames,
    /// `None` keeps the HTTP client's default (no explicit timeout).
    pub request_timeout: Option<Duration>,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process
    /// environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        if dotenvy::from_filename(format!(".env.{}", rust_env)).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_vars(&env::vars().collect())
    }

    /// Same as [`AppConfig::from_env`] over an explicit variable map.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            vars.get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let get_or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let defaults = SheetNames::default();

        Ok(Self {
            host: get_or("HOST", "127.0.0.1"),
            port: parse_number(get("PORT"), "PORT")?.unwrap_or(8080),
            spreadsheet_id: get("SPREADSHEET_ID"),
            sheets_base_url: get_or("SHEETS_BASE_URL", DEFAULT_SHEETS_BASE_URL),
            sheet_names: SheetNames {
                profile: get_or("SHEET_PROFILE", &defaults.profile),
                projects: get_or("SHEET_PROJECTS", &defaults.projects),
                about: get_or("SHEET_ABOUT", &defaults.about),
                skills: get_or("SHEET_SKILLS", &defaults.skills),
            },
            request_timeout: parse_number::<u64>(get("SHEETS_TIMEOUT_SECS"), "SHEETS_TIMEOUT_SECS")?
                .map(Duration::from_secs),
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_number<T: std::str::FromStr>(
    value: Option<String>,
    key: &str,
) -> Result<Option<T>, ConfigError> {
    value
        .map(|v| {
            v.parse::<T>().map_err(|_| ConfigError::InvalidNumber {
                key: key.to_string(),
                value: v,
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;

    fn vars(pairs: HashMap<&str, &str>) -> HashMap<String, String> {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_vars(&HashMap::new()).unwrap();

        assert_eq!(config.server_url(), "127.0.0.1:8080");
        assert_eq!(config.spreadsheet_id, None);
        assert_eq!(config.sheets_base_url, DEFAULT_SHEETS_BASE_URL);
        assert_eq!(config.sheet_names, SheetNames::default());
        assert_eq!(config.request_timeout, None);
    }

    #[test]
    fn blank_spreadsheet_id_counts_as_unset() {
        let config = AppConfig::from_vars(&vars(hashmap! { "SPREADSHEET_ID" => "   " })).unwrap();
        assert_eq!(config.spreadsheet_id, None);
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_vars(&vars(hashmap! {
            "HOST" => "0.0.0.0",
            "PORT" => "9090",
            "SPREADSHEET_ID" => "abc123",
            "SHEET_PROJECTS" => "Projects",
            "SHEETS_TIMEOUT_SECS" => "15",
        }))
        .unwrap();

        assert_eq!(config.server_url(), "0.0.0.0:9090");
        assert_eq!(config.spreadsheet_id.as_deref(), Some("abc123"));
        assert_eq!(config.sheet_names.projects, "Projects");
        assert_eq!(config.sheet_names.profile, "Me");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn rejects_bad_numbers() {
        let err = AppConfig::from_vars(&vars(hashmap! { "PORT" => "eighty" })).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                key: "PORT".to_string(),
                value: "eighty".to_string()
            }
        );
    }
}
