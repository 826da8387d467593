use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DIST_DIR: &str = "frontend/dist";
/// One year; bundle assets are content-addressed or never edited in place.
pub const DEFAULT_ASSET_MAX_AGE_SECS: u64 = 31_536_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
    pub asset_max_age_secs: u64,
    pub environment: Environment,
    pub sentry_dsn: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source. Unset and empty values
    /// fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                expected: "a port number",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };
        let asset_max_age_secs = match get("ASSET_MAX_AGE_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "ASSET_MAX_AGE_SECS",
                expected: "a number of seconds",
                value: raw,
            })?,
            None => DEFAULT_ASSET_MAX_AGE_SECS,
        };
        let environment = match get("ENVIRONMENT").as_deref().map(str::trim) {
            None | Some("development") => Environment::Development,
            Some("production") => Environment::Production,
            Some(other) => return Err(ConfigError::UnknownEnvironment(other.to_string())),
        };

        Ok(Self {
            port,
            dist_dir: get("DIST_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR)),
            asset_max_age_secs,
            environment,
            sentry_dsn: get("SENTRY_DSN"),
        })
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }

    /// The bundle has to exist before the server starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.index_file().is_file() {
            Ok(())
        } else {
            Err(ConfigError::MissingBundle(self.dist_dir.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
        assert_eq!(config.asset_max_age_secs, DEFAULT_ASSET_MAX_AGE_SECS);
        assert_eq!(config.environment, Environment::Development);
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("PORT", "8081"),
            ("DIST_DIR", "/srv/flame"),
            ("ASSET_MAX_AGE_SECS", "600"),
            ("ENVIRONMENT", "production"),
            ("SENTRY_DSN", "https://key@sentry.example/1"),
        ])
        .unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.dist_dir, PathBuf::from("/srv/flame"));
        assert_eq!(config.index_file(), PathBuf::from("/srv/flame/index.html"));
        assert_eq!(config.asset_max_age_secs, 600);
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.sentry_dsn.as_deref(), Some("https://key@sentry.example/1"));
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config = config_from(&[("PORT", " "), ("SENTRY_DSN", "")]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn rejects_bad_port() {
        let err = config_from(&[("PORT", "seventy")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));
        assert!(err.to_string().contains("seventy"));
    }

    #[test]
    fn rejects_unknown_environment() {
        let err = config_from(&[("ENVIRONMENT", "staging")]).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownEnvironment(ref e) if e == "staging"));
    }

    #[test]
    fn validate_requires_index_html() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("dist");
        let config = ServerConfig {
            dist_dir: dir.clone(),
            ..config_from(&[]).unwrap()
        };
        assert!(matches!(config.validate(), Err(ConfigError::MissingBundle(d)) if d == dir));

        std::fs::create_dir(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<html></html>").unwrap();
        assert!(config.validate().is_ok());
    }
}
