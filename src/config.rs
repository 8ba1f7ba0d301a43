use std::net::IpAddr;

use thiserror::Error;

use crate::models::product::DEFAULT_LOW_STOCK_THRESHOLD;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `None` runs the service on the in-memory store.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub host: IpAddr,
    pub port: u16,
    pub jwt_secret: String,
    pub low_stock_threshold: i64,
}

impl AppConfig {
    /// Reads configuration from the process environment. Call `dotenvy::dotenv()` first
    /// to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        Ok(Self {
            database_url: lookup("DATABASE_URL").filter(|s| !s.is_empty()),
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 5)?,
            host: parse_or(&lookup, "HOST", IpAddr::from([127, 0, 0, 1]))?,
            port: parse_or(&lookup, "PORT", 3000)?,
            jwt_secret,
            low_stock_threshold: parse_or(
                &lookup,
                "LOW_STOCK_THRESHOLD",
                DEFAULT_LOW_STOCK_THRESHOLD,
            )?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = config(&[("JWT_SECRET", "s3cret")]).unwrap();

        assert!(cfg.database_url.is_none());
        assert_eq!(cfg.db_max_connections, 5);
        assert_eq!(cfg.host.to_string(), "127.0.0.1");
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.low_stock_threshold, DEFAULT_LOW_STOCK_THRESHOLD);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let cfg = config(&[
            ("JWT_SECRET", "s3cret"),
            ("DATABASE_URL", "postgres://localhost/stock"),
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("LOW_STOCK_THRESHOLD", "12"),
        ])
        .unwrap();

        assert_eq!(cfg.database_url.as_deref(), Some("postgres://localhost/stock"));
        assert_eq!(cfg.host.to_string(), "0.0.0.0");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.low_stock_threshold, 12);
    }

    #[test]
    fn missing_secret_is_an_error() {
        assert!(matches!(config(&[]), Err(ConfigError::Missing("JWT_SECRET"))));
    }

    #[test]
    fn unparsable_port_is_an_error() {
        let err = config(&[("JWT_SECRET", "s3cret"), ("PORT", "eighty")]).unwrap_err();
        assert_eq!(err.to_string(), "PORT has an invalid value: eighty");
    }
}
