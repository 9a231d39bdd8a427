use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;
use cinematic_db::DatabaseConfig;

/// Bind address. The service always listens on every interface.
pub const BIND_HOST: &str = "0.0.0.0";

/// Deployment environment, selected by `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Any origin may call the API.
    Development,
    /// Only origins in `CORS_ORIGINS` may call the API.
    Production,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("Invalid CORS origin '{0}'")]
    InvalidCorsOrigin(String),
}

/// Server configuration loaded once at startup.
///
/// All fields have defaults suitable for local development; override them via
/// environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address, always [`BIND_HOST`].
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    pub environment: Environment,
    /// Allowed CORS origins in production, from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// Backstop HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long shutdown waits for in-flight requests (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Emit JSON log lines instead of human-readable ones.
    pub log_json: bool,
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                   | Default        |
    /// |---------------------------|----------------|
    /// | `PORT`                    | `3000`         |
    /// | `APP_ENV`                 | `production`   |
    /// | `CORS_ORIGINS`            | (none)         |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`           |
    /// | `SHUTDOWN_TIMEOUT_SECS`   | `30`           |
    /// | `LOG_FORMAT`              | `text`         |
    /// | `DB_HOST`                 | `localhost`    |
    /// | `DB_PORT`                 | `3306`         |
    /// | `DB_USER`                 | `root`         |
    /// | `DB_PASSWORD`             | (empty)        |
    /// | `DB_NAME`                 | `db_cinematic` |
    /// | `DB_MAX_CONNECTIONS`      | `10`           |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `10`           |
    /// | `QUERY_TIMEOUT_SECS`      | `10`           |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DatabaseConfig::default();

        let environment = match lookup("APP_ENV").as_deref() {
            Some("development") => Environment::Development,
            _ => Environment::Production,
        };

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if let Some(bad) = cors_origins
            .iter()
            .find(|o| HeaderValue::from_str(o).is_err())
        {
            return Err(ConfigError::InvalidCorsOrigin(bad.clone()));
        }

        let log_json = lookup("LOG_FORMAT").is_some_and(|v| v.eq_ignore_ascii_case("json"));

        let database = DatabaseConfig {
            host: lookup("DB_HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "DB_PORT", defaults.port)?,
            user: lookup("DB_USER").unwrap_or(defaults.user),
            password: lookup("DB_PASSWORD").unwrap_or(defaults.password),
            name: lookup("DB_NAME").unwrap_or(defaults.name),
            max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?,
            acquire_timeout: Duration::from_secs(parse_var(
                &lookup,
                "DB_ACQUIRE_TIMEOUT_SECS",
                defaults.acquire_timeout.as_secs(),
            )?),
            query_timeout: Duration::from_secs(parse_var(
                &lookup,
                "QUERY_TIMEOUT_SECS",
                defaults.query_timeout.as_secs(),
            )?),
        };

        if database.max_connections == 0 {
            return Err(ConfigError::Invalid {
                var: "DB_MAX_CONNECTIONS",
                value: "0".into(),
                reason: "must be at least 1".into(),
            });
        }

        Ok(Self {
            host: BIND_HOST.to_string(),
            port: parse_var(&lookup, "PORT", 3000)?,
            environment,
            cors_origins,
            request_timeout_secs: parse_var(&lookup, "REQUEST_TIMEOUT_SECS", 30)?,
            shutdown_timeout_secs: parse_var(&lookup, "SHUTDOWN_TIMEOUT_SECS", 30)?,
            log_json,
            database,
        })
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
            value,
        }),
    }
}
