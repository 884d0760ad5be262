//! Environment-based application configuration.
//!
//! All settings are read once at startup from the process environment, after `.env`
//! has been loaded by `dotenvy`. Secrets and the database URL are required; everything
//! else falls back to a development-friendly default.

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_APP_NAME: &str = "attendance";
const DEFAULT_APP_ENV: &str = "development";
const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
const DEFAULT_HTTP_PORT: u16 = 8080;
const DEFAULT_ACCESS_TOKEN_MINUTES: i64 = 60;
const DEFAULT_REFRESH_TOKEN_MINUTES: i64 = 60 * 24 * 7;

/// Every day at 08:00 UTC (tokio-cron-scheduler uses a leading seconds field).
const DEFAULT_REPORT_CRON: &str = "0 0 8 * * *";

pub struct Config {
    pub app_name: String,
    pub app_version: String,
    pub app_env: String,

    pub http_host: String,
    pub http_port: u16,
    /// Origins allowed by CORS. Empty means any origin.
    pub allowed_origins: Vec<String>,

    pub database_url: String,
    /// Redis connection string; the in-process cache is used when unset.
    pub redis_url: Option<String>,

    pub jwt_secret: String,
    pub jwt_refresh_secret: String,
    pub access_token_minutes: i64,
    pub refresh_token_minutes: i64,

    pub report_cron: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            app_name: optional("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            app_version: optional("APP_VERSION")
                .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string()),
            app_env: optional("APP_ENV").unwrap_or_else(|| DEFAULT_APP_ENV.to_string()),
            http_host: optional("HTTP_HOST").unwrap_or_else(|| DEFAULT_HTTP_HOST.to_string()),
            http_port: parsed("HTTP_PORT", DEFAULT_HTTP_PORT)?,
            allowed_origins: optional("HTTP_ALLOWED_ORIGINS")
                .map(|origins| split_origins(&origins))
                .unwrap_or_default(),
            database_url: required("DATABASE_URL")?,
            redis_url: optional("REDIS_URL"),
            jwt_secret: required("JWT_SECRET")?,
            jwt_refresh_secret: required("JWT_REFRESH_SECRET")?,
            access_token_minutes: parsed(
                "ACCESS_TOKEN_EXPIRED_MINUTES",
                DEFAULT_ACCESS_TOKEN_MINUTES,
            )?,
            refresh_token_minutes: parsed(
                "REFRESH_TOKEN_EXPIRED_MINUTES",
                DEFAULT_REFRESH_TOKEN_MINUTES,
            )?,
            report_cron: optional("REPORT_CRON")
                .unwrap_or_else(|| DEFAULT_REPORT_CRON.to_string()),
        })
    }

    /// Socket address string the HTTP listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads a variable, treating an empty value the same as an unset one.
fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parsed<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match optional(name) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        None => Ok(default),
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests splitting of the comma-separated origin list.
    ///
    /// Expected: whitespace trimmed and empty segments dropped
    #[test]
    fn splits_allowed_origins() {
        let origins = split_origins(" http://a.test, ,http://b.test ");

        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }

    /// Tests that an unset numeric variable falls back to its default.
    ///
    /// Expected: Ok with the default value
    #[test]
    fn parsed_uses_default_when_unset() {
        let value = parsed("ATTENDANCE_TEST_UNSET_PORT", 8080u16).unwrap();

        assert_eq!(value, 8080);
    }
}
