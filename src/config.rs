//! Environment-sourced application settings.
//!
//! All configuration is read once at process start; the resulting
//! `Settings` value is injected into the API context and never mutated.

use std::env;
use std::net::SocketAddr;

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "Careloom";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {var}: {value:?}")]
    InvalidVar { var: &'static str, value: String },
}

/// Runtime settings loaded from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Credential for the completion provider. Required.
    pub anthropic_api_key: String,
    /// Deployment environment name (`development`, `staging`, `production`).
    pub environment: String,
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Origins allowed by the CORS layer.
    pub cors_origins: Vec<String>,
    /// Outbound request timeout for the completion provider.
    pub claude_timeout_secs: u64,
    /// Optional telemetry endpoint. Loaded and reported at startup only.
    pub sentry_dsn: Option<String>,
}

impl Settings {
    /// Load settings from the environment.
    ///
    /// `ANTHROPIC_API_KEY` is the only hard requirement; everything else
    /// falls back to a development-friendly default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let anthropic_api_key = env::var("ANTHROPIC_API_KEY")
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar("ANTHROPIC_API_KEY"))?;

        let environment = env_or("ENVIRONMENT", "development");

        let bind_raw = env_or("BIND_ADDR", "0.0.0.0:8000");
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError::InvalidVar {
            var: "BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let cors_origins = parse_origins(&env_or("CORS_ORIGINS", "http://localhost:5173"));

        let timeout_raw = env_or("CLAUDE_TIMEOUT_SECS", "120");
        let claude_timeout_secs =
            timeout_raw.parse().map_err(|_| ConfigError::InvalidVar {
                var: "CLAUDE_TIMEOUT_SECS",
                value: timeout_raw.clone(),
            })?;

        let sentry_dsn = env::var("SENTRY_DSN").ok().filter(|v| !v.is_empty());

        Ok(Self {
            anthropic_api_key,
            environment,
            bind_addr,
            cors_origins,
            claude_timeout_secs,
            sentry_dsn,
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }

    /// Default tracing filter when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> String {
        if self.is_development() {
            "careloom=debug,info".to_string()
        } else {
            "info".to_string()
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Split a comma-separated origin list, trimming whitespace around entries.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_settings() -> Settings {
        Settings {
            anthropic_api_key: "sk-test".into(),
            environment: "development".into(),
            bind_addr: "127.0.0.1:8000".parse().unwrap(),
            cors_origins: vec!["http://localhost:5173".into()],
            claude_timeout_secs: 120,
            sentry_dsn: None,
        }
    }

    #[test]
    fn parse_origins_single() {
        assert_eq!(
            parse_origins("http://localhost:5173"),
            vec!["http://localhost:5173"]
        );
    }

    #[test]
    fn parse_origins_multiple_with_whitespace() {
        let origins = parse_origins("http://localhost:5173, https://care.example.com ,");
        assert_eq!(
            origins,
            vec!["http://localhost:5173", "https://care.example.com"]
        );
    }

    #[test]
    fn development_environment_is_case_insensitive() {
        let mut settings = test_settings();
        settings.environment = "Development".into();
        assert!(settings.is_development());

        settings.environment = "production".into();
        assert!(!settings.is_development());
    }

    #[test]
    fn log_filter_verbose_in_development_only() {
        let mut settings = test_settings();
        assert!(settings.default_log_filter().contains("careloom=debug"));

        settings.environment = "production".into();
        assert_eq!(settings.default_log_filter(), "info");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "1.0.0");
    }
}
