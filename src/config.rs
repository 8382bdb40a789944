// src/config.rs
use crate::presentation::http::routes::{CorsOrigins, RouterOptions};
use axum::http::HeaderValue;
use std::{env, net::SocketAddr};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: SocketAddr,
    allowed_origins: CorsOrigins,
    enable_api_docs: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "0.0.0.0:8888".into()
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. `from_env` delegates
    /// here; tests pass a map instead of mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        let listen_addr = raw_addr.trim().parse::<SocketAddr>().map_err(|err| {
            ConfigError::Invalid(format!("LISTEN_ADDR `{raw_addr}`: {err}"))
        })?;

        let allowed_origins = match lookup("ALLOWED_ORIGINS") {
            Some(raw) => parse_origins(&raw)?,
            None => CorsOrigins::Any,
        };

        let enable_api_docs = match lookup("ENABLE_API_DOCS") {
            Some(raw) => parse_bool("ENABLE_API_DOCS", &raw)?,
            None => true,
        };

        Ok(Self {
            listen_addr,
            allowed_origins,
            enable_api_docs,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
    }

    pub fn allowed_origins(&self) -> &CorsOrigins {
        &self.allowed_origins
    }

    pub fn enable_api_docs(&self) -> bool {
        self.enable_api_docs
    }

    pub fn router_options(&self) -> RouterOptions {
        RouterOptions {
            enable_docs: self.enable_api_docs,
            allowed_origins: self.allowed_origins.clone(),
        }
    }
}

fn parse_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    let parts: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    if parts.is_empty() || parts.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    parts
        .into_iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| {
                ConfigError::Invalid(format!(
                    "ALLOWED_ORIGINS entry `{origin}` is not a valid header value"
                ))
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid(format!(
            "{key} must be a boolean, got `{other}`"
        ))),
    }
}
