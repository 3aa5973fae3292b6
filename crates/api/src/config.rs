use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:4000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub introspection: bool,
    pub playground: bool,
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            allowed_origins: split_origins(DEFAULT_ALLOWED_ORIGINS),
            introspection: true,
            playground: true,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Unparsable values
    /// fall back to their defaults, except `PORT`: binding to a port other
    /// than the one asked for would be surprising.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("invalid PORT value {raw:?}"))?,
            None => defaults.port,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .map(|v| split_origins(&v))
                .unwrap_or(defaults.allowed_origins),
            introspection: flag(&lookup, "GQL_INTROSPECTION", defaults.introspection),
            playground: flag(&lookup, "GQL_PLAYGROUND", defaults.playground),
            request_timeout: lookup("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn flag(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: bool) -> bool {
    lookup(key)
        .and_then(|v| v.trim().to_lowercase().parse().ok())
        .unwrap_or(default)
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
