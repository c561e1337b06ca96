//! Server configuration from the environment.
//!
//! | Variable    | Default   |
//! |-------------|-----------|
//! | `BIND_ADDR` | `0.0.0.0` |
//! | `PORT`      | `8080`    |
//!
//! Unset and empty variables both fall back to the default.

use crate::error::{BahtTextError, Result};
use std::env;

/// Where the liveness server listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
}

impl ServerConfig {
    pub const DEFAULT_BIND_ADDR: &'static str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 8080;

    /// Reads `BIND_ADDR` and `PORT` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let bind_addr =
            non_empty("BIND_ADDR").unwrap_or_else(|| Self::DEFAULT_BIND_ADDR.to_string());

        let port = match non_empty("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| BahtTextError::InvalidPort { value, source })?,
            None => Self::DEFAULT_PORT,
        };

        Ok(ServerConfig { bind_addr, port })
    }

    /// Returns `addr:port`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_addr: Self::DEFAULT_BIND_ADDR.to_string(),
            port: Self::DEFAULT_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_empty_port_uses_default() {
        assert_eq!(config_from(&[("PORT", "")]).unwrap().port, 8080);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[("PORT", "9000"), ("BIND_ADDR", "127.0.0.1")]).unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
    }

    #[test]
    fn test_invalid_port() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, BahtTextError::InvalidPort { .. }));
        assert!(config_from(&[("PORT", "70000")]).is_err());
    }
}
