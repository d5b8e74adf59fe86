//! Configuration loaded from environment variables.

use std::env;
use std::net::Ipv4Addr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse environment variable '{key}': {details}")]
    ParseError { key: String, details: String },
}

/// Trait for configuration that can be loaded from environment variables
pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, ConfigError>;
}

/// Helper to load an environment variable with a default value
pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    env_or_default(key, default)
        .parse()
        .map_err(|e: T::Err| ConfigError::ParseError {
            key: key.to_string(),
            details: e.to_string(),
        })
}

/// HTTP listener configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    /// - HOST: defaults to 0.0.0.0 (all interfaces)
    /// - PORT: defaults to 8080
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port = parse_env("PORT", "8080")?;
        Ok(Self { host, port })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::UNSPECIFIED.to_string(),
            port: 8080,
        }
    }
}

/// Everything the shop binary needs to start.
#[derive(Clone, Debug)]
pub struct ShopConfig {
    pub server: ServerConfig,
    /// Channel capacity of each resource actor.
    pub actor_buffer: usize,
}

impl FromEnv for ShopConfig {
    /// - SHOP_ACTOR_BUFFER: defaults to 32, must be at least 1
    fn from_env() -> Result<Self, ConfigError> {
        let server = ServerConfig::from_env()?;
        let actor_buffer: usize = parse_env("SHOP_ACTOR_BUFFER", "32")?;
        if actor_buffer == 0 {
            return Err(ConfigError::ParseError {
                key: "SHOP_ACTOR_BUFFER".to_string(),
                details: "must be at least 1".to_string(),
            });
        }
        Ok(Self {
            server,
            actor_buffer,
        })
    }
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            actor_buffer: 32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: [&str; 3] = ["HOST", "PORT", "SHOP_ACTOR_BUFFER"];

    #[test]
    fn test_shop_config_defaults() {
        temp_env::with_vars_unset(KEYS, || {
            let config = ShopConfig::from_env().unwrap();
            assert_eq!(config.server.address(), "0.0.0.0:8080");
            assert_eq!(config.actor_buffer, 32);
        });
    }

    #[test]
    fn test_shop_config_custom_values() {
        temp_env::with_vars(
            [
                ("HOST", Some("127.0.0.1")),
                ("PORT", Some("3000")),
                ("SHOP_ACTOR_BUFFER", Some("128")),
            ],
            || {
                let config = ShopConfig::from_env().unwrap();
                assert_eq!(config.server.address(), "127.0.0.1:3000");
                assert_eq!(config.actor_buffer, 128);
            },
        );
    }

    #[test]
    fn test_invalid_port() {
        temp_env::with_vars([("PORT", Some("not_a_number")), ("SHOP_ACTOR_BUFFER", None)], || {
            let err = ShopConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("PORT"));
        });
    }

    #[test]
    fn test_zero_actor_buffer_is_rejected() {
        temp_env::with_vars([("PORT", None), ("SHOP_ACTOR_BUFFER", Some("0"))], || {
            let err = ShopConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("SHOP_ACTOR_BUFFER"));
        });
    }
}
