//! Runtime configuration for a [`RepositorySystem`](super::RepositorySystem).

use thiserror::Error;

/// Environment variable overriding [`SystemConfig::buffer_size`].
pub const BUFFER_SIZE_ENV: &str = "REPOSITORY_BUFFER_SIZE";

/// Default request queue capacity per repository actor.
pub const DEFAULT_BUFFER_SIZE: usize = 32;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid REPOSITORY_BUFFER_SIZE `{value}`: expected a positive integer")]
    InvalidBufferSize { value: String },
}

/// Settings shared by every repository actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemConfig {
    /// How many requests may queue up for one actor before senders wait.
    pub buffer_size: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl SystemConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(raw) = lookup(BUFFER_SIZE_ENV) {
            config.buffer_size = match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => return Err(ConfigError::InvalidBufferSize { value: raw }),
            };
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_variable_uses_default() {
        let config = SystemConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, SystemConfig::default());
        assert_eq!(config.buffer_size, 32);
    }

    #[test]
    fn test_variable_overrides_buffer_size() {
        let lookup = |_: &str| Some(" 8 ".to_string());
        let config = SystemConfig::from_lookup(lookup).unwrap();
        assert_eq!(config.buffer_size, 8);
    }

    #[test]
    fn test_zero_and_garbage_are_rejected() {
        for raw in ["0", "-1", "lots"] {
            let lookup = |_: &str| Some(raw.to_string());
            let err = SystemConfig::from_lookup(lookup).unwrap_err();
            assert_eq!(
                err,
                ConfigError::InvalidBufferSize {
                    value: raw.to_string()
                }
            );
        }
    }
}
