//! HTTP listener settings: bind address, request timeout, CORS and log filter.

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Where and how the HTTP API listens.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,

    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset.
    pub log_level: String,

    /// Upper bound on one request, in seconds.
    pub request_timeout_secs: u64,

    /// Comma-separated browser origins. Unset means any origin.
    pub cors_origins: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info,edudoc=debug,tower_http=info".to_string(),
            request_timeout_secs: 30,
            cors_origins: None,
        }
    }
}

impl ServerConfig {
    /// The address to bind the listener to.
    pub fn bind_address(&self) -> Result<SocketAddr, ValidationError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|_| ValidationError::InvalidBindAddress(addr))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Configured origins, blanks dropped.
    pub fn allowed_origins(&self) -> Vec<&str> {
        self.cors_origins
            .as_deref()
            .map(|list| list.split(',').map(str::trim).filter(|o| !o.is_empty()).collect())
            .unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        self.bind_address().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_listen_on_all_interfaces() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address().unwrap().to_string(), "0.0.0.0:8080");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.allowed_origins().is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unparseable_host_fails_validation() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidBindAddress(_))
        ));
    }

    #[test]
    fn origins_are_split_and_trimmed() {
        let config = ServerConfig {
            cors_origins: Some("http://localhost:5173, http://localhost:3000,".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.allowed_origins(),
            vec!["http://localhost:5173", "http://localhost:3000"]
        );
    }

    #[test]
    fn zero_port_is_rejected() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidPort));
    }

    #[test]
    fn timeout_must_be_within_bounds() {
        for secs in [0, MAX_REQUEST_TIMEOUT_SECS + 1] {
            let config = ServerConfig {
                request_timeout_secs: secs,
                ..Default::default()
            };
            assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));
        }
    }
}
