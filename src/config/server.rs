//! Server configuration

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

use super::error::ValidationError;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory the static assets (payment widget page) are served from
    pub static_dir: PathBuf,

    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ServerConfig {
    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Validate server configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if self.static_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("STATIC_DIR"));
        }
        Ok(())
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4242
}

fn default_log_level() -> String {
    "info,signup_broker=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ServerConfig {
        ServerConfig {
            host: default_host(),
            port: default_port(),
            static_dir: PathBuf::from("public"),
            log_level: default_log_level(),
        }
    }

    #[test]
    fn test_defaults() {
        let config = test_config();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 4242);
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            ..test_config()
        };
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_zero_port_rejected() {
        let config = ServerConfig {
            port: 0,
            ..test_config()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidPort)
        ));
    }

    #[test]
    fn test_empty_static_dir_rejected() {
        let config = ServerConfig {
            static_dir: PathBuf::new(),
            ..test_config()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired("STATIC_DIR"))
        ));
    }
}
