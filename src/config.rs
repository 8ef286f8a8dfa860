//! Configuration Module
//!
//! Server configuration. The listening address is fixed.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Port the registry listens on.
pub const DEFAULT_PORT: u16 = 8069;

/// Server configuration parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to
    pub bind_address: IpAddr,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Socket address assembled from the bind address and port.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.server_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            server_port: DEFAULT_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.bind_address, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8069");
    }

    #[test]
    fn test_config_port_is_fixed() {
        std::env::set_var("SERVER_PORT", "9000");
        assert_eq!(Config::default().server_port, 8069);
        std::env::remove_var("SERVER_PORT");
    }
}
