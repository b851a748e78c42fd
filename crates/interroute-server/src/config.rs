//! Server configuration from environment.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub bind_addr: IpAddr,
    /// JSON route table replacing the built-in catalog.
    pub catalog_path: Option<PathBuf>,
    pub cors_permissive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            catalog_path: None,
            cors_permissive: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env::var("INTERROUTE_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.server_port),
            bind_addr: env::var("INTERROUTE_BIND")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.bind_addr),
            catalog_path: env::var("INTERROUTE_CATALOG_PATH")
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
            cors_permissive: env::var("INTERROUTE_CORS_PERMISSIVE")
                .ok()
                .map(|s| parse_bool(&s))
                .unwrap_or(defaults.cors_permissive),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.server_port)
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
