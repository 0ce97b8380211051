//! Bootstrap configuration.
//!
//! Read once at startup; request handling never consults it.
//!
//! - `SERVICE_HOST` - bind address (default: 0.0.0.0)
//! - `SERVICE_PORT` - HTTP port (default: 7000)
//! - plus the variables read by [`LoggingConfig`] and [`MetricsConfig`]

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::logging::LoggingConfig;
use crate::metrics::MetricsConfig;

pub const DEFAULT_PORT: u16 = 7000;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub host: IpAddr,
    pub port: u16,
    pub logging: LoggingConfig,
    pub metrics: MetricsConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            logging: LoggingConfig::default(),
            metrics: MetricsConfig::default(),
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// Unparseable host or port values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = lookup("SERVICE_HOST")
            .and_then(|h| h.parse().ok())
            .unwrap_or(defaults.host);
        let port = lookup("SERVICE_PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        Self {
            host,
            port,
            logging: LoggingConfig::from_lookup(&lookup),
            metrics: MetricsConfig::from_lookup(&lookup),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
