//! Host server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_PUBLIC_DIR: &str = "public";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("invalid BIND_ADDR: {0:?}")]
    InvalidBindAddr(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Static assets (images) served for any path the app does not route.
    pub public_dir: PathBuf,
}

impl ServerConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `PUBLIC_DIR`: default `public`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `PORT` or `BIND_ADDR` does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("BIND_ADDR").ok().as_deref(),
            std::env::var("PUBLIC_DIR").ok().as_deref(),
        )
    }

    /// Build config from optional raw values. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a present value does not parse.
    pub fn from_values(port: Option<&str>, bind_addr: Option<&str>, public_dir: Option<&str>) -> Result<Self, ConfigError> {
        let port = match non_blank(port) {
            None => DEFAULT_PORT,
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
        };
        let bind_addr = non_blank(bind_addr)
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_addr.unwrap_or_default().to_owned()))?;
        let public_dir = PathBuf::from(non_blank(public_dir).unwrap_or(DEFAULT_PUBLIC_DIR));

        Ok(Self { bind_addr, port, public_dir })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}
