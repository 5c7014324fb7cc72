//! Server settings loaded via OrthoConfig and the resolved server config.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;

/// Layered settings (CLI flags, `USER_DIRECTORY_*` environment variables,
/// config files) controlling the listener.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_DIRECTORY")]
pub struct ServerSettings {
    /// IP address to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
}

impl ServerSettings {
    /// Return the configured port, falling back to the default.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Resolve the socket address to bind.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when `host` is not an IP address literal.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let ip = match self.host.as_deref() {
            Some(host) => host.trim().parse::<IpAddr>().map_err(|e| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("invalid host {host:?}: {e}"),
                )
            })?,
            None => DEFAULT_HOST,
        };
        Ok(SocketAddr::new(ip, self.port()))
    }
}

/// Resolved configuration for creating the HTTP server.
#[derive(Debug, Clone, Copy)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Construct a server configuration for the given address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self { bind_addr }
    }

    /// Resolve a configuration from loaded settings.
    ///
    /// # Errors
    /// Propagates [`ServerSettings::bind_addr`] failures.
    pub fn from_settings(settings: &ServerSettings) -> std::io::Result<Self> {
        settings.bind_addr().map(Self::new)
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
