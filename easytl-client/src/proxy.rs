//! Proxy selection.
//!
//! [`build_tunnel`] turns a [`ProxyConfig`] into an optional [`Tunnel`] that
//! the transport uses to open its TCP connection. The SOCKS handshakes
//! themselves are done by `tokio-socks`.
//!
//! # Example
//! ```rust,no_run
//! use easytl_client::proxy::{build_tunnel, ProxyConfig, ProxyKind};
//!
//! # async fn f() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = ProxyConfig::new(ProxyKind::Socks5, "127.0.0.1", 1080);
//! if let Some(tunnel) = build_tunnel(&cfg)? {
//!     let stream = tunnel.connect("149.154.167.51:443").await?;
//!     # drop(stream);
//! }
//! # Ok(()) }
//! ```

use std::fmt;
use std::io;
use std::str::FromStr;

use tokio::net::TcpStream;
use tokio_socks::tcp::{Socks4Stream, Socks5Stream};

use crate::errors::ProxyError;

pub const ENV_PROXY_KIND: &str = "EASYTL_PROXY_KIND";
pub const ENV_PROXY_HOST: &str = "EASYTL_PROXY_HOST";
pub const ENV_PROXY_PORT: &str = "EASYTL_PROXY_PORT";

// ─── ProxyKind ────────────────────────────────────────────────────────────────

/// Which proxy protocol to tunnel through.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProxyKind {
    /// Direct connection.
    #[default]
    None,
    Socks4,
    Socks4a,
    Socks5,
    /// A kind named in configuration that has no tunnel implementation.
    Unsupported(String),
}

impl FromStr for ProxyKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "" | "none"   => Self::None,
            "socks4"      => Self::Socks4,
            "socks4a"     => Self::Socks4a,
            "socks5"      => Self::Socks5,
            _             => Self::Unsupported(s.trim().to_string()),
        })
    }
}

impl fmt::Display for ProxyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None           => f.write_str("none"),
            Self::Socks4         => f.write_str("socks4"),
            Self::Socks4a        => f.write_str("socks4a"),
            Self::Socks5         => f.write_str("socks5"),
            Self::Unsupported(k) => f.write_str(k),
        }
    }
}

// ─── ProxyConfig ──────────────────────────────────────────────────────────────

/// Proxy settings, read once when [`crate::Client::connect`] runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProxyConfig {
    pub kind: ProxyKind,
    pub host: String,
    pub port: u16,
    /// Username and password for SOCKS5; for SOCKS4/4a the username is sent
    /// as the user id and the password is ignored.
    pub auth: Option<(String, String)>,
}

impl ProxyConfig {
    pub fn new(kind: ProxyKind, host: impl Into<String>, port: u16) -> Self {
        Self { kind, host: host.into(), port, auth: None }
    }

    pub fn with_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.auth = Some((username.into(), password.into()));
        self
    }

    /// Read `EASYTL_PROXY_KIND`, `EASYTL_PROXY_HOST` and `EASYTL_PROXY_PORT`.
    ///
    /// A missing kind means no proxy.
    pub fn from_env() -> Result<Self, ProxyError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ProxyError> {
        let kind = get(ENV_PROXY_KIND)
            .map(|k| k.parse::<ProxyKind>().unwrap_or_default())
            .unwrap_or_default();
        let host = get(ENV_PROXY_HOST).unwrap_or_default();
        let port = match get(ENV_PROXY_PORT) {
            Some(p) => p.trim().parse::<u16>().map_err(|_| {
                ProxyError::InvalidAddress(format!("{ENV_PROXY_PORT}={p} is not a port"))
            })?,
            None => 0,
        };
        Ok(Self { kind, host, port, auth: None })
    }

    fn addr(&self) -> Result<String, ProxyError> {
        let host = self.host.trim();
        if host.is_empty() {
            return Err(ProxyError::InvalidAddress(format!("{} proxy has no host", self.kind)));
        }
        if self.port == 0 {
            return Err(ProxyError::InvalidAddress(format!("{} proxy has no port", self.kind)));
        }
        if host.contains(':') && !host.starts_with('[') {
            Ok(format!("[{host}]:{}", self.port))
        } else {
            Ok(format!("{host}:{}", self.port))
        }
    }
}

// ─── Tunnel ───────────────────────────────────────────────────────────────────

/// The proxy protocols a [`Tunnel`] can speak.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TunnelKind {
    Socks4,
    Socks4a,
    Socks5,
}

/// A ready-to-use proxy connector handed to the transport at connect time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tunnel {
    pub kind:       TunnelKind,
    /// `host:port` of the proxy server.
    pub proxy_addr: String,
    pub auth:       Option<(String, String)>,
}

impl Tunnel {
    /// Open a TCP connection to `target` (`host:port`) through the proxy.
    pub async fn connect(&self, target: &str) -> io::Result<TcpStream> {
        tracing::info!("[proxy] Connecting via {:?} {} → {target}", self.kind, self.proxy_addr);
        let proxy = self.proxy_addr.as_str();
        let stream = match (self.kind, &self.auth) {
            (TunnelKind::Socks5, None) => {
                Socks5Stream::connect(proxy, target).await.map_err(socks_io)?.into_inner()
            }
            (TunnelKind::Socks5, Some((user, pass))) => {
                Socks5Stream::connect_with_password(proxy, target, user.as_str(), pass.as_str())
                    .await
                    .map_err(socks_io)?
                    .into_inner()
            }
            (TunnelKind::Socks4a, auth) => {
                // tokio-socks sends domain targets with the 4a extension.
                Self::socks4(proxy, target, auth.as_ref()).await?
            }
            (TunnelKind::Socks4, auth) => {
                // Plain SOCKS4 only carries IPv4 addresses.
                let addr = tokio::net::lookup_host(target)
                    .await?
                    .find(|a| a.is_ipv4())
                    .ok_or_else(|| io::Error::new(
                        io::ErrorKind::AddrNotAvailable,
                        format!("{target} has no IPv4 address for SOCKS4"),
                    ))?;
                Self::socks4(proxy, addr, auth.as_ref()).await?
            }
        };
        tracing::info!("[proxy] Connected ✓");
        Ok(stream)
    }

    async fn socks4<'t, T>(
        proxy:  &str,
        target: T,
        auth:   Option<&(String, String)>,
    ) -> io::Result<TcpStream>
    where
        T: tokio_socks::IntoTargetAddr<'t>,
    {
        let stream = match auth {
            Some((user_id, _)) => {
                Socks4Stream::connect_with_userid(proxy, target, user_id.as_str()).await
            }
            None => Socks4Stream::connect(proxy, target).await,
        };
        Ok(stream.map_err(socks_io)?.into_inner())
    }
}

fn socks_io(e: tokio_socks::Error) -> io::Error {
    io::Error::other(e)
}

// ─── Selection ────────────────────────────────────────────────────────────────

/// Pick a tunnel for `config`.
///
/// * `None` → `Ok(None)`, connect directly.
/// * SOCKS4 / 4a / 5 → `Ok(Some(tunnel))`, or [`ProxyError::InvalidAddress`]
///   when host or port is missing.
/// * Unsupported kinds → `Ok(None)`: the proxy is silently disabled.
///   Use [`build_tunnel_strict`] to reject them instead.
pub fn build_tunnel(config: &ProxyConfig) -> Result<Option<Tunnel>, ProxyError> {
    match build_tunnel_strict(config) {
        Err(ProxyError::Unsupported(kind)) => {
            tracing::warn!("[proxy] Unsupported proxy kind {kind:?}, connecting directly");
            Ok(None)
        }
        other => other,
    }
}

/// Like [`build_tunnel`] but fails with [`ProxyError::Unsupported`] instead
/// of falling back to a direct connection.
pub fn build_tunnel_strict(config: &ProxyConfig) -> Result<Option<Tunnel>, ProxyError> {
    let kind = match &config.kind {
        ProxyKind::None           => return Ok(None),
        ProxyKind::Socks4         => TunnelKind::Socks4,
        ProxyKind::Socks4a        => TunnelKind::Socks4a,
        ProxyKind::Socks5         => TunnelKind::Socks5,
        ProxyKind::Unsupported(k) => return Err(ProxyError::Unsupported(k.clone())),
    };
    Ok(Some(Tunnel { kind, proxy_addr: config.addr()?, auth: config.auth.clone() }))
}

// ─── Tests ────────────────────────────────────────────────────────────────────
