//! Error types for easytl-client.
//!
//! Resolution misses are never errors: resolver methods return `Ok(None)`.

use std::{fmt, io};

// ─── RpcError ─────────────────────────────────────────────────────────────────

/// An error returned by Telegram's servers in response to an RPC call.
///
/// Numeric values are stripped from the name and placed in [`RpcError::value`].
///
/// # Example
/// `FLOOD_WAIT_30` → `RpcError { code: 420, name: "FLOOD_WAIT", value: Some(30) }`
#[derive(Clone, Debug, PartialEq)]
pub struct RpcError {
    /// HTTP-like status code.
    pub code: i32,
    /// Error name in SCREAMING_SNAKE_CASE with digits removed.
    pub name: String,
    /// Numeric suffix extracted from the name, if any.
    pub value: Option<u32>,
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RPC {}: {}", self.code, self.name)?;
        if let Some(v) = self.value {
            write!(f, " (value: {v})")?;
        }
        Ok(())
    }
}

impl std::error::Error for RpcError {}

impl RpcError {
    /// Parse a raw Telegram error message like `"FLOOD_WAIT_30"` into an `RpcError`.
    pub fn from_telegram(code: i32, message: &str) -> Self {
        if let Some(idx) = message.rfind('_') {
            let suffix = &message[idx + 1..];
            if !suffix.is_empty() && suffix.chars().all(|c| c.is_ascii_digit()) {
                if let Ok(v) = suffix.parse::<u32>() {
                    let name = message[..idx].to_string();
                    return Self { code, name, value: Some(v) };
                }
            }
        }
        Self { code, name: message.to_string(), value: None }
    }

    /// Match on the error name, with optional wildcard prefix/suffix `'*'`.
    ///
    /// # Examples
    /// - `err.is("PHONE_CODE_INVALID")`: exact match
    /// - `err.is("PHONE_CODE_*")`: starts-with match
    /// - `err.is("*_INVALID")`: ends-with match
    pub fn is(&self, pattern: &str) -> bool {
        if let Some(prefix) = pattern.strip_suffix('*') {
            self.name.starts_with(prefix)
        } else if let Some(suffix) = pattern.strip_prefix('*') {
            self.name.ends_with(suffix)
        } else {
            self.name == pattern
        }
    }
}

// ─── InvocationError ──────────────────────────────────────────────────────────

/// Failure of any call made through the [`crate::TransportClient`].
///
/// Propagated unchanged; the client never retries.
#[derive(Debug)]
pub enum InvocationError {
    /// Telegram rejected the request.
    Rpc(RpcError),
    /// Network / I/O failure, including an unreachable server or proxy.
    Io(io::Error),
    /// The response could not be decoded.
    Deserialize(String),
    /// The request was dropped (e.g. the transport shut down mid-call).
    Dropped,
    /// No transport connection has been published yet; call
    /// [`crate::Client::connect`] first.
    NotConnected,
}

impl fmt::Display for InvocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rpc(e)         => write!(f, "{e}"),
            Self::Io(e)          => write!(f, "I/O error: {e}"),
            Self::Deserialize(s) => write!(f, "deserialize error: {s}"),
            Self::Dropped        => write!(f, "request dropped"),
            Self::NotConnected   => write!(f, "not connected"),
        }
    }
}

impl std::error::Error for InvocationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rpc(e) => Some(e),
            Self::Io(e)  => Some(e),
            _            => None,
        }
    }
}

impl From<io::Error> for InvocationError {
    fn from(e: io::Error) -> Self { Self::Io(e) }
}

impl From<RpcError> for InvocationError {
    fn from(e: RpcError) -> Self { Self::Rpc(e) }
}

impl InvocationError {
    /// Returns `true` if this is the named RPC error (supports `'*'` wildcards).
    pub fn is(&self, pattern: &str) -> bool {
        match self {
            Self::Rpc(e) => e.is(pattern),
            _            => false,
        }
    }
}

// ─── ProxyError ───────────────────────────────────────────────────────────────

/// Problems with the configured proxy, detected before any network call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProxyError {
    /// The proxy kind has no tunnel implementation. Only reported when
    /// [`crate::Config::strict_proxy`] is set; otherwise the client falls
    /// back to a direct connection.
    Unsupported(String),
    /// A supported kind was configured with an unusable host or port.
    InvalidAddress(String),
}

impl fmt::Display for ProxyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported(kind)   => write!(f, "unsupported proxy kind: {kind}"),
            Self::InvalidAddress(msg) => write!(f, "invalid proxy address: {msg}"),
        }
    }
}

impl std::error::Error for ProxyError {}

// ─── AuthError ────────────────────────────────────────────────────────────────

/// Errors returned by [`crate::Client::connect`] and the two-phase login.
#[derive(Debug)]
pub enum AuthError {
    /// The transport could not connect (server or proxy unreachable).
    Connection(InvocationError),
    /// The proxy configuration was rejected.
    Proxy(ProxyError),
    /// The session store could not be opened.
    Session(io::Error),
    /// The code entered was wrong or has expired.
    InvalidCode,
    /// No code was supplied for the challenge.
    CodeMissing,
    /// The account has 2FA enabled; password login is not supported.
    PasswordRequired,
    /// The code request or submission was rejected for another reason.
    Rejected(InvocationError),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connection(e)    => write!(f, "connection failed: {e}"),
            Self::Proxy(e)         => write!(f, "{e}"),
            Self::Session(e)       => write!(f, "session store: {e}"),
            Self::InvalidCode      => write!(f, "invalid or expired code"),
            Self::CodeMissing      => write!(f, "no login code supplied"),
            Self::PasswordRequired => write!(f, "2FA password required"),
            Self::Rejected(e)      => write!(f, "authorization rejected: {e}"),
        }
    }
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Connection(e) | Self::Rejected(e) => Some(e),
            Self::Proxy(e)   => Some(e),
            Self::Session(e) => Some(e),
            _                => None,
        }
    }
}

impl From<ProxyError> for AuthError {
    fn from(e: ProxyError) -> Self { Self::Proxy(e) }
}

// ─── SendError ────────────────────────────────────────────────────────────────

/// Errors returned by peer-addressed operations.
#[derive(Debug)]
pub enum SendError {
    /// The operation targeted [`crate::Peer::Empty`]. No request was made.
    NoPeer,
    /// The transport call failed.
    Invocation(InvocationError),
}

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPeer        => write!(f, "no peer: resolve a user before sending"),
            Self::Invocation(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invocation(e) => Some(e),
            Self::NoPeer        => None,
        }
    }
}

impl From<InvocationError> for SendError {
    fn from(e: InvocationError) -> Self { Self::Invocation(e) }
}

// ─── LoginToken ───────────────────────────────────────────────────────────────

/// Opaque token returned by [`crate::Client::begin_auth`].
///
/// Pass to [`crate::Client::complete_auth`] with the received code.
#[derive(Clone)]
pub struct LoginToken {
    pub(crate) phone:           String,
    pub(crate) phone_code_hash: String,
}

impl LoginToken {
    /// The challenge handle issued by the server.
    pub fn challenge_handle(&self) -> &str {
        &self.phone_code_hash
    }
}

impl fmt::Debug for LoginToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LoginToken {{ phone: {:?} }}", self.phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rpc_error_splits_numeric_suffix() {
        let e = RpcError::from_telegram(420, "FLOOD_WAIT_30");
        assert_eq!(e.name, "FLOOD_WAIT");
        assert_eq!(e.value, Some(30));
    }

    #[test]
    fn rpc_error_without_suffix() {
        let e = RpcError::from_telegram(400, "PHONE_CODE_INVALID");
        assert_eq!(e.name, "PHONE_CODE_INVALID");
        assert_eq!(e.value, None);
    }

    #[test]
    fn rpc_error_wildcards() {
        let e = RpcError::from_telegram(400, "PHONE_CODE_EXPIRED");
        assert!(e.is("PHONE_CODE_*"));
        assert!(e.is("*_EXPIRED"));
        assert!(!e.is("PHONE_CODE_INVALID"));
    }

    #[test]
    fn invocation_error_is_only_matches_rpc() {
        let rpc: InvocationError = RpcError::from_telegram(401, "SESSION_PASSWORD_NEEDED").into();
        assert!(rpc.is("SESSION_PASSWORD_NEEDED"));
        assert!(!InvocationError::Dropped.is("SESSION_PASSWORD_NEEDED"));
    }

    #[test]
    fn login_token_debug_hides_hash() {
        let t = LoginToken { phone: "+100".into(), phone_code_hash: "secret".into() };
        assert!(!format!("{t:?}").contains("secret"));
    }
}
