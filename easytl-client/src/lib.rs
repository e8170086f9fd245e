//! # easytl-client
//!
//! A small, session-oriented Telegram client facade.
//!
//! ## Features
//! - Connect through an optional SOCKS4 / SOCKS4a / SOCKS5 proxy
//! - Per-phone session file (`<phone>.data`), reset on demand
//! - Two-phase login (`begin_auth` / `complete_auth`) or a registered
//!   code handler driven by `connect`
//! - Username → peer resolution from the dialog-derived contact snapshot or
//!   from a global search
//! - Send text, read the latest history, press inline buttons
//! - [`Conversation`]: one client bound to one active peer
//!
//! The wire protocol is provided by a [`TransportClient`] implementation.
//!
//! ## Flow
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use easytl_client::{Authorization, Client, Scope, TransportClient};
//!
//! # async fn f(transport: Arc<dyn TransportClient>, read_code: impl Fn() -> String)
//! # -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(12345, "0123456789abcdef", "+15550001111", transport);
//!
//! if client.connect().await? == Authorization::CodeRequired {
//!     if let Some(token) = client.begin_auth().await? {
//!         client.complete_auth(&token, &read_code()).await?;
//!     }
//! }
//!
//! if let Some(peer) = client.resolve("durov", Scope::Global).await? {
//!     client.send_text(&peer, "Hello!").await?;
//!     println!("last: {}", client.get_last_message_text(&peer).await?);
//! }
//! # Ok(()) }
//! ```

#![deny(unsafe_code)]

mod auth;
mod conversation;
mod errors;
mod messaging;
mod resolver;
pub mod message;
pub mod normalize;
pub mod proxy;
pub mod session_backend;
pub mod transport;

pub use auth::{AuthChallenge, AuthCodeHandler, Authorization};
pub use conversation::Conversation;
pub use errors::{AuthError, InvocationError, LoginToken, ProxyError, RpcError, SendError};
pub use message::{Message, extract_buttons};
pub use messaging::CallbackAnswer;
pub use proxy::{ProxyConfig, ProxyKind, Tunnel};
pub use resolver::{Contact, Scope};
pub use session_backend::{FileSessionStore, InMemoryStore, SessionStore};
pub use transport::{ConnectParams, TransportClient};

/// Re-export of the object shapes the transport speaks.
pub use easytl_types as tl;

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Mutex;

// ─── Config ───────────────────────────────────────────────────────────────────

/// Configuration for [`Client::with_config`].
#[derive(Clone)]
pub struct Config {
    pub api_id:            i32,
    pub api_hash:          String,
    pub phone_number:      String,
    /// Proxy to tunnel through (default: none). Can be changed later with
    /// [`Client::set_proxy`] until `connect` runs.
    pub proxy:             ProxyConfig,
    /// Directory holding `<phone_number>.data` (default: current directory).
    pub session_dir:       PathBuf,
    /// Custom session store; overrides `session_dir` when set.
    pub session_store:     Option<Arc<dyn SessionStore>>,
    /// Fail `connect` on an unsupported proxy kind instead of silently
    /// connecting directly (default: false).
    pub strict_proxy:      bool,
    /// Fetch the contact snapshot once authorized (default: true).
    pub prefetch_contacts: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_id:            0,
            api_hash:          String::new(),
            phone_number:      String::new(),
            proxy:             ProxyConfig::default(),
            session_dir:       PathBuf::from("."),
            session_store:     None,
            strict_proxy:      false,
            prefetch_contacts: true,
        }
    }
}

// ─── Peer ─────────────────────────────────────────────────────────────────────

/// An addressable chat participant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Peer {
    /// Nobody. Every send against it fails with [`SendError::NoPeer`].
    #[default]
    Empty,
    User { id: i64, access_hash: i64 },
}

impl Peer {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The `InputPeer` sent on the wire.
    pub fn to_input(&self) -> tl::enums::InputPeer {
        match *self {
            Self::Empty => tl::enums::InputPeer::Empty,
            Self::User { id, access_hash } => {
                tl::types::InputPeerUser { user_id: id, access_hash }.into()
            }
        }
    }

    /// `None` for [`Peer::Empty`], so callers can `?`/`ok_or` it.
    pub(crate) fn input(&self) -> Option<tl::enums::InputPeer> {
        (!self.is_empty()).then(|| self.to_input())
    }
}

impl From<&tl::types::User> for Peer {
    fn from(u: &tl::types::User) -> Self {
        Self::User { id: u.id, access_hash: u.access_hash.unwrap_or(0) }
    }
}

impl From<&Contact> for Peer {
    fn from(c: &Contact) -> Self {
        Self::User { id: c.id, access_hash: c.access_hash }
    }
}

// ─── ClientInner ─────────────────────────────────────────────────────────────

struct ClientInner {
    api_id:            i32,
    api_hash:          String,
    phone_number:      String,
    strict_proxy:      bool,
    prefetch_contacts: bool,
    session:           Arc<dyn SessionStore>,
    transport:         Arc<dyn TransportClient>,
    /// Set once the transport has connected at least once.
    live:              AtomicBool,
    proxy:             Mutex<ProxyConfig>,
    auth_handler:      Mutex<Option<Arc<dyn AuthCodeHandler>>>,
    contacts:          Mutex<Vec<Contact>>,
}

/// The facade. Cheap to clone (internally `Arc`-wrapped).
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

impl Client {
    /// A client for one account with default settings. Nothing happens on
    /// the network until [`Client::connect`].
    pub fn new(
        api_id:       i32,
        api_hash:     impl Into<String>,
        phone_number: impl Into<String>,
        transport:    Arc<dyn TransportClient>,
    ) -> Self {
        Self::with_config(
            Config {
                api_id,
                api_hash: api_hash.into(),
                phone_number: phone_number.into(),
                ..Default::default()
            },
            transport,
        )
    }

    pub fn with_config(config: Config, transport: Arc<dyn TransportClient>) -> Self {
        let session = config.session_store.unwrap_or_else(|| {
            Arc::new(FileSessionStore::for_phone(&config.session_dir, &config.phone_number))
        });

        Self {
            inner: Arc::new(ClientInner {
                api_id:            config.api_id,
                api_hash:          config.api_hash,
                phone_number:      config.phone_number,
                strict_proxy:      config.strict_proxy,
                prefetch_contacts: config.prefetch_contacts,
                session,
                transport,
                live:              AtomicBool::new(false),
                proxy:             Mutex::new(config.proxy),
                auth_handler:      Mutex::new(None),
                contacts:          Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn phone_number(&self) -> &str {
        &self.inner.phone_number
    }

    /// Replace the proxy used by the next [`Client::connect`].
    pub async fn set_proxy(&self, proxy: ProxyConfig) {
        *self.inner.proxy.lock().await = proxy;
    }

    pub async fn proxy(&self) -> ProxyConfig {
        self.inner.proxy.lock().await.clone()
    }

    /// The session store handed to the transport.
    pub fn session_store(&self) -> &Arc<dyn SessionStore> {
        &self.inner.session
    }

    // ── Private helpers ────────────────────────────────────────────────────

    /// The transport, once a connection has been published.
    fn live(&self) -> Result<&Arc<dyn TransportClient>, InvocationError> {
        if self.inner.live.load(Ordering::Acquire) {
            Ok(&self.inner.transport)
        } else {
            Err(InvocationError::NotConnected)
        }
    }

    fn publish(&self) {
        self.inner.live.store(true, Ordering::Release);
    }

    /// Withdraw a published connection after the transport failed to (re)connect.
    fn retract(&self) {
        self.inner.live.store(false, Ordering::Release);
    }
}
