//! The transport seam.
//!
//! Everything that touches the wire (MTProto framing, encryption, DC
//! migration, flood waits) lives behind [`TransportClient`]. The facade
//! only sequences calls and shapes their results.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use easytl_types::enums;

use crate::errors::InvocationError;
use crate::proxy::Tunnel;
use crate::session_backend::SessionStore;

/// Everything the transport needs to open an authorized connection.
#[derive(Clone)]
pub struct ConnectParams {
    pub api_id:       i32,
    pub api_hash:     String,
    pub phone_number: String,
    /// Where to load and save the session. Owned by the client; the
    /// transport may read and write it but must not replace it.
    pub session:      Arc<dyn SessionStore>,
    /// Proxy connector, or `None` for a direct connection.
    pub tunnel:       Option<Tunnel>,
}

impl fmt::Debug for ConnectParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectParams")
            .field("api_id", &self.api_id)
            .field("phone_number", &self.phone_number)
            .field("session", &self.session.name())
            .field("tunnel", &self.tunnel)
            .finish_non_exhaustive()
    }
}

/// A connection to Telegram that can issue the handful of requests the
/// facade needs.
///
/// Implementations report server-side failures as
/// [`InvocationError::Rpc`] with the raw error name parsed by
/// [`crate::RpcError::from_telegram`].
#[async_trait]
pub trait TransportClient: Send + Sync {
    /// Open (or reopen) the connection, restoring the stored session if any.
    async fn connect(&self, params: ConnectParams) -> Result<(), InvocationError>;

    /// Whether the session belongs to a logged-in account.
    async fn is_authorized(&self) -> Result<bool, InvocationError>;

    /// Whether the connection is currently open.
    fn is_connected(&self) -> bool;

    /// `auth.sendCode`
    async fn send_code(&self, phone_number: &str) -> Result<enums::auth::SentCode, InvocationError>;

    /// `auth.signIn`
    async fn sign_in(
        &self,
        phone_number:    &str,
        phone_code_hash: &str,
        code:            &str,
    ) -> Result<enums::User, InvocationError>;

    /// `messages.sendMessage`
    async fn send_message(&self, peer: enums::InputPeer, text: &str) -> Result<(), InvocationError>;

    /// `messages.getHistory`, newest message first.
    async fn get_history(
        &self,
        peer:  enums::InputPeer,
        limit: i32,
    ) -> Result<enums::messages::Messages, InvocationError>;

    /// `messages.getDialogs`
    async fn get_dialogs(&self) -> Result<enums::messages::Dialogs, InvocationError>;

    /// `contacts.search`
    async fn search_users(
        &self,
        query: &str,
        limit: i32,
    ) -> Result<enums::contacts::Found, InvocationError>;

    /// `messages.getBotCallbackAnswer`
    async fn get_bot_callback_answer(
        &self,
        peer:   enums::InputPeer,
        msg_id: i32,
        data:   Vec<u8>,
    ) -> Result<enums::messages::BotCallbackAnswer, InvocationError>;
}
