//! A client bound to one active peer.

use crate::errors::{InvocationError, SendError};
use crate::message::Message;
use crate::messaging::CallbackAnswer;
use crate::resolver::Scope;
use crate::{Client, Peer, tl};

/// Talks to one peer at a time.
///
/// Starts with [`Peer::Empty`]; [`Conversation::open`] selects who to talk
/// to. While no peer is selected every operation fails with
/// [`SendError::NoPeer`].
///
/// ```rust,no_run
/// # use easytl_client::{Client, Conversation, Scope};
/// # async fn f(client: Client) -> Result<(), Box<dyn std::error::Error>> {
/// let mut chat = Conversation::new(client);
/// if chat.open("some_bot", Scope::Global).await? {
///     chat.send("/start").await?;
///     println!("{}", chat.last_message_text().await?);
/// }
/// # Ok(()) }
/// ```
#[derive(Clone)]
pub struct Conversation {
    client: Client,
    peer:   Peer,
}

impl Conversation {
    pub fn new(client: Client) -> Self {
        Self { client, peer: Peer::Empty }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// The active peer.
    pub fn peer(&self) -> Peer {
        self.peer
    }

    /// Resolve `username` in `scope` and make it the active peer.
    ///
    /// Returns `false` and clears the active peer when the client is not
    /// connected and authorized, or when nobody is found.
    pub async fn open(&mut self, username: &str, scope: Scope) -> Result<bool, InvocationError> {
        self.peer = Peer::Empty;
        if !self.client.is_usable().await? {
            tracing::warn!("[easytl] Cannot open {username:?}: client is not connected");
            return Ok(false);
        }

        match self.client.resolve(username, scope).await? {
            Some(peer) => {
                self.peer = peer;
                tracing::info!("[easytl] Talking to {username:?}");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Forget the active peer.
    pub fn close(&mut self) {
        self.peer = Peer::Empty;
    }

    pub async fn send(&self, text: &str) -> Result<(), SendError> {
        self.client.send_text(&self.peer, text).await
    }

    pub async fn history(&self, limit: usize) -> Result<Vec<Message>, SendError> {
        self.client.get_history(&self.peer, limit).await
    }

    pub async fn last_message(&self) -> Result<Option<Message>, SendError> {
        self.client.get_last_message(&self.peer).await
    }

    pub async fn last_message_text(&self) -> Result<String, SendError> {
        self.client.get_last_message_text(&self.peer).await
    }

    pub async fn press_button(
        &self,
        message: &Message,
        button:  &tl::types::KeyboardButtonCallback,
    ) -> Result<CallbackAnswer, SendError> {
        self.client.press_button(&self.peer, message, button).await
    }
}
