//! Sending text, reading history and pressing inline buttons.
//!
//! Every call takes the target [`Peer`] explicitly. [`Peer::Empty`] is
//! rejected with [`SendError::NoPeer`] before anything reaches the transport.

use crate::errors::SendError;
use crate::message::Message;
use crate::normalize;
use crate::{Client, Peer, tl};

// ─── CallbackAnswer ───────────────────────────────────────────────────────────

/// The bot's reply to an inline button press.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallbackAnswer {
    /// Show `message` as a modal alert rather than a toast.
    pub alert:      bool,
    pub has_url:    bool,
    pub message:    Option<String>,
    pub url:        Option<String>,
    /// Seconds the client may cache this answer.
    pub cache_time: i32,
}

impl From<tl::enums::messages::BotCallbackAnswer> for CallbackAnswer {
    fn from(answer: tl::enums::messages::BotCallbackAnswer) -> Self {
        let a: tl::types::messages::BotCallbackAnswer = answer.into();
        Self {
            alert:      a.alert,
            has_url:    a.has_url,
            message:    a.message,
            url:        a.url,
            cache_time: a.cache_time,
        }
    }
}

// ─── Client methods ───────────────────────────────────────────────────────────

impl Client {
    /// Send a plain text message to `peer`.
    pub async fn send_text(&self, peer: &Peer, text: &str) -> Result<(), SendError> {
        let input = peer.input().ok_or(SendError::NoPeer)?;
        self.live()?.send_message(input, text).await?;
        tracing::debug!("[easytl] Sent {} chars to {peer:?}", text.chars().count());
        Ok(())
    }

    /// Up to `limit` most recent messages exchanged with `peer`, newest first.
    pub async fn get_history(&self, peer: &Peer, limit: usize) -> Result<Vec<Message>, SendError> {
        let input = peer.input().ok_or(SendError::NoPeer)?;
        let wire_limit = i32::try_from(limit).unwrap_or(i32::MAX);
        let raw = self.live()?.get_history(input, wire_limit).await?;
        Ok(normalize::normalize_history(raw, limit))
    }

    /// The newest message with `peer`, if there is one.
    pub async fn get_last_message(&self, peer: &Peer) -> Result<Option<Message>, SendError> {
        Ok(self.get_history(peer, 1).await?.into_iter().next())
    }

    /// Text of the newest message with `peer`; `""` when the history is empty
    /// or the newest entry is a service message.
    pub async fn get_last_message_text(&self, peer: &Peer) -> Result<String, SendError> {
        Ok(self
            .get_last_message(peer)
            .await?
            .map(|m| m.text)
            .unwrap_or_default())
    }

    /// Ask the bot behind `peer` to handle the callback button carrying
    /// `data` on message `message_id`.
    pub async fn invoke_button_callback(
        &self,
        peer:       &Peer,
        message_id: i32,
        data:       &[u8],
    ) -> Result<CallbackAnswer, SendError> {
        let input = peer.input().ok_or(SendError::NoPeer)?;
        let answer = self
            .live()?
            .get_bot_callback_answer(input, message_id, data.to_vec())
            .await?;
        tracing::debug!("[easytl] Callback answered for msg {message_id}");
        Ok(answer.into())
    }

    /// Press `button` on `message`.
    pub async fn press_button(
        &self,
        peer:    &Peer,
        message: &Message,
        button:  &tl::types::KeyboardButtonCallback,
    ) -> Result<CallbackAnswer, SendError> {
        self.invoke_button_callback(peer, message.id, &button.data).await
    }

    /// Send `text` to the contact called `username`, looked up in the
    /// current snapshot without refreshing it.
    ///
    /// Returns `false` (and sends nothing) if no such contact exists.
    pub async fn send_to_username(&self, username: &str, text: &str) -> Result<bool, SendError> {
        let Some(contact) = self.cached_contact(username, false).await? else {
            tracing::debug!("[easytl] {username:?} is not a known contact");
            return Ok(false);
        };
        self.send_text(&contact.peer(), text).await?;
        Ok(true)
    }
}
