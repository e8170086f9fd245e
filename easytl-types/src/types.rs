//! Bare constructors.
//!
//! Field names follow the TL schema so values can be filled in directly from
//! a decoded response.

use crate::enums;

// ─── Peers ────────────────────────────────────────────────────────────────────

/// `inputPeerUser`: a user addressed by id and access hash.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputPeerUser {
    pub user_id:     i64,
    pub access_hash: i64,
}

/// `peerUser`
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeerUser {
    pub user_id: i64,
}

/// `peerChat`
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeerChat {
    pub chat_id: i64,
}

/// `peerChannel`
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeerChannel {
    pub channel_id: i64,
}

// ─── Users ────────────────────────────────────────────────────────────────────

/// `userEmpty`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserEmpty {
    pub id: i64,
}

/// `user`: the subset of fields the facade reads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    pub is_self:     bool,
    pub contact:     bool,
    pub bot:         bool,
    pub id:          i64,
    pub access_hash: Option<i64>,
    pub first_name:  Option<String>,
    pub last_name:   Option<String>,
    pub username:    Option<String>,
    pub phone:       Option<String>,
}

// ─── Dialogs ──────────────────────────────────────────────────────────────────

/// `dialog`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dialog {
    pub pinned:       bool,
    pub peer:         enums::Peer,
    pub top_message:  i32,
    pub unread_count: i32,
}

// ─── Messages ─────────────────────────────────────────────────────────────────

/// `messageEmpty`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageEmpty {
    pub id:      i32,
    pub peer_id: Option<enums::Peer>,
}

/// `message`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    pub out:          bool,
    pub id:           i32,
    pub from_id:      Option<enums::Peer>,
    pub peer_id:      Option<enums::Peer>,
    /// Unix timestamp.
    pub date:         i32,
    pub message:      String,
    pub reply_markup: Option<enums::ReplyMarkup>,
    pub edit_date:    Option<i32>,
}

/// `messageService`: joins, pins, calls… never carries text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageService {
    pub out:     bool,
    pub id:      i32,
    pub from_id: Option<enums::Peer>,
    pub peer_id: Option<enums::Peer>,
    pub date:    i32,
}

// ─── Reply markup ─────────────────────────────────────────────────────────────

/// `keyboardButtonRow`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyboardButtonRow {
    pub buttons: Vec<enums::KeyboardButton>,
}

/// `replyKeyboardHide`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplyKeyboardHide {
    pub selective: bool,
}

/// `replyKeyboardForceReply`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplyKeyboardForceReply {
    pub single_use:  bool,
    pub selective:   bool,
    pub placeholder: Option<String>,
}

/// `replyKeyboardMarkup`: a custom reply keyboard shown instead of the
/// system one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplyKeyboardMarkup {
    pub resize:      bool,
    pub single_use:  bool,
    pub selective:   bool,
    pub rows:        Vec<KeyboardButtonRow>,
    pub placeholder: Option<String>,
}

/// `replyInlineMarkup`: buttons attached to the message itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplyInlineMarkup {
    pub rows: Vec<KeyboardButtonRow>,
}

/// `keyboardButton`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyboardButton {
    pub text: String,
}

/// `keyboardButtonUrl`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyboardButtonUrl {
    pub text: String,
    pub url:  String,
}

/// `keyboardButtonCallback`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyboardButtonCallback {
    pub requires_password: bool,
    pub text:              String,
    pub data:              Vec<u8>,
}

/// `keyboardButtonRequestPhone`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyboardButtonRequestPhone {
    pub text: String,
}

/// `keyboardButtonSwitchInline`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyboardButtonSwitchInline {
    pub same_peer: bool,
    pub text:      String,
    pub query:     String,
}

/// `keyboardButtonGame`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyboardButtonGame {
    pub text: String,
}

/// `keyboardButtonBuy`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyboardButtonBuy {
    pub text: String,
}

// ─── messages.* ───────────────────────────────────────────────────────────────

pub mod messages {
    use crate::enums;

    /// `messages.messages`: the complete history fits in one answer.
    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    #[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Messages {
        pub messages: Vec<enums::Message>,
        pub users:    Vec<enums::User>,
    }

    /// `messages.messagesSlice`: one page of a longer history.
    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    #[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct MessagesSlice {
        pub inexact:          bool,
        /// Total number of messages in the history, not in this page.
        pub count:            i32,
        pub next_rate:        Option<i32>,
        pub offset_id_offset: Option<i32>,
        pub messages:         Vec<enums::Message>,
        pub users:            Vec<enums::User>,
    }

    /// `messages.dialogs`
    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    #[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Dialogs {
        pub dialogs:  Vec<crate::types::Dialog>,
        pub messages: Vec<enums::Message>,
        pub users:    Vec<enums::User>,
    }

    /// `messages.dialogsSlice`
    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    #[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct DialogsSlice {
        pub count:    i32,
        pub dialogs:  Vec<crate::types::Dialog>,
        pub messages: Vec<enums::Message>,
        pub users:    Vec<enums::User>,
    }

    /// `messages.botCallbackAnswer`
    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    #[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct BotCallbackAnswer {
        pub alert:      bool,
        pub has_url:    bool,
        pub native_ui:  bool,
        pub message:    Option<String>,
        pub url:        Option<String>,
        pub cache_time: i32,
    }
}

// ─── contacts.* ───────────────────────────────────────────────────────────────

pub mod contacts {
    use crate::enums;

    /// `contacts.found`: answer to `contacts.search`.
    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    #[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Found {
        /// Matches among the account's own contacts.
        pub my_results: Vec<enums::Peer>,
        /// Global matches.
        pub results:    Vec<enums::Peer>,
        pub users:      Vec<enums::User>,
    }
}

// ─── auth.* ───────────────────────────────────────────────────────────────────

pub mod auth {
    /// `auth.sentCode`
    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    #[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct SentCode {
        /// Challenge handle to submit together with the received code.
        pub phone_code_hash: String,
        /// Seconds before another code may be requested.
        pub timeout:         Option<i32>,
    }
}
