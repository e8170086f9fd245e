//! Boxed types: one enum per TL type, one variant per constructor.

use crate::types;

/// `From<bare> for Boxed` and `TryFrom<Boxed> for bare` for every
/// variant that wraps a bare type.
macro_rules! impl_variants {
    ($boxed:ident { $($variant:ident => $bare:ty),* $(,)? }) => {
        $(
            impl From<$bare> for $boxed {
                fn from(x: $bare) -> Self { Self::$variant(x) }
            }

            impl TryFrom<$boxed> for $bare {
                type Error = $boxed;

                fn try_from(boxed: $boxed) -> Result<Self, Self::Error> {
                    match boxed {
                        $boxed::$variant(x) => Ok(x),
                        other               => Err(other),
                    }
                }
            }
        )*
    };
}

/// Boxed types with a single constructor convert both ways infallibly.
macro_rules! impl_single {
    ($boxed:ident :: $variant:ident => $bare:ty) => {
        impl From<$bare> for $boxed {
            fn from(x: $bare) -> Self { Self::$variant(x) }
        }

        impl From<$boxed> for $bare {
            fn from(boxed: $boxed) -> Self {
                match boxed { $boxed::$variant(x) => x }
            }
        }
    };
}

// ─── Peers ────────────────────────────────────────────────────────────────────

/// `InputPeer`: how a peer is addressed in outgoing requests.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputPeer {
    /// `inputPeerEmpty`: addresses nobody.
    #[default]
    Empty,
    /// `inputPeerSelf`
    PeerSelf,
    /// `inputPeerUser`
    User(types::InputPeerUser),
}

impl_variants!(InputPeer { User => types::InputPeerUser });

/// `Peer`: how a peer is referenced in incoming objects.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Peer {
    User(types::PeerUser),
    Chat(types::PeerChat),
    Channel(types::PeerChannel),
}

impl_variants!(Peer {
    User    => types::PeerUser,
    Chat    => types::PeerChat,
    Channel => types::PeerChannel,
});

// ─── Users ────────────────────────────────────────────────────────────────────

/// `User`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub enum User {
    Empty(types::UserEmpty),
    User(types::User),
}

impl_variants!(User {
    Empty => types::UserEmpty,
    User  => types::User,
});

impl User {
    pub fn id(&self) -> i64 {
        match self {
            Self::Empty(u) => u.id,
            Self::User(u)  => u.id,
        }
    }
}

// ─── Messages ─────────────────────────────────────────────────────────────────

/// `Message`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Message {
    Empty(types::MessageEmpty),
    Message(types::Message),
    Service(types::MessageService),
}

impl_variants!(Message {
    Empty   => types::MessageEmpty,
    Message => types::Message,
    Service => types::MessageService,
});

impl Message {
    pub fn id(&self) -> i32 {
        match self {
            Self::Empty(m)   => m.id,
            Self::Message(m) => m.id,
            Self::Service(m) => m.id,
        }
    }
}

// ─── Reply markup ─────────────────────────────────────────────────────────────

/// `ReplyMarkup`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReplyMarkup {
    ReplyKeyboardHide(types::ReplyKeyboardHide),
    ReplyKeyboardForceReply(types::ReplyKeyboardForceReply),
    ReplyKeyboardMarkup(types::ReplyKeyboardMarkup),
    ReplyInlineMarkup(types::ReplyInlineMarkup),
}

impl_variants!(ReplyMarkup {
    ReplyKeyboardHide       => types::ReplyKeyboardHide,
    ReplyKeyboardForceReply => types::ReplyKeyboardForceReply,
    ReplyKeyboardMarkup     => types::ReplyKeyboardMarkup,
    ReplyInlineMarkup       => types::ReplyInlineMarkup,
});

/// `KeyboardButton`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyboardButton {
    Button(types::KeyboardButton),
    Url(types::KeyboardButtonUrl),
    Callback(types::KeyboardButtonCallback),
    RequestPhone(types::KeyboardButtonRequestPhone),
    SwitchInline(types::KeyboardButtonSwitchInline),
    Game(types::KeyboardButtonGame),
    Buy(types::KeyboardButtonBuy),
}

impl_variants!(KeyboardButton {
    Button       => types::KeyboardButton,
    Url          => types::KeyboardButtonUrl,
    Callback     => types::KeyboardButtonCallback,
    RequestPhone => types::KeyboardButtonRequestPhone,
    SwitchInline => types::KeyboardButtonSwitchInline,
    Game         => types::KeyboardButtonGame,
    Buy          => types::KeyboardButtonBuy,
});

impl KeyboardButton {
    /// The label shown on the button.
    pub fn text(&self) -> &str {
        match self {
            Self::Button(b)       => &b.text,
            Self::Url(b)          => &b.text,
            Self::Callback(b)     => &b.text,
            Self::RequestPhone(b) => &b.text,
            Self::SwitchInline(b) => &b.text,
            Self::Game(b)         => &b.text,
            Self::Buy(b)          => &b.text,
        }
    }
}

// ─── messages.* ───────────────────────────────────────────────────────────────

pub mod messages {
    use crate::types;

    /// `messages.Messages`: answer to `messages.getHistory`.
    #[derive(Clone, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
    pub enum Messages {
        Messages(types::messages::Messages),
        Slice(types::messages::MessagesSlice),
    }

    impl_variants!(Messages {
        Messages => types::messages::Messages,
        Slice    => types::messages::MessagesSlice,
    });

    impl Messages {
        /// `false` when only a page of the history was returned.
        pub fn is_complete(&self) -> bool {
            matches!(self, Self::Messages(_))
        }

        /// Drop the framing and keep the payload.
        pub fn into_full(self) -> types::messages::Messages {
            match self {
                Self::Messages(m) => m,
                Self::Slice(s)    => types::messages::Messages {
                    messages: s.messages,
                    users:    s.users,
                },
            }
        }
    }

    /// `messages.Dialogs`: answer to `messages.getDialogs`.
    #[derive(Clone, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
    pub enum Dialogs {
        Dialogs(types::messages::Dialogs),
        Slice(types::messages::DialogsSlice),
    }

    impl_variants!(Dialogs {
        Dialogs => types::messages::Dialogs,
        Slice   => types::messages::DialogsSlice,
    });

    impl Dialogs {
        /// `false` when only a page of the dialog list was returned.
        pub fn is_complete(&self) -> bool {
            matches!(self, Self::Dialogs(_))
        }

        /// Drop the framing and keep the payload.
        pub fn into_full(self) -> types::messages::Dialogs {
            match self {
                Self::Dialogs(d) => d,
                Self::Slice(s)   => types::messages::Dialogs {
                    dialogs:  s.dialogs,
                    messages: s.messages,
                    users:    s.users,
                },
            }
        }
    }

    /// `messages.BotCallbackAnswer`
    #[derive(Clone, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
    pub enum BotCallbackAnswer {
        BotCallbackAnswer(types::messages::BotCallbackAnswer),
    }

    impl_single!(BotCallbackAnswer::BotCallbackAnswer => types::messages::BotCallbackAnswer);
}

// ─── contacts.* ───────────────────────────────────────────────────────────────

pub mod contacts {
    use crate::types;

    /// `contacts.Found`
    #[derive(Clone, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
    pub enum Found {
        Found(types::contacts::Found),
    }

    impl_single!(Found::Found => types::contacts::Found);
}

// ─── auth.* ───────────────────────────────────────────────────────────────────

pub mod auth {
    use crate::types;

    /// `auth.SentCode`
    #[derive(Clone, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
    pub enum SentCode {
        SentCode(types::auth::SentCode),
    }

    impl_single!(SentCode::SentCode => types::auth::SentCode);
}
