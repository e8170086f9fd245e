//! Messages as returned by history queries, and inline-button extraction.

use chrono::{DateTime, Utc};

use crate::tl;

/// One entry of a chat history.
///
/// Service entries (joins, pins, calls) and deleted placeholders keep their
/// place in the history but carry no text and no markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id:           i32,
    /// Message text; empty for media without a caption and for service entries.
    pub text:         String,
    pub date:         DateTime<Utc>,
    /// `true` if the logged-in account sent it.
    pub outgoing:     bool,
    /// `true` for service and empty entries.
    pub service:      bool,
    pub reply_markup: Option<tl::enums::ReplyMarkup>,
}

fn unix_date(secs: i32) -> DateTime<Utc> {
    DateTime::from_timestamp(i64::from(secs), 0).unwrap_or_default()
}

impl From<tl::types::Message> for Message {
    fn from(m: tl::types::Message) -> Self {
        Self {
            id:           m.id,
            text:         m.message,
            date:         unix_date(m.date),
            outgoing:     m.out,
            service:      false,
            reply_markup: m.reply_markup,
        }
    }
}

impl From<tl::types::MessageService> for Message {
    fn from(m: tl::types::MessageService) -> Self {
        Self {
            id:           m.id,
            text:         String::new(),
            date:         unix_date(m.date),
            outgoing:     m.out,
            service:      true,
            reply_markup: None,
        }
    }
}

impl From<tl::types::MessageEmpty> for Message {
    fn from(m: tl::types::MessageEmpty) -> Self {
        Self {
            id:           m.id,
            text:         String::new(),
            date:         DateTime::<Utc>::default(),
            outgoing:     false,
            service:      true,
            reply_markup: None,
        }
    }
}

impl From<tl::enums::Message> for Message {
    fn from(m: tl::enums::Message) -> Self {
        match m {
            tl::enums::Message::Message(m) => m.into(),
            tl::enums::Message::Service(m) => m.into(),
            tl::enums::Message::Empty(m)   => m.into(),
        }
    }
}

impl Message {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Inline buttons of type `T`; see [`extract_buttons`].
    pub fn buttons<T>(&self) -> Vec<T>
    where
        T: TryFrom<tl::enums::KeyboardButton>,
    {
        extract_buttons(self)
    }

    /// Shorthand for `buttons::<KeyboardButtonCallback>()`.
    pub fn callback_buttons(&self) -> Vec<tl::types::KeyboardButtonCallback> {
        self.buttons()
    }

    /// The first callback button whose label is `text`.
    pub fn find_callback_button(&self, text: &str) -> Option<tl::types::KeyboardButtonCallback> {
        self.callback_buttons().into_iter().find(|b| b.text == text)
    }
}

/// Inline-keyboard buttons of `message` that convert to `T`, row by row and
/// left to right within a row.
///
/// `T` is any bare button type (`tl::types::KeyboardButtonCallback`,
/// `tl::types::KeyboardButtonUrl`, …) or `tl::enums::KeyboardButton` for
/// every button. Messages without markup, or with a reply keyboard instead
/// of an inline one, have no buttons.
pub fn extract_buttons<T>(message: &Message) -> Vec<T>
where
    T: TryFrom<tl::enums::KeyboardButton>,
{
    let Some(tl::enums::ReplyMarkup::ReplyInlineMarkup(markup)) = &message.reply_markup else {
        return Vec::new();
    };

    markup
        .rows
        .iter()
        .flat_map(|row| row.buttons.iter())
        .filter_map(|button| T::try_from(button.clone()).ok())
        .collect()
}
