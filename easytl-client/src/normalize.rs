//! Flattening of paginated answers.
//!
//! `messages.getDialogs` and `messages.getHistory` answer with either the
//! full set or a slice of it. The framing says nothing about the items, so
//! both are unwrapped the same way and then filtered.

use crate::message::Message;
use crate::resolver::Contact;
use crate::tl;

/// Username Telegram-side tooling emits for users without a public one.
pub const NULL_USERNAME: &str = "null";

/// Whether `username` can be used to address someone.
pub fn is_addressable_username(username: &str) -> bool {
    !username.trim().is_empty() && username != NULL_USERNAME
}

/// Users of a dialog list that have an addressable username, in the order
/// the server returned them.
pub fn normalize_dialogs(raw: tl::enums::messages::Dialogs) -> Vec<Contact> {
    raw.into_full()
        .users
        .into_iter()
        .filter_map(|u| match u {
            tl::enums::User::User(u) => Contact::from_user(u),
            tl::enums::User::Empty(_) => None,
        })
        .collect()
}

/// At most `limit` history entries, newest first as returned by the server.
///
/// Service and empty entries are kept in place with empty text, so the cap
/// counts exactly what the server sent and the first entry is always the
/// most recent one.
pub fn normalize_history(raw: tl::enums::messages::Messages, limit: usize) -> Vec<Message> {
    raw.into_full()
        .messages
        .into_iter()
        .take(limit)
        .map(Message::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, username: Option<&str>) -> tl::enums::User {
        tl::types::User {
            id,
            access_hash: Some(id + 1000),
            username: username.map(str::to_string),
            ..Default::default()
        }
        .into()
    }

    fn text(id: i32, body: &str) -> tl::enums::Message {
        tl::types::Message { id, message: body.into(), ..Default::default() }.into()
    }

    fn both_dialog_framings(users: Vec<tl::enums::User>) -> [tl::enums::messages::Dialogs; 2] {
        [
            tl::types::messages::Dialogs { users: users.clone(), ..Default::default() }.into(),
            tl::types::messages::DialogsSlice { count: 999, users, ..Default::default() }.into(),
        ]
    }

    fn both_history_framings(messages: Vec<tl::enums::Message>) -> [tl::enums::messages::Messages; 2] {
        [
            tl::types::messages::Messages { messages: messages.clone(), ..Default::default() }.into(),
            tl::types::messages::MessagesSlice { count: 999, messages, ..Default::default() }.into(),
        ]
    }

    #[test]
    fn placeholder_usernames_are_dropped() {
        let users = vec![
            user(1, Some("alice")),
            user(2, Some("")),
            user(3, Some(" ")),
            user(4, Some("null")),
            user(5, None),
            tl::types::UserEmpty { id: 6 }.into(),
            user(7, Some("bob")),
        ];
        for raw in both_dialog_framings(users.clone()) {
            let names: Vec<String> = normalize_dialogs(raw).into_iter().map(|c| c.username).collect();
            assert_eq!(names, ["alice", "bob"]);
        }
    }

    #[test]
    fn contact_carries_id_and_access_hash() {
        let [full, _] = both_dialog_framings(vec![user(42, Some("zed"))]);
        let contacts = normalize_dialogs(full);
        assert_eq!(contacts[0].id, 42);
        assert_eq!(contacts[0].access_hash, 1042);
    }

    #[test]
    fn empty_history_is_empty_for_both_framings() {
        for raw in both_history_framings(vec![]) {
            assert!(normalize_history(raw, 10).is_empty());
        }
    }

    #[test]
    fn history_keeps_order_and_caps() {
        let msgs = vec![text(30, "newest"), text(20, "middle"), text(10, "oldest")];
        for raw in both_history_framings(msgs.clone()) {
            let ids: Vec<i32> = normalize_history(raw, 2).iter().map(|m| m.id).collect();
            assert_eq!(ids, [30, 20]);
        }
    }

    #[test]
    fn history_keeps_service_entries_in_place() {
        let msgs = vec![
            tl::types::MessageService { id: 9, ..Default::default() }.into(),
            text(8, "hello"),
        ];
        let [raw, _] = both_history_framings(msgs);

        let newest = normalize_history(raw.clone(), 1);
        assert_eq!(newest.len(), 1);
        assert_eq!(newest[0].id, 9);
        assert!(newest[0].service);
        assert_eq!(newest[0].text, "");

        let both = normalize_history(raw, 5);
        assert_eq!(both.iter().map(|m| m.id).collect::<Vec<_>>(), [9, 8]);
        assert_eq!(both[1].text, "hello");
    }

    #[test]
    fn addressable_usernames() {
        assert!(is_addressable_username("durov"));
        assert!(!is_addressable_username(""));
        assert!(!is_addressable_username("\t "));
        assert!(!is_addressable_username("null"));
        assert!(is_addressable_username("nullable"));
    }
}
