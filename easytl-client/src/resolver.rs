//! Username → [`Peer`] resolution.
//!
//! Two lookups are available: the contact snapshot derived from the
//! account's dialog list, and Telegram's global user search. A miss is
//! `Ok(None)`, never an error.

use crate::errors::InvocationError;
use crate::normalize;
use crate::{Client, Peer, tl};

/// How many users a global search asks for. Only the first is used.
const SEARCH_LIMIT: i32 = 10;

// ─── Scope ────────────────────────────────────────────────────────────────────

/// Where [`Client::resolve`] looks for a username.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scope {
    /// Users the account already has a dialog with.
    #[default]
    Contacts,
    /// Telegram's user directory. The first full user entry of the search
    /// answer wins; empty placeholders in it are skipped.
    Global,
}

// ─── Contact ──────────────────────────────────────────────────────────────────

/// A user with a public username, taken from the dialog list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contact {
    pub id:          i64,
    pub username:    String,
    pub access_hash: i64,
    pub first_name:  Option<String>,
    pub last_name:   Option<String>,
}

impl Contact {
    /// `None` unless the user has an addressable username.
    pub fn from_user(user: tl::types::User) -> Option<Self> {
        let username = user.username.filter(|u| normalize::is_addressable_username(u))?;
        Some(Self {
            id:          user.id,
            username,
            access_hash: user.access_hash.unwrap_or(0),
            first_name:  user.first_name,
            last_name:   user.last_name,
        })
    }

    pub fn peer(&self) -> Peer {
        Peer::from(self)
    }
}

// ─── Client methods ───────────────────────────────────────────────────────────

impl Client {
    /// Resolve `identifier` (a username without `@`) in `scope`.
    ///
    /// [`Scope::Contacts`] refreshes the snapshot first and matches usernames
    /// exactly (case-sensitive); the first match wins. [`Scope::Global`] takes
    /// the first user the directory search returns, skipping `UserEmpty`
    /// placeholders.
    pub async fn resolve(&self, identifier: &str, scope: Scope) -> Result<Option<Peer>, InvocationError> {
        let peer = match scope {
            Scope::Contacts => self
                .refresh_contacts()
                .await?
                .iter()
                .find(|c| c.username == identifier)
                .map(Contact::peer),
            Scope::Global => self.search_user(identifier).await?,
        };

        if peer.is_none() {
            tracing::debug!("[easytl] {identifier:?} not found in {scope:?}");
        }
        Ok(peer)
    }

    /// Re-fetch the dialog list and replace the contact snapshot with it.
    pub async fn refresh_contacts(&self) -> Result<Vec<Contact>, InvocationError> {
        let raw = self.live()?.get_dialogs().await?;
        let complete = raw.is_complete();
        let contacts = normalize::normalize_dialogs(raw);
        tracing::debug!(
            "[easytl] Contact snapshot: {} users{}",
            contacts.len(),
            if complete { "" } else { " (partial dialog list)" },
        );

        *self.inner.contacts.lock().await = contacts.clone();
        Ok(contacts)
    }

    /// The current snapshot. Empty until the first refresh.
    pub async fn contacts(&self) -> Vec<Contact> {
        self.inner.contacts.lock().await.clone()
    }

    /// Look `username` up in the snapshot, refreshing it first if `refresh`.
    pub async fn cached_contact(&self, username: &str, refresh: bool) -> Result<Option<Contact>, InvocationError> {
        if refresh {
            self.refresh_contacts().await?;
        }
        Ok(self
            .inner
            .contacts
            .lock()
            .await
            .iter()
            .find(|c| c.username == username)
            .cloned())
    }

    async fn search_user(&self, query: &str) -> Result<Option<Peer>, InvocationError> {
        let found: tl::types::contacts::Found =
            self.live()?.search_users(query, SEARCH_LIMIT).await?.into();

        Ok(found.users.iter().find_map(|u| match u {
            tl::enums::User::User(u) => Some(Peer::from(u)),
            tl::enums::User::Empty(_) => None,
        }))
    }
}
