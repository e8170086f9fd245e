//! Connection and login.
//!
//! `connect` opens the session store, picks a proxy tunnel, connects the
//! transport and checks whether the stored session is already authorized.
//! If it is not, login is a two-step exchange:
//!
//! 1. [`Client::begin_auth`] asks Telegram to send a code and returns the
//!    challenge as a [`LoginToken`];
//! 2. [`Client::complete_auth`] submits the code the user received.
//!
//! Callers can drive both steps themselves (`connect` then returns
//! [`Authorization::CodeRequired`]) or register an [`AuthCodeHandler`] and
//! let `connect` run them.

use std::io;

use async_trait::async_trait;

use crate::errors::{AuthError, InvocationError, LoginToken};
use crate::proxy;
use crate::transport::ConnectParams;
use crate::{Client, tl};

// ─── Authorization ────────────────────────────────────────────────────────────

/// Outcome of [`Client::connect`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Authorization {
    /// The session is logged in and connected.
    Authorized,
    /// Connected, but no handler is registered to obtain a login code.
    /// Continue with [`Client::begin_auth`].
    CodeRequired,
}

// ─── AuthCodeHandler ──────────────────────────────────────────────────────────

/// What an [`AuthCodeHandler`] is asked to answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthChallenge {
    pub phone_number:     String,
    /// The opaque `phone_code_hash` the code belongs to.
    pub challenge_handle: String,
}

/// Supplies the login code during [`Client::connect`].
///
/// Awaited without a timeout: a handler that never returns stalls `connect`.
/// Returning `None` aborts the login with [`AuthError::CodeMissing`].
#[async_trait]
pub trait AuthCodeHandler: Send + Sync {
    async fn provide_code(&self, challenge: &AuthChallenge) -> Option<String>;
}

#[async_trait]
impl<F> AuthCodeHandler for F
where
    F: Fn(&AuthChallenge) -> Option<String> + Send + Sync,
{
    async fn provide_code(&self, challenge: &AuthChallenge) -> Option<String> {
        self(challenge)
    }
}

// ─── Client methods ───────────────────────────────────────────────────────────

impl Client {
    /// Register the code handler used by [`Client::connect`], replacing any
    /// previous one.
    pub async fn on_auth_code<H: AuthCodeHandler + 'static>(&self, handler: H) {
        *self.inner.auth_handler.lock().await = Some(std::sync::Arc::new(handler));
    }

    /// Connect and make sure the session is authorized.
    ///
    /// Calling it again on an authorized session reconnects the transport
    /// but never requests another code.
    pub async fn connect(&self) -> Result<Authorization, AuthError> {
        self.inner.session.open().map_err(AuthError::Session)?;

        let proxy_cfg = self.inner.proxy.lock().await.clone();
        let tunnel = if self.inner.strict_proxy {
            proxy::build_tunnel_strict(&proxy_cfg)?
        } else {
            proxy::build_tunnel(&proxy_cfg)?
        };

        match &tunnel {
            Some(t) => tracing::info!("[easytl] Connecting via {:?} proxy {} …", t.kind, t.proxy_addr),
            None    => tracing::info!("[easytl] Connecting …"),
        }

        let params = ConnectParams {
            api_id:       self.inner.api_id,
            api_hash:     self.inner.api_hash.clone(),
            phone_number: self.inner.phone_number.clone(),
            session:      self.inner.session.clone(),
            tunnel,
        };
        if let Err(e) = self.inner.transport.connect(params).await {
            self.retract();
            return Err(AuthError::Connection(e));
        }
        self.publish();

        if self.is_usable().await.map_err(AuthError::Connection)? {
            tracing::info!("[easytl] Session restored ✓");
            self.after_authorized().await;
            return Ok(Authorization::Authorized);
        }

        let handler = self.inner.auth_handler.lock().await.clone();
        let Some(handler) = handler else {
            tracing::info!("[easytl] Login code required");
            return Ok(Authorization::CodeRequired);
        };

        match self.begin_auth().await? {
            Some(token) => {
                let challenge = AuthChallenge {
                    phone_number:     token.phone.clone(),
                    challenge_handle: token.phone_code_hash.clone(),
                };
                let code = handler
                    .provide_code(&challenge)
                    .await
                    .ok_or(AuthError::CodeMissing)?;
                self.complete_auth(&token, &code).await?;
            }
            None => self.after_authorized().await,
        }
        Ok(Authorization::Authorized)
    }

    /// `true` when the transport is connected and the session authorized.
    /// Always `false` before the first [`Client::connect`].
    pub async fn is_usable(&self) -> Result<bool, InvocationError> {
        let Ok(transport) = self.live() else { return Ok(false) };
        Ok(transport.is_authorized().await? && transport.is_connected())
    }

    /// Ask Telegram to send a login code to the phone number.
    ///
    /// Returns `None` when the server answers with an empty challenge handle;
    /// there is nothing to submit in that case.
    pub async fn begin_auth(&self) -> Result<Option<LoginToken>, AuthError> {
        let transport = self.live().map_err(AuthError::Connection)?;
        let sent: tl::types::auth::SentCode = transport
            .send_code(&self.inner.phone_number)
            .await
            .map_err(AuthError::Rejected)?
            .into();

        if sent.phone_code_hash.is_empty() {
            tracing::info!("[easytl] No login challenge issued, skipping sign-in");
            return Ok(None);
        }
        tracing::info!("[easytl] Login code sent");
        Ok(Some(LoginToken {
            phone:           self.inner.phone_number.clone(),
            phone_code_hash: sent.phone_code_hash,
        }))
    }

    /// Submit the code received for `token`.
    pub async fn complete_auth(&self, token: &LoginToken, code: &str) -> Result<(), AuthError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(AuthError::CodeMissing);
        }

        let transport = self.live().map_err(AuthError::Connection)?;
        let user = match transport.sign_in(&token.phone, &token.phone_code_hash, code).await {
            Ok(user) => user,
            Err(e) if e.is("SESSION_PASSWORD_NEEDED") => return Err(AuthError::PasswordRequired),
            Err(e) if e.is("PHONE_CODE_*") => return Err(AuthError::InvalidCode),
            Err(e) => return Err(AuthError::Rejected(e)),
        };
        tracing::info!("[easytl] Signed in ✓  Welcome, {}!", display_name(&user));

        self.after_authorized().await;
        Ok(())
    }

    /// Delete the stored session, if any. An open connection is unaffected;
    /// the next [`Client::connect`] starts from scratch.
    pub fn reset_session(&self) -> io::Result<()> {
        self.inner.session.delete()?;
        tracing::info!("[easytl] Session reset ({})", self.inner.session.name());
        Ok(())
    }

    async fn after_authorized(&self) {
        if !self.inner.prefetch_contacts {
            return;
        }
        if let Err(e) = self.refresh_contacts().await {
            tracing::warn!("[easytl] Contact prefetch failed: {e}");
        }
    }
}

fn display_name(user: &tl::enums::User) -> String {
    match user {
        tl::enums::User::User(u) => {
            let first = u.first_name.as_deref().unwrap_or("");
            let last  = u.last_name.as_deref().unwrap_or("");
            let name  = format!("{first} {last}").trim().to_string();
            if !name.is_empty() {
                return name;
            }
            u.username.clone().unwrap_or_else(|| u.id.to_string())
        }
        tl::enums::User::Empty(u) => u.id.to_string(),
    }
}
