#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use easytl_client::{
    Client, Config, ConnectParams, InMemoryStore, InvocationError, RpcError, SessionStore,
    TransportClient, Tunnel, tl,
};

// ── Recorded calls ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Connect,
    SendCode,
    SignIn { code: String },
    SendMessage { peer: tl::enums::InputPeer, text: String },
    GetHistory { limit: i32 },
    GetDialogs,
    SearchUsers { query: String },
    BotCallback { msg_id: i32, data: Vec<u8> },
}

// ── MockTransport ─────────────────────────────────────────────────────────────

/// A scripted transport: answers come from the public fields, every call is
/// appended to `calls`.
pub struct MockTransport {
    pub authorized:   AtomicBool,
    pub connected:    AtomicBool,
    pub fail_connect: AtomicBool,
    /// `phone_code_hash` returned by `send_code`.
    pub code_hash:    Mutex<String>,
    /// RPC error name `sign_in` fails with, if any.
    pub sign_in_rpc:  Mutex<Option<String>>,
    pub history:      Mutex<tl::enums::messages::Messages>,
    pub dialogs:      Mutex<tl::enums::messages::Dialogs>,
    pub found:        Mutex<tl::enums::contacts::Found>,
    pub answer:       Mutex<tl::types::messages::BotCallbackAnswer>,
    pub tunnels:      Mutex<Vec<Option<Tunnel>>>,
    pub calls:        Mutex<Vec<Call>>,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self {
            authorized:   AtomicBool::new(false),
            connected:    AtomicBool::new(false),
            fail_connect: AtomicBool::new(false),
            code_hash:    Mutex::new("hash-1".into()),
            sign_in_rpc:  Mutex::new(None),
            history:      Mutex::new(tl::types::messages::Messages::default().into()),
            dialogs:      Mutex::new(tl::types::messages::Dialogs::default().into()),
            found:        Mutex::new(tl::types::contacts::Found::default().into()),
            answer:       Mutex::new(tl::types::messages::BotCallbackAnswer::default()),
            tunnels:      Mutex::new(Vec::new()),
            calls:        Mutex::new(Vec::new()),
        }
    }
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Starts out with a stored, authorized session.
    pub fn authorized() -> Arc<Self> {
        let t = Self::default();
        t.authorized.store(true, Ordering::SeqCst);
        Arc::new(t)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Tunnels passed to each `connect`, in order.
    pub fn tunnels(&self) -> Vec<Option<Tunnel>> {
        self.tunnels.lock().unwrap().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| pred(c)).count()
    }

    /// Calls other than `Connect`.
    pub fn requests(&self) -> Vec<Call> {
        self.calls().into_iter().filter(|c| *c != Call::Connect).collect()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn set_dialog_users(&self, users: Vec<tl::enums::User>) {
        *self.dialogs.lock().unwrap() =
            tl::types::messages::DialogsSlice { count: 500, users, ..Default::default() }.into();
    }

    pub fn set_found_users(&self, users: Vec<tl::enums::User>) {
        *self.found.lock().unwrap() = tl::types::contacts::Found { users, ..Default::default() }.into();
    }

    pub fn set_history(&self, messages: Vec<tl::enums::Message>) {
        *self.history.lock().unwrap() =
            tl::types::messages::Messages { messages, ..Default::default() }.into();
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl TransportClient for MockTransport {
    async fn connect(&self, params: ConnectParams) -> Result<(), InvocationError> {
        self.record(Call::Connect);
        self.tunnels.lock().unwrap().push(params.tunnel);
        if self.fail_connect.load(Ordering::SeqCst) {
            return Err(std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused").into());
        }
        self.connected.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn is_authorized(&self) -> Result<bool, InvocationError> {
        Ok(self.authorized.load(Ordering::SeqCst))
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    async fn send_code(&self, _phone_number: &str) -> Result<tl::enums::auth::SentCode, InvocationError> {
        self.record(Call::SendCode);
        let phone_code_hash = self.code_hash.lock().unwrap().clone();
        Ok(tl::types::auth::SentCode { phone_code_hash, timeout: None }.into())
    }

    async fn sign_in(
        &self,
        _phone_number:    &str,
        _phone_code_hash: &str,
        code:             &str,
    ) -> Result<tl::enums::User, InvocationError> {
        self.record(Call::SignIn { code: code.into() });
        if let Some(name) = self.sign_in_rpc.lock().unwrap().clone() {
            return Err(RpcError::from_telegram(400, &name).into());
        }
        self.authorized.store(true, Ordering::SeqCst);
        Ok(user(1, Some("me")))
    }

    async fn send_message(&self, peer: tl::enums::InputPeer, text: &str) -> Result<(), InvocationError> {
        self.record(Call::SendMessage { peer, text: text.into() });
        Ok(())
    }

    async fn get_history(
        &self,
        _peer: tl::enums::InputPeer,
        limit: i32,
    ) -> Result<tl::enums::messages::Messages, InvocationError> {
        self.record(Call::GetHistory { limit });
        let cap = usize::try_from(limit).unwrap_or(0);
        let mut history = self.history.lock().unwrap().clone();
        match &mut history {
            tl::enums::messages::Messages::Messages(m) => m.messages.truncate(cap),
            tl::enums::messages::Messages::Slice(m) => m.messages.truncate(cap),
        }
        Ok(history)
    }

    async fn get_dialogs(&self) -> Result<tl::enums::messages::Dialogs, InvocationError> {
        self.record(Call::GetDialogs);
        Ok(self.dialogs.lock().unwrap().clone())
    }

    async fn search_users(
        &self,
        query:  &str,
        _limit: i32,
    ) -> Result<tl::enums::contacts::Found, InvocationError> {
        self.record(Call::SearchUsers { query: query.into() });
        Ok(self.found.lock().unwrap().clone())
    }

    async fn get_bot_callback_answer(
        &self,
        _peer:  tl::enums::InputPeer,
        msg_id: i32,
        data:   Vec<u8>,
    ) -> Result<tl::enums::messages::BotCallbackAnswer, InvocationError> {
        self.record(Call::BotCallback { msg_id, data });
        Ok(self.answer.lock().unwrap().clone().into())
    }
}

// ── Builders ──────────────────────────────────────────────────────────────────

pub const PHONE: &str = "+15550001111";

/// A client over `transport` with an in-memory session.
pub fn client(transport: &Arc<MockTransport>) -> Client {
    client_with(transport, Config::default())
}

pub fn client_with(transport: &Arc<MockTransport>, config: Config) -> Client {
    let memory: Arc<dyn SessionStore> = Arc::new(InMemoryStore::new());
    let config = Config {
        api_id:        12345,
        api_hash:      "0123456789abcdef".into(),
        phone_number:  PHONE.into(),
        session_store: Some(config.session_store.clone().unwrap_or(memory)),
        ..config
    };
    Client::with_config(config, transport.clone())
}

/// A client that has already connected on an authorized session.
pub async fn connected(transport: &Arc<MockTransport>) -> Client {
    transport.authorized.store(true, Ordering::SeqCst);
    let client = client(transport);
    client.connect().await.unwrap();
    transport.clear_calls();
    client
}

pub fn user(id: i64, username: Option<&str>) -> tl::enums::User {
    tl::types::User {
        id,
        access_hash: Some(id * 10),
        username: username.map(str::to_string),
        ..Default::default()
    }
    .into()
}

pub fn text_message(id: i32, text: &str) -> tl::enums::Message {
    tl::types::Message { id, message: text.into(), date: 1_700_000_000, ..Default::default() }.into()
}

pub fn input_user(id: i64) -> tl::enums::InputPeer {
    tl::types::InputPeerUser { user_id: id, access_hash: id * 10 }.into()
}
