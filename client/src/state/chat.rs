//! Chat transcript state and the send turn that drives it.
//!
//! DESIGN
//! ======
//! `ChatState` is plain data with synchronous transitions. The only
//! suspension point lives in [`submit`], between [`ChatState::begin_send`]
//! and [`ChatState::finish_send`], and no borrow of the state is held across
//! it. The pending flag is checked and set inside one `begin_send` call, so
//! at most one request is in flight on a single-threaded event loop.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

#[cfg(test)]
use std::cell::RefCell;

use leptos::prelude::{RwSignal, Update};

use crate::net::api::{ApiError, ChatBackend};
use crate::net::types::ChatMessage;
use crate::util::clock::now_millis;
use crate::util::storage::{KeyValueStorage, load_json, save_json};

/// Storage key holding the JSON transcript array.
pub const STORAGE_KEY: &str = "chat_history";

/// Id of the seeded greeting.
pub const GREETING_ID: i64 = 1;

/// First bot message when nothing is stored.
pub const GREETING: &str = "Olá! Bem-vindo à Pizza Bot. Gostaria de ver o cardápio ou fazer um pedido?";

/// Bot reply appended for any failed round trip.
pub const FALLBACK_REPLY: &str = "Desculpe, ocorreu um erro ao processar sua mensagem.";

/// State for the chat view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatState {
    /// Transcript in display order.
    pub messages: Vec<ChatMessage>,
    /// Current contents of the input field.
    pub input: String,
    /// True while one request is outstanding.
    pub loading: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self { messages: greeting(), input: String::new(), loading: false }
    }
}

/// The transcript a fresh session starts with.
pub fn greeting() -> Vec<ChatMessage> {
    vec![ChatMessage::bot(GREETING_ID, GREETING)]
}

impl ChatState {
    /// Rebuild state from the stored transcript, or start from the greeting
    /// when nothing readable is stored.
    pub fn restore(storage: &impl KeyValueStorage) -> Self {
        let messages = load_json::<Vec<ChatMessage>>(storage, STORAGE_KEY).unwrap_or_else(greeting);
        Self { messages, ..Self::default() }
    }

    /// Overwrite the stored snapshot with the whole transcript.
    pub fn persist(&self, storage: &impl KeyValueStorage) {
        save_json(storage, STORAGE_KEY, &self.messages);
    }

    pub fn can_send(&self) -> bool {
        !self.loading && !self.input.trim().is_empty()
    }

    /// Start a turn: append the user message, clear the input, and mark the
    /// request pending.
    ///
    /// Returns the raw input to send, or `None` (state untouched) when the
    /// input is blank or a request is already pending.
    pub fn begin_send(&mut self, now_ms: i64) -> Option<String> {
        if !self.can_send() {
            return None;
        }
        let text = std::mem::take(&mut self.input);
        self.messages.push(ChatMessage::user(now_ms, text.clone()));
        self.loading = true;
        Some(text)
    }

    /// Finish a turn with the reply text, or the fallback reply on any error.
    pub fn finish_send(&mut self, outcome: Result<String, ApiError>, now_ms: i64) {
        let text = outcome.unwrap_or_else(|_| FALLBACK_REPLY.to_owned());
        self.messages.push(ChatMessage::bot(now_ms.saturating_add(1), text));
        self.loading = false;
    }

    /// Drop the transcript back to the greeting. Refused while a request is
    /// pending, since its reply would land in the new conversation.
    pub fn clear(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.messages = greeting();
        true
    }
}

/// Shared handle to a [`ChatState`].
///
/// Implemented by the view's reactive signal. `apply` runs
/// `f` synchronously and returns `None` if the state is gone.
pub trait ChatStore {
    fn apply<R>(&self, f: impl FnOnce(&mut ChatState) -> R) -> Option<R>;
}

impl ChatStore for RwSignal<ChatState> {
    fn apply<R>(&self, f: impl FnOnce(&mut ChatState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

#[cfg(test)]
impl ChatStore for RefCell<ChatState> {
    fn apply<R>(&self, f: impl FnOnce(&mut ChatState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Run one send turn against `backend`, persisting after every transcript
/// change. No-op when the input is blank or a request is pending.
pub async fn submit<C, B, S>(chat: &C, backend: &B, storage: &S)
where
    C: ChatStore,
    B: ChatBackend + ?Sized,
    S: KeyValueStorage,
{
    let started = chat.apply(|c| {
        let text = c.begin_send(now_millis())?;
        c.persist(storage);
        Some(text)
    });
    let Some(text) = started.flatten() else {
        return;
    };

    let reply = backend.send_message(&text).await;
    if let Err(e) = &reply {
        log::error!("error sending message: {e}");
    }

    chat.apply(|c| {
        c.finish_send(reply, now_millis());
        c.persist(storage);
    });
}

/// Reset the transcript to the greeting and persist it.
pub fn clear_transcript<C, S>(chat: &C, storage: &S) -> bool
where
    C: ChatStore,
    S: KeyValueStorage,
{
    chat.apply(|c| {
        let cleared = c.clear();
        if cleared {
            c.persist(storage);
        }
        cleared
    })
    .unwrap_or(false)
}
