//! Messaging client for the remote Pizza Bot chat endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native test builds: the call resolves to
//! [`ApiError::Unavailable`] since the endpoint is only reached from the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure class (transport, status, body) surfaces as an [`ApiError`].
//! The view collapses all of them into one fixed bot reply, so nothing here
//! retries or inspects error bodies.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::types::{ChatReply, ChatRequest};

/// Base URL of the chat service. Not configurable at runtime.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Errors produced by a chat round trip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, ...).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The service answered with a non-success HTTP status.
    #[error("network response was not ok: status {0}")]
    Status(u16),

    /// The success body was not `{"response": string}`.
    #[error("malformed chat response: {0}")]
    Decode(String),

    /// No HTTP stack in this build (SSR or native).
    #[error("chat endpoint is only reachable from the browser")]
    Unavailable,
}

/// One request/response exchange with the chat service. Enables mocking in
/// tests.
///
/// Futures are `?Send` because browser fetch futures are bound to the JS
/// event loop.
#[async_trait::async_trait(?Send)]
pub trait ChatBackend {
    /// Send `message` and return the reply text.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-success status, or a
    /// body without a `response` string.
    async fn send_message(&self, message: &str) -> Result<String, ApiError>;
}

/// `POST {base_url}/chat` over the browser fetch API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpChatBackend {
    base_url: String,
}

impl HttpChatBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for HttpChatBackend {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn chat_endpoint(base_url: &str) -> String {
    format!("{}/chat", base_url.trim_end_matches('/'))
}

#[async_trait::async_trait(?Send)]
impl ChatBackend for HttpChatBackend {
    async fn send_message(&self, message: &str) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = ChatRequest { message: message.to_owned() };
            let resp = gloo_net::http::Request::post(&chat_endpoint(&self.base_url))
                .json(&body)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            let reply: ChatReply = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(reply.response)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = message;
            Err(ApiError::Unavailable)
        }
    }
}
