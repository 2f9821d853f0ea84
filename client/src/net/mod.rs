//! Networking modules for the chat round trip.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the single `POST /chat` exchange and `types` defines the
//! transcript and wire schema.

pub mod api;
pub mod types;
