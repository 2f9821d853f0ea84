//! UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the widget while reading/writing shared state from
//! Leptos context providers.

pub mod chat_view;
