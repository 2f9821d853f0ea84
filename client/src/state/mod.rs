//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is kept as plain data with synchronous transitions so it can be
//! exercised without a browser. Components wrap it in signals.

pub mod chat;
