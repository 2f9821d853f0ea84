//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component
//! logic to improve reuse and testability.

pub mod clock;
pub mod storage;
