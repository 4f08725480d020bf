//! # Strings Module
//!
//! Centralizes user-facing replies, help text and log messages.
//! Ensures consistency in messaging and easier updates.

pub mod help;
pub mod logs;
pub mod messages;
