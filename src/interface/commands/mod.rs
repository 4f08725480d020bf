//! # Command Handlers
//!
//! Contains specific handler functions for each supported command (e.g., /start, /top_billionaires).
//! These handlers are invoked by the Router.

pub mod help;
pub mod info;
pub mod richest;
pub mod start;
pub mod top;

#[cfg(test)]
pub(crate) mod testing;
