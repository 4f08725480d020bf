//! # Application Layer
//!
//! Contains the orchestration of the bot: command routing, reply formatting and logging setup.

pub mod formatter;
pub mod logging;
pub mod router;
