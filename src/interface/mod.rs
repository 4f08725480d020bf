//! # Interface Layer
//!
//! Entry points reached from the chat gateway: one handler per bot command.

pub mod commands;
