//! # Infrastructure Layer
//!
//! Handles interactions with external systems and services.
//! Implements the traits defined in the Domain layer (e.g., ChatProvider, RankingSource).

pub mod forbes;
pub mod matrix;
