//! # Domain Traits
//!
//! Abstract interfaces for the two external collaborators (Chat gateway, Ranking API).
//! Allows for pluggable implementations in the Infrastructure layer.

use crate::domain::error::ApiError;
use crate::domain::types::RankingResponse;
use async_trait::async_trait;

/// Abstract interface for a Chat Provider (e.g., Matrix, Console)
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a plain text message to the room, returning its event ID
    async fn send_message(&self, content: &str) -> Result<String, String>;

    /// Human-readable name of `user_id` in this room
    async fn display_name(&self, user_id: &str) -> String;

    /// Get the current room ID
    fn room_id(&self) -> String;
}

/// Abstract interface for the billionaires ranking
#[async_trait]
pub trait RankingSource: Send + Sync {
    /// Fetch the full ranking list
    async fn fetch_ranking(&self) -> Result<RankingResponse, ApiError>;
}
