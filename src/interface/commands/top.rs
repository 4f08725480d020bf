//! # Top Billionaires Command
//!
//! Handles the `/top_billionaires` command.
//! Fetches the ranking and replies with its first ten entries.

use crate::application::formatter;
use crate::domain::traits::{ChatProvider, RankingSource};
use crate::strings::messages;
use anyhow::Result;

const TOP_COUNT: usize = 10;

pub async fn handle_top(source: &dyn RankingSource, chat: &impl ChatProvider) -> Result<()> {
    let reply = match source.fetch_ranking().await {
        Ok(data) => formatter::top_list(data.top(TOP_COUNT)),
        // already logged by the client
        Err(_) => messages::FETCH_FAILED.to_string(),
    };

    chat.send_message(&reply).await.map(|_| ()).map_err(|e| anyhow::anyhow!(e))
}
