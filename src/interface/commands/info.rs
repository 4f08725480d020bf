//! # Billionaire Info Command
//!
//! Handles `/billionaire_info <name>`.
//! Looks the name up in the full ranking (case-insensitive, exact) and replies with a profile card.

use crate::application::formatter;
use crate::domain::traits::{ChatProvider, RankingSource};
use crate::strings::messages;
use anyhow::Result;

pub async fn handle_info(
    source: &dyn RankingSource,
    chat: &impl ChatProvider,
    argument: Option<&str>,
) -> Result<()> {
    let Some(argument) = argument else {
        chat.send_message(messages::INFO_USAGE).await.map_err(|e| anyhow::anyhow!(e))?;
        return Ok(());
    };

    let name = argument.trim().to_lowercase();
    let reply = match source.fetch_ranking().await {
        Ok(data) => match data.find_by_name(&name) {
            Some(b) => formatter::billionaire_card(b),
            None => messages::billionaire_not_found(&name),
        },
        Err(_) => messages::FETCH_FAILED.to_string(),
    };

    chat.send_message(&reply).await.map(|_| ()).map_err(|e| anyhow::anyhow!(e))
}
