//! # Richest In Country Command
//!
//! Handles `/richest_in_country <country>`.

use crate::application::formatter;
use crate::domain::traits::{ChatProvider, RankingSource};
use crate::strings::messages;
use anyhow::Result;

pub async fn handle_richest(
    source: &dyn RankingSource,
    chat: &impl ChatProvider,
    argument: Option<&str>,
) -> Result<()> {
    let Some(argument) = argument else {
        chat.send_message(messages::RICHEST_USAGE).await.map_err(|e| anyhow::anyhow!(e))?;
        return Ok(());
    };

    let country = argument.trim().to_lowercase();
    let reply = match source.fetch_ranking().await {
        Ok(data) => match data.richest_in_country(&country) {
            Some(b) => formatter::richest_card(b),
            None => messages::country_not_found(&country),
        },
        Err(_) => messages::country_fetch_failed(&country),
    };

    chat.send_message(&reply).await.map(|_| ()).map_err(|e| anyhow::anyhow!(e))
}
