//! # Start Command
//!
//! Handles the `/start` command: greets the caller by display name.
//! The name is only resolved here, so other commands never pay for the member lookup.

use crate::domain::traits::ChatProvider;
use anyhow::Result;

pub async fn handle_start(chat: &impl ChatProvider, sender: &str) -> Result<()> {
    let name = chat.display_name(sender).await;
    chat.send_message(&crate::strings::messages::greeting(&name))
        .await
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!(e))
}
