//! # Main Entry Point
//!
//! Initializes the bot:
//! - Domain: Configuration and Types
//! - Infrastructure: Matrix, Forbes ranking API
//! - Application: Router, Formatter, Logging
//! - Interface: Command Handlers
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

use anyhow::Result;
use clap::Parser;
use matrix_sdk::{
    Client,
    config::SyncSettings,
    room::Room,
    ruma::events::room::{
        member::{MembershipState, StrippedRoomMemberEvent},
        message::{MessageType, SyncRoomMessageEvent},
    },
};
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::router::CommandRouter;
use crate::domain::config::AppConfig;
use crate::infrastructure::forbes::ForbesClient;
use crate::infrastructure::matrix::MatrixService;

/// Matrix bot answering questions about the Forbes billionaires ranking.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "data/config.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load Configuration
    let config = AppConfig::load(&cli.config)?;

    // 2. Logging Setup
    let _guard = application::logging::init(&config.logging)?;
    tracing::info!("{}", strings::logs::STARTING);

    // 3. Ranking API + Router (built once, shared by every event)
    let source = Arc::new(ForbesClient::new(&config.api)?);
    let router = Arc::new(CommandRouter::new(source));

    // 4. Matrix Setup
    let client = Client::builder()
        .homeserver_url(&config.services.matrix.homeserver)
        .build()
        .await?;

    client
        .matrix_auth()
        .login_username(
            &config.services.matrix.username,
            &config.services.matrix.password,
        )
        .send()
        .await?;

    tracing::info!("{}", strings::logs::logged_in(&config.services.matrix.username));

    // 5. Event Loop
    let start_time = std::time::SystemTime::now();

    client.add_event_handler(move |ev: SyncRoomMessageEvent, room: Room| {
        let router = router.clone();

        async move {
            let Some(original_msg) = ev.as_original() else {
                return;
            };

            // Ignore events older than start_time
            let ts = ev.origin_server_ts();
            let event_time =
                std::time::UNIX_EPOCH + std::time::Duration::from_millis(ts.get().into());
            if event_time < start_time {
                return;
            }

            if original_msg.sender == room.own_user_id() {
                return;
            }

            if let MessageType::Text(text_content) = &original_msg.content.msgtype {
                let body = &text_content.body;
                tracing::info!(
                    "{}",
                    strings::logs::received_message(original_msg.sender.as_str(), body)
                );

                let chat = MatrixService::new(room);
                if let Err(e) = router.route(&chat, body, original_msg.sender.as_str()).await {
                    tracing::error!("{}", strings::logs::route_failed(&e.to_string()));
                }
            }
        }
    });

    // Handle Invites
    client.add_event_handler(|ev: StrippedRoomMemberEvent, room: Room| async move {
        if ev.content.membership == MembershipState::Invite
            && let Err(e) = room.join().await
        {
            tracing::warn!("{}", strings::logs::join_invite_fail(&e.to_string()));
        }
    });

    // 6. Sync until the process is stopped
    if let Err(e) = client.sync(SyncSettings::default()).await {
        tracing::error!("{}", strings::logs::sync_loop_fail(&e.to_string()));
    }

    Ok(())
}
