//! # Matrix Service Adapter
//!
//! Implements the `ChatProvider` trait for the Matrix protocol using the `matrix_sdk`.
//! This module acts as the bridge between the generic `ChatProvider` interface used by the command handlers
//! and the specific implementation details of the Matrix SDK.

use crate::domain::traits::ChatProvider;
use async_trait::async_trait;
use matrix_sdk::room::Room;
use matrix_sdk::ruma::UserId;
use matrix_sdk::ruma::events::room::message::RoomMessageEventContent;
use std::convert::TryFrom;

#[derive(Clone)]
pub struct MatrixService {
    room: Room,
}

impl MatrixService {
    pub fn new(room: Room) -> Self {
        Self { room }
    }
}

#[async_trait]
impl ChatProvider for MatrixService {
    fn room_id(&self) -> String {
        self.room.room_id().as_str().to_string()
    }

    async fn send_message(&self, content: &str) -> Result<String, String> {
        tracing::info!("Bot sending message to {}: {}", self.room_id(), content);
        self.room
            .send(RoomMessageEventContent::text_plain(content))
            .await
            .map(|resp| resp.event_id.to_string())
            .map_err(|e| e.to_string())
    }

    /// Member display name, falling back to the localpart (or the raw ID if it does not parse).
    async fn display_name(&self, user_id: &str) -> String {
        let Ok(user) = <&UserId>::try_from(user_id) else {
            return user_id.to_string();
        };
        match self.room.get_member(user).await {
            Ok(Some(member)) => member.name().to_string(),
            _ => user.localpart().to_string(),
        }
    }
}
