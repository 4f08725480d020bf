//! In-memory collaborators for handler and router tests.

use crate::domain::error::ApiError;
use crate::domain::traits::{ChatProvider, RankingSource};
use crate::domain::types::{Billionaire, RankingResponse};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Records every message sent to it and counts display name lookups.
#[derive(Default)]
pub struct RecordingChat {
    sent: Mutex<Vec<String>>,
    lookups: AtomicUsize,
}

impl RecordingChat {
    pub fn replies(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatProvider for RecordingChat {
    async fn send_message(&self, content: &str) -> Result<String, String> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(content.to_string());
        Ok(format!("$event{}", sent.len()))
    }

    /// `@alice:example.com` -> `alice`
    async fn display_name(&self, user_id: &str) -> String {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let local = user_id.trim_start_matches('@');
        local.split(':').next().unwrap_or(local).to_string()
    }

    fn room_id(&self) -> String {
        "!test:example.com".to_string()
    }
}

/// Returns a fixed result and counts how often it was asked.
pub struct ScriptedSource {
    response: Result<RankingResponse, ApiError>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn ok(ranking: Vec<Billionaire>) -> Self {
        Self {
            response: Ok(RankingResponse { ranking }),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            response: Err(ApiError::Status {
                status: 503,
                body: "upstream down".to_string(),
            }),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RankingSource for ScriptedSource {
    async fn fetch_ranking(&self) -> Result<RankingResponse, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}
