//! # Forbes Ranking Client
//!
//! Implements the `RankingSource` trait over the RapidAPI billionaires endpoint using `reqwest`.
//! Failures are logged here with the upstream status and body, then handed back as `ApiError`.

use crate::domain::config::ApiConfig;
use crate::domain::error::ApiError;
use crate::domain::traits::RankingSource;
use crate::domain::types::RankingResponse;
use async_trait::async_trait;
use std::time::Duration;

pub struct ForbesClient {
    client: reqwest::Client,
    base_url: String,
    host: String,
    key: String,
    endpoint: String,
    delay: Duration,
}

impl ForbesClient {
    /// Build a client from the `api` section of the configuration.
    pub fn new(api: &ApiConfig) -> anyhow::Result<Self> {
        let key = api.api_key()?;
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            base_url: api.base_url.trim_end_matches('/').to_string(),
            host: api.host.clone(),
            key,
            endpoint: api.endpoint.clone(),
            delay: Duration::from_millis(api.request_delay_ms),
        })
    }

    /// GET `{base_url}/{endpoint}` and decode it as a ranking payload.
    pub async fn fetch(&self, endpoint: &str) -> Result<RankingResponse, ApiError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let result = self.request(endpoint).await;
        match &result {
            Ok(data) => tracing::info!(
                "{}",
                crate::strings::logs::fetched_records(endpoint, data.ranking.len())
            ),
            Err(e) => tracing::error!(
                "{}",
                crate::strings::logs::fetch_failed(endpoint, &e.to_string())
            ),
        }
        result
    }

    async fn request(&self, endpoint: &str) -> Result<RankingResponse, ApiError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let resp = self
            .client
            .get(&url)
            .header("x-rapidapi-host", &self.host)
            .header("x-rapidapi-key", &self.key)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = resp.status();
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if status != reqwest::StatusCode::OK {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).to_string(),
            });
        }

        serde_json::from_slice::<RankingResponse>(&bytes)
            .map_err(|e| ApiError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl RankingSource for ForbesClient {
    async fn fetch_ranking(&self) -> Result<RankingResponse, ApiError> {
        self.fetch(&self.endpoint).await
    }
}
