use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::config::InverterConfig;
use crate::error::{AppError, Result};
use crate::models::{RealtimeData, RealtimeDataResponse};

pub const REALTIME_DATA_PATH: &str = "GetInverterRealtimeData.cgi";

/// Anything that can produce one set of realtime readings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InverterSource: Send + Sync {
    async fn fetch_realtime_data(&self) -> Result<RealtimeData>;
}

/// HTTP client for the inverter's local Solar API.
#[derive(Clone)]
pub struct InverterClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl InverterClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &InverterConfig) -> Result<Self> {
        Self::new(config.api_url.clone(), config.timeout())
    }

    pub fn realtime_data_url(&self) -> String {
        format!("{}/{}", self.base_url, REALTIME_DATA_PATH)
    }
}

#[async_trait]
impl InverterSource for InverterClient {
    async fn fetch_realtime_data(&self) -> Result<RealtimeData> {
        let url = self.realtime_data_url();
        debug!("Fetching realtime data from {}", url);

        let response = self
            .http_client
            .get(&url)
            .query(&[("Scope", "System")])
            .send()
            .await
            .map_err(|e| unavailable(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamUnavailable(format!(
                "{} returned HTTP {}",
                url, status
            )));
        }

        let body = response.bytes().await.map_err(|e| unavailable(&url, e))?;

        let parsed: RealtimeDataResponse = serde_json::from_slice(&body).map_err(|e| {
            AppError::MalformedUpstreamResponse(format!("undecodable body from {}: {}", url, e))
        })?;

        parsed.into_realtime_data()
    }
}

fn unavailable(url: &str, err: reqwest::Error) -> AppError {
    let kind = if err.is_timeout() {
        "timed out"
    } else if err.is_connect() {
        "connection failed"
    } else {
        "request failed"
    };

    AppError::UpstreamUnavailable(format!("{} {}: {}", url, kind, err))
}
