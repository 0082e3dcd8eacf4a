use std::sync::Arc;
use tracing::debug;

use crate::clients::InverterSource;
use crate::error::{AppError, Result};
use crate::models::SolarInverter;

pub const DEFAULT_FEED_IN_TARIFF: f64 = 0.0;

#[derive(Clone)]
pub struct SolarInverterService {
    source: Arc<dyn InverterSource>,
    estimate_placeholders: bool,
}

impl SolarInverterService {
    pub fn new(source: Arc<dyn InverterSource>) -> Self {
        Self {
            source,
            estimate_placeholders: false,
        }
    }

    pub fn with_estimate_placeholders(mut self, enabled: bool) -> Self {
        self.estimate_placeholders = enabled;
        self
    }

    /// Fetch one snapshot from the inverter.
    ///
    /// `feed_in_tariff` is accepted and validated but does not influence the
    /// result; no billing logic exists behind it.
    pub async fn snapshot(&self, feed_in_tariff: Option<f64>) -> Result<SolarInverter> {
        let feed_in_tariff = self.validate_feed_in_tariff(feed_in_tariff)?;
        debug!(feed_in_tariff, "Querying solar inverter");

        let data = self.source.fetch_realtime_data().await?;
        let snapshot = SolarInverter::from_realtime(&data);

        if self.estimate_placeholders {
            Ok(snapshot.with_estimate_placeholders())
        } else {
            Ok(snapshot)
        }
    }

    fn validate_feed_in_tariff(&self, feed_in_tariff: Option<f64>) -> Result<f64> {
        let value = feed_in_tariff.unwrap_or(DEFAULT_FEED_IN_TARIFF);
        if !value.is_finite() {
            return Err(AppError::InvalidInput(
                "feedInTariff must be a finite number".to_string(),
            ));
        }
        Ok(value)
    }
}
