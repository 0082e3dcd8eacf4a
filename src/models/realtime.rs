//! Wire format of `GetInverterRealtimeData.cgi?Scope=System`.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::{AppError, Result};

/// Device id under which a single-inverter system reports its values.
pub const DEVICE_ID: &str = "1";

#[derive(Debug, Deserialize)]
pub struct RealtimeDataResponse {
    #[serde(rename = "Head", default)]
    pub head: Option<ResponseHead>,
    /// Devices answer `"Body": {}` alongside an error status.
    #[serde(rename = "Body", default)]
    pub body: Option<ResponseBody>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseHead {
    #[serde(rename = "Status")]
    pub status: Option<ResponseStatus>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseStatus {
    #[serde(rename = "Code")]
    pub code: i64,
    #[serde(rename = "Reason", default)]
    pub reason: Option<String>,
    #[serde(rename = "UserMessage", default)]
    pub user_message: Option<String>,
}

/// Channels stay raw so that unrelated ones (`UDC`, `IAC`, ...) can have any shape.
#[derive(Debug, Deserialize)]
pub struct ResponseBody {
    #[serde(rename = "Data", default)]
    pub data: Option<HashMap<String, Value>>,
}

#[derive(Debug, Deserialize)]
pub struct Channel {
    #[serde(rename = "Unit", default)]
    pub unit: Option<String>,
    #[serde(rename = "Values", default)]
    pub values: Option<HashMap<String, Value>>,
}

/// The four readings the API republishes, in base units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RealtimeData {
    pub pac: f64,
    pub day_energy: f64,
    pub year_energy: f64,
    pub total_energy: f64,
}

impl RealtimeDataResponse {
    /// Fails with `UpstreamUnavailable` when the device reports a non-zero status.
    pub fn check_status(&self) -> Result<()> {
        let Some(status) = self.head.as_ref().and_then(|h| h.status.as_ref()) else {
            return Ok(());
        };

        if status.code == 0 {
            return Ok(());
        }

        let reason = status
            .reason
            .as_deref()
            .or(status.user_message.as_deref())
            .filter(|r| !r.is_empty())
            .unwrap_or("no reason given");

        Err(AppError::UpstreamUnavailable(format!(
            "device status {}: {}",
            status.code, reason
        )))
    }

    pub fn into_realtime_data(self) -> Result<RealtimeData> {
        self.check_status()?;

        Ok(RealtimeData {
            pac: self.value("PAC", "W")?,
            day_energy: self.value("DAY_ENERGY", "Wh")?,
            year_energy: self.value("YEAR_ENERGY", "Wh")?,
            total_energy: self.value("TOTAL_ENERGY", "Wh")?,
        })
    }

    fn value(&self, field: &str, expected_unit: &str) -> Result<f64> {
        let raw = self
            .body
            .as_ref()
            .and_then(|body| body.data.as_ref())
            .and_then(|data| data.get(field))
            .ok_or_else(|| {
                AppError::MalformedUpstreamResponse(format!("missing field Body.Data.{}", field))
            })?;

        let channel = Channel::deserialize(raw).map_err(|e| {
            AppError::MalformedUpstreamResponse(format!("Body.Data.{}: {}", field, e))
        })?;

        if let Some(unit) = channel.unit.as_deref() {
            if unit != expected_unit {
                return Err(AppError::MalformedUpstreamResponse(format!(
                    "Body.Data.{} has unit {}, expected {}",
                    field, unit, expected_unit
                )));
            }
        }

        let value = channel
            .values
            .as_ref()
            .and_then(|values| values.get(DEVICE_ID))
            .ok_or_else(|| {
                AppError::MalformedUpstreamResponse(format!(
                    "missing Body.Data.{}.Values[\"{}\"]",
                    field, DEVICE_ID
                ))
            })?;

        value.as_f64().ok_or_else(|| {
            AppError::MalformedUpstreamResponse(format!(
                "Body.Data.{}.Values[\"{}\"] is not a number: {}",
                field, DEVICE_ID, value
            ))
        })
    }
}
