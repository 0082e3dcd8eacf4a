use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;

use crate::error::Result;
use crate::models::SolarInverter;
use crate::services::SolarInverterService;

#[derive(Debug, Default, Deserialize)]
pub struct SolarInverterParams {
    #[serde(rename = "feedInTariff")]
    pub feed_in_tariff: Option<f64>,
}

pub async fn get_solar_inverter(
    State(service): State<SolarInverterService>,
    Query(params): Query<SolarInverterParams>,
) -> Result<Json<SolarInverter>> {
    let snapshot = service.snapshot(params.feed_in_tariff).await?;
    Ok(Json(snapshot))
}

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "ok" })),
    )
}
