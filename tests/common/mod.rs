//! Fake inverter used by the integration tests.

#![allow(dead_code)]

use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Clone)]
pub enum Behavior {
    Json(Value),
    Status(StatusCode),
    Raw(&'static str),
    Delay(Duration, Value),
}

pub fn realtime_body(pac: f64, day: f64, year: f64, total: f64) -> Value {
    json!({
        "Head": {
            "RequestArguments": { "DeviceClass": "Inverter", "Scope": "System" },
            "Status": { "Code": 0, "Reason": "", "UserMessage": "" },
            "Timestamp": "2024-06-01T12:00:00+02:00"
        },
        "Body": {
            "Data": {
                "PAC": { "Unit": "W", "Values": { "1": pac } },
                "DAY_ENERGY": { "Unit": "Wh", "Values": { "1": day } },
                "YEAR_ENERGY": { "Unit": "Wh", "Values": { "1": year } },
                "TOTAL_ENERGY": { "Unit": "Wh", "Values": { "1": total } }
            }
        }
    })
}

/// Starts a fake inverter and returns its base URL.
pub async fn spawn_inverter(behavior: Behavior) -> String {
    let app = Router::new().route(
        "/solar_api/v1/GetInverterRealtimeData.cgi",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let behavior = behavior.clone();
            async move { respond(behavior, params).await }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/solar_api/v1", addr)
}

async fn respond(behavior: Behavior, params: HashMap<String, String>) -> Response {
    if params.get("Scope").map(String::as_str) != Some("System") {
        return (StatusCode::BAD_REQUEST, "Scope=System required").into_response();
    }

    match behavior {
        Behavior::Json(body) => axum::Json(body).into_response(),
        Behavior::Status(status) => status.into_response(),
        Behavior::Raw(body) => (StatusCode::OK, body).into_response(),
        Behavior::Delay(delay, body) => {
            tokio::time::sleep(delay).await;
            axum::Json(body).into_response()
        }
    }
}

/// An address nothing is listening on.
pub async fn closed_address() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/solar_api/v1", addr)
}
