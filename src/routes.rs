use axum::{
    extract::Request,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::Level;

use crate::handlers::{get_solar_inverter, health};
use crate::query::rpc_handler;
use crate::services::SolarInverterService;

pub fn create_router(service: SolarInverterService) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/solar-inverter", get(get_solar_inverter))
        .route("/query", post(rpc_handler))
        .with_state(service)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(|request: &Request| {
                            tracing::span!(
                                Level::INFO,
                                "http_request",
                                method = %request.method(),
                                uri = %request.uri(),
                            )
                        })
                        .on_request(|_request: &Request, _span: &tracing::Span| {
                            tracing::event!(Level::DEBUG, "received request");
                        })
                        .on_response(
                            |_response: &axum::response::Response,
                             latency: std::time::Duration,
                             _span: &tracing::Span| {
                                tracing::event!(Level::INFO, latency = ?latency, "request completed");
                            },
                        ),
                )
                .layer(CorsLayer::permissive()),
        )
}
