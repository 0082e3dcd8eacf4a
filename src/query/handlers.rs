use axum::{body::Bytes, extract::State, Json};
use serde_json::{json, Value};
use tracing::debug;

use crate::error::AppError;
use crate::query::schema::{self, SCHEMA, SOLAR_INVERTER};
use crate::query::types::{JsonRpcRequest, SolarInverterArgs};
use crate::services::SolarInverterService;

pub async fn rpc_handler(
    State(service): State<SolarInverterService>,
    body: Bytes,
) -> Json<Value> {
    let payload: Value = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(_) => return Json(jsonrpc_error(Value::Null, -32700, "Parse error", None)),
    };

    let request: JsonRpcRequest = match serde_json::from_value(payload) {
        Ok(req) => req,
        Err(_) => {
            return Json(jsonrpc_error(
                Value::Null,
                -32600,
                "Invalid Request",
                None,
            ))
        }
    };

    if let Some(version) = request.jsonrpc.as_deref() {
        if version != "2.0" {
            return Json(jsonrpc_error(
                request.id.unwrap_or(Value::Null),
                -32600,
                "Invalid Request",
                Some(json!({"detail": "jsonrpc must be 2.0"})),
            ));
        }
    }

    let id = request.id.unwrap_or(Value::Null);
    debug!("Query method: {}", request.method);

    let result = match request.method.as_str() {
        SOLAR_INVERTER => match solar_inverter(&service, request.params).await {
            Ok(result) => jsonrpc_ok(id, result),
            Err(err) => jsonrpc_app_error(id, err),
        },
        SCHEMA => jsonrpc_ok(id, schema::schema_result()),
        _ => jsonrpc_error(
            id,
            -32601,
            "Method not found",
            Some(json!({ "method": request.method })),
        ),
    };

    Json(result)
}

async fn solar_inverter(
    service: &SolarInverterService,
    params: Option<Value>,
) -> Result<Value, AppError> {
    let args = match params {
        None | Some(Value::Null) => SolarInverterArgs::default(),
        Some(params) => serde_json::from_value(params)
            .map_err(|e| AppError::InvalidInput(format!("Invalid params: {}", e)))?,
    };

    let snapshot = service.snapshot(args.feed_in_tariff).await?;
    serde_json::to_value(snapshot).map_err(|e| AppError::Internal(e.to_string()))
}

fn jsonrpc_ok(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result
    })
}

fn jsonrpc_app_error(id: Value, err: AppError) -> Value {
    let message = match &err {
        AppError::UpstreamUnavailable(_) => "Upstream unavailable",
        AppError::MalformedUpstreamResponse(_) => "Malformed upstream response",
        AppError::InvalidInput(_) => "Invalid params",
        AppError::Config(_) | AppError::Internal(_) => "Internal error",
    };

    match &err {
        AppError::Config(_) | AppError::Internal(_) => {
            tracing::error!("Query failed: {}", err)
        }
        _ => tracing::warn!("Query failed: {}", err),
    }

    jsonrpc_error(
        id,
        err.rpc_code(),
        message,
        Some(json!({ "detail": err.to_string() })),
    )
}

fn jsonrpc_error(id: Value, code: i64, message: &str, data: Option<Value>) -> Value {
    let mut error = json!({
        "code": code,
        "message": message
    });
    if let Some(data) = data {
        error["data"] = data;
    }

    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": error
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jsonrpc_error_without_data() {
        let value = jsonrpc_error(json!(7), -32601, "Method not found", None);
        assert_eq!(value["id"], 7);
        assert_eq!(value["error"]["code"], -32601);
        assert!(value["error"].get("data").is_none());
    }

    #[test]
    fn test_app_error_mapping() {
        let value = jsonrpc_app_error(
            json!(1),
            AppError::MalformedUpstreamResponse("missing PAC".into()),
        );
        assert_eq!(value["error"]["code"], -32002);
        assert_eq!(value["error"]["message"], "Malformed upstream response");
        assert!(value["error"]["data"]["detail"]
            .as_str()
            .unwrap()
            .contains("missing PAC"));
    }
}
