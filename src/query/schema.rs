use serde_json::{json, Value};

use crate::query::types::OperationDefinition;
use crate::services::solar_inverter::DEFAULT_FEED_IN_TARIFF;

pub const SOLAR_INVERTER: &str = "solarInverter";
pub const SCHEMA: &str = "schema";

fn power_type() -> Value {
    json!({
        "type": "object",
        "required": ["W", "kW"],
        "properties": {
            "W": { "type": "number" },
            "kW": { "type": "number" }
        }
    })
}

fn energy_type() -> Value {
    json!({
        "type": "object",
        "required": ["Wh", "kWh"],
        "properties": {
            "Wh": { "type": "number" },
            "kWh": { "type": "number" },
            "evRange": { "type": "number" },
            "hotWater": { "type": "number" }
        }
    })
}

pub fn solar_inverter_type() -> Value {
    json!({
        "type": "object",
        "required": ["PAC", "day", "year", "total"],
        "properties": {
            "PAC": power_type(),
            "day": energy_type(),
            "year": energy_type(),
            "total": energy_type()
        }
    })
}

pub fn operations() -> Vec<OperationDefinition> {
    vec![
        OperationDefinition {
            name: SOLAR_INVERTER,
            description: "Current power and day/year/lifetime energy of the solar inverter",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "feedInTariff": {
                        "type": "number",
                        "default": DEFAULT_FEED_IN_TARIFF,
                        "description": "Accepted for compatibility; does not affect the result"
                    }
                },
                "additionalProperties": false
            }),
            output_schema: solar_inverter_type(),
        },
        OperationDefinition {
            name: SCHEMA,
            description: "List the operations served by this endpoint",
            input_schema: json!({ "type": "object", "properties": {} }),
            output_schema: json!({ "type": "object" }),
        },
    ]
}

pub fn schema_result() -> Value {
    json!({ "operations": operations() })
}
