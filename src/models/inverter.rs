use serde::Serialize;

use crate::models::realtime::RealtimeData;

/// Scale a base-unit value (W, Wh) to its kilo unit, rounded to two decimals.
///
/// Divides by ten first so that integer inputs land exactly on a half-step
/// before rounding, which keeps e.g. 12345 Wh at 12.35 kWh.
pub fn to_kilo(value: f64) -> f64 {
    (value / 10.0).round() / 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerReading {
    #[serde(rename = "W")]
    pub watts: f64,
    #[serde(rename = "kW")]
    pub kilowatts: f64,
}

impl PowerReading {
    pub fn from_watts(watts: f64) -> Self {
        Self {
            watts,
            kilowatts: to_kilo(watts),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyReading {
    #[serde(rename = "Wh")]
    pub watt_hours: f64,
    #[serde(rename = "kWh")]
    pub kilowatt_hours: f64,
    #[serde(rename = "evRange", skip_serializing_if = "Option::is_none")]
    pub ev_range_estimate: Option<f64>,
    #[serde(rename = "hotWater", skip_serializing_if = "Option::is_none")]
    pub hot_water_estimate: Option<f64>,
}

impl EnergyReading {
    pub fn from_watt_hours(watt_hours: f64) -> Self {
        Self {
            watt_hours,
            kilowatt_hours: to_kilo(watt_hours),
            ev_range_estimate: None,
            hot_water_estimate: None,
        }
    }

    /// Placeholders only; nothing computes these yet.
    pub fn with_estimate_placeholders(self) -> Self {
        Self {
            ev_range_estimate: Some(0.0),
            hot_water_estimate: Some(0.0),
            ..self
        }
    }
}

/// Point-in-time view of the inverter, built fresh for every query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarInverter {
    #[serde(rename = "PAC")]
    pub power: PowerReading,
    pub day: EnergyReading,
    pub year: EnergyReading,
    pub total: EnergyReading,
}

impl SolarInverter {
    pub fn from_realtime(data: &RealtimeData) -> Self {
        Self {
            power: PowerReading::from_watts(data.pac),
            day: EnergyReading::from_watt_hours(data.day_energy),
            year: EnergyReading::from_watt_hours(data.year_energy),
            total: EnergyReading::from_watt_hours(data.total_energy),
        }
    }

    pub fn with_estimate_placeholders(self) -> Self {
        Self {
            day: self.day.with_estimate_placeholders(),
            year: self.year.with_estimate_placeholders(),
            total: self.total.with_estimate_placeholders(),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_kilowatts() {
        assert_eq!(PowerReading::from_watts(0.0).kilowatts, 0.0);
        assert_eq!(PowerReading::from_watts(1000.0).kilowatts, 1.0);
        assert_eq!(PowerReading::from_watts(1234.0).kilowatts, 1.23);
        assert_eq!(PowerReading::from_watts(999.0).kilowatts, 1.0);
    }

    #[test]
    fn test_kilowatt_hours() {
        assert_eq!(EnergyReading::from_watt_hours(0.0).kilowatt_hours, 0.0);
        assert_eq!(EnergyReading::from_watt_hours(12345.0).kilowatt_hours, 12.35);
        assert_eq!(EnergyReading::from_watt_hours(500.0).kilowatt_hours, 0.5);
    }

    #[test]
    fn test_to_kilo_fractional_input() {
        assert_eq!(to_kilo(1504.4), 1.5);
        assert_eq!(to_kilo(1505.0), 1.51);
    }

    #[test]
    fn test_snapshot_from_realtime() {
        let data = RealtimeData {
            pac: 1500.0,
            day_energy: 2000.0,
            year_energy: 3_000_000.0,
            total_energy: 9_999_999.0,
        };

        let snapshot = SolarInverter::from_realtime(&data);

        assert_eq!(snapshot.power, PowerReading { watts: 1500.0, kilowatts: 1.5 });
        assert_eq!(snapshot.day.kilowatt_hours, 2.0);
        assert_eq!(snapshot.year.kilowatt_hours, 3000.0);
        assert_eq!(snapshot.total.kilowatt_hours, 10000.0);
    }

    #[test]
    fn test_serialized_shape() {
        let snapshot = SolarInverter::from_realtime(&RealtimeData {
            pac: 1500.0,
            day_energy: 2000.0,
            year_energy: 3_000_000.0,
            total_energy: 9_999_999.0,
        });

        assert_eq!(
            serde_json::to_value(snapshot).unwrap(),
            json!({
                "PAC": { "W": 1500.0, "kW": 1.5 },
                "day": { "Wh": 2000.0, "kWh": 2.0 },
                "year": { "Wh": 3000000.0, "kWh": 3000.0 },
                "total": { "Wh": 9999999.0, "kWh": 10000.0 }
            })
        );
    }

    #[test]
    fn test_estimate_placeholders_serialized_as_zero() {
        let snapshot = SolarInverter::from_realtime(&RealtimeData {
            pac: 0.0,
            day_energy: 500.0,
            year_energy: 500.0,
            total_energy: 500.0,
        })
        .with_estimate_placeholders();

        let value = serde_json::to_value(snapshot).unwrap();
        assert_eq!(
            value["day"],
            json!({ "Wh": 500.0, "kWh": 0.5, "evRange": 0.0, "hotWater": 0.0 })
        );
        assert!(value["PAC"].get("evRange").is_none());
    }
}
