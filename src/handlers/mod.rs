pub mod solar_inverter;

pub use solar_inverter::{get_solar_inverter, health};
