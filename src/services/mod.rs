pub mod solar_inverter;

pub use solar_inverter::SolarInverterService;
