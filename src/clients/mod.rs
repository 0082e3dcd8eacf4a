pub mod inverter;

pub use inverter::{InverterClient, InverterSource};
