pub mod inverter;
pub mod realtime;

pub use inverter::*;
pub use realtime::{RealtimeData, RealtimeDataResponse};
