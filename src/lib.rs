pub mod clients;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod query;
pub mod routes;
pub mod services;

pub use clients::{InverterClient, InverterSource};
pub use config::Config;
pub use error::{AppError, Result};
pub use models::SolarInverter;
pub use services::SolarInverterService;
