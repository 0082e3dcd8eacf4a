//! JSON-RPC 2.0 query endpoint exposing `solarInverter` and `schema`.

pub mod handlers;
pub mod schema;
pub mod types;

pub use handlers::rpc_handler;
