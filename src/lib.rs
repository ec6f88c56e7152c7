// HTTP server modules
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

// Chat store (Postgres persistence)
pub mod store;

pub use error::{Error, Result};
