//! HTTP inbound adapter exposing the ticket REST endpoints.

pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod tickets;
pub mod validation;

pub use error::ApiResult;
