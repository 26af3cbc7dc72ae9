//! Ticket store service library.
//!
//! The crate follows a hexagonal layout: [`domain`] owns the ticket model,
//! the ports and the service; [`inbound`] adapts HTTP onto the driving ports;
//! [`outbound`] provides the PostgreSQL and in-memory repositories; and
//! [`server`] wires them together for the binary.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
