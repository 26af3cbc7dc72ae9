//! Outbound adapters implementing the ticket repository port.
//!
//! - **persistence**: PostgreSQL-backed repository using Diesel
//! - **memory**: process-local repository used when no database is
//!   configured, and by tests
//!
//! Adapters translate between domain types and storage representations.
//! They contain no business logic.

pub mod memory;
pub mod persistence;
