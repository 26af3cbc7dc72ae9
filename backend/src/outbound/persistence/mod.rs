//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! The repository talks to PostgreSQL through `diesel-async` connections
//! checked out of a `bb8` pool. Diesel row structs (`models.rs`) and table
//! definitions (`schema.rs`) are internal; only the repository, the pool and
//! the migration runner are exported.
//!
//! # Example
//!
//! ```no_run
//! use ticket_service::outbound::persistence::{
//!     DbPool, DieselTicketRepository, PoolConfig, run_pending_migrations,
//! };
//!
//! # async fn wire() -> Result<(), Box<dyn std::error::Error>> {
//! let url = "postgres://tickets@localhost/tickets";
//! run_pending_migrations(url).await?;
//! let pool = DbPool::new(PoolConfig::new(url)).await?;
//! let repository = DieselTicketRepository::new(pool);
//! # let _ = repository;
//! # Ok(())
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_ticket_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_ticket_repository::DieselTicketRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DEFAULT_POOL_MAX_SIZE, DbPool, PoolConfig, PoolError};
