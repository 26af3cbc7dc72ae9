//! Driven port for ticket persistence.

use async_trait::async_trait;

use crate::domain::{Ticket, TicketId, TicketListFilter};

use super::define_port_error;

define_port_error! {
    /// Errors raised by ticket repository adapters.
    pub enum TicketRepositoryError {
        /// The store could not be reached.
        Connection { message: String } =>
            "ticket repository connection failed: {message}",
        /// A query or mutation failed while executing.
        Query { message: String } =>
            "ticket repository query failed: {message}",
        /// Another ticket already holds this public identifier.
        DuplicateId { id: String } =>
            "ticket id {id} is already taken",
    }
}

/// Persistent collection of tickets keyed by their public identifier.
///
/// Single-record operations are expected to be atomic; no ordering is
/// promised across calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Store a new ticket. Fails with `DuplicateId` when the id is taken.
    async fn insert(&self, ticket: &Ticket) -> Result<(), TicketRepositoryError>;

    /// Tickets matching `filter`, newest first, windowed by its offset/limit.
    async fn list(&self, filter: &TicketListFilter) -> Result<Vec<Ticket>, TicketRepositoryError>;

    /// Ticket with the given public id.
    async fn find_by_id(&self, id: &TicketId) -> Result<Option<Ticket>, TicketRepositoryError>;

    /// Remove the ticket with the given public id; `true` when one was removed.
    async fn delete_by_id(&self, id: &TicketId) -> Result<bool, TicketRepositoryError>;
}

/// Stateless repository that stores nothing and finds nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTicketRepository;

#[async_trait]
impl TicketRepository for FixtureTicketRepository {
    async fn insert(&self, _ticket: &Ticket) -> Result<(), TicketRepositoryError> {
        Ok(())
    }

    async fn list(&self, _filter: &TicketListFilter) -> Result<Vec<Ticket>, TicketRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: &TicketId) -> Result<Option<Ticket>, TicketRepositoryError> {
        Ok(None)
    }

    async fn delete_by_id(&self, _id: &TicketId) -> Result<bool, TicketRepositoryError> {
        Ok(false)
    }
}
