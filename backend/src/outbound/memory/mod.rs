//! Process-local ticket repository.
//!
//! Used when no database URL is configured and by tests that need a real
//! repository without PostgreSQL. Contents are lost on restart.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{TicketRepository, TicketRepositoryError};
use crate::domain::{Ticket, TicketId, TicketListFilter};

/// [`TicketRepository`] backed by a vector behind an async lock.
///
/// Listing applies the same filter, ordering and window as the PostgreSQL
/// adapter via [`TicketListFilter::apply`].
#[derive(Debug, Default)]
pub struct InMemoryTicketRepository {
    tickets: RwLock<Vec<Ticket>>,
}

impl InMemoryTicketRepository {
    /// Empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored tickets.
    pub async fn len(&self) -> usize {
        self.tickets.read().await.len()
    }

    /// Whether nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.tickets.read().await.is_empty()
    }
}

#[async_trait]
impl TicketRepository for InMemoryTicketRepository {
    async fn insert(&self, ticket: &Ticket) -> Result<(), TicketRepositoryError> {
        let mut tickets = self.tickets.write().await;
        if tickets.iter().any(|stored| stored.id() == ticket.id()) {
            return Err(TicketRepositoryError::duplicate_id(ticket.id().as_ref()));
        }
        tickets.push(ticket.clone());
        Ok(())
    }

    async fn list(&self, filter: &TicketListFilter) -> Result<Vec<Ticket>, TicketRepositoryError> {
        let tickets = self.tickets.read().await;
        Ok(filter.apply(tickets.iter()))
    }

    async fn find_by_id(&self, id: &TicketId) -> Result<Option<Ticket>, TicketRepositoryError> {
        let tickets = self.tickets.read().await;
        Ok(tickets.iter().find(|ticket| ticket.id() == id).cloned())
    }

    async fn delete_by_id(&self, id: &TicketId) -> Result<bool, TicketRepositoryError> {
        let mut tickets = self.tickets.write().await;
        let before = tickets.len();
        tickets.retain(|ticket| ticket.id() != id);
        Ok(tickets.len() < before)
    }
}
