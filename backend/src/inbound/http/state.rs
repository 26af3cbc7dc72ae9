//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{FixtureTicketCommand, FixtureTicketQuery, TicketCommand, TicketQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Create and delete use cases.
    pub tickets: Arc<dyn TicketCommand>,
    /// List and lookup use cases.
    pub tickets_query: Arc<dyn TicketQuery>,
}

impl HttpState {
    /// Construct state from the ticket ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use ticket_service::domain::ports::{FixtureTicketCommand, FixtureTicketQuery};
    /// use ticket_service::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(FixtureTicketCommand), Arc::new(FixtureTicketQuery));
    /// let _tickets = state.tickets.clone();
    /// ```
    pub fn new(tickets: Arc<dyn TicketCommand>, tickets_query: Arc<dyn TicketQuery>) -> Self {
        Self {
            tickets,
            tickets_query,
        }
    }
}

impl Default for HttpState {
    fn default() -> Self {
        Self::new(Arc::new(FixtureTicketCommand), Arc::new(FixtureTicketQuery))
    }
}
