//! Driving port for ticket reads.

use async_trait::async_trait;

use crate::domain::{Error, Ticket, TicketId, TicketListFilter};

/// List input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTicketsRequest {
    /// Conditions and window.
    pub filter: TicketListFilter,
}

/// List result, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTicketsResponse {
    /// Matching tickets inside the requested window.
    pub tickets: Vec<Ticket>,
}

/// Single-ticket lookup input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetTicketRequest {
    /// Public identifier.
    pub id: TicketId,
}

/// Single-ticket lookup result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetTicketResponse {
    /// The ticket.
    pub ticket: Ticket,
}

/// Use-case port for reading tickets.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketQuery: Send + Sync {
    /// Tickets matching the filter. No match is an empty list, not an error.
    async fn list_tickets(&self, request: ListTicketsRequest)
    -> Result<ListTicketsResponse, Error>;

    /// One ticket by public id; `NotFound` when absent.
    async fn get_ticket(&self, request: GetTicketRequest) -> Result<GetTicketResponse, Error>;
}

/// Query port over an empty collection.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTicketQuery;

#[async_trait]
impl TicketQuery for FixtureTicketQuery {
    async fn list_tickets(
        &self,
        _request: ListTicketsRequest,
    ) -> Result<ListTicketsResponse, Error> {
        Ok(ListTicketsResponse::default())
    }

    async fn get_ticket(&self, request: GetTicketRequest) -> Result<GetTicketResponse, Error> {
        Err(Error::not_found(format!("ticket {} not found", request.id)))
    }
}
