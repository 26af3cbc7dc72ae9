//! Driving port for ticket mutations: create and delete.

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{Error, NewTicket, Ticket, TicketId};

/// Raw create input as received from an adapter. Validation happens in the
/// service so every adapter shares the same rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTicketRequest {
    /// Untrimmed title.
    pub title: String,
    /// Untrimmed description; `None` becomes empty.
    pub description: Option<String>,
}

/// Result of a successful create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTicketResponse {
    /// The persisted ticket including generated fields.
    pub ticket: Ticket,
}

/// Delete input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTicketRequest {
    /// Public identifier of the ticket to remove.
    pub id: TicketId,
}

/// Result of a successful delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTicketResponse {
    /// Identifier of the removed ticket.
    pub id: TicketId,
}

/// Use-case port for changing the ticket collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketCommand: Send + Sync {
    /// Validate input, assign an id and timestamps, persist the ticket.
    async fn create_ticket(&self, request: CreateTicketRequest)
    -> Result<CreateTicketResponse, Error>;

    /// Hard-delete one ticket; `NotFound` when nothing matched.
    async fn delete_ticket(&self, request: DeleteTicketRequest)
    -> Result<DeleteTicketResponse, Error>;
}

/// Command port that validates and echoes tickets without storing them.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTicketCommand;

#[async_trait]
impl TicketCommand for FixtureTicketCommand {
    async fn create_ticket(
        &self,
        request: CreateTicketRequest,
    ) -> Result<CreateTicketResponse, Error> {
        let ticket = NewTicket::new(&request.title, request.description.as_deref())
            .map_err(|err| Error::invalid_request(err.to_string()))?
            .into_ticket(TicketId::random(), Utc::now());
        Ok(CreateTicketResponse { ticket })
    }

    async fn delete_ticket(
        &self,
        request: DeleteTicketRequest,
    ) -> Result<DeleteTicketResponse, Error> {
        Ok(DeleteTicketResponse { id: request.id })
    }
}
