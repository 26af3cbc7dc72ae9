//! Ticket use cases implementing the command and query driving ports.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    CreateTicketRequest, CreateTicketResponse, DeleteTicketRequest, DeleteTicketResponse,
    GetTicketRequest, GetTicketResponse, ListTicketsRequest, ListTicketsResponse, TicketCommand,
    TicketQuery, TicketRepository, TicketRepositoryError,
};
use crate::domain::{Error, NewTicket, TicketId, TicketValidationError};

/// Attempts at drawing an unused random id before giving up.
const MAX_ID_ATTEMPTS: u32 = 3;

fn map_validation_error(error: TicketValidationError) -> Error {
    let field = match error {
        TicketValidationError::EmptyTitle | TicketValidationError::TitleTooLong { .. } => "title",
        TicketValidationError::DescriptionTooLong { .. } => "description",
        TicketValidationError::EmptyId | TicketValidationError::IdTooLong { .. } => "id",
        TicketValidationError::UnknownStatus => "status",
        TicketValidationError::TimestampsOutOfOrder => "updatedAt",
    };
    Error::invalid_request(error.to_string()).with_details(json!({
        "field": field,
        "code": "validation_failed",
    }))
}

fn map_repository_error(error: TicketRepositoryError) -> Error {
    Error::internal(error.to_string())
}

fn not_found(id: &TicketId) -> Error {
    Error::not_found(format!("ticket {id} not found"))
}

/// Ticket service over a [`TicketRepository`].
///
/// Validation always runs before the repository is touched, and repository
/// failures are reported as internal errors without retrying.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use mockable::DefaultClock;
/// use ticket_service::domain::TicketService;
/// use ticket_service::outbound::memory::InMemoryTicketRepository;
///
/// let service = TicketService::new(
///     Arc::new(InMemoryTicketRepository::default()),
///     Arc::new(DefaultClock),
/// );
/// # let _ = service;
/// ```
pub struct TicketService<R> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> Clone for TicketService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R> TicketService<R> {
    /// Create a service reading the current time from `clock`.
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }
}

#[async_trait]
impl<R> TicketCommand for TicketService<R>
where
    R: TicketRepository,
{
    async fn create_ticket(
        &self,
        request: CreateTicketRequest,
    ) -> Result<CreateTicketResponse, Error> {
        let new_ticket = NewTicket::new(&request.title, request.description.as_deref())
            .map_err(map_validation_error)?;

        for attempt in 1..=MAX_ID_ATTEMPTS {
            let ticket = new_ticket
                .clone()
                .into_ticket(TicketId::random(), self.clock.utc());
            match self.repository.insert(&ticket).await {
                Ok(()) => {
                    info!(ticket_id = %ticket.id(), "ticket created");
                    return Ok(CreateTicketResponse { ticket });
                }
                Err(TicketRepositoryError::DuplicateId { id }) => {
                    warn!(ticket_id = %id, attempt, "ticket id collision, drawing another");
                }
                Err(err) => return Err(map_repository_error(err)),
            }
        }

        Err(Error::internal(format!(
            "could not assign a unique ticket id after {MAX_ID_ATTEMPTS} attempts"
        )))
    }

    async fn delete_ticket(
        &self,
        request: DeleteTicketRequest,
    ) -> Result<DeleteTicketResponse, Error> {
        let removed = self
            .repository
            .delete_by_id(&request.id)
            .await
            .map_err(map_repository_error)?;
        if !removed {
            return Err(not_found(&request.id));
        }
        info!(ticket_id = %request.id, "ticket deleted");
        Ok(DeleteTicketResponse { id: request.id })
    }
}

#[async_trait]
impl<R> TicketQuery for TicketService<R>
where
    R: TicketRepository,
{
    async fn list_tickets(
        &self,
        request: ListTicketsRequest,
    ) -> Result<ListTicketsResponse, Error> {
        let tickets = self
            .repository
            .list(&request.filter)
            .await
            .map_err(map_repository_error)?;
        debug!(
            count = tickets.len(),
            limit = request.filter.limit(),
            offset = request.filter.offset(),
            "tickets listed"
        );
        Ok(ListTicketsResponse { tickets })
    }

    async fn get_ticket(&self, request: GetTicketRequest) -> Result<GetTicketResponse, Error> {
        let ticket = self
            .repository
            .find_by_id(&request.id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(&request.id))?;
        debug!(ticket_id = %ticket.id(), "ticket fetched");
        Ok(GetTicketResponse { ticket })
    }
}

#[cfg(test)]
#[path = "ticket_service_tests.rs"]
mod tests;
