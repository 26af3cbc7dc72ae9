//! Domain primitives, ports and services for the ticket store.
//!
//! Purpose: Define strongly typed ticket entities and the use cases the HTTP
//! and persistence adapters plug into. Types are immutable once validated;
//! invariants and serialisation contracts are documented on each type.
//!
//! Public surface:
//! - Ticket, NewTicket, TicketId, TicketStatus: the ticket aggregate.
//! - TicketListFilter: list conditions and window.
//! - TicketService: implementation of the command and query ports.
//! - Error, ErrorCode: transport-agnostic failure payload.
//! - TraceId: request correlation identifier.

pub mod error;
pub mod ports;
pub mod ticket;
pub mod ticket_filter;
pub mod ticket_service;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::ticket::{
    NewTicket, TICKET_DESCRIPTION_MAX, TICKET_ID_MAX, TICKET_TITLE_MAX, Ticket, TicketDescription,
    TicketDraft, TicketId, TicketStatus, TicketTitle, TicketValidationError,
};
pub use self::ticket_filter::{DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT, TicketListFilter, newest_first};
pub use self::ticket_service::TicketService;
pub use self::trace_id::TraceId;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use ticket_service::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<()> {
///     Err(Error::not_found("ticket abc not found"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
