//! Domain ports for the hexagonal boundary.
//!
//! `TicketRepository` is the driven (outbound) port implemented by the
//! persistence adapters. `TicketCommand` and `TicketQuery` are the driving
//! (inbound) ports the HTTP layer calls.

mod macros;
pub(crate) use macros::define_port_error;

mod ticket_command;
mod ticket_query;
mod ticket_repository;

#[cfg(test)]
pub use ticket_command::MockTicketCommand;
pub use ticket_command::{
    CreateTicketRequest, CreateTicketResponse, DeleteTicketRequest, DeleteTicketResponse,
    FixtureTicketCommand, TicketCommand,
};
#[cfg(test)]
pub use ticket_query::MockTicketQuery;
pub use ticket_query::{
    FixtureTicketQuery, GetTicketRequest, GetTicketResponse, ListTicketsRequest,
    ListTicketsResponse, TicketQuery,
};
#[cfg(test)]
pub use ticket_repository::MockTicketRepository;
pub use ticket_repository::{FixtureTicketRepository, TicketRepository, TicketRepositoryError};
