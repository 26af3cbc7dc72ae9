//! Builder for the HTTP state ports.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};

use crate::domain::TicketService;
use crate::domain::ports::{TicketCommand, TicketQuery, TicketRepository};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryTicketRepository;
use crate::outbound::persistence::DieselTicketRepository;

use super::ServerConfig;

/// Wrap one service in both driving ports.
fn service_ports<R>(repository: Arc<R>, clock: Arc<dyn Clock>) -> HttpState
where
    R: TicketRepository + 'static,
{
    let service = Arc::new(TicketService::new(repository, clock));
    let tickets: Arc<dyn TicketCommand> = service.clone();
    let tickets_query: Arc<dyn TicketQuery> = service;
    HttpState::new(tickets, tickets_query)
}

/// Build HTTP state backed by PostgreSQL when a pool is configured,
/// otherwise by the in-memory repository.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let state = match &config.db_pool {
        Some(pool) => service_ports(Arc::new(DieselTicketRepository::new(pool.clone())), clock),
        None => service_ports(Arc::new(InMemoryTicketRepository::new()), clock),
    };
    web::Data::new(state)
}
