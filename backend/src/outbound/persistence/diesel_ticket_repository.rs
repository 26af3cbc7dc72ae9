//! PostgreSQL-backed `TicketRepository` implementation using Diesel ORM.
//!
//! Rows are re-validated through the domain constructors on read, so a row
//! edited out-of-band into an invalid shape surfaces as a query error rather
//! than leaking into responses.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{TicketRepository, TicketRepositoryError};
use crate::domain::{
    Ticket, TicketDescription, TicketDraft, TicketId, TicketListFilter, TicketStatus, TicketTitle,
};

use super::diesel_basic_error_mapping::{
    is_unique_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{NewTicketRow, TicketRow};
use super::pool::{DbPool, PoolError};
use super::schema::tickets;

/// Diesel-backed implementation of the ticket repository port.
#[derive(Clone)]
pub struct DieselTicketRepository {
    pool: DbPool,
}

impl DieselTicketRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> TicketRepositoryError {
    map_basic_pool_error(error, TicketRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> TicketRepositoryError {
    map_basic_diesel_error(
        error,
        TicketRepositoryError::query,
        TicketRepositoryError::connection,
    )
}

fn map_insert_error(error: diesel::result::Error, id: &TicketId) -> TicketRepositoryError {
    if is_unique_violation(&error) {
        TicketRepositoryError::duplicate_id(id.as_ref())
    } else {
        map_diesel_error(error)
    }
}

/// Build an `ILIKE` pattern matching `text` literally anywhere in a column.
fn contains_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for ch in text.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn window_bound(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Convert a database row into a validated domain ticket.
fn row_to_ticket(row: TicketRow) -> Result<Ticket, TicketRepositoryError> {
    let TicketRow {
        public_id,
        title,
        description,
        status,
        created_at,
        updated_at,
    } = row;

    let invalid = |err: crate::domain::TicketValidationError| {
        TicketRepositoryError::query(format!("stored ticket is invalid: {err}"))
    };

    Ticket::new(TicketDraft {
        id: TicketId::new(public_id).map_err(invalid)?,
        title: TicketTitle::new(title).map_err(invalid)?,
        description: TicketDescription::new(description).map_err(invalid)?,
        status: status.parse::<TicketStatus>().map_err(invalid)?,
        created_at,
        updated_at,
    })
    .map_err(invalid)
}

#[async_trait]
impl TicketRepository for DieselTicketRepository {
    async fn insert(&self, ticket: &Ticket) -> Result<(), TicketRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewTicketRow {
            public_id: ticket.id().as_ref(),
            title: ticket.title().as_ref(),
            description: ticket.description().as_ref(),
            status: ticket.status().as_str(),
            created_at: ticket.created_at(),
            updated_at: ticket.updated_at(),
        };

        diesel::insert_into(tickets::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_insert_error(err, ticket.id()))
    }

    async fn list(&self, filter: &TicketListFilter) -> Result<Vec<Ticket>, TicketRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = tickets::table
            .select(TicketRow::as_select())
            .into_boxed();
        if let Some(status) = filter.status() {
            query = query.filter(tickets::status.eq(status.as_str()));
        }
        if let Some(text) = filter.text() {
            // Case folding follows the column collation; see
            // `TicketListFilter::matches` for the in-memory counterpart.
            let pattern = contains_pattern(text);
            query = query.filter(
                tickets::title
                    .ilike(pattern.clone())
                    .or(tickets::description.ilike(pattern)),
            );
        }

        let rows: Vec<TicketRow> = query
            .order((tickets::created_at.desc(), tickets::public_id.desc()))
            .offset(window_bound(filter.offset()))
            .limit(window_bound(filter.limit()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_ticket).collect()
    }

    async fn find_by_id(&self, id: &TicketId) -> Result<Option<Ticket>, TicketRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = tickets::table
            .filter(tickets::public_id.eq(id.as_ref()))
            .select(TicketRow::as_select())
            .first::<TicketRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_ticket).transpose()
    }

    async fn delete_by_id(&self, id: &TicketId) -> Result<bool, TicketRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(tickets::table.filter(tickets::public_id.eq(id.as_ref())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(removed > 0)
    }
}
