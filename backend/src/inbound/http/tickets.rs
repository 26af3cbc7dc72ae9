//! Ticket HTTP handlers.
//!
//! ```text
//! GET    /
//! POST   /ticket/create
//! GET    /ticket/view?status=&q=&limit=&offset=
//! GET    /ticket/view/{id}
//! DELETE /ticket/delete/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{
    CreateTicketRequest, CreateTicketResponse, DeleteTicketRequest, DeleteTicketResponse,
    GetTicketRequest, ListTicketsRequest,
};
use crate::domain::{Ticket, TicketListFilter};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, missing_field_error, parse_lookup_id, parse_optional_integer,
    parse_optional_status,
};

const CREATED_MESSAGE: &str = "Ticket created successfully";
const DELETED_MESSAGE: &str = "Ticket deleted successfully";
const RUNNING_MESSAGE: &str = "API is running";

fn rfc3339(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Wire representation of a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketResponseBody {
    #[schema(example = "0a1b2c3d4e")]
    pub id: String,
    #[schema(example = "VPN broken")]
    pub title: String,
    #[schema(example = "Cannot connect from home")]
    pub description: String,
    #[schema(example = "open")]
    pub status: String,
    #[schema(format = "date-time")]
    pub created_at: String,
    #[schema(format = "date-time")]
    pub updated_at: String,
}

impl From<Ticket> for TicketResponseBody {
    fn from(ticket: Ticket) -> Self {
        Self {
            id: ticket.id().to_string(),
            title: ticket.title().as_ref().to_owned(),
            description: ticket.description().as_ref().to_owned(),
            status: ticket.status().as_str().to_owned(),
            created_at: rfc3339(ticket.created_at()),
            updated_at: rfc3339(ticket.updated_at()),
        }
    }
}

/// Request payload for creating a ticket.
///
/// `title` is optional at the wire level so a missing title is reported
/// with the same field-level payload as a blank one.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketRequestBody {
    #[schema(example = "VPN broken")]
    #[serde(default)]
    pub title: Option<String>,
    #[schema(example = "Cannot connect from home")]
    #[serde(default)]
    pub description: Option<String>,
}

/// Response payload for ticket creation.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketResponseBody {
    #[schema(example = "Ticket created successfully")]
    pub message: String,
    pub ticket: TicketResponseBody,
}

impl From<CreateTicketResponse> for CreateTicketResponseBody {
    fn from(value: CreateTicketResponse) -> Self {
        Self {
            message: CREATED_MESSAGE.to_owned(),
            ticket: value.ticket.into(),
        }
    }
}

/// Response payload for ticket deletion.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTicketResponseBody {
    #[schema(example = "Ticket deleted successfully")]
    pub message: String,
    #[schema(example = "0a1b2c3d4e")]
    pub id: String,
}

impl From<DeleteTicketResponse> for DeleteTicketResponseBody {
    fn from(value: DeleteTicketResponse) -> Self {
        Self {
            message: DELETED_MESSAGE.to_owned(),
            id: value.id.to_string(),
        }
    }
}

/// Plain status message.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct MessageResponseBody {
    #[schema(example = "API is running")]
    pub message: String,
}

/// Raw list query. Values are parsed by the handler so malformed input
/// produces a field-level error.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListTicketsQuery {
    /// Exact status: `open`, `in-progress` or `closed`.
    pub status: Option<String>,
    /// Case-insensitive text matched against title or description.
    pub q: Option<String>,
    /// Page size, clamped to 1..=200. Defaults to 50.
    pub limit: Option<String>,
    /// Records to skip, clamped to at least 0.
    pub offset: Option<String>,
}

fn parse_list_query(query: ListTicketsQuery) -> ApiResult<TicketListFilter> {
    let status = parse_optional_status(query.status, FieldName::new("status"))?;
    let limit = parse_optional_integer(query.limit, FieldName::new("limit"))?;
    let offset = parse_optional_integer(query.offset, FieldName::new("offset"))?;
    Ok(TicketListFilter::new(
        status,
        query.q.as_deref(),
        limit,
        offset,
    ))
}

/// Service banner.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service is running", body = MessageResponseBody)),
    tags = ["tickets"],
    operation_id = "index"
)]
#[get("/")]
pub async fn index() -> web::Json<MessageResponseBody> {
    web::Json(MessageResponseBody {
        message: RUNNING_MESSAGE.to_owned(),
    })
}

/// Create a ticket.
///
/// # Examples
/// ```no_run
/// use actix_web::{HttpResponse, web};
/// use ticket_service::inbound::http::ApiResult;
/// use ticket_service::inbound::http::state::HttpState;
/// use ticket_service::inbound::http::tickets::{CreateTicketRequestBody, create_ticket};
///
/// async fn call_handler(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
///     let payload = web::Json(CreateTicketRequestBody {
///         title: Some("VPN broken".to_owned()),
///         description: Some("Cannot connect from home".to_owned()),
///     });
///     create_ticket(state, payload).await
/// }
/// ```
#[utoipa::path(
    post,
    path = "/ticket/create",
    request_body = CreateTicketRequestBody,
    responses(
        (status = 201, description = "Ticket created", body = CreateTicketResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Ticket store failure", body = ErrorSchema)
    ),
    tags = ["tickets"],
    operation_id = "createTicket"
)]
#[post("/ticket/create")]
pub async fn create_ticket(
    state: web::Data<HttpState>,
    payload: web::Json<CreateTicketRequestBody>,
) -> ApiResult<HttpResponse> {
    let CreateTicketRequestBody { title, description } = payload.into_inner();
    let title = title.ok_or_else(|| missing_field_error(FieldName::new("title")))?;

    let response = state
        .tickets
        .create_ticket(CreateTicketRequest { title, description })
        .await?;

    Ok(HttpResponse::Created().json(CreateTicketResponseBody::from(response)))
}

/// List tickets, newest first.
#[utoipa::path(
    get,
    path = "/ticket/view",
    params(ListTicketsQuery),
    responses(
        (status = 200, description = "Matching tickets", body = [TicketResponseBody]),
        (status = 400, description = "Invalid query", body = ErrorSchema),
        (status = 500, description = "Ticket store failure", body = ErrorSchema)
    ),
    tags = ["tickets"],
    operation_id = "listTickets"
)]
#[get("/ticket/view")]
pub async fn list_tickets(
    state: web::Data<HttpState>,
    query: web::Query<ListTicketsQuery>,
) -> ApiResult<web::Json<Vec<TicketResponseBody>>> {
    let filter = parse_list_query(query.into_inner())?;
    let response = state
        .tickets_query
        .list_tickets(ListTicketsRequest { filter })
        .await?;
    Ok(web::Json(
        response
            .tickets
            .into_iter()
            .map(TicketResponseBody::from)
            .collect(),
    ))
}

/// Fetch one ticket by its public id.
#[utoipa::path(
    get,
    path = "/ticket/view/{id}",
    params(("id" = String, Path, description = "Public ticket identifier")),
    responses(
        (status = 200, description = "Ticket", body = TicketResponseBody),
        (status = 404, description = "Unknown ticket", body = ErrorSchema),
        (status = 500, description = "Ticket store failure", body = ErrorSchema)
    ),
    tags = ["tickets"],
    operation_id = "viewTicket"
)]
#[get("/ticket/view/{id}")]
pub async fn view_ticket(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<TicketResponseBody>> {
    let id = parse_lookup_id(path.into_inner())?;
    let response = state
        .tickets_query
        .get_ticket(GetTicketRequest { id })
        .await?;
    Ok(web::Json(response.ticket.into()))
}

/// Delete one ticket by its public id.
#[utoipa::path(
    delete,
    path = "/ticket/delete/{id}",
    params(("id" = String, Path, description = "Public ticket identifier")),
    responses(
        (status = 200, description = "Ticket deleted", body = DeleteTicketResponseBody),
        (status = 404, description = "Unknown ticket", body = ErrorSchema),
        (status = 500, description = "Ticket store failure", body = ErrorSchema)
    ),
    tags = ["tickets"],
    operation_id = "deleteTicket"
)]
#[delete("/ticket/delete/{id}")]
pub async fn delete_ticket(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeleteTicketResponseBody>> {
    let id = parse_lookup_id(path.into_inner())?;
    let response = state
        .tickets
        .delete_ticket(DeleteTicketRequest { id })
        .await?;
    Ok(web::Json(response.into()))
}

#[cfg(test)]
#[path = "tickets_tests.rs"]
mod tests;
