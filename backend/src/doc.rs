//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the ticket and health endpoints together with the
//! wrapper schemas from `inbound::http::schemas`, which stand in for the
//! framework-agnostic domain error types.
//!
//! The document backs Swagger UI (debug builds) and is exported via
//! `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::tickets::{
    CreateTicketRequestBody, CreateTicketResponseBody, DeleteTicketResponseBody,
    MessageResponseBody, TicketResponseBody,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ticket service API",
        description = "Create, list, view and delete support tickets."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::tickets::index,
        crate::inbound::http::tickets::create_ticket,
        crate::inbound::http::tickets::list_tickets,
        crate::inbound::http::tickets::view_ticket,
        crate::inbound::http::tickets::delete_ticket,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        TicketResponseBody,
        CreateTicketRequestBody,
        CreateTicketResponseBody,
        DeleteTicketResponseBody,
        MessageResponseBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "tickets", description = "Ticket lifecycle operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the registered paths and schema fields.

    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    use super::*;

    // utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/")]
    #[case("/ticket/create")]
    #[case("/ticket/view")]
    #[case("/ticket/view/{id}")]
    #[case("/ticket/delete/{id}")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn every_route_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[rstest]
    fn error_schema_uses_wire_field_names() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        for field in ["code", "message", "traceId", "details"] {
            assert_object_schema_has_field(error_schema, field);
        }
    }

    #[rstest]
    fn ticket_schema_uses_camel_case_timestamps() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let ticket = schemas
            .get("TicketResponseBody")
            .expect("TicketResponseBody schema");

        assert_object_schema_has_field(ticket, "createdAt");
        assert_object_schema_has_field(ticket, "updatedAt");
    }
}
