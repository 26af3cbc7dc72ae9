//! Shared validation helpers for inbound HTTP adapters.
//!
//! Query and path values arrive as raw strings so that malformed input is
//! reported through the standard error payload with a machine-readable
//! `details.code`, rather than the framework's plain-text rejection.

use std::num::IntErrorKind;

use serde_json::json;

use crate::domain::{Error, TicketId, TicketStatus};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidStatus,
    InvalidInteger,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidStatus => "invalid_status",
            ErrorCode::InvalidInteger => "invalid_integer",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: &'static str,
    message: String,
}

impl ValidationError {
    fn new(field: FieldName, message: impl Into<String>) -> Self {
        Self {
            field: field.as_str(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: &str) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value,
            "code": code.as_str(),
        }))
    }
}

/// Trim a raw value and drop it when blank.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|raw| !raw.is_empty())
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    ValidationError::new(field, format!("missing required field: {name}"))
        .with_code(ErrorCode::MissingField)
}

/// Parse an optional status filter. Blank values count as absent.
pub(crate) fn parse_optional_status(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<TicketStatus>, Error> {
    non_blank(value)
        .map(|raw| {
            raw.parse::<TicketStatus>().map_err(|_| {
                let name = field.as_str();
                ValidationError::new(
                    field,
                    format!("{name} must be one of open, in-progress, closed"),
                )
                .with_value(ErrorCode::InvalidStatus, &raw)
            })
        })
        .transpose()
}

/// Parse an optional integer. Range checks are left to the caller.
///
/// Integers too large for `i64` saturate so the caller's clamp still
/// applies; only non-numeric text is rejected.
pub(crate) fn parse_optional_integer(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<i64>, Error> {
    non_blank(value)
        .map(|raw| {
            parse_saturating(&raw).ok_or_else(|| {
                let name = field.as_str();
                ValidationError::new(field, format!("{name} must be an integer"))
                    .with_value(ErrorCode::InvalidInteger, &raw)
            })
        })
        .transpose()
}

fn parse_saturating(raw: &str) -> Option<i64> {
    match raw.parse::<i64>() {
        Ok(value) => Some(value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Parse a path id used to look a ticket up.
///
/// An id that can never have been issued simply names no ticket, so it is
/// reported as `not_found` rather than as a malformed request.
pub(crate) fn parse_lookup_id(value: String) -> Result<TicketId, Error> {
    TicketId::new(value.as_str())
        .map_err(|_| Error::not_found(format!("ticket {} not found", value.trim())))
}
