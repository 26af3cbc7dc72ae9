//! Ticket entity and its validated value objects.
//!
//! A ticket is created once, read many times and eventually hard-deleted.
//! There is no edit path, so every type here is immutable after
//! construction.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum title length in characters.
pub const TICKET_TITLE_MAX: usize = 200;
/// Maximum description length in characters.
pub const TICKET_DESCRIPTION_MAX: usize = 5000;
/// Maximum length accepted for a caller-supplied ticket identifier.
pub const TICKET_ID_MAX: usize = 64;
/// Number of random bytes behind a generated identifier.
const TICKET_ID_BYTES: usize = 5;

/// Validation errors raised by ticket constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TicketValidationError {
    /// Title was empty or whitespace only.
    #[error("title must not be empty")]
    EmptyTitle,
    /// Title exceeded the maximum length.
    #[error("title must be at most {max} characters")]
    TitleTooLong {
        /// Permitted maximum.
        max: usize,
    },
    /// Description exceeded the maximum length.
    #[error("description must be at most {max} characters")]
    DescriptionTooLong {
        /// Permitted maximum.
        max: usize,
    },
    /// Identifier was empty or whitespace only.
    #[error("ticket id must not be empty")]
    EmptyId,
    /// Identifier exceeded the maximum length.
    #[error("ticket id must be at most {max} characters")]
    IdTooLong {
        /// Permitted maximum.
        max: usize,
    },
    /// Status text did not name a known status.
    #[error("status must be one of open, in-progress, closed")]
    UnknownStatus,
    /// `updated_at` preceded `created_at`.
    #[error("updatedAt must not precede createdAt")]
    TimestampsOutOfOrder,
}

/// Opaque public identifier of a ticket.
///
/// Generated identifiers are ten lowercase hex characters. Identifiers read
/// back from callers are only checked for shape, so a lookup for an unknown
/// value misses rather than failing validation.
///
/// # Examples
/// ```
/// use ticket_service::domain::TicketId;
///
/// let id = TicketId::random();
/// assert_eq!(id.as_ref().len(), 10);
/// assert!(id.as_ref().chars().all(|c| c.is_ascii_hexdigit()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TicketId(String);

impl TicketId {
    /// Validate a caller-supplied identifier.
    pub fn new(id: impl Into<String>) -> Result<Self, TicketValidationError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(TicketValidationError::EmptyId);
        }
        if trimmed.chars().count() > TICKET_ID_MAX {
            return Err(TicketValidationError::IdTooLong { max: TICKET_ID_MAX });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Generate a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        let bytes: [u8; TICKET_ID_BYTES] = rand::random();
        Self(hex::encode(bytes))
    }
}

impl AsRef<str> for TicketId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TicketId> for String {
    fn from(value: TicketId) -> Self {
        value.0
    }
}

impl TryFrom<String> for TicketId {
    type Error = TicketValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Trimmed, non-empty ticket title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TicketTitle(String);

impl TicketTitle {
    /// Trim and validate a title.
    ///
    /// # Examples
    /// ```
    /// use ticket_service::domain::{TicketTitle, TicketValidationError};
    ///
    /// let title = TicketTitle::new("  VPN broken ").expect("valid title");
    /// assert_eq!(title.as_ref(), "VPN broken");
    /// assert_eq!(TicketTitle::new("   "), Err(TicketValidationError::EmptyTitle));
    /// ```
    pub fn new(title: impl AsRef<str>) -> Result<Self, TicketValidationError> {
        let trimmed = title.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TicketValidationError::EmptyTitle);
        }
        if trimmed.chars().count() > TICKET_TITLE_MAX {
            return Err(TicketValidationError::TitleTooLong {
                max: TICKET_TITLE_MAX,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for TicketTitle {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<TicketTitle> for String {
    fn from(value: TicketTitle) -> Self {
        value.0
    }
}

impl TryFrom<String> for TicketTitle {
    type Error = TicketValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Trimmed ticket description; may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TicketDescription(String);

impl TicketDescription {
    /// Trim and validate a description.
    pub fn new(description: impl AsRef<str>) -> Result<Self, TicketValidationError> {
        let trimmed = description.as_ref().trim();
        if trimmed.chars().count() > TICKET_DESCRIPTION_MAX {
            return Err(TicketValidationError::DescriptionTooLong {
                max: TICKET_DESCRIPTION_MAX,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Whether the description is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for TicketDescription {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<TicketDescription> for String {
    fn from(value: TicketDescription) -> Self {
        value.0
    }
}

impl TryFrom<String> for TicketDescription {
    type Error = TicketValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Workflow status of a ticket.
///
/// Membership is the only rule; no transitions are enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketStatus {
    /// Newly raised.
    #[default]
    #[serde(rename = "open")]
    Open,
    /// Being worked on.
    #[serde(rename = "in-progress", alias = "in progress")]
    InProgress,
    /// Resolved.
    #[serde(rename = "closed")]
    Closed,
}

impl TicketStatus {
    /// Wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in-progress",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = TicketValidationError;

    /// Parse a status, accepting the legacy `in progress` spelling.
    ///
    /// # Examples
    /// ```
    /// use ticket_service::domain::TicketStatus;
    ///
    /// assert_eq!("Closed".parse::<TicketStatus>(), Ok(TicketStatus::Closed));
    /// assert_eq!(
    ///     "in progress".parse::<TicketStatus>(),
    ///     Ok(TicketStatus::InProgress)
    /// );
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "in-progress" | "in progress" | "in_progress" => Ok(Self::InProgress),
            "closed" => Ok(Self::Closed),
            _ => Err(TicketValidationError::UnknownStatus),
        }
    }
}

/// Validated input for creating a ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTicket {
    title: TicketTitle,
    description: TicketDescription,
}

impl NewTicket {
    /// Validate raw create input. A missing description becomes empty.
    pub fn new(title: &str, description: Option<&str>) -> Result<Self, TicketValidationError> {
        Ok(Self {
            title: TicketTitle::new(title)?,
            description: description
                .map(TicketDescription::new)
                .transpose()?
                .unwrap_or_default(),
        })
    }

    /// Validated title.
    pub fn title(&self) -> &TicketTitle {
        &self.title
    }

    /// Validated description.
    pub fn description(&self) -> &TicketDescription {
        &self.description
    }

    /// Materialise a ticket with the given identity and creation time.
    ///
    /// New tickets start `open` with both timestamps equal.
    #[must_use]
    pub fn into_ticket(self, id: TicketId, now: DateTime<Utc>) -> Ticket {
        Ticket {
            id,
            title: self.title,
            description: self.description,
            status: TicketStatus::Open,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Raw field bundle accepted by [`Ticket::new`].
#[derive(Debug, Clone)]
pub struct TicketDraft {
    /// Public identifier.
    pub id: TicketId,
    /// Title.
    pub title: TicketTitle,
    /// Description.
    pub description: TicketDescription,
    /// Status.
    pub status: TicketStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last persistence timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Support ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    id: TicketId,
    title: TicketTitle,
    description: TicketDescription,
    status: TicketStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Ticket {
    /// Build a ticket from already-validated parts.
    pub fn new(draft: TicketDraft) -> Result<Self, TicketValidationError> {
        let TicketDraft {
            id,
            title,
            description,
            status,
            created_at,
            updated_at,
        } = draft;
        if updated_at < created_at {
            return Err(TicketValidationError::TimestampsOutOfOrder);
        }
        Ok(Self {
            id,
            title,
            description,
            status,
            created_at,
            updated_at,
        })
    }

    /// Public identifier.
    pub fn id(&self) -> &TicketId {
        &self.id
    }

    /// Title.
    pub fn title(&self) -> &TicketTitle {
        &self.title
    }

    /// Description.
    pub fn description(&self) -> &TicketDescription {
        &self.description
    }

    /// Status.
    pub fn status(&self) -> TicketStatus {
        self.status
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last persistence timestamp.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
#[path = "ticket_tests.rs"]
mod tests;
