//! Filter and window applied when listing tickets.

use std::cmp::Ordering;

use super::{Ticket, TicketStatus};

/// Default page size when the caller gives none.
pub const DEFAULT_LIST_LIMIT: usize = 50;
/// Largest page size a caller may request.
pub const MAX_LIST_LIMIT: usize = 200;

/// Conjunctive ticket filter with an offset/limit window.
///
/// `limit` is always within `1..=MAX_LIST_LIMIT`; out-of-range requests are
/// clamped rather than rejected.
///
/// # Examples
/// ```
/// use ticket_service::domain::TicketListFilter;
///
/// let filter = TicketListFilter::new(None, Some("  vpn "), Some(500), Some(-3));
/// assert_eq!(filter.limit(), 200);
/// assert_eq!(filter.offset(), 0);
/// assert_eq!(filter.text(), Some("vpn"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketListFilter {
    status: Option<TicketStatus>,
    text: Option<String>,
    limit: usize,
    offset: usize,
}

impl Default for TicketListFilter {
    fn default() -> Self {
        Self {
            status: None,
            text: None,
            limit: DEFAULT_LIST_LIMIT,
            offset: 0,
        }
    }
}

impl TicketListFilter {
    /// Build a filter from raw inputs, clamping the window.
    #[must_use]
    pub fn new(
        status: Option<TicketStatus>,
        text: Option<&str>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Self {
        let text = text
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_owned);
        Self {
            status,
            text,
            limit: clamp_limit(limit),
            offset: clamp_offset(offset),
        }
    }

    /// Required status, if any.
    pub fn status(&self) -> Option<TicketStatus> {
        self.status
    }

    /// Text to look for in title or description, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Maximum number of tickets returned.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of matching tickets skipped before the window starts.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Whether `ticket` satisfies the status and text conditions.
    ///
    /// Text matching is a literal, case-insensitive substring test against
    /// the title or the description. Folding uses Unicode `to_lowercase`,
    /// while PostgreSQL's `ILIKE` folds by collation; the two agree for ASCII
    /// and Latin text but may differ for other scripts.
    pub fn matches(&self, ticket: &Ticket) -> bool {
        if self.status.is_some_and(|status| status != ticket.status()) {
            return false;
        }
        match self.text.as_deref() {
            None => true,
            Some(needle) => {
                let needle = needle.to_lowercase();
                contains_folded(ticket.title().as_ref(), &needle)
                    || contains_folded(ticket.description().as_ref(), &needle)
            }
        }
    }

    /// Filter, order newest first and window `tickets`.
    pub fn apply<'a, I>(&self, tickets: I) -> Vec<Ticket>
    where
        I: IntoIterator<Item = &'a Ticket>,
    {
        let mut matching: Vec<&Ticket> = tickets
            .into_iter()
            .filter(|ticket| self.matches(ticket))
            .collect();
        matching.sort_by(|a, b| newest_first(a, b));
        matching
            .into_iter()
            .skip(self.offset)
            .take(self.limit)
            .cloned()
            .collect()
    }
}

/// Listing order: `created_at` descending, then id descending.
pub fn newest_first(a: &Ticket, b: &Ticket) -> Ordering {
    b.created_at()
        .cmp(&a.created_at())
        .then_with(|| b.id().cmp(a.id()))
}

fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    haystack.to_lowercase().contains(folded_needle)
}

fn clamp_limit(limit: Option<i64>) -> usize {
    match limit {
        None => DEFAULT_LIST_LIMIT,
        Some(value) if value < 1 => 1,
        Some(value) => usize::try_from(value)
            .unwrap_or(MAX_LIST_LIMIT)
            .min(MAX_LIST_LIMIT),
    }
}

fn clamp_offset(offset: Option<i64>) -> usize {
    offset
        .and_then(|value| usize::try_from(value.max(0)).ok())
        .unwrap_or(0)
}
