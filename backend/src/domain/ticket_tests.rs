//! Tests for ticket value objects and construction.

use chrono::{Duration, TimeZone};
use rstest::{fixture, rstest};

use super::*;

#[fixture]
fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

#[rstest]
fn random_ids_are_ten_lowercase_hex_characters() {
    let id = TicketId::random();
    assert_eq!(id.as_ref().len(), 10);
    assert!(
        id.as_ref()
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    );
}

#[rstest]
fn random_ids_differ() {
    let ids: std::collections::HashSet<_> = (0..64).map(|_| TicketId::random()).collect();
    assert_eq!(ids.len(), 64);
}

#[rstest]
#[case("", TicketValidationError::EmptyId)]
#[case("   ", TicketValidationError::EmptyId)]
fn ticket_id_rejects_blank_input(#[case] raw: &str, #[case] expected: TicketValidationError) {
    assert_eq!(TicketId::new(raw), Err(expected));
}

#[rstest]
fn ticket_id_rejects_oversized_input() {
    let raw = "a".repeat(TICKET_ID_MAX + 1);
    assert_eq!(
        TicketId::new(raw),
        Err(TicketValidationError::IdTooLong { max: TICKET_ID_MAX })
    );
}

#[rstest]
fn ticket_id_trims_surrounding_whitespace() {
    let id = TicketId::new(" 0a1b2c3d4e ").expect("valid id");
    assert_eq!(id.as_ref(), "0a1b2c3d4e");
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn title_rejects_blank_input(#[case] raw: &str) {
    assert_eq!(TicketTitle::new(raw), Err(TicketValidationError::EmptyTitle));
}

#[rstest]
fn title_accepts_exactly_the_maximum_length() {
    let raw = "é".repeat(TICKET_TITLE_MAX);
    let title = TicketTitle::new(&raw).expect("title at limit");
    assert_eq!(title.as_ref().chars().count(), TICKET_TITLE_MAX);
}

#[rstest]
fn title_rejects_one_character_over_the_limit() {
    let raw = "x".repeat(TICKET_TITLE_MAX + 1);
    assert_eq!(
        TicketTitle::new(raw),
        Err(TicketValidationError::TitleTooLong {
            max: TICKET_TITLE_MAX
        })
    );
}

#[rstest]
fn title_length_is_measured_after_trimming() {
    let raw = format!("  {}  ", "x".repeat(TICKET_TITLE_MAX));
    assert!(TicketTitle::new(raw).is_ok());
}

#[rstest]
fn description_may_be_empty() {
    let description = TicketDescription::new("   ").expect("blank description");
    assert!(description.is_empty());
}

#[rstest]
fn description_rejects_oversized_input() {
    let raw = "y".repeat(TICKET_DESCRIPTION_MAX + 1);
    assert_eq!(
        TicketDescription::new(raw),
        Err(TicketValidationError::DescriptionTooLong {
            max: TICKET_DESCRIPTION_MAX
        })
    );
}

#[rstest]
#[case("open", TicketStatus::Open)]
#[case(" OPEN ", TicketStatus::Open)]
#[case("in-progress", TicketStatus::InProgress)]
#[case("in progress", TicketStatus::InProgress)]
#[case("in_progress", TicketStatus::InProgress)]
#[case("closed", TicketStatus::Closed)]
fn status_parses_known_spellings(#[case] raw: &str, #[case] expected: TicketStatus) {
    assert_eq!(raw.parse::<TicketStatus>(), Ok(expected));
}

#[rstest]
#[case("")]
#[case("resolved")]
#[case("opened")]
fn status_rejects_unknown_values(#[case] raw: &str) {
    assert_eq!(
        raw.parse::<TicketStatus>(),
        Err(TicketValidationError::UnknownStatus)
    );
}

#[rstest]
fn status_serialises_with_hyphenated_wire_form() {
    let value = serde_json::to_value(TicketStatus::InProgress).expect("serialise status");
    assert_eq!(value, serde_json::json!("in-progress"));
}

#[rstest]
fn status_deserialises_legacy_spelling() {
    let status: TicketStatus =
        serde_json::from_value(serde_json::json!("in progress")).expect("legacy status");
    assert_eq!(status, TicketStatus::InProgress);
}

#[rstest]
fn new_ticket_defaults_missing_description_to_empty() {
    let draft = NewTicket::new("VPN broken", None).expect("valid input");
    assert!(draft.description().is_empty());
}

#[rstest]
fn new_ticket_trims_both_fields() {
    let draft = NewTicket::new("  VPN broken  ", Some("  Cannot connect from home \n"))
        .expect("valid input");
    assert_eq!(draft.title().as_ref(), "VPN broken");
    assert_eq!(draft.description().as_ref(), "Cannot connect from home");
}

#[rstest]
fn new_ticket_rejects_blank_title_even_with_description() {
    let result = NewTicket::new("  ", Some("details"));
    assert_eq!(result, Err(TicketValidationError::EmptyTitle));
}

#[rstest]
fn into_ticket_starts_open_with_equal_timestamps(created_at: DateTime<Utc>) {
    let id = TicketId::random();
    let ticket = NewTicket::new("VPN broken", Some("Cannot connect from home"))
        .expect("valid input")
        .into_ticket(id.clone(), created_at);

    assert_eq!(ticket.id(), &id);
    assert_eq!(ticket.status(), TicketStatus::Open);
    assert_eq!(ticket.created_at(), created_at);
    assert_eq!(ticket.updated_at(), created_at);
}

#[rstest]
fn ticket_new_rejects_updated_before_created(created_at: DateTime<Utc>) {
    let result = Ticket::new(TicketDraft {
        id: TicketId::random(),
        title: TicketTitle::new("VPN broken").expect("title"),
        description: TicketDescription::default(),
        status: TicketStatus::Closed,
        created_at,
        updated_at: created_at - Duration::seconds(1),
    });
    assert_eq!(result, Err(TicketValidationError::TimestampsOutOfOrder));
}

#[rstest]
fn ticket_new_preserves_supplied_status(created_at: DateTime<Utc>) {
    let ticket = Ticket::new(TicketDraft {
        id: TicketId::random(),
        title: TicketTitle::new("Printer jam").expect("title"),
        description: TicketDescription::default(),
        status: TicketStatus::InProgress,
        created_at,
        updated_at: created_at + Duration::minutes(5),
    })
    .expect("valid ticket");
    assert_eq!(ticket.status(), TicketStatus::InProgress);
}
