//! Date handling and per-court slot ordering.

use chrono::NaiveDate;

use crate::{ApiError, CourtType, Slot};

/// Slots of one court, ascending by time.
///
/// `time_slot` is zero-padded `HH:MM-HH:MM`, so lexical order is chronological.
/// The sort is stable, duplicates keep backend order.
pub fn court_schedule(slots: &[Slot], court: CourtType) -> Vec<Slot> {
    let mut court_slots: Vec<Slot> = slots
        .iter()
        .filter(|slot| slot.court_type == court)
        .cloned()
        .collect();
    court_slots.sort_by(|a, b| a.time_slot.cmp(&b.time_slot));
    court_slots
}

/// Validates a YYYY-MM-DD string coming from the date control
pub fn parse_date(date: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| ApiError::InvalidDate(date.to_string()))
}

/// The date actually queried: the picked date, clamped to `today` when it lies in the past
pub fn effective_date(selected: &str, today: &str) -> Result<String, ApiError> {
    let selected_date = parse_date(selected)?;
    let today_date = parse_date(today)?;
    Ok(selected_date.max(today_date).format("%Y-%m-%d").to_string())
}

/// Slots shown when the backend cannot be reached
pub fn demo_slots(date: &str, court: CourtType) -> Vec<Slot> {
    let demo = |time_slot: &str, booked_by: Option<&str>| Slot {
        court_type: court,
        date: date.to_string(),
        time_slot: time_slot.to_string(),
        is_available: booked_by.is_none(),
        booked_by: booked_by.map(str::to_string),
        booking_id: None,
    };
    vec![
        demo("10:00-11:00", None),
        demo("11:00-12:00", Some("Ivan")),
        demo("12:00-13:00", None),
        demo("13:00-14:00", None),
    ]
}
