//! Booking and cancellation flows, independent of the browser.
//!
//! A flow is planned first (preconditions and the user's confirmation decide
//! whether a request is sent at all), then the backend reply is mapped to a
//! banner message and a reload decision.

use crate::{ApiError, BookSlotRequest, BookSlotResponse, CancelBookingResponse, Notice, Slot, User};

pub const SLOTS_PATH: &str = "/api/slots";
pub const BOOK_PATH: &str = "/api/book";
pub const MY_BOOKINGS_PATH: &str = "/api/my-bookings";

pub fn slots_path(date: &str) -> String {
    format!("{}?date={}", SLOTS_PATH, date)
}

pub fn my_bookings_path(user_id: i64) -> String {
    format!("{}?user_id={}", MY_BOOKINGS_PATH, user_id)
}

/// What a flow decided to do before touching the network
#[derive(Debug, Clone, PartialEq)]
pub enum Plan<R> {
    Submit(R),
    /// The user dismissed the confirmation prompt
    Declined,
    /// A precondition failed; show the notice and stop
    Blocked(Notice),
}

/// Banner to show and whether the affected list must be reloaded
#[derive(Debug, Clone, PartialEq)]
pub struct FlowOutcome {
    pub notice: Notice,
    pub reload: bool,
}

pub fn booking_prompt(slot: &Slot) -> String {
    format!("Book {}?", slot.time_slot)
}

/// Builds the `POST /api/book` body for `slot` if the user confirms
pub fn plan_booking(
    user: Option<&User>,
    slot: &Slot,
    confirm: impl FnOnce(&str) -> bool,
) -> Plan<BookSlotRequest> {
    let Some(user) = user else {
        return Plan::Blocked(Notice::error("Please sign in first"));
    };
    if !slot.is_available {
        return Plan::Blocked(Notice::error(format!("{} is already booked", slot.time_slot)));
    }
    if !confirm(&booking_prompt(slot)) {
        return Plan::Declined;
    }

    Plan::Submit(BookSlotRequest {
        user_id: user.id,
        first_name: user.first_name.clone(),
        court_type: slot.court_type,
        date: slot.date.clone(),
        time_slot: slot.time_slot.clone(),
    })
}

pub fn booking_outcome(result: Result<BookSlotResponse, ApiError>) -> FlowOutcome {
    match result {
        Ok(response) if response.success => FlowOutcome {
            notice: Notice::success("Booked successfully!"),
            reload: true,
        },
        Ok(response) => {
            let reason = response
                .detail
                .or(response.message)
                .unwrap_or_else(|| "unknown error".to_string());
            FlowOutcome {
                notice: Notice::error(format!("Booking failed: {}", reason)),
                reload: false,
            }
        }
        Err(e) => FlowOutcome {
            notice: Notice::error(format!("Booking error: {}", e.user_message())),
            reload: false,
        },
    }
}

/// `DELETE /api/booking/{id}?user_id=ID`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelRequest {
    pub booking_id: i64,
    pub user_id: i64,
}

impl CancelRequest {
    pub fn path(&self) -> String {
        format!("/api/booking/{}?user_id={}", self.booking_id, self.user_id)
    }
}

pub const CANCEL_PROMPT: &str = "Cancel this booking?";

pub fn plan_cancellation(
    user: Option<&User>,
    booking_id: i64,
    confirm: impl FnOnce(&str) -> bool,
) -> Plan<CancelRequest> {
    let Some(user) = user else {
        return Plan::Blocked(Notice::error("Please sign in first"));
    };
    if !confirm(CANCEL_PROMPT) {
        return Plan::Declined;
    }
    Plan::Submit(CancelRequest { booking_id, user_id: user.id })
}

pub fn cancellation_outcome(result: Result<CancelBookingResponse, ApiError>) -> FlowOutcome {
    match result {
        Ok(CancelBookingResponse { message: Some(message), .. }) => FlowOutcome {
            notice: Notice::success(message),
            reload: true,
        },
        Ok(CancelBookingResponse { detail: Some(detail), .. }) => FlowOutcome {
            notice: Notice::error(detail),
            reload: true,
        },
        Ok(_) => FlowOutcome {
            notice: Notice::success("Booking cancelled"),
            reload: true,
        },
        Err(_) => FlowOutcome {
            notice: Notice::error("Failed to cancel booking"),
            reload: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CourtType, NoticeKind};
    use std::cell::Cell;

    fn open_slot() -> Slot {
        Slot {
            court_type: CourtType::Hard,
            date: "2025-06-15".to_string(),
            time_slot: "18:00-19:00".to_string(),
            is_available: true,
            booked_by: None,
            booking_id: None,
        }
    }

    #[test]
    fn test_confirmed_booking_builds_one_request() {
        let user = User::guest(31337);
        let prompts = Cell::new(0);
        let plan = plan_booking(Some(&user), &open_slot(), |prompt| {
            prompts.set(prompts.get() + 1);
            assert_eq!(prompt, "Book 18:00-19:00?");
            true
        });

        assert_eq!(prompts.get(), 1);
        assert_eq!(
            plan,
            Plan::Submit(BookSlotRequest {
                user_id: 31337,
                first_name: "Guest".to_string(),
                court_type: CourtType::Hard,
                date: "2025-06-15".to_string(),
                time_slot: "18:00-19:00".to_string(),
            })
        );
    }

    #[test]
    fn test_declined_booking_sends_nothing() {
        let user = User::guest(1);
        assert_eq!(plan_booking(Some(&user), &open_slot(), |_| false), Plan::Declined);
    }

    #[test]
    fn test_booking_requires_identity() {
        let asked = Cell::new(false);
        let plan = plan_booking(None, &open_slot(), |_| {
            asked.set(true);
            true
        });
        assert!(matches!(plan, Plan::Blocked(_)));
        assert!(!asked.get());
    }

    #[test]
    fn test_booked_slot_is_not_submitted() {
        let user = User::guest(1);
        let mut slot = open_slot();
        slot.is_available = false;
        assert!(matches!(plan_booking(Some(&user), &slot, |_| true), Plan::Blocked(_)));
    }

    #[test]
    fn test_successful_booking_reloads_slots() {
        let outcome = booking_outcome(Ok(BookSlotResponse {
            success: true,
            detail: None,
            message: Some("Booking created".to_string()),
        }));
        assert!(outcome.reload);
        assert_eq!(outcome.notice.kind, NoticeKind::Success);
    }

    #[test]
    fn test_rejected_booking_shows_backend_reason() {
        let outcome = booking_outcome(Ok(BookSlotResponse {
            success: false,
            detail: Some("This time is already taken".to_string()),
            message: None,
        }));
        assert!(!outcome.reload);
        assert_eq!(outcome.notice, Notice::error("Booking failed: This time is already taken"));
    }

    #[test]
    fn test_network_failure_while_booking() {
        let outcome = booking_outcome(Err(ApiError::Network("offline".to_string())));
        assert!(!outcome.reload);
        assert_eq!(outcome.notice.kind, NoticeKind::Error);
    }

    #[test]
    fn test_confirmed_cancellation() {
        let user = User::guest(808);
        let plan = plan_cancellation(Some(&user), 12, |prompt| prompt == CANCEL_PROMPT);
        let Plan::Submit(request) = plan else {
            panic!("expected a cancellation request");
        };
        assert_eq!(request, CancelRequest { booking_id: 12, user_id: 808 });
        assert_eq!(request.path(), "/api/booking/12?user_id=808");
    }

    #[test]
    fn test_declined_cancellation() {
        let user = User::guest(808);
        assert_eq!(plan_cancellation(Some(&user), 12, |_| false), Plan::Declined);
    }

    #[test]
    fn test_cancellation_outcomes() {
        let done = cancellation_outcome(Ok(CancelBookingResponse {
            success: Some(true),
            message: Some("Booking cancelled".to_string()),
            detail: None,
        }));
        assert!(done.reload);
        assert_eq!(done.notice.kind, NoticeKind::Success);

        let missing = cancellation_outcome(Ok(CancelBookingResponse {
            success: None,
            message: None,
            detail: Some("Booking not found".to_string()),
        }));
        assert!(missing.reload);
        assert_eq!(missing.notice, Notice::error("Booking not found"));

        let failed = cancellation_outcome(Err(ApiError::Network("offline".to_string())));
        assert!(!failed.reload);
        assert_eq!(failed.notice, Notice::error("Failed to cancel booking"));
    }

    #[test]
    fn test_paths() {
        assert_eq!(slots_path("2025-06-15"), "/api/slots?date=2025-06-15");
        assert_eq!(my_bookings_path(42), "/api/my-bookings?user_id=42");
    }
}
