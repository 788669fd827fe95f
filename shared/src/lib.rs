use serde::{Deserialize, Serialize};
use std::fmt;

pub mod error;
pub mod flow;
pub mod identity;
pub mod schedule;
pub mod widget;

pub use error::ApiError;

/// Storage key the resolved profile is cached under
pub const PROFILE_STORAGE_KEY: &str = "telegramUser";

/// The person the widget books on behalf of
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    /// True when the identity came from the host mini-app (real or simulated).
    /// Older cached profiles spell this `is_telegram_user`.
    #[serde(default, alias = "is_telegram_user")]
    pub is_platform_user: bool,
}

impl User {
    /// Fixed identity used when the page is opened with `?tgWebApp=1`
    pub fn simulated() -> Self {
        Self {
            id: 123456789,
            first_name: "TelegramTestUser".to_string(),
            username: Some("testuser".to_string()),
            last_name: None,
            language_code: None,
            is_platform_user: true,
        }
    }

    /// Locally synthesized identity for plain browser sessions
    pub fn guest(id: i64) -> Self {
        Self {
            id,
            first_name: "Guest".to_string(),
            username: None,
            last_name: None,
            language_code: None,
            is_platform_user: false,
        }
    }
}

/// User payload exposed by the host mini-app (`initDataUnsafe.user`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformUser {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub language_code: Option<String>,
}

impl From<PlatformUser> for User {
    fn from(payload: PlatformUser) -> Self {
        let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());
        Self {
            id: payload.id,
            first_name: non_empty(payload.first_name).unwrap_or_else(|| "Telegram User".to_string()),
            username: Some(payload.username.unwrap_or_default()),
            last_name: Some(payload.last_name.unwrap_or_default()),
            language_code: Some(non_empty(payload.language_code).unwrap_or_else(|| "ru".to_string())),
            is_platform_user: true,
        }
    }
}

/// Surface type of a court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourtType {
    #[default]
    Rubber,
    Hard,
}

impl CourtType {
    pub const ALL: [CourtType; 2] = [CourtType::Rubber, CourtType::Hard];

    /// Wire value, also used for the `data-court` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            CourtType::Rubber => "rubber",
            CourtType::Hard => "hard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CourtType::Rubber => "Rubber",
            CourtType::Hard => "Hard",
        }
    }
}

impl fmt::Display for CourtType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One bookable interval as reported by `GET /api/slots`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub court_type: CourtType,
    /// ISO date (YYYY-MM-DD)
    pub date: String,
    /// Zero-padded "HH:MM-HH:MM"
    pub time_slot: String,
    pub is_available: bool,
    #[serde(default)]
    pub booked_by: Option<String>,
    #[serde(default)]
    pub booking_id: Option<i64>,
}

impl Slot {
    /// Start and end of the interval, or the raw string twice if it is malformed
    pub fn bounds(&self) -> (&str, &str) {
        split_time_slot(&self.time_slot)
    }

    /// Name shown on a booked slot
    pub fn occupant(&self) -> &str {
        self.booked_by
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or("Someone")
    }
}

/// A reservation owned by the current user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub date: String,
    pub time_slot: String,
    pub court_type: CourtType,
}

impl Booking {
    /// "10:00 - 11:00"
    pub fn display_time(&self) -> String {
        let (start, end) = split_time_slot(&self.time_slot);
        if start == end {
            self.time_slot.clone()
        } else {
            format!("{} - {}", start, end)
        }
    }
}

fn split_time_slot(time_slot: &str) -> (&str, &str) {
    time_slot
        .split_once('-')
        .unwrap_or((time_slot, time_slot))
}

/// Body of `POST /api/book`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSlotRequest {
    pub user_id: i64,
    pub first_name: String,
    pub court_type: CourtType,
    pub date: String,
    pub time_slot: String,
}

/// Reply of `POST /api/book`. Rejections arrive as HTTP 400 with only `detail` set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BookSlotResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Reply of `DELETE /api/booking/{id}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CancelBookingResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

/// Styling of the transient message banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

impl NoticeKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Error => "error",
            NoticeKind::Success => "success",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_deserializes_backend_payload() {
        let json = r#"{
            "court_type": "hard",
            "date": "2025-06-15",
            "time_slot": "06:00-07:00",
            "is_available": false,
            "booked_by": "Anna",
            "booking_id": 42
        }"#;
        let slot: Slot = serde_json::from_str(json).unwrap();
        assert_eq!(slot.court_type, CourtType::Hard);
        assert_eq!(slot.bounds(), ("06:00", "07:00"));
        assert_eq!(slot.occupant(), "Anna");
        assert_eq!(slot.booking_id, Some(42));
    }

    #[test]
    fn test_slot_without_occupant() {
        let json = r#"{"court_type":"rubber","date":"2025-06-15","time_slot":"08:00-09:00","is_available":false,"booked_by":null}"#;
        let slot: Slot = serde_json::from_str(json).unwrap();
        assert_eq!(slot.occupant(), "Someone");
    }

    #[test]
    fn test_court_type_wire_values() {
        assert_eq!(serde_json::to_string(&CourtType::Rubber).unwrap(), "\"rubber\"");
        assert_eq!(serde_json::from_str::<CourtType>("\"hard\"").unwrap(), CourtType::Hard);
        assert!(serde_json::from_str::<CourtType>("\"clay\"").is_err());
        assert_eq!(CourtType::default(), CourtType::Rubber);
    }

    #[test]
    fn test_user_reads_legacy_flag() {
        let json = r#"{"id":7,"first_name":"Oleg","is_telegram_user":true}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.is_platform_user);
        assert_eq!(user.username, None);
    }

    #[test]
    fn test_platform_user_defaults() {
        let payload = PlatformUser {
            id: 99,
            first_name: None,
            last_name: None,
            username: None,
            language_code: None,
        };
        let user = User::from(payload);
        assert_eq!(user.first_name, "Telegram User");
        assert_eq!(user.language_code.as_deref(), Some("ru"));
        assert_eq!(user.username.as_deref(), Some(""));
        assert!(user.is_platform_user);
    }

    #[test]
    fn test_booking_display_time() {
        let booking = Booking {
            id: 1,
            date: "2025-06-15".to_string(),
            time_slot: "10:00-11:00".to_string(),
            court_type: CourtType::Rubber,
        };
        assert_eq!(booking.display_time(), "10:00 - 11:00");
    }

    #[test]
    fn test_book_response_rejection_body() {
        let response: BookSlotResponse =
            serde_json::from_str(r#"{"detail":"This time is already taken"}"#).unwrap();
        assert!(!response.success);
        assert_eq!(response.detail.as_deref(), Some("This time is already taken"));
    }
}
