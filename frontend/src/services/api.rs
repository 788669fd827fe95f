use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::flow::{my_bookings_path, slots_path, CancelRequest, BOOK_PATH};
use shared::schedule::parse_date;
use shared::{ApiError, BookSlotRequest, BookSlotResponse, Booking, CancelBookingResponse, Slot};

/// API client for the court booking backend
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// All slots (both courts) for a date
    pub async fn get_slots(&self, date: &str) -> Result<Vec<Slot>, ApiError> {
        parse_date(date)?;
        let response = Request::get(&self.url(&slots_path(date)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::parse_ok(response).await
    }

    /// Submit a booking. Rejections come back as 400 with a `detail` body,
    /// so the body is decoded whatever the status.
    pub async fn book_slot(&self, request: &BookSlotRequest) -> Result<BookSlotResponse, ApiError> {
        let response = Request::post(&self.url(BOOK_PATH))
            .json(request)
            .map_err(|e| ApiError::Parse(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::parse_any(response).await
    }

    /// Upcoming bookings of one user
    pub async fn get_my_bookings(&self, user_id: i64) -> Result<Vec<Booking>, ApiError> {
        let response = Request::get(&self.url(&my_bookings_path(user_id)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::parse_ok(response).await
    }

    pub async fn cancel_booking(&self, request: CancelRequest) -> Result<CancelBookingResponse, ApiError> {
        let response = Request::delete(&self.url(&request.path()))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::parse_any(response).await
    }

    async fn parse_ok<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Http { status, body });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn parse_any<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let ok = response.ok();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        match serde_json::from_str::<T>(&body) {
            Ok(data) => Ok(data),
            Err(_) if !ok => Err(ApiError::Http { status, body }),
            Err(e) => Err(ApiError::Parse(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_url_joining() {
        let api = ApiClient::with_base_url("https://courts.example/".to_string());
        assert_eq!(api.url("/api/book"), "https://courts.example/api/book");
        let same_origin = ApiClient::with_base_url(String::new());
        assert_eq!(same_origin.url("/api/slots?date=2025-06-15"), "/api/slots?date=2025-06-15");
    }

    #[wasm_bindgen_test]
    async fn test_invalid_date_is_rejected_before_sending() {
        let api = ApiClient::with_base_url(String::new());
        assert_eq!(
            api.get_slots("tomorrow").await,
            Err(ApiError::InvalidDate("tomorrow".to_string()))
        );
    }
}
