//! Booking endpoints.

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{Booking, BookingRequest};
use reqwest::Method;
use serde_json::json;
use tracing::debug;

impl ApiClient {
    pub async fn list_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.get_json("/bookings").await
    }

    pub async fn get_booking(&self, id: &str) -> Result<Booking, ApiError> {
        self.get_json(&format!("/bookings/{}", id)).await
    }

    /// Create a booking. The idempotency key makes resubmitting the same
    /// wizard draft safe against duplicate bookings.
    pub async fn create_booking(
        &self,
        request: &BookingRequest,
        idempotency_key: &str,
    ) -> Result<Booking, ApiError> {
        debug!("Creating booking for property {}", request.property_id);
        let builder = self
            .authed(Method::POST, "/bookings")?
            .header("Idempotency-Key", idempotency_key)
            .json(request);
        self.execute(builder).await
    }

    pub async fn confirm_booking(&self, booking_id: &str) -> Result<Booking, ApiError> {
        self.post_json("/bookings/confirm", &json!({ "booking_id": booking_id }))
            .await
    }

    /// Assign a cleaning business to an accepted booking
    pub async fn attach_cleaning_business(
        &self,
        booking_id: &str,
        business_id: &str,
    ) -> Result<Booking, ApiError> {
        self.post_json(
            "/bookings/attach-cleaning-business",
            &json!({ "booking_id": booking_id, "business_id": business_id }),
        )
        .await
    }
}
