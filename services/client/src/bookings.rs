//! Booking operations
//!
//! Listing a customer's bookings swallows errors into an empty list; creating
//! or changing a booking surfaces every failure to the caller.

use tracing::{error, info};

use crate::{
    error::ClientResult,
    http::{ApiClient, RequestOptions},
    models::{Booking, BookingRequest, EnrichedBooking},
};

/// Booking endpoints of the backend
#[derive(Clone)]
pub struct BookingApi {
    client: ApiClient,
}

impl BookingApi {
    /// Create a new booking API
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Create a booking
    pub async fn create_booking(&self, request: &BookingRequest) -> ClientResult<Booking> {
        info!("Creating booking for equipment: {}", request.equipment_id);

        let body = serde_json::to_value(request)?;
        self.client
            .fetch_api("/api/bookings", RequestOptions::post(body))
            .await
            .inspect_err(|e| error!("Error creating booking: {}", e))
    }

    /// Load all bookings of a customer
    pub async fn load_user_bookings(&self, user_id: &str) -> Vec<Booking> {
        info!("Loading bookings for user: {}", user_id);

        match self
            .client
            .fetch_api(
                &format!("/api/bookings/customer/{}", user_id),
                RequestOptions::get(),
            )
            .await
        {
            Ok(bookings) => bookings,
            Err(e) => {
                error!("Error loading bookings: {}", e);
                Vec::new()
            }
        }
    }

    /// Load the logged-in customer's recent bookings with equipment and location
    pub async fn my_bookings(&self) -> Vec<EnrichedBooking> {
        info!("Loading bookings for the current user");

        match self
            .client
            .fetch_api("/api/bookings/my-bookings", RequestOptions::get())
            .await
        {
            Ok(bookings) => bookings,
            Err(e) => {
                error!("Error loading my bookings: {}", e);
                Vec::new()
            }
        }
    }

    /// Get a single booking with equipment and location
    pub async fn get_booking(&self, id: &str) -> ClientResult<EnrichedBooking> {
        info!("Getting booking: {}", id);

        self.client
            .fetch_api(&format!("/api/bookings/{}", id), RequestOptions::get())
            .await
            .inspect_err(|e| error!("Error getting booking {}: {}", id, e))
    }

    /// Cancel a booking
    pub async fn cancel_booking(&self, id: &str, reason: &str) -> ClientResult<Booking> {
        info!("Cancelling booking: {}", id);

        self.client
            .fetch_api(
                &format!("/api/bookings/{}/cancel", id),
                RequestOptions::put().query("reason", reason),
            )
            .await
            .inspect_err(|e| error!("Error cancelling booking {}: {}", id, e))
    }
}
