//! API models for request and response payloads
//!
//! Records mirror the backend's camelCase JSON documents. Known fields are
//! typed; anything else the backend sends is kept in `extra` so records pass
//! through unchanged.

pub mod booking;
pub mod equipment;
pub mod user;

// Re-export for convenience
pub use booking::{
    Booking, BookingRequest, BookingStatus, EnrichedBooking, EquipmentSummary, LocationSummary,
    PaymentStatus,
};
pub use equipment::{Equipment, EquipmentCondition, EquipmentFilters, EquipmentStatus};
pub use user::{AccountStatus, User, UserRegistration, UserRole};
