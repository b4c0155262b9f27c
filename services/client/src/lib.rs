//! Client library for the EquipTrack equipment-rental backend
//!
//! This crate wraps the backend's JSON endpoints behind typed calls, keeps
//! the user session in local storage, validates form input, formats values
//! for display and drives transient notifications.

pub mod bookings;
pub mod config;
pub mod dates;
pub mod equipment;
pub mod error;
pub mod format;
pub mod http;
pub mod icons;
pub mod models;
pub mod notification;
pub mod session;
pub mod state;
pub mod users;
pub mod validation;

// Re-export for convenience
pub use crate::config::ClientConfig;
pub use crate::error::{ClientError, ClientResult};
pub use crate::http::{ApiClient, RequestOptions};
pub use crate::notification::{NotificationCenter, NotificationKind};
pub use crate::session::SessionManager;
pub use crate::state::EquipTrack;
