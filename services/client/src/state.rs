//! Client state bundling every endpoint group around one session

use std::sync::Arc;

use common::storage::{FileStorage, LocalStorage};

use crate::{
    bookings::BookingApi,
    config::ClientConfig,
    equipment::EquipmentApi,
    error::ClientResult,
    http::ApiClient,
    notification::{NotificationCenter, NotificationSurface},
    session::{Navigator, SessionManager},
    users::UserApi,
};

/// Everything a front end needs to talk to the EquipTrack backend
#[derive(Clone)]
pub struct EquipTrack {
    pub session: SessionManager,
    pub equipment: EquipmentApi,
    pub bookings: BookingApi,
    pub users: UserApi,
    pub notifications: NotificationCenter,
}

impl EquipTrack {
    /// Wire the client from explicit parts
    pub fn new(
        base_url: &str,
        storage: Arc<dyn LocalStorage>,
        navigator: Arc<dyn Navigator>,
        surface: Arc<dyn NotificationSurface>,
    ) -> Self {
        let session = SessionManager::new(storage, navigator);
        let client = ApiClient::new(base_url, session.clone());

        Self {
            session,
            equipment: EquipmentApi::new(client.clone()),
            bookings: BookingApi::new(client.clone()),
            users: UserApi::new(client),
            notifications: NotificationCenter::new(surface),
        }
    }

    /// Wire the client from configuration, persisting the session on disk
    pub fn from_config(
        config: &ClientConfig,
        navigator: Arc<dyn Navigator>,
        surface: Arc<dyn NotificationSurface>,
    ) -> ClientResult<Self> {
        let storage = Arc::new(FileStorage::open(&config.storage_path)?);
        Ok(Self::new(&config.base_url, storage, navigator, surface))
    }
}
