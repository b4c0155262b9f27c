//! Session management over local storage

use std::sync::{Arc, Mutex};

use common::storage::LocalStorage;
use tracing::{info, warn};

use crate::{error::ClientResult, models::User};

/// Storage key holding the bearer token
pub const TOKEN_KEY: &str = "token";

/// Storage key holding the JSON-serialized user record
pub const USER_KEY: &str = "user";

/// View shown after logout
pub const LOGIN_PATH: &str = "/login";

/// Moves the user to another view
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Navigator that only reports where the user is sent
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, path: &str) {
        info!("Navigating to {}", path);
    }
}

/// Navigator that remembers every visited path
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths navigated to, oldest first
    pub fn visited(&self) -> Vec<String> {
        self.visited
            .lock()
            .map(|visited| visited.clone())
            .unwrap_or_default()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        if let Ok(mut visited) = self.visited.lock() {
            visited.push(path.to_string());
        }
    }
}

/// Session manager for the locally cached user session
#[derive(Clone)]
pub struct SessionManager {
    storage: Arc<dyn LocalStorage>,
    navigator: Arc<dyn Navigator>,
}

impl SessionManager {
    /// Create a new session manager
    pub fn new(storage: Arc<dyn LocalStorage>, navigator: Arc<dyn Navigator>) -> Self {
        Self { storage, navigator }
    }

    /// Cache the user and token returned by a successful login
    pub fn store(&self, user: &User, token: &str) -> ClientResult<()> {
        info!(
            "Storing session for user: {}",
            user.email.as_deref().unwrap_or("<unknown>")
        );

        self.storage
            .set_item(USER_KEY, &serde_json::to_string(user)?)?;
        self.storage.set_item(TOKEN_KEY, token)?;

        Ok(())
    }

    /// Get the cached bearer token
    pub fn token(&self) -> ClientResult<Option<String>> {
        Ok(self.storage.get_item(TOKEN_KEY)?)
    }

    /// Get the cached user record
    pub fn current_user(&self) -> ClientResult<Option<User>> {
        match self.storage.get_item(USER_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Check if a user record is cached
    pub fn is_user_logged_in(&self) -> bool {
        match self.current_user() {
            Ok(user) => user.is_some(),
            Err(e) => {
                warn!("Failed to read cached user: {}", e);
                false
            }
        }
    }

    /// Clear the session and send the user to the login view
    pub fn logout(&self) -> ClientResult<()> {
        info!("Logging out");

        self.storage.remove_item(USER_KEY)?;
        self.storage.remove_item(TOKEN_KEY)?;
        self.navigator.navigate(LOGIN_PATH);

        Ok(())
    }
}
