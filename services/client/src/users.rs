//! User account endpoints

use tracing::{error, info};

use crate::{
    error::ClientResult,
    http::{ApiClient, RequestOptions},
    models::{User, UserRegistration},
};

/// User endpoints of the backend
#[derive(Clone)]
pub struct UserApi {
    client: ApiClient,
}

impl UserApi {
    /// Create a new user API
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Get the profile of the authenticated user
    pub async fn current_profile(&self) -> ClientResult<User> {
        info!("Getting current user profile");

        self.client
            .fetch_api("/api/users/me", RequestOptions::get())
            .await
            .inspect_err(|e| error!("Error getting current user: {}", e))
    }

    /// Register a new customer account
    pub async fn register_user(&self, registration: &UserRegistration) -> ClientResult<User> {
        info!("Registering user: {}", registration.email);

        let body = serde_json::to_value(registration)?;
        self.client
            .fetch_api("/api/users/register", RequestOptions::post(body))
            .await
            .inspect_err(|e| error!("Error registering user: {}", e))
    }

    /// Ask the backend to send a password reset email
    pub async fn forgot_password(&self, email: &str) -> ClientResult<()> {
        info!("Requesting password reset for: {}", email);

        let options = RequestOptions {
            method: Some(reqwest::Method::POST),
            ..RequestOptions::default()
        }
        .query("email", email);

        self.client
            .fetch_api_no_content("/api/users/forgot-password", options)
            .await
            .inspect_err(|e| error!("Error requesting password reset: {}", e))
    }
}
