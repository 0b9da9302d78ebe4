//! Auth endpoints. Login is two-step: `login` returns a pending handle,
//! `verify_login` exchanges it plus the emailed code for a session.

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{LoginResponse, RegistrationForm, SessionPayload};
use serde_json::json;
use tracing::info;

impl ApiClient {
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        info!("Requesting login for {}", email);
        self.post_public("/auth/login", &json!({ "email": email, "password": password }))
            .await
    }

    pub async fn verify_login(
        &self,
        pending_id: &str,
        code: &str,
    ) -> Result<SessionPayload, ApiError> {
        self.post_public(
            "/auth/verify-login",
            &json!({ "pending_id": pending_id, "code": code }),
        )
        .await
    }

    pub async fn register_cleaning_business(
        &self,
        form: &RegistrationForm,
    ) -> Result<SessionPayload, ApiError> {
        info!("Registering cleaning business '{}'", form.business_name);
        self.post_public("/auth/register-cleaning-business", form).await
    }

    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        let builder = self
            .authed(reqwest::Method::POST, "/auth/change-password")?
            .json(&json!({ "current_password": current_password, "new_password": new_password }));
        self.execute_empty(builder).await
    }

    pub async fn set_two_factor(&self, enabled: bool) -> Result<(), ApiError> {
        let builder = self
            .authed(reqwest::Method::POST, "/auth/two-factor")?
            .json(&json!({ "enabled": enabled }));
        self.execute_empty(builder).await
    }
}
