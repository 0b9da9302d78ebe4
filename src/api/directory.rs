//! Cleaning-business directory endpoints (admin portal).

use super::ApiClient;
use crate::error::ApiError;
use crate::models::CleaningBusiness;

impl ApiClient {
    pub async fn list_cleaning_businesses(&self) -> Result<Vec<CleaningBusiness>, ApiError> {
        self.get_json("/users/cleaning-businesses").await
    }

    pub async fn get_cleaning_business(&self, id: &str) -> Result<CleaningBusiness, ApiError> {
        self.get_json(&format!("/users/cleaning-business/{}", id))
            .await
    }

    /// Mark a business as vetted; returns the updated record
    pub async fn verify_cleaning_business(
        &self,
        id: &str,
    ) -> Result<CleaningBusiness, ApiError> {
        self.patch_json(&format!("/cleaning-businesses/{}/verify", id))
            .await
    }
}
