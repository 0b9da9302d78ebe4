//! Analytics and reporting endpoints.

use super::ApiClient;
use crate::error::ApiError;
use crate::models::AnalyticsSnapshot;
use reqwest::Method;

impl ApiClient {
    pub async fn property_manager_analytics(
        &self,
        user_id: &str,
    ) -> Result<AnalyticsSnapshot, ApiError> {
        self.get_json(&format!("/analytics/property-manager/{}", user_id))
            .await
    }

    pub async fn business_analytics(&self, user_id: &str) -> Result<AnalyticsSnapshot, ApiError> {
        self.get_json(&format!("/analytics/business/{}", user_id))
            .await
    }

    /// Export a report into the shared spreadsheet
    pub async fn push_to_sheets(&self, report_kind: &str) -> Result<(), ApiError> {
        let builder = self.authed(Method::POST, &format!("/sheets/push-to-sheets/{}", report_kind))?;
        self.execute_empty(builder).await
    }
}
