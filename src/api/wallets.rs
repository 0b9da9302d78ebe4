//! Wallet and refund endpoints.

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{RefundRequest, WalletSummary};
use serde_json::json;

impl ApiClient {
    pub async fn get_wallet(&self) -> Result<WalletSummary, ApiError> {
        self.get_json("/wallets/").await
    }

    pub async fn list_refunds(&self) -> Result<Vec<RefundRequest>, ApiError> {
        self.get_json("/wallets/refunds").await
    }

    pub async fn process_refund(
        &self,
        refund_id: &str,
        approve: bool,
    ) -> Result<RefundRequest, ApiError> {
        self.put_json(
            "/wallets/process-refund",
            &json!({ "refund_id": refund_id, "approve": approve }),
        )
        .await
    }
}
