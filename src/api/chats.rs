//! Chat and support-thread endpoints.

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{ChatMessage, ChatThread};
use reqwest::Method;
use serde_json::json;
use tracing::debug;

impl ApiClient {
    pub async fn threads_for_user(&self, user_id: &str) -> Result<Vec<ChatThread>, ApiError> {
        self.get_json(&format!("/chats/threads/user/{}", user_id))
            .await
    }

    pub async fn support_messages(&self, thread_id: &str) -> Result<Vec<ChatMessage>, ApiError> {
        self.get_json(&format!("/chats/support/messages/{}", thread_id))
            .await
    }

    /// Open a new support thread with the given subject line
    pub async fn start_support_thread(&self, subject: &str) -> Result<ChatThread, ApiError> {
        debug!("Starting support thread: {}", subject);
        self.post_json("/chats/support/start", &json!({ "subject": subject }))
            .await
    }

    /// Send a reply; the response is the server's copy of the message
    pub async fn send_support_reply(
        &self,
        thread_id: &str,
        body: &str,
    ) -> Result<ChatMessage, ApiError> {
        self.post_json(
            "/chats/support/reply",
            &json!({ "thread_id": thread_id, "body": body }),
        )
        .await
    }

    pub async fn mark_thread_read(&self, thread_id: &str) -> Result<(), ApiError> {
        let builder = self.authed(Method::PATCH, &format!("/chats/support/mark-read/{}", thread_id))?;
        self.execute_empty(builder).await
    }
}
