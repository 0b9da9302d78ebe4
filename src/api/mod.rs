//! Typed HTTP glue for the Limpiar backend.
//!
//! One shared [`ApiClient`] carries the base URL, the request timeout, and
//! the session seam. Endpoint groups live in sibling modules and add their
//! methods onto the client.

pub mod analytics;
pub mod auth;
pub mod bookings;
pub mod chats;
pub mod directory;
pub mod wallets;

use crate::config::Config;
use crate::error::ApiError;
use crate::session::SessionProvider;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

/// HTTP client for the backend REST API
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Arc<dyn SessionProvider>,
}

/// The backend wraps errors as `{ "message": "..." }`
#[derive(serde::Deserialize)]
struct ErrorEnvelope {
    message: String,
}

impl ApiClient {
    pub fn new(config: &Config, session: Arc<dyn SessionProvider>) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
            session,
        })
    }

    /// The signed-in user id, required by several endpoint paths
    pub fn current_user_id(&self) -> Result<String, ApiError> {
        self.session.current_user_id().ok_or(ApiError::MissingAuth)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build an authenticated request. Fails fast before touching the
    /// network when no token is available.
    pub(crate) fn authed(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let token = self.session.token().ok_or(ApiError::MissingAuth)?;
        Ok(self.client.request(method, self.url(path)).bearer_auth(token))
    }

    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        decode(response).await
    }

    /// Execute a request whose response body we do not care about
    pub(crate) async fn execute_empty(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status.as_u16(), response).await);
        }
        Ok(())
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.authed(Method::GET, path)?).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.authed(Method::POST, path)?.json(body)).await
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.authed(Method::PUT, path)?.json(body)).await
    }

    pub(crate) async fn patch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.authed(Method::PATCH, path)?).await
    }

    /// POST without a bearer token, for the auth endpoints themselves
    pub(crate) async fn post_public<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.client.post(self.url(path)).json(body)).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(status_error(status.as_u16(), response).await);
    }
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|err| ApiError::InvalidResponse(err.to_string()))
}

async fn status_error(status: u16, response: Response) -> ApiError {
    let message = match response.text().await {
        Ok(body) => serde_json::from_str::<ErrorEnvelope>(&body)
            .map(|envelope| envelope.message)
            .unwrap_or(body),
        Err(_) => String::new(),
    };
    warn!("Backend returned status {}: {}", status, message);
    ApiError::Status { status, message }
}
