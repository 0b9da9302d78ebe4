//! Session identity and persistence.
//!
//! Every remote call reads the bearer token and the current user id through
//! one injected [`SessionProvider`] instead of ad-hoc lookups. The store
//! implements it from its auth slice; tests can implement it with a fixed
//! token.

use crate::models::Account;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Single source of identity for remote calls
pub trait SessionProvider: Send + Sync {
    fn token(&self) -> Option<String>;
    fn current_user_id(&self) -> Option<String>;
}

/// Persisted slice of auth state (token and account only; everything else
/// is memory-only and rebuilt from the backend).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionFile {
    pub token: String,
    pub account: Account,
}

impl SessionFile {
    /// Read a persisted session. Absent file means no session; a file that
    /// exists but does not parse is an error, not a silent reset.
    pub async fn load(path: impl AsRef<Path>) -> Result<Option<SessionFile>> {
        let path = path.as_ref();
        if !tokio::fs::try_exists(path).await? {
            debug!("No session file at {}", path.display());
            return Ok(None);
        }
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read session file {}", path.display()))?;
        let session = serde_json::from_str(&raw)
            .with_context(|| format!("Corrupt session file {}", path.display()))?;
        Ok(Some(session))
    }

    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("Failed to write session file {}", path.display()))?;
        debug!("Saved session to {}", path.display());
        Ok(())
    }
}
