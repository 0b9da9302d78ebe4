//! Auth slice: token, account, and the half-finished login handle.

use crate::models::{Account, SessionPayload};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub account: Option<Account>,
    /// Set between `login` and `verify_login`
    pub pending_login_id: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[derive(Debug, Clone)]
pub enum AuthAction {
    /// Hydrate from the persisted session file at startup
    SessionRestored { token: String, account: Account },
    LoginPending(String),
    SignedIn(SessionPayload),
    SignedOut,
}

pub fn reduce(state: &mut AuthState, action: AuthAction) {
    match action {
        AuthAction::SessionRestored { token, account } => {
            state.token = Some(token);
            state.account = Some(account);
        }
        AuthAction::LoginPending(pending_id) => {
            state.pending_login_id = Some(pending_id);
        }
        AuthAction::SignedIn(session) => {
            state.token = Some(session.token);
            state.account = Some(session.user);
            state.pending_login_id = None;
        }
        AuthAction::SignedOut => {
            *state = AuthState::default();
        }
    }
}
