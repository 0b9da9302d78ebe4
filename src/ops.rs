//! Remote operations.
//!
//! Every backend side effect flows through [`Operations`]: an op performs
//! the HTTP call and lands its outcome in the store as a dispatched
//! action, so no component mutates state on its own. The refresh ops
//! return [`ApiError`] directly because the pollers use its retriability
//! classification; the interactive ops return `anyhow::Result` like the
//! rest of the application layer.

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::{Booking, ChatMessage, ChatThread, Delivery, RegistrationForm, Ticket, TicketStatus, UserRole};
use crate::poll::PollTask;
use crate::session::SessionFile;
use crate::store::auth::AuthAction;
use crate::store::booking::BookingAction;
use crate::store::chat::ChatAction;
use crate::store::registration::RegistrationAction;
use crate::store::ticket::TicketAction;
use crate::store::{Action, Store};
use crate::validation;
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub struct Operations {
    api: ApiClient,
    store: Arc<Store>,
    session_file: PathBuf,
}

impl Operations {
    pub fn new(api: ApiClient, store: Arc<Store>, session_file: PathBuf) -> Self {
        Self {
            api,
            store,
            session_file,
        }
    }

    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    // --- chat -----------------------------------------------------------

    /// Re-fetch the signed-in user's thread list
    pub async fn refresh_threads(&self) -> Result<(), ApiError> {
        let user_id = self.api.current_user_id()?;
        self.store.dispatch(Action::Chat(ChatAction::FetchStarted));
        match self.api.threads_for_user(&user_id).await {
            Ok(threads) => {
                debug!("Fetched {} chat threads", threads.len());
                self.store
                    .dispatch(Action::Chat(ChatAction::ThreadsFetched(threads)));
                Ok(())
            }
            Err(err) => {
                self.store
                    .dispatch(Action::Chat(ChatAction::FetchFailed(err.to_string())));
                Err(err)
            }
        }
    }

    /// Re-fetch messages for the currently open thread, if any
    pub async fn refresh_active_messages(&self) -> Result<(), ApiError> {
        let Some(thread_id) = self.store.select(|s| s.chat.active_thread_id.clone()) else {
            return Ok(());
        };
        match self.api.support_messages(&thread_id).await {
            Ok(messages) => {
                self.store.dispatch(Action::Chat(ChatAction::MessagesFetched {
                    thread_id,
                    messages,
                }));
                Ok(())
            }
            Err(err) => {
                self.store
                    .dispatch(Action::Chat(ChatAction::FetchFailed(err.to_string())));
                Err(err)
            }
        }
    }

    pub async fn start_support_thread(&self, subject: &str) -> Result<ChatThread> {
        let thread = self
            .api
            .start_support_thread(subject)
            .await
            .context("Failed to start support thread")?;
        self.store
            .dispatch(Action::Chat(ChatAction::ThreadStarted(thread.clone())));
        Ok(thread)
    }

    /// Send a reply with an optimistic local echo. The pending entry is
    /// swapped for the server copy on success and marked failed (still
    /// visible, retryable) on error.
    pub async fn send_reply(&self, thread_id: &str, body: &str) -> Result<ChatMessage> {
        let sender_id = self.api.current_user_id()?;
        let client_ref = Uuid::new_v4().to_string();
        let optimistic = ChatMessage {
            id: client_ref.clone(),
            thread_id: thread_id.to_string(),
            sender_id,
            body: body.to_string(),
            sent_at: Utc::now(),
            read: true,
            delivery: Delivery::Pending,
        };
        self.store
            .dispatch(Action::Chat(ChatAction::ReplyPending(optimistic)));

        match self.api.send_support_reply(thread_id, body).await {
            Ok(message) => {
                self.store.dispatch(Action::Chat(ChatAction::ReplyConfirmed {
                    client_ref,
                    message: message.clone(),
                }));
                Ok(message)
            }
            Err(err) => {
                warn!("Reply to thread {} failed: {}", thread_id, err);
                self.store.dispatch(Action::Chat(ChatAction::ReplyFailed {
                    thread_id: thread_id.to_string(),
                    client_ref,
                }));
                Err(err.into())
            }
        }
    }

    /// Clear the unread state locally and tell the backend. The local
    /// transition happens first so the UI settles immediately; a failed
    /// remote call is logged and corrected by the next thread poll.
    pub async fn mark_thread_read(&self, thread_id: &str) -> Result<()> {
        self.store
            .dispatch(Action::Chat(ChatAction::MarkThreadRead(thread_id.to_string())));
        if let Err(err) = self.api.mark_thread_read(thread_id).await {
            warn!("Failed to mark thread {} read remotely: {}", thread_id, err);
        }
        Ok(())
    }

    // --- tickets --------------------------------------------------------

    /// Raise a support ticket: opens a backing support thread and records
    /// the ticket locally from the server's thread id.
    pub async fn create_support_ticket(
        &self,
        title: &str,
        description: &str,
        category: &str,
    ) -> Result<Ticket> {
        let user_id = self.api.current_user_id()?;
        let thread = self
            .api
            .start_support_thread(title)
            .await
            .context("Failed to create support ticket")?;
        let user_avatar = self.store.select(|s| {
            s.auth
                .account
                .as_ref()
                .and_then(|account| account.avatar_url.clone())
        });
        let ticket = Ticket {
            id: thread.id.clone(),
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            status: TicketStatus::Open,
            created_at: Utc::now(),
            user_id,
            user_avatar,
        };
        self.store
            .dispatch(Action::Chat(ChatAction::ThreadStarted(thread)));
        self.store
            .dispatch(Action::Ticket(TicketAction::AddTicket(ticket.clone())));
        Ok(ticket)
    }

    /// Resolve a ticket and its backing thread. Purely local state; the
    /// thread flag is what the resolved filter reads.
    pub fn resolve_ticket(&self, ticket_id: &str) {
        self.store
            .dispatch(Action::Ticket(TicketAction::ResolveTicket(
                ticket_id.to_string(),
            )));
        self.store
            .dispatch(Action::Chat(ChatAction::ThreadResolved(ticket_id.to_string())));
    }

    // --- bookings -------------------------------------------------------

    pub async fn fetch_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        let bookings = self.api.list_bookings().await?;
        debug!("Fetched {} bookings", bookings.len());
        Ok(bookings)
    }

    /// Submit the wizard draft. The draft's idempotency key makes a
    /// double-click or retry safe; the wizard resets only on success so a
    /// failure leaves everything in place for another attempt.
    pub async fn submit_booking(&self) -> Result<Booking> {
        let Some((request, key)) = self.store.select(|s| s.booking.to_request()) else {
            bail!("Booking draft is incomplete");
        };
        info!("Submitting booking for property {}", request.property_id);
        let booking = self
            .api
            .create_booking(&request, &key)
            .await
            .context("Failed to submit booking")?;
        self.store
            .dispatch(Action::Booking(BookingAction::SubmitSucceeded));
        Ok(booking)
    }

    // --- auth and registration -----------------------------------------

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<()> {
        let response = self
            .api
            .login(email, password)
            .await
            .context("Login failed")?;
        self.store
            .dispatch(Action::Auth(AuthAction::LoginPending(response.pending_id)));
        Ok(())
    }

    pub async fn verify_sign_in(&self, code: &str) -> Result<()> {
        let Some(pending_id) = self.store.select(|s| s.auth.pending_login_id.clone()) else {
            bail!("No login awaiting verification");
        };
        let session = self
            .api
            .verify_login(&pending_id, code)
            .await
            .context("Login verification failed")?;
        info!("Signed in as {}", session.user.name);
        self.store
            .dispatch(Action::Auth(AuthAction::SignedIn(session)));
        self.persist_session().await
    }

    /// Register a cleaning business, driving the status machine on the
    /// registration slice. Validation runs before any network traffic.
    pub async fn register_cleaning_business(&self, form: RegistrationForm) -> Result<()> {
        validation::validate_registration(&form)?;
        self.store
            .dispatch(Action::Registration(RegistrationAction::SubmitStarted));
        match self.api.register_cleaning_business(&form).await {
            Ok(session) => {
                self.store
                    .dispatch(Action::Registration(RegistrationAction::SubmitSucceeded));
                self.store
                    .dispatch(Action::Auth(AuthAction::SignedIn(session)));
                self.persist_session().await
            }
            Err(err) => {
                self.store
                    .dispatch(Action::Registration(RegistrationAction::SubmitFailed(
                        err.to_string(),
                    )));
                Err(err.into())
            }
        }
    }

    /// Write the auth slice to the session file (the only persisted state)
    pub async fn persist_session(&self) -> Result<()> {
        let session = self.store.select(|s| {
            s.auth
                .token
                .clone()
                .zip(s.auth.account.clone())
                .map(|(token, account)| SessionFile { token, account })
        });
        match session {
            Some(session) => session.save(&self.session_file).await,
            None => Ok(()),
        }
    }

    // --- analytics ------------------------------------------------------

    /// Fetch the analytics snapshot for the signed-in role and report it.
    /// Dashboards render this data directly; nothing else consumes it.
    pub async fn refresh_analytics(&self) -> Result<(), ApiError> {
        let user_id = self.api.current_user_id()?;
        let role = self
            .store
            .select(|s| s.auth.account.as_ref().map(|account| account.role));
        let snapshot = match role {
            Some(UserRole::CleaningBusiness) => self.api.business_analytics(&user_id).await?,
            _ => self.api.property_manager_analytics(&user_id).await?,
        };
        info!(
            "Analytics: {} bookings total, {} completed, {} cancelled",
            snapshot.total_bookings, snapshot.completed_bookings, snapshot.cancelled_bookings
        );
        Ok(())
    }
}

/// Poll the signed-in user's thread list
pub struct ThreadPoll(pub Arc<Operations>);

#[async_trait]
impl PollTask for ThreadPoll {
    fn name(&self) -> &'static str {
        "thread-list"
    }

    async fn run(&self) -> Result<(), ApiError> {
        self.0.refresh_threads().await
    }
}

/// Poll the open thread's messages
pub struct MessagePoll(pub Arc<Operations>);

#[async_trait]
impl PollTask for MessagePoll {
    fn name(&self) -> &'static str {
        "messages"
    }

    async fn run(&self) -> Result<(), ApiError> {
        self.0.refresh_active_messages().await
    }
}

/// Poll the analytics snapshot
pub struct AnalyticsPoll(pub Arc<Operations>);

#[async_trait]
impl PollTask for AnalyticsPoll {
    fn name(&self) -> &'static str {
        "analytics"
    }

    async fn run(&self) -> Result<(), ApiError> {
        self.0.refresh_analytics().await
    }
}
