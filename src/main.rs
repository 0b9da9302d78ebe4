use std::sync::Arc;

use limpiar_portal::api::ApiClient;
use limpiar_portal::config::Config;
use limpiar_portal::ops::{AnalyticsPoll, MessagePoll, Operations, ThreadPoll};
use limpiar_portal::poll::Poller;
use limpiar_portal::session::{SessionFile, SessionProvider};
use limpiar_portal::store::auth::AuthAction;
use limpiar_portal::store::{Action, Store};
use tracing::{info, warn, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let config = Config::from_env()?;
    info!("Limpiar portal core");
    info!("Backend: {}", config.api_base_url);

    // Restore the persisted session, if any
    let store = Arc::new(Store::new());
    if let Some(session) = SessionFile::load(&config.session_file).await? {
        info!("Restored session for {}", session.account.name);
        store.dispatch(Action::Auth(AuthAction::SessionRestored {
            token: session.token,
            account: session.account,
        }));
    }

    let session: Arc<dyn SessionProvider> = store.clone();
    let api = ApiClient::new(&config, session)?;
    let ops = Arc::new(Operations::new(
        api,
        store.clone(),
        config.session_file.clone().into(),
    ));

    if !store.select(|s| s.auth.is_authenticated()) {
        warn!("No session available - sign in through a portal client first");
        return Ok(());
    }

    // One-shot dashboard snapshot
    let bookings = ops.fetch_bookings().await?;
    info!("Fetched {} bookings", bookings.len());
    for booking in bookings.iter().take(5) {
        info!(
            "  {} - {} ({})",
            booking.id,
            booking.property_name,
            booking.status.as_str()
        );
    }

    ops.refresh_threads().await?;
    let (thread_count, unread) = store.select(|s| (s.chat.threads.len(), s.chat.unread_total()));
    info!("{} chat threads, {} unread messages", thread_count, unread);

    let snapshot = serde_json::to_string_pretty(&bookings)?;
    tokio::fs::write("dashboard_snapshot.json", snapshot).await?;
    info!("Saved dashboard snapshot to dashboard_snapshot.json");

    // Supervised polling until interrupted
    let threads = Poller::new(config.thread_poll_interval, config.max_poll_backoff)
        .spawn(Arc::new(ThreadPoll(ops.clone())));
    let messages = Poller::new(config.message_poll_interval, config.max_poll_backoff)
        .spawn(Arc::new(MessagePoll(ops.clone())));
    let analytics = Poller::new(config.analytics_poll_interval, config.max_poll_backoff)
        .spawn(Arc::new(AnalyticsPoll(ops.clone())));

    info!("Polling started - press ctrl-c to stop");
    tokio::signal::ctrl_c().await?;

    threads.stop().await;
    messages.stop().await;
    analytics.stop().await;

    ops.persist_session().await?;
    info!("Session saved");

    Ok(())
}
