//! Chat slice: threads, optimistic sends, and fetch reconciliation.
//!
//! A fetched message list never blindly replaces local state. Server
//! messages win for every id they carry; local entries still waiting for
//! (or denied) confirmation are kept visible in send order. A confirmed
//! send swaps the pending entry for the server copy by its client ref, so
//! the next poll cannot produce a duplicate under a different id.

use crate::models::{ChatMessage, ChatThread, Delivery};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatState {
    pub threads: Vec<ChatThread>,
    pub active_thread_id: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ChatState {
    pub fn thread(&self, id: &str) -> Option<&ChatThread> {
        self.threads.iter().find(|thread| thread.id == id)
    }

    fn thread_mut(&mut self, id: &str) -> Option<&mut ChatThread> {
        self.threads.iter_mut().find(|thread| thread.id == id)
    }

    pub fn unread_total(&self) -> u32 {
        self.threads.iter().map(|thread| thread.unread_count).sum()
    }

    pub fn resolved_threads(&self) -> impl Iterator<Item = &ChatThread> {
        self.threads.iter().filter(|thread| thread.resolved)
    }
}

#[derive(Debug, Clone)]
pub enum ChatAction {
    FetchStarted,
    FetchFailed(String),
    ThreadsFetched(Vec<ChatThread>),
    MessagesFetched {
        thread_id: String,
        messages: Vec<ChatMessage>,
    },
    ThreadStarted(ChatThread),
    OpenThread(String),
    /// Optimistic local insert; the message id is the client ref
    ReplyPending(ChatMessage),
    ReplyConfirmed {
        client_ref: String,
        message: ChatMessage,
    },
    ReplyFailed {
        thread_id: String,
        client_ref: String,
    },
    MarkThreadRead(String),
    ThreadResolved(String),
    ThreadEscalated(String),
}

pub fn reduce(state: &mut ChatState, action: ChatAction) {
    match action {
        ChatAction::FetchStarted => {
            state.loading = true;
        }
        ChatAction::FetchFailed(message) => {
            state.loading = false;
            state.error = Some(message);
        }
        ChatAction::ThreadsFetched(incoming) => {
            state.loading = false;
            state.error = None;
            let previous = std::mem::take(&mut state.threads);
            state.threads = incoming
                .into_iter()
                .map(|mut thread| {
                    if let Some(prev) = previous.iter().find(|p| p.id == thread.id) {
                        // Thread listings often omit message bodies; keep
                        // what we already have and reconcile otherwise.
                        if thread.messages.is_empty() {
                            thread.messages = prev.messages.clone();
                        } else {
                            thread.messages = reconcile(&prev.messages, thread.messages);
                        }
                    }
                    thread
                })
                .collect();
        }
        ChatAction::MessagesFetched {
            thread_id,
            messages,
        } => {
            state.loading = false;
            state.error = None;
            if let Some(thread) = state.thread_mut(&thread_id) {
                thread.messages = reconcile(&thread.messages, messages);
                thread.last_message = thread.messages.last().map(|m| m.body.clone());
            }
        }
        ChatAction::ThreadStarted(thread) => {
            if state.thread(&thread.id).is_none() {
                state.active_thread_id = Some(thread.id.clone());
                state.threads.push(thread);
            }
        }
        ChatAction::OpenThread(thread_id) => {
            state.active_thread_id = Some(thread_id);
        }
        ChatAction::ReplyPending(message) => {
            if let Some(thread) = state.thread_mut(&message.thread_id) {
                thread.last_message = Some(message.body.clone());
                thread.messages.push(message);
            }
        }
        ChatAction::ReplyConfirmed {
            client_ref,
            message,
        } => {
            if let Some(thread) = state.thread_mut(&message.thread_id) {
                if let Some(entry) = thread.messages.iter_mut().find(|m| m.id == client_ref) {
                    *entry = message;
                } else if !thread.messages.iter().any(|m| m.id == message.id) {
                    // A poll already dropped the pending entry; append the
                    // confirmed copy once.
                    thread.messages.push(message);
                }
            }
        }
        ChatAction::ReplyFailed {
            thread_id,
            client_ref,
        } => {
            if let Some(thread) = state.thread_mut(&thread_id) {
                if let Some(entry) = thread.messages.iter_mut().find(|m| m.id == client_ref) {
                    entry.delivery = Delivery::Failed;
                }
            }
        }
        ChatAction::MarkThreadRead(thread_id) => {
            if let Some(thread) = state.thread_mut(&thread_id) {
                thread.unread_count = 0;
                for message in &mut thread.messages {
                    message.read = true;
                }
            }
        }
        ChatAction::ThreadResolved(thread_id) => {
            if let Some(thread) = state.thread_mut(&thread_id) {
                thread.resolved = true;
            }
        }
        ChatAction::ThreadEscalated(thread_id) => {
            if let Some(thread) = state.thread_mut(&thread_id) {
                thread.escalated = true;
            }
        }
    }
}

/// Merge a server-fetched message list with local state: the server list
/// is authoritative for confirmed history, unconfirmed local entries are
/// retained in send order.
fn reconcile(local: &[ChatMessage], server: Vec<ChatMessage>) -> Vec<ChatMessage> {
    let server_ids: HashSet<String> = server.iter().map(|m| m.id.clone()).collect();
    let mut merged = server;
    for message in local {
        if message.delivery != Delivery::Sent && !server_ids.contains(message.id.as_str()) {
            merged.push(message.clone());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn thread(id: &str) -> ChatThread {
        ChatThread {
            id: id.to_string(),
            participants: vec!["u1".to_string(), "support".to_string()],
            messages: Vec::new(),
            unread_count: 0,
            participant_info: Default::default(),
            escalated: false,
            resolved: false,
            last_message: None,
        }
    }

    fn message(id: &str, thread_id: &str, body: &str, delivery: Delivery) -> ChatMessage {
        ChatMessage {
            id: id.to_string(),
            thread_id: thread_id.to_string(),
            sender_id: "u1".to_string(),
            body: body.to_string(),
            sent_at: Utc::now(),
            read: false,
            delivery,
        }
    }

    #[test]
    fn confirmed_reply_replaces_pending_entry() {
        let mut state = ChatState::default();
        reduce(&mut state, ChatAction::ThreadStarted(thread("t1")));
        reduce(
            &mut state,
            ChatAction::ReplyPending(message("ref-1", "t1", "hello", Delivery::Pending)),
        );

        reduce(
            &mut state,
            ChatAction::ReplyConfirmed {
                client_ref: "ref-1".to_string(),
                message: message("srv-9", "t1", "hello", Delivery::Sent),
            },
        );

        let messages = &state.thread("t1").unwrap().messages;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id, "srv-9");
        assert_eq!(messages[0].delivery, Delivery::Sent);
    }

    #[test]
    fn fetch_keeps_unconfirmed_messages_and_never_duplicates() {
        let mut state = ChatState::default();
        reduce(&mut state, ChatAction::ThreadsFetched(vec![thread("t1")]));
        reduce(
            &mut state,
            ChatAction::ReplyPending(message("ref-1", "t1", "still sending", Delivery::Pending)),
        );

        // Poll lands while the send is in flight
        let server = vec![
            message("srv-1", "t1", "earlier", Delivery::Sent),
            message("srv-2", "t1", "history", Delivery::Sent),
        ];
        reduce(
            &mut state,
            ChatAction::MessagesFetched {
                thread_id: "t1".to_string(),
                messages: server,
            },
        );

        let messages = &state.thread("t1").unwrap().messages;
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2].id, "ref-1", "pending entry stays last");

        // Send confirms, next poll includes the server copy
        reduce(
            &mut state,
            ChatAction::ReplyConfirmed {
                client_ref: "ref-1".to_string(),
                message: message("srv-3", "t1", "still sending", Delivery::Sent),
            },
        );
        reduce(
            &mut state,
            ChatAction::MessagesFetched {
                thread_id: "t1".to_string(),
                messages: vec![
                    message("srv-1", "t1", "earlier", Delivery::Sent),
                    message("srv-2", "t1", "history", Delivery::Sent),
                    message("srv-3", "t1", "still sending", Delivery::Sent),
                ],
            },
        );

        let messages = &state.thread("t1").unwrap().messages;
        assert_eq!(messages.len(), 3, "no duplicate for the confirmed send");
        let ids: Vec<&str> = messages.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["srv-1", "srv-2", "srv-3"]);
    }

    #[test]
    fn mark_thread_read_clears_unread_and_flags_messages() {
        let mut state = ChatState::default();
        let mut t = thread("t1");
        t.unread_count = 4;
        t.messages = vec![
            message("m1", "t1", "a", Delivery::Sent),
            message("m2", "t1", "b", Delivery::Sent),
        ];
        reduce(&mut state, ChatAction::ThreadsFetched(vec![t]));

        reduce(&mut state, ChatAction::MarkThreadRead("t1".to_string()));
        let thread = state.thread("t1").unwrap();
        assert_eq!(thread.unread_count, 0);
        assert!(thread.messages.iter().all(|m| m.read));
    }

    #[test]
    fn resolving_a_thread_is_visible_to_the_filter() {
        let mut state = ChatState::default();
        reduce(
            &mut state,
            ChatAction::ThreadsFetched(vec![thread("t1"), thread("t2")]),
        );
        reduce(&mut state, ChatAction::ThreadResolved("t2".to_string()));

        let resolved: Vec<&str> = state.resolved_threads().map(|t| t.id.as_str()).collect();
        assert_eq!(resolved, vec!["t2"]);
    }

    #[test]
    fn failed_reply_stays_visible_as_failed() {
        let mut state = ChatState::default();
        reduce(&mut state, ChatAction::ThreadStarted(thread("t1")));
        reduce(
            &mut state,
            ChatAction::ReplyPending(message("ref-1", "t1", "oops", Delivery::Pending)),
        );
        reduce(
            &mut state,
            ChatAction::ReplyFailed {
                thread_id: "t1".to_string(),
                client_ref: "ref-1".to_string(),
            },
        );

        let messages = &state.thread("t1").unwrap().messages;
        assert_eq!(messages[0].delivery, Delivery::Failed);

        // A later poll must not wipe the failed entry
        reduce(
            &mut state,
            ChatAction::MessagesFetched {
                thread_id: "t1".to_string(),
                messages: Vec::new(),
            },
        );
        assert_eq!(state.thread("t1").unwrap().messages.len(), 1);
    }
}
