//! Portal state, owned by one store and mutated only through dispatched
//! actions. Reducers are synchronous and never perform IO; remote effects
//! live in [`crate::ops`] and land here as fulfillment actions.

pub mod auth;
pub mod booking;
pub mod chat;
pub mod property;
pub mod registration;
pub mod ticket;
pub mod top_up;

use crate::session::SessionProvider;
use std::sync::RwLock;

/// All slices together
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub auth: auth::AuthState,
    pub booking: booking::BookingWizard,
    pub chat: chat::ChatState,
    pub property: property::PropertyDraft,
    pub registration: registration::RegistrationState,
    pub ticket: ticket::TicketState,
    pub top_up: top_up::TopUpModal,
}

#[derive(Debug, Clone)]
pub enum Action {
    Auth(auth::AuthAction),
    Booking(booking::BookingAction),
    Chat(chat::ChatAction),
    Property(property::PropertyAction),
    Registration(registration::RegistrationAction),
    Ticket(ticket::TicketAction),
    TopUp(top_up::TopUpAction),
}

/// The single shared mutable resource of the portal
#[derive(Debug, Default)]
pub struct Store {
    state: RwLock<AppState>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    /// Apply one action synchronously
    pub fn dispatch(&self, action: Action) {
        let mut state = self.state.write().expect("state lock poisoned");
        match action {
            Action::Auth(action) => auth::reduce(&mut state.auth, action),
            Action::Booking(action) => booking::reduce(&mut state.booking, action),
            Action::Chat(action) => chat::reduce(&mut state.chat, action),
            Action::Property(action) => property::reduce(&mut state.property, action),
            Action::Registration(action) => registration::reduce(&mut state.registration, action),
            Action::Ticket(action) => ticket::reduce(&mut state.ticket, action),
            Action::TopUp(action) => top_up::reduce(&mut state.top_up, action),
        }
    }

    /// Read a projection of the current state
    pub fn select<T>(&self, f: impl FnOnce(&AppState) -> T) -> T {
        let state = self.state.read().expect("state lock poisoned");
        f(&state)
    }
}

impl SessionProvider for Store {
    fn token(&self) -> Option<String> {
        self.select(|state| state.auth.token.clone())
    }

    fn current_user_id(&self) -> Option<String> {
        self.select(|state| state.auth.account.as_ref().map(|account| account.id.clone()))
    }
}
