//! Ticket slice: newest first, resolve-only lifecycle, one status filter.

use crate::models::{Ticket, TicketStatus};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketState {
    pub tickets: Vec<Ticket>,
    /// `None` shows everything
    pub filter: Option<TicketStatus>,
}

impl TicketState {
    /// Tickets passing the current status filter
    pub fn visible(&self) -> Vec<&Ticket> {
        self.tickets
            .iter()
            .filter(|ticket| self.filter.map_or(true, |status| ticket.status == status))
            .collect()
    }
}

#[derive(Debug, Clone)]
pub enum TicketAction {
    AddTicket(Ticket),
    ResolveTicket(String),
    SetFilter(Option<TicketStatus>),
}

pub fn reduce(state: &mut TicketState, action: TicketAction) {
    match action {
        TicketAction::AddTicket(ticket) => {
            if state.tickets.iter().all(|t| t.id != ticket.id) {
                state.tickets.insert(0, ticket);
            }
        }
        TicketAction::ResolveTicket(id) => {
            // Idempotent; tickets are never deleted
            if let Some(ticket) = state.tickets.iter_mut().find(|t| t.id == id) {
                ticket.status = TicketStatus::Resolved;
            }
        }
        TicketAction::SetFilter(filter) => {
            state.filter = filter;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn ticket(id: &str) -> Ticket {
        Ticket {
            id: id.to_string(),
            title: "Broken dispenser".to_string(),
            description: "Soap dispenser in lobby is broken".to_string(),
            category: "maintenance".to_string(),
            status: TicketStatus::Open,
            created_at: Utc::now(),
            user_id: "u1".to_string(),
            user_avatar: None,
        }
    }

    #[test]
    fn new_tickets_are_prepended() {
        let mut state = TicketState::default();
        reduce(&mut state, TicketAction::AddTicket(ticket("t1")));
        reduce(&mut state, TicketAction::AddTicket(ticket("t2")));
        assert_eq!(state.tickets[0].id, "t2");
        assert_eq!(state.tickets[1].id, "t1");
    }

    #[test]
    fn resolve_is_idempotent() {
        let mut state = TicketState::default();
        reduce(&mut state, TicketAction::AddTicket(ticket("t1")));
        reduce(&mut state, TicketAction::ResolveTicket("t1".to_string()));
        reduce(&mut state, TicketAction::ResolveTicket("t1".to_string()));
        assert_eq!(state.tickets[0].status, TicketStatus::Resolved);
        assert_eq!(state.tickets.len(), 1);
    }

    #[test]
    fn resolving_a_missing_ticket_is_a_no_op() {
        let mut state = TicketState::default();
        reduce(&mut state, TicketAction::ResolveTicket("nope".to_string()));
        assert!(state.tickets.is_empty());
    }

    #[test]
    fn filter_matches_on_status() {
        let mut state = TicketState::default();
        reduce(&mut state, TicketAction::AddTicket(ticket("t1")));
        reduce(&mut state, TicketAction::AddTicket(ticket("t2")));
        reduce(&mut state, TicketAction::ResolveTicket("t1".to_string()));

        reduce(
            &mut state,
            TicketAction::SetFilter(Some(TicketStatus::Resolved)),
        );
        let visible = state.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "t1");
    }
}
