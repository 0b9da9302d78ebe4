//! Booking wizard: a linear state machine over six steps.
//!
//! Step order: service type, property, date, time, notes, preview. A step
//! can only be reached once every earlier step's required field is set;
//! going back never clears entered data. Closing the modal (or a
//! successful submit) is the single full-reset transition.

use crate::models::{BookingRequest, PropertyRef, Schedule, ServiceSelection};
use uuid::Uuid;

pub const FIRST_STEP: u8 = 1;
pub const LAST_STEP: u8 = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct BookingWizard {
    pub step: u8,
    pub service_types: Vec<ServiceSelection>,
    pub property: Option<PropertyRef>,
    pub schedule: Option<Schedule>,
    pub time_slots: Vec<String>,
    pub notes: Option<String>,
    pub modal_open: bool,
    /// Minted when the modal opens, sent with the eventual submit, cleared
    /// only by reset. Resubmitting the same draft reuses the same key.
    pub idempotency_key: Option<String>,
}

impl Default for BookingWizard {
    fn default() -> Self {
        Self {
            step: FIRST_STEP,
            service_types: Vec::new(),
            property: None,
            schedule: None,
            time_slots: Vec::new(),
            notes: None,
            modal_open: false,
            idempotency_key: None,
        }
    }
}

impl BookingWizard {
    /// Whether `target` is reachable: every step before it must have its
    /// required field populated. Notes (step 5) is optional.
    pub fn prerequisites_met(&self, target: u8) -> bool {
        if target > 1 && self.service_types.is_empty() {
            return false;
        }
        if target > 2 && self.property.is_none() {
            return false;
        }
        if target > 3 && self.schedule.is_none() {
            return false;
        }
        if target > 4 && self.time_slots.is_empty() {
            return false;
        }
        true
    }

    /// The submit payload, available once every required field is set
    pub fn to_request(&self) -> Option<(BookingRequest, String)> {
        let property = self.property.as_ref()?;
        let schedule = self.schedule.clone()?;
        let key = self.idempotency_key.clone()?;
        if self.service_types.is_empty() || self.time_slots.is_empty() {
            return None;
        }
        let request = BookingRequest {
            property_id: property.id.clone(),
            service_type_ids: self.service_types.iter().map(|s| s.id.clone()).collect(),
            schedule,
            time_slots: self.time_slots.clone(),
            notes: self.notes.clone(),
        };
        Some((request, key))
    }
}

#[derive(Debug, Clone)]
pub enum BookingAction {
    OpenModal,
    CloseModal,
    SetStep(u8),
    NextStep,
    PrevStep,
    SetServiceTypes(Vec<ServiceSelection>),
    SetProperty(PropertyRef),
    SetSchedule(Schedule),
    SetTimeSlots(Vec<String>),
    SetNotes(String),
    /// Dispatched by the submit operation on backend success
    SubmitSucceeded,
}

pub fn reduce(state: &mut BookingWizard, action: BookingAction) {
    match action {
        BookingAction::OpenModal => {
            state.modal_open = true;
            if state.idempotency_key.is_none() {
                state.idempotency_key = Some(Uuid::new_v4().to_string());
            }
        }
        BookingAction::CloseModal | BookingAction::SubmitSucceeded => {
            *state = BookingWizard::default();
        }
        BookingAction::SetStep(step) => {
            let step = step.clamp(FIRST_STEP, LAST_STEP);
            // Moving backward is always allowed; forward only past
            // completed steps.
            if step <= state.step || state.prerequisites_met(step) {
                state.step = step;
            }
        }
        BookingAction::NextStep => {
            let next = (state.step + 1).min(LAST_STEP);
            if state.prerequisites_met(next) {
                state.step = next;
            }
        }
        BookingAction::PrevStep => {
            state.step = state.step.saturating_sub(1).max(FIRST_STEP);
        }
        BookingAction::SetServiceTypes(services) => {
            state.service_types = services;
        }
        BookingAction::SetProperty(property) => {
            state.property = Some(property);
        }
        BookingAction::SetSchedule(schedule) => {
            state.schedule = Some(schedule);
        }
        BookingAction::SetTimeSlots(slots) => {
            state.time_slots = slots;
        }
        BookingAction::SetNotes(notes) => {
            state.notes = Some(notes);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ServiceSelection {
        ServiceSelection {
            id: "1".to_string(),
            name: "Cleaning".to_string(),
            image: "x".to_string(),
            price: 100,
        }
    }

    fn property() -> PropertyRef {
        PropertyRef {
            id: "p1".to_string(),
            name: "Prop".to_string(),
            image: "y".to_string(),
        }
    }

    #[test]
    fn cannot_advance_past_unfinished_step() {
        let mut state = BookingWizard::default();
        reduce(&mut state, BookingAction::NextStep);
        assert_eq!(state.step, 1, "no service type chosen yet");

        reduce(&mut state, BookingAction::SetStep(4));
        assert_eq!(state.step, 1, "jumping over prerequisites is refused");
    }

    #[test]
    fn step_stays_in_range() {
        let mut state = BookingWizard::default();
        reduce(&mut state, BookingAction::PrevStep);
        assert_eq!(state.step, FIRST_STEP);

        reduce(&mut state, BookingAction::SetServiceTypes(vec![service()]));
        reduce(&mut state, BookingAction::SetProperty(property()));
        reduce(
            &mut state,
            BookingAction::SetSchedule(Schedule::Single {
                date: chrono::NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            }),
        );
        reduce(
            &mut state,
            BookingAction::SetTimeSlots(vec!["09:00".to_string()]),
        );
        reduce(&mut state, BookingAction::SetStep(99));
        assert_eq!(state.step, LAST_STEP);
    }

    #[test]
    fn going_back_preserves_entered_data() {
        let mut state = BookingWizard::default();
        reduce(&mut state, BookingAction::SetServiceTypes(vec![service()]));
        reduce(&mut state, BookingAction::SetStep(2));
        reduce(&mut state, BookingAction::SetProperty(property()));
        reduce(&mut state, BookingAction::PrevStep);
        assert_eq!(state.step, 1);
        assert!(state.property.is_some());
        assert_eq!(state.service_types.len(), 1);
    }

    #[test]
    fn open_modal_mints_key_once() {
        let mut state = BookingWizard::default();
        reduce(&mut state, BookingAction::OpenModal);
        let key = state.idempotency_key.clone();
        assert!(key.is_some());

        // Reopening the same draft keeps the same key
        reduce(&mut state, BookingAction::OpenModal);
        assert_eq!(state.idempotency_key, key);

        reduce(&mut state, BookingAction::CloseModal);
        assert!(state.idempotency_key.is_none());
    }

    #[test]
    fn to_request_requires_complete_draft() {
        let mut state = BookingWizard::default();
        reduce(&mut state, BookingAction::OpenModal);
        assert!(state.to_request().is_none());

        reduce(&mut state, BookingAction::SetServiceTypes(vec![service()]));
        reduce(&mut state, BookingAction::SetProperty(property()));
        reduce(
            &mut state,
            BookingAction::SetSchedule(Schedule::Single {
                date: chrono::NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            }),
        );
        reduce(
            &mut state,
            BookingAction::SetTimeSlots(vec!["09:00".to_string()]),
        );
        let (request, _key) = state.to_request().expect("draft is complete");
        assert_eq!(request.property_id, "p1");
        assert_eq!(request.service_type_ids, vec!["1".to_string()]);
    }
}
