//! Booking wizard flows through the store.
//!
//! Covers the step-gating invariants, the full-reset transition, and the
//! end-to-end pick-service-then-property scenario.

mod common;

use common::*;
use limpiar_portal::store::booking::{BookingAction, BookingWizard, FIRST_STEP, LAST_STEP};
use limpiar_portal::store::{Action, Store};

fn booking(store: &Store, action: BookingAction) {
    store.dispatch(Action::Booking(action));
}

#[test]
fn service_then_property_then_step_three() {
    // 1. Choose a service on step 1
    let store = Store::new();
    booking(
        &store,
        BookingAction::SetServiceTypes(vec![service("1", "Cleaning", 100)]),
    );

    // 2. Advance and choose a property
    booking(&store, BookingAction::SetStep(2));
    booking(&store, BookingAction::SetProperty(property_ref("p1", "Prop")));

    // 3. Advance to the date step
    booking(&store, BookingAction::SetStep(3));

    store.select(|s| {
        assert_eq!(s.booking.service_types[0].id, "1");
        assert_eq!(s.booking.property.as_ref().unwrap().id, "p1");
        assert_eq!(s.booking.step, 3);
    });
}

#[test]
fn step_never_leaves_its_range_or_skips_prerequisites() {
    let store = Store::new();

    // Hammer the wizard with transitions it must refuse
    booking(&store, BookingAction::PrevStep);
    booking(&store, BookingAction::SetStep(6));
    booking(&store, BookingAction::NextStep);
    booking(&store, BookingAction::SetStep(0));

    store.select(|s| {
        assert_eq!(s.booking.step, FIRST_STEP, "nothing was filled in");
    });

    // Fill everything and confirm the top of the range holds
    booking(
        &store,
        BookingAction::SetServiceTypes(vec![service("1", "Cleaning", 100)]),
    );
    booking(&store, BookingAction::SetProperty(property_ref("p1", "Prop")));
    booking(
        &store,
        BookingAction::SetSchedule(limpiar_portal::models::Schedule::Single {
            date: chrono::NaiveDate::from_ymd_opt(2026, 4, 2).unwrap(),
        }),
    );
    booking(
        &store,
        BookingAction::SetTimeSlots(vec!["10:00".to_string()]),
    );
    for _ in 0..10 {
        booking(&store, BookingAction::NextStep);
    }
    store.select(|s| assert_eq!(s.booking.step, LAST_STEP));
}

#[test]
fn close_modal_is_an_idempotent_full_reset() {
    let store = Store::new();

    // Arbitrary prior mutations
    booking(&store, BookingAction::OpenModal);
    booking(
        &store,
        BookingAction::SetServiceTypes(vec![service("1", "Cleaning", 100)]),
    );
    booking(&store, BookingAction::SetProperty(property_ref("p1", "Prop")));
    booking(&store, BookingAction::SetStep(3));
    booking(&store, BookingAction::SetNotes("ring the bell".to_string()));

    booking(&store, BookingAction::CloseModal);
    store.select(|s| assert_eq!(s.booking, BookingWizard::default()));

    // Closing again changes nothing
    booking(&store, BookingAction::CloseModal);
    store.select(|s| assert_eq!(s.booking, BookingWizard::default()));
}
