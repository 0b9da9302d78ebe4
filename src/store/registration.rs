//! Registration/onboarding slice: a multi-step form with an additive
//! merge and a strict submission status machine.
//!
//! Status may only move Idle -> Loading -> (Success | Error); the only way
//! out of Error is resubmission. Back navigation never clears entered
//! field values.

use crate::models::{RegistrationForm, RegistrationStatus};

pub const FIRST_STEP: u8 = 1;
pub const LAST_STEP: u8 = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationState {
    pub step: u8,
    pub form: RegistrationForm,
    pub status: RegistrationStatus,
}

impl Default for RegistrationState {
    fn default() -> Self {
        Self {
            step: FIRST_STEP,
            form: RegistrationForm::default(),
            status: RegistrationStatus::Idle,
        }
    }
}

/// Partial form update; only `Some` fields overwrite
#[derive(Debug, Clone, Default)]
pub struct RegistrationPatch {
    pub business_name: Option<String>,
    pub operator_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub services_offered: Option<Vec<String>>,
    pub team_size: Option<u32>,
}

#[derive(Debug, Clone)]
pub enum RegistrationAction {
    UpdateForm(RegistrationPatch),
    NextStep,
    PrevStep,
    SubmitStarted,
    SubmitSucceeded,
    SubmitFailed(String),
    Reset,
}

pub fn reduce(state: &mut RegistrationState, action: RegistrationAction) {
    match action {
        RegistrationAction::UpdateForm(patch) => {
            let form = &mut state.form;
            if let Some(v) = patch.business_name {
                form.business_name = v;
            }
            if let Some(v) = patch.operator_name {
                form.operator_name = v;
            }
            if let Some(v) = patch.email {
                form.email = v;
            }
            if let Some(v) = patch.phone {
                form.phone = v;
            }
            if let Some(v) = patch.address {
                form.address = v;
            }
            if let Some(v) = patch.city {
                form.city = v;
            }
            if let Some(v) = patch.services_offered {
                form.services_offered = v;
            }
            if let Some(v) = patch.team_size {
                form.team_size = v;
            }
        }
        RegistrationAction::NextStep => {
            state.step = (state.step + 1).min(LAST_STEP);
        }
        RegistrationAction::PrevStep => {
            state.step = state.step.saturating_sub(1).max(FIRST_STEP);
        }
        RegistrationAction::SubmitStarted => {
            // Resubmission out of Error is the only recovery path
            if matches!(
                state.status,
                RegistrationStatus::Idle | RegistrationStatus::Error(_)
            ) {
                state.status = RegistrationStatus::Loading;
            }
        }
        RegistrationAction::SubmitSucceeded => {
            if state.status == RegistrationStatus::Loading {
                state.status = RegistrationStatus::Success;
            }
        }
        RegistrationAction::SubmitFailed(message) => {
            if state.status == RegistrationStatus::Loading {
                state.status = RegistrationStatus::Error(message);
            }
        }
        RegistrationAction::Reset => {
            *state = RegistrationState::default();
        }
    }
}
