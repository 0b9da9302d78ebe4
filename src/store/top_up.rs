//! Wallet top-up modal slice: visibility plus the entered amount.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopUpModal {
    pub open: bool,
    pub amount: i64,
}

#[derive(Debug, Clone)]
pub enum TopUpAction {
    Open,
    Close,
    SetAmount(i64),
}

pub fn reduce(state: &mut TopUpModal, action: TopUpAction) {
    match action {
        TopUpAction::Open => {
            state.open = true;
        }
        TopUpAction::Close => {
            *state = TopUpModal::default();
        }
        TopUpAction::SetAmount(amount) => {
            state.amount = amount.max(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_resets_the_amount() {
        let mut state = TopUpModal::default();
        reduce(&mut state, TopUpAction::Open);
        reduce(&mut state, TopUpAction::SetAmount(5000));
        reduce(&mut state, TopUpAction::Close);
        assert_eq!(state, TopUpModal::default());
    }

    #[test]
    fn amount_never_goes_negative() {
        let mut state = TopUpModal::default();
        reduce(&mut state, TopUpAction::SetAmount(-10));
        assert_eq!(state.amount, 0);
    }
}
