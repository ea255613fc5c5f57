//! PIN confirmation, the last step of PIN setup.

use crate::auth::Pin;
use crate::context::ScreenContext;
use crate::core::{Reduced, Reducer, Screen};
use crate::effects::Command;
use crate::validation::rules::{self, matches};
use crate::validation::FieldCheck;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub pin_to_confirm: Pin,
    pub pin: String,
}

impl State {
    pub fn new(pin_to_confirm: Pin, pin: impl Into<String>) -> Self {
        Self {
            pin_to_confirm,
            pin: pin.into(),
        }
    }

    pub fn validate(&self) -> FieldCheck {
        matches(
            "pin",
            &self.pin,
            "pin to confirm",
            self.pin_to_confirm.as_str(),
        )
    }

    pub fn can_confirm(&self) -> bool {
        self.validate().is_success()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SetPin(String),
    ConfirmTapped,
    SkipTapped,
    Delegate(Delegate),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Delegate {
    ConfirmedPin(Pin),
    Skip,
}

pub struct ConfirmPin;

impl Reducer for ConfirmPin {
    type State = State;
    type Action = Action;
    type Env = ScreenContext;

    fn reduce(state: &mut State, action: Action, _env: &ScreenContext) -> Reduced<Action> {
        match action {
            Action::SetPin(pin) => {
                state.pin = pin;
                Ok(Command::none())
            }
            Action::ConfirmTapped => {
                rules::precondition("ConfirmPin", "confirm", state.validate())?;
                Ok(Command::send(Action::Delegate(Delegate::ConfirmedPin(
                    state.pin_to_confirm.clone(),
                ))))
            }
            Action::SkipTapped => Ok(Command::send(Action::Delegate(Delegate::Skip))),
            Action::Delegate(_) => Ok(Command::none()),
        }
    }
}

impl Screen for State {
    fn name(&self) -> &str {
        "ConfirmPin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::screen_context;

    #[test]
    fn confirm_enabled_only_when_pins_match() {
        let mut state = State::new(Pin::from("9999"), "");
        let env = screen_context();
        assert!(!state.can_confirm());

        ConfirmPin::reduce(&mut state, Action::SetPin("1234".into()), &env).unwrap();
        assert!(!state.can_confirm());

        ConfirmPin::reduce(&mut state, Action::SetPin("9999".into()), &env).unwrap();
        assert!(state.can_confirm());
    }

    #[test]
    fn confirm_emits_pin() {
        let mut state = State::new(Pin::from("9999"), "9999");

        let command =
            ConfirmPin::reduce(&mut state, Action::ConfirmTapped, &screen_context()).unwrap();

        assert_eq!(
            command.into_sent(),
            vec![Action::Delegate(Delegate::ConfirmedPin(Pin::from("9999")))]
        );
    }

    #[test]
    fn confirm_with_mismatch_is_a_violation() {
        let mut state = State::new(Pin::from("9999"), "1111");

        let error =
            ConfirmPin::reduce(&mut state, Action::ConfirmTapped, &screen_context()).unwrap_err();

        assert!(error.to_string().contains("pin does not match pin to confirm"));
    }

    #[test]
    fn skip_emits_delegate() {
        let mut state = State::new(Pin::from("9999"), "");

        let command = ConfirmPin::reduce(&mut state, Action::SkipTapped, &screen_context()).unwrap();

        assert_eq!(command.into_sent(), vec![Action::Delegate(Delegate::Skip)]);
    }

    #[test]
    fn delegate_input_is_inert() {
        let mut state = State::new(Pin::from("9999"), "");
        let before = state.clone();

        let command = ConfirmPin::reduce(
            &mut state,
            Action::Delegate(Delegate::Skip),
            &screen_context(),
        )
        .unwrap();

        assert!(command.is_none());
        assert_eq!(state, before);
    }
}
