//! PIN entry, the first step of PIN setup.

use crate::auth::{Pin, User};
use crate::context::ScreenContext;
use crate::core::{Reduced, Reducer, Screen};
use crate::effects::Command;
use crate::validation::rules::{self, non_empty};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub firstname: String,
    pub pin: String,
}

impl State {
    /// Seed the screen for `user`, starting the field at `pin`.
    pub fn new(user: &User, pin: impl Into<String>) -> Self {
        Self {
            firstname: user.firstname().to_string(),
            pin: pin.into(),
        }
    }

    pub fn prompt(&self) -> String {
        format!("Hey {}, secure your app by setting a PIN.", self.firstname)
    }

    pub fn can_continue(&self) -> bool {
        non_empty("pin", &self.pin).is_success()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SetPin(String),
    NextTapped,
    SkipTapped,
    Delegate(Delegate),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Delegate {
    FinishedInputtingPin(Pin),
    Skip,
}

pub struct InputPin;

impl Reducer for InputPin {
    type State = State;
    type Action = Action;
    type Env = ScreenContext;

    fn reduce(state: &mut State, action: Action, _env: &ScreenContext) -> Reduced<Action> {
        match action {
            Action::SetPin(pin) => {
                state.pin = pin;
                Ok(Command::none())
            }
            Action::NextTapped => {
                rules::precondition("InputPin", "next", non_empty("pin", &state.pin))?;
                let pin = Pin::new(state.pin.clone());
                Ok(Command::send(Action::Delegate(
                    Delegate::FinishedInputtingPin(pin),
                )))
            }
            Action::SkipTapped => Ok(Command::send(Action::Delegate(Delegate::Skip))),
            Action::Delegate(_) => Ok(Command::none()),
        }
    }
}

impl Screen for State {
    fn name(&self) -> &str {
        "InputPin"
    }
}
