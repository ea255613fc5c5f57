//! First onboarding screen.

use crate::context::ScreenContext;
use crate::core::{Reduced, Reducer, Screen};
use crate::effects::Command;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct State {}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    StartTapped,
    Delegate(Delegate),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Delegate {
    Start,
}

pub struct Welcome;

impl Reducer for Welcome {
    type State = State;
    type Action = Action;
    type Env = ScreenContext;

    fn reduce(_state: &mut State, action: Action, _env: &ScreenContext) -> Reduced<Action> {
        match action {
            Action::StartTapped => Ok(Command::send(Action::Delegate(Delegate::Start))),
            Action::Delegate(_) => Ok(Command::none()),
        }
    }
}

impl Screen for State {
    fn name(&self) -> &str {
        "Welcome"
    }
}
