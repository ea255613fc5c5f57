//! Home screen for a signed-in user.

use crate::auth::{Pin, User};
use crate::context::ScreenContext;
use crate::core::{Reduced, Reducer, Screen};
use crate::effects::Command;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub user: User,
    pub pin: Option<Pin>,
}

impl State {
    pub fn new(user: User, pin: Option<Pin>) -> Self {
        Self { user, pin }
    }

    pub fn greeting(&self) -> String {
        format!("Hello {}!", self.user.firstname())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SignOutTapped,
    Delegate(Delegate),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Delegate {
    SignedOut,
}

pub struct Main;

impl Reducer for Main {
    type State = State;
    type Action = Action;
    type Env = ScreenContext;

    /// Signing out only reports intent; the app coordinator clears the record.
    fn reduce(_state: &mut State, action: Action, _env: &ScreenContext) -> Reduced<Action> {
        match action {
            Action::SignOutTapped => Ok(Command::send(Action::Delegate(Delegate::SignedOut))),
            Action::Delegate(_) => Ok(Command::none()),
        }
    }
}

impl Screen for State {
    fn name(&self) -> &str {
        "Main"
    }
}
