//! Email and password entry, the first sign-up step.

use crate::auth::Credentials as UserCredentials;
use crate::config::FormPrefill;
use crate::context::ScreenContext;
use crate::core::{Reduced, Reducer, Screen};
use crate::effects::Command;
use crate::validation::rules::{self, non_empty};
use crate::validation::FieldCheck;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub email: String,
    pub password: String,
}

impl State {
    pub fn prefilled(prefill: &FormPrefill) -> Self {
        Self {
            email: prefill.email.clone(),
            password: prefill.password.clone(),
        }
    }

    pub fn validate(&self) -> FieldCheck {
        rules::all(vec![
            non_empty("email", &self.email),
            non_empty("password", &self.password),
        ])
    }

    /// The entered credentials, if "next" is currently enabled.
    pub fn credentials(&self) -> Option<UserCredentials> {
        self.validate().is_success().then(|| UserCredentials {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SetEmail(String),
    SetPassword(String),
    NextTapped,
    Delegate(Delegate),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Delegate {
    Next(UserCredentials),
}

pub struct Credentials;

impl Reducer for Credentials {
    type State = State;
    type Action = Action;
    type Env = ScreenContext;

    fn reduce(state: &mut State, action: Action, _env: &ScreenContext) -> Reduced<Action> {
        match action {
            Action::SetEmail(email) => {
                state.email = email;
                Ok(Command::none())
            }
            Action::SetPassword(password) => {
                state.password = password;
                Ok(Command::none())
            }
            Action::NextTapped => {
                rules::precondition("Credentials", "next", state.validate())?;
                let credentials = UserCredentials {
                    email: state.email.clone(),
                    password: state.password.clone(),
                };
                Ok(Command::send(Action::Delegate(Delegate::Next(credentials))))
            }
            Action::Delegate(_) => Ok(Command::none()),
        }
    }
}

impl Screen for State {
    fn name(&self) -> &str {
        "Credentials"
    }
}
