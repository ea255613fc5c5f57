//! Name entry, the final sign-up step.

use crate::auth::PersonalInfo as UserPersonalInfo;
use crate::config::FormPrefill;
use crate::context::ScreenContext;
use crate::core::{Reduced, Reducer, Screen};
use crate::effects::Command;
use crate::validation::rules::{self, non_empty};
use crate::validation::FieldCheck;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub firstname: String,
    pub lastname: String,
}

impl State {
    pub fn prefilled(prefill: &FormPrefill) -> Self {
        Self {
            firstname: prefill.firstname.clone(),
            lastname: prefill.lastname.clone(),
        }
    }

    pub fn validate(&self) -> FieldCheck {
        rules::all(vec![
            non_empty("firstname", &self.firstname),
            non_empty("lastname", &self.lastname),
        ])
    }

    pub fn personal_info(&self) -> Option<UserPersonalInfo> {
        self.validate().is_success().then(|| UserPersonalInfo {
            firstname: self.firstname.clone(),
            lastname: self.lastname.clone(),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SetFirstname(String),
    SetLastname(String),
    SignUpTapped,
    Delegate(Delegate),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Delegate {
    SignUp(UserPersonalInfo),
}

pub struct PersonalInfo;

impl Reducer for PersonalInfo {
    type State = State;
    type Action = Action;
    type Env = ScreenContext;

    fn reduce(state: &mut State, action: Action, _env: &ScreenContext) -> Reduced<Action> {
        match action {
            Action::SetFirstname(firstname) => {
                state.firstname = firstname;
                Ok(Command::none())
            }
            Action::SetLastname(lastname) => {
                state.lastname = lastname;
                Ok(Command::none())
            }
            Action::SignUpTapped => {
                rules::precondition("PersonalInfo", "signUp", state.validate())?;
                let info = UserPersonalInfo {
                    firstname: state.firstname.clone(),
                    lastname: state.lastname.clone(),
                };
                Ok(Command::send(Action::Delegate(Delegate::SignUp(info))))
            }
            Action::Delegate(_) => Ok(Command::none()),
        }
    }
}

impl Screen for State {
    fn name(&self) -> &str {
        "PersonalInfo"
    }
}
