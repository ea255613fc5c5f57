//! Terms acceptance screen.

use crate::context::ScreenContext;
use crate::core::{Reduced, Reducer, Screen};
use crate::effects::Command;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct State {}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    AcceptTapped,
    Delegate(Delegate),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Delegate {
    Accept,
}

pub struct TermsOfService;

impl Reducer for TermsOfService {
    type State = State;
    type Action = Action;
    type Env = ScreenContext;

    fn reduce(_state: &mut State, action: Action, _env: &ScreenContext) -> Reduced<Action> {
        match action {
            Action::AcceptTapped => Ok(Command::send(Action::Delegate(Delegate::Accept))),
            Action::Delegate(_) => Ok(Command::none()),
        }
    }
}

impl Screen for State {
    fn name(&self) -> &str {
        "TermsOfService"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::screen_context;

    #[test]
    fn accept_emits_delegate() {
        let mut state = State::default();

        let command =
            TermsOfService::reduce(&mut state, Action::AcceptTapped, &screen_context()).unwrap();

        assert_eq!(command.into_sent(), vec![Action::Delegate(Delegate::Accept)]);
    }

    #[test]
    fn delegate_input_is_inert() {
        let mut state = State::default();

        let command = TermsOfService::reduce(
            &mut state,
            Action::Delegate(Delegate::Accept),
            &screen_context(),
        )
        .unwrap();

        assert!(command.is_none());
    }
}
