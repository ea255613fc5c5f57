//! Sign-up flow: credentials, then personal info.
//!
//! Holds the credentials collected on the first screen until the second one
//! completes. On completion the user is written to the auth record and
//! reported upward.

use crate::auth::{Credentials as UserCredentials, User};
use crate::config::FormPrefill;
use crate::context::CoordinatorContext;
use crate::core::{Coordinator, Reduced, RouteStack, Router, RouterAction, RouterState, Screen};
use crate::effects::Command;
use crate::screens::{credentials, personal_info, Credentials, PersonalInfo};
use serde::{Deserialize, Serialize};
use tracing::debug;

crate::screen_union! {
    pub struct SignUpScreens {
        env: CoordinatorContext,
        state: SignUpScreen,
        action: SignUpScreenAction,
        screens: {
            Credentials => Credentials,
            PersonalInfo => PersonalInfo,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignUpState {
    pub routes: RouteStack<SignUpScreen>,
    pub credentials: Option<UserCredentials>,
}

impl SignUpState {
    pub fn new(prefill: &FormPrefill) -> Self {
        Self {
            routes: RouteStack::new(SignUpScreen::Credentials(credentials::State::prefilled(
                prefill,
            ))),
            credentials: None,
        }
    }
}

impl RouterState for SignUpState {
    type Screen = SignUpScreen;

    fn routes(&self) -> &RouteStack<SignUpScreen> {
        &self.routes
    }

    fn routes_mut(&mut self) -> &mut RouteStack<SignUpScreen> {
        &mut self.routes
    }
}

impl Screen for SignUpState {
    fn name(&self) -> &str {
        SignUpFlow::NAME
    }

    fn path(&self) -> Vec<&str> {
        let mut path = vec![self.name()];
        path.extend(self.routes.active_path());
        path
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SignUpDelegate {
    FinishedSignUp(User),
}

pub struct SignUpFlow;

impl Coordinator for SignUpFlow {
    const NAME: &'static str = "SignUp";

    type Screens = SignUpScreens;
    type State = SignUpState;
    type Delegate = SignUpDelegate;

    fn route(
        state: &mut SignUpState,
        _index: usize,
        action: &SignUpScreenAction,
        env: &CoordinatorContext,
    ) -> Reduced<RouterAction<Self>> {
        match action {
            SignUpScreenAction::Credentials(credentials::Action::Delegate(
                credentials::Delegate::Next(collected),
            )) => {
                debug!(coordinator = Self::NAME, "credentials collected");
                state.credentials = Some(collected.clone());
                state
                    .routes
                    .push(SignUpScreen::PersonalInfo(personal_info::State::prefilled(
                        &env.config().prefill,
                    )));
            }
            SignUpScreenAction::Credentials(_) => {}
            SignUpScreenAction::PersonalInfo(personal_info::Action::Delegate(
                personal_info::Delegate::SignUp(info),
            )) => {
                let credentials = state
                    .credentials
                    .clone()
                    .ok_or_else(|| Self::missing("signUp", "credentials"))?;
                let user = User::new(credentials, info.clone());
                env.auth.set_user(user.clone());
                return Ok(Self::delegate(SignUpDelegate::FinishedSignUp(user)));
            }
            SignUpScreenAction::PersonalInfo(_) => {}
        }
        Ok(Command::none())
    }
}

pub type SignUpCoordinator = Router<SignUpFlow>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthStore, PersonalInfo as UserPersonalInfo};
    use crate::core::{CoordinatorAction, InvariantViolation, Reducer};
    use crate::test_support::{coordinator_context, jane};
    use pretty_assertions::assert_eq;

    fn next(collected: UserCredentials) -> RouterAction<SignUpFlow> {
        CoordinatorAction::route(
            0,
            SignUpScreenAction::Credentials(credentials::Action::Delegate(
                credentials::Delegate::Next(collected),
            )),
        )
    }

    fn sign_up(info: UserPersonalInfo) -> RouterAction<SignUpFlow> {
        CoordinatorAction::route(
            1,
            SignUpScreenAction::PersonalInfo(personal_info::Action::Delegate(
                personal_info::Delegate::SignUp(info),
            )),
        )
    }

    #[test]
    fn credentials_are_stored_and_personal_info_pushed() {
        let store = AuthStore::new();
        let env = coordinator_context(&store);
        let mut state = SignUpState::new(&FormPrefill::default());

        SignUpCoordinator::reduce(&mut state, next(jane().credentials), &env).unwrap();

        assert_eq!(state.credentials, Some(jane().credentials));
        assert_eq!(state.path(), vec!["SignUp", "PersonalInfo"]);
    }

    #[test]
    fn completion_writes_user_and_reports_it() {
        let store = AuthStore::new();
        let env = coordinator_context(&store);
        let mut state = SignUpState::new(&FormPrefill::default());

        SignUpCoordinator::reduce(&mut state, next(jane().credentials), &env).unwrap();
        let command =
            SignUpCoordinator::reduce(&mut state, sign_up(jane().personal_info), &env).unwrap();

        assert_eq!(store.read().user, Some(jane()));
        assert_eq!(
            command.into_sent(),
            vec![CoordinatorAction::Delegate(SignUpDelegate::FinishedSignUp(
                jane()
            ))]
        );
    }

    #[test]
    fn completion_without_credentials_is_a_violation() {
        let store = AuthStore::new();
        let env = coordinator_context(&store);
        let mut state = SignUpState::new(&FormPrefill::default());
        state.routes.push(SignUpScreen::PersonalInfo(Default::default()));

        let error =
            SignUpCoordinator::reduce(&mut state, sign_up(jane().personal_info), &env).unwrap_err();

        assert_eq!(
            error,
            InvariantViolation::MissingFlowData {
                coordinator: "SignUp",
                event: "signUp",
                missing: "credentials",
            }
        );
        assert_eq!(store.read().user, None);
    }

    #[test]
    fn root_is_prefilled_from_config() {
        let prefill = FormPrefill {
            email: "jane.doe@cool.me".to_string(),
            ..FormPrefill::default()
        };

        let state = SignUpState::new(&prefill);

        match state.routes.root() {
            SignUpScreen::Credentials(screen) => assert_eq!(screen.email, "jane.doe@cool.me"),
            other => panic!("Unexpected root: {other:?}"),
        }
    }
}
