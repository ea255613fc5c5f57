//! Onboarding flow: welcome, terms, sign-up, then PIN setup.

use super::setup_pin::{SetupPinCoordinator, SetupPinDelegate, SetupPinState};
use super::sign_up::{SignUpCoordinator, SignUpDelegate, SignUpState};
use crate::auth::{Pin, User};
use crate::context::CoordinatorContext;
use crate::core::{
    Coordinator, CoordinatorAction, Reduced, RouteStack, Router, RouterAction, RouterState, Screen,
};
use crate::effects::Command;
use crate::screens::{terms_of_service, welcome, TermsOfService, Welcome};
use serde::{Deserialize, Serialize};
use tracing::debug;

crate::screen_union! {
    pub struct OnboardingScreens {
        env: CoordinatorContext,
        state: OnboardingScreen,
        action: OnboardingScreenAction,
        screens: {
            Welcome => Welcome,
            TermsOfService => TermsOfService,
            SignUp => SignUpCoordinator,
            SetupPin => SetupPinCoordinator,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OnboardingState {
    pub routes: RouteStack<OnboardingScreen>,
    /// Set once sign-up completes.
    pub user: Option<User>,
}

impl OnboardingState {
    pub fn new() -> Self {
        Self {
            routes: RouteStack::new(OnboardingScreen::Welcome(welcome::State::default())),
            user: None,
        }
    }
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self::new()
    }
}

impl RouterState for OnboardingState {
    type Screen = OnboardingScreen;

    fn routes(&self) -> &RouteStack<OnboardingScreen> {
        &self.routes
    }

    fn routes_mut(&mut self) -> &mut RouteStack<OnboardingScreen> {
        &mut self.routes
    }
}

impl Screen for OnboardingState {
    fn name(&self) -> &str {
        OnboardingFlow::NAME
    }

    fn path(&self) -> Vec<&str> {
        let mut path = vec![self.name()];
        path.extend(self.routes.active_path());
        path
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum OnboardingDelegate {
    SignedIn(User, Option<Pin>),
}

pub struct OnboardingFlow;

impl Coordinator for OnboardingFlow {
    const NAME: &'static str = "Onboarding";

    type Screens = OnboardingScreens;
    type State = OnboardingState;
    type Delegate = OnboardingDelegate;

    fn route(
        state: &mut OnboardingState,
        _index: usize,
        action: &OnboardingScreenAction,
        env: &CoordinatorContext,
    ) -> Reduced<RouterAction<Self>> {
        match action {
            OnboardingScreenAction::Welcome(welcome::Action::Delegate(welcome::Delegate::Start)) => {
                state.routes.push(OnboardingScreen::TermsOfService(
                    terms_of_service::State::default(),
                ));
            }
            OnboardingScreenAction::Welcome(_) => {}
            OnboardingScreenAction::TermsOfService(terms_of_service::Action::Delegate(
                terms_of_service::Delegate::Accept,
            )) => {
                state.routes.push(OnboardingScreen::SignUp(SignUpState::new(
                    &env.config().prefill,
                )));
            }
            OnboardingScreenAction::TermsOfService(_) => {}
            OnboardingScreenAction::SignUp(CoordinatorAction::Delegate(
                SignUpDelegate::FinishedSignUp(user),
            )) => {
                debug!(coordinator = Self::NAME, "sign-up finished");
                state.user = Some(user.clone());
                state.routes.push(OnboardingScreen::SetupPin(SetupPinState::new(
                    user,
                    &env.config().prefill,
                )));
            }
            OnboardingScreenAction::SignUp(_) => {}
            OnboardingScreenAction::SetupPin(CoordinatorAction::Delegate(
                SetupPinDelegate::FinishedSettingPin(pin),
            )) => {
                let user = state
                    .user
                    .clone()
                    .ok_or_else(|| Self::missing("finishedSettingPin", "user"))?;
                return Ok(Self::delegate(OnboardingDelegate::SignedIn(user, pin.clone())));
            }
            OnboardingScreenAction::SetupPin(_) => {}
        }
        Ok(Command::none())
    }
}

pub type OnboardingCoordinator = Router<OnboardingFlow>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthStore;
    use crate::config::FormPrefill;
    use crate::core::{InvariantViolation, Reducer};
    use crate::test_support::{coordinator_context, jane};
    use pretty_assertions::assert_eq;

    fn finished_sign_up(index: usize) -> RouterAction<OnboardingFlow> {
        CoordinatorAction::route(
            index,
            OnboardingScreenAction::SignUp(CoordinatorAction::Delegate(
                SignUpDelegate::FinishedSignUp(jane()),
            )),
        )
    }

    fn finished_setting_pin(index: usize, pin: Option<Pin>) -> RouterAction<OnboardingFlow> {
        CoordinatorAction::route(
            index,
            OnboardingScreenAction::SetupPin(CoordinatorAction::Delegate(
                SetupPinDelegate::FinishedSettingPin(pin),
            )),
        )
    }

    #[test]
    fn welcome_then_terms_reaches_sign_up() {
        let store = AuthStore::new();
        let env = coordinator_context(&store);
        let mut state = OnboardingState::new();

        OnboardingCoordinator::reduce(
            &mut state,
            CoordinatorAction::route(
                0,
                OnboardingScreenAction::Welcome(welcome::Action::Delegate(
                    welcome::Delegate::Start,
                )),
            ),
            &env,
        )
        .unwrap();
        assert_eq!(state.path(), vec!["Onboarding", "TermsOfService"]);

        OnboardingCoordinator::reduce(
            &mut state,
            CoordinatorAction::route(
                1,
                OnboardingScreenAction::TermsOfService(terms_of_service::Action::Delegate(
                    terms_of_service::Delegate::Accept,
                )),
            ),
            &env,
        )
        .unwrap();
        assert_eq!(
            state.path(),
            vec!["Onboarding", "SignUp", "Credentials"]
        );
    }

    #[test]
    fn finished_sign_up_keeps_user_and_starts_pin_setup() {
        let store = AuthStore::new();
        let env = coordinator_context(&store);
        let mut state = OnboardingState::new();
        state
            .routes
            .push(OnboardingScreen::SignUp(SignUpState::new(&FormPrefill::default())));

        OnboardingCoordinator::reduce(&mut state, finished_sign_up(1), &env).unwrap();

        assert_eq!(state.user, Some(jane()));
        assert_eq!(state.path(), vec!["Onboarding", "SetupPin", "InputPin"]);
        match state.routes.top() {
            OnboardingScreen::SetupPin(setup) => match setup.routes.root() {
                crate::flows::setup_pin::SetupPinScreen::InputPin(screen) => {
                    assert_eq!(screen.firstname, "Jane")
                }
                other => panic!("Unexpected root: {other:?}"),
            },
            other => panic!("Unexpected top: {other:?}"),
        }
    }

    #[test]
    fn finished_pin_setup_reports_signed_in() {
        let store = AuthStore::new();
        let env = coordinator_context(&store);
        let mut state = OnboardingState::new();
        state.user = Some(jane());
        state.routes.push(OnboardingScreen::SetupPin(SetupPinState::new(
            &jane(),
            &FormPrefill::default(),
        )));

        let command = OnboardingCoordinator::reduce(
            &mut state,
            finished_setting_pin(1, Some(Pin::from("9999"))),
            &env,
        )
        .unwrap();

        assert_eq!(
            command.into_sent(),
            vec![CoordinatorAction::Delegate(OnboardingDelegate::SignedIn(
                jane(),
                Some(Pin::from("9999"))
            ))]
        );
    }

    #[test]
    fn finished_pin_setup_without_user_is_a_violation() {
        let store = AuthStore::new();
        let env = coordinator_context(&store);
        let mut state = OnboardingState::new();
        state.routes.push(OnboardingScreen::SetupPin(SetupPinState::new(
            &jane(),
            &FormPrefill::default(),
        )));

        let error = OnboardingCoordinator::reduce(&mut state, finished_setting_pin(1, None), &env)
            .unwrap_err();

        assert_eq!(
            error,
            InvariantViolation::MissingFlowData {
                coordinator: "Onboarding",
                event: "finishedSettingPin",
                missing: "user",
            }
        );
    }
}
