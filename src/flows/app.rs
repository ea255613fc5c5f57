//! Top-level app flow: splash, onboarding, or the main screen.
//!
//! Every transition at this level replaces the root. This is the only place
//! that signs out of the auth record.

use super::onboarding::{OnboardingCoordinator, OnboardingDelegate, OnboardingState};
use crate::auth::{AuthStore, Pin, User};
use crate::config::CoordinatorConfig;
use crate::context::CoordinatorContext;
use crate::core::{
    Coordinator, CoordinatorAction, Reduced, RouteStack, Router, RouterAction, RouterState, Screen,
};
use crate::effects::{Command, Store};
use crate::screens::{main_screen, splash, Main, Splash};
use serde::{Deserialize, Serialize};
use tracing::info;

crate::screen_union! {
    pub struct AppScreens {
        env: CoordinatorContext,
        state: AppScreen,
        action: AppScreenAction,
        screens: {
            Splash => Splash,
            Onboarding => OnboardingCoordinator,
            Main => Main,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub routes: RouteStack<AppScreen>,
}

impl AppState {
    /// Start at the splash screen.
    pub fn new() -> Self {
        Self {
            routes: RouteStack::new(AppScreen::Splash(splash::State::default())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl RouterState for AppState {
    type Screen = AppScreen;

    fn routes(&self) -> &RouteStack<AppScreen> {
        &self.routes
    }

    fn routes_mut(&mut self) -> &mut RouteStack<AppScreen> {
        &mut self.routes
    }
}

impl Screen for AppState {
    fn name(&self) -> &str {
        AppFlow::NAME
    }

    fn path(&self) -> Vec<&str> {
        let mut path = vec![self.name()];
        path.extend(self.routes.active_path());
        path
    }
}

/// The app coordinator has no parent to report to.
#[derive(Clone, Debug, PartialEq)]
pub enum AppDelegate {}

pub struct AppFlow;

impl AppFlow {
    fn show_main(state: &mut AppState, user: User, pin: Option<Pin>) {
        info!(
            coordinator = Self::NAME,
            has_pin = pin.is_some(),
            "showing main screen"
        );
        state
            .routes
            .replace_root(AppScreen::Main(main_screen::State::new(user, pin)));
    }

    fn show_onboarding(state: &mut AppState) {
        info!(coordinator = Self::NAME, "showing onboarding");
        state
            .routes
            .replace_root(AppScreen::Onboarding(OnboardingState::new()));
    }
}

impl Coordinator for AppFlow {
    const NAME: &'static str = "App";

    type Screens = AppScreens;
    type State = AppState;
    type Delegate = AppDelegate;

    fn route(
        state: &mut AppState,
        _index: usize,
        action: &AppScreenAction,
        env: &CoordinatorContext,
    ) -> Reduced<RouterAction<Self>> {
        match action {
            AppScreenAction::Splash(splash::Action::Delegate(delegate)) => match delegate {
                splash::Delegate::NotSignedIn => Self::show_onboarding(state),
                splash::Delegate::SignedIn(user) => {
                    let pin = env.auth.read().pin;
                    Self::show_main(state, user.clone(), pin);
                }
            },
            AppScreenAction::Splash(_) => {}
            AppScreenAction::Onboarding(CoordinatorAction::Delegate(
                OnboardingDelegate::SignedIn(user, pin),
            )) => Self::show_main(state, user.clone(), pin.clone()),
            AppScreenAction::Onboarding(_) => {}
            AppScreenAction::Main(main_screen::Action::Delegate(main_screen::Delegate::SignedOut)) => {
                env.auth.sign_out();
                Self::show_onboarding(state);
            }
            AppScreenAction::Main(_) => {}
        }
        Ok(Command::none())
    }
}

pub type AppCoordinator = Router<AppFlow>;

/// Actions accepted by the app coordinator.
pub type AppAction = RouterAction<AppFlow>;

pub type AppStore = Store<AppCoordinator>;

/// Build a store at the splash screen, reading and writing `auth`.
pub fn launch(auth: &AuthStore, config: CoordinatorConfig) -> AppStore {
    Store::new(AppState::new(), CoordinatorContext::new(auth, config))
}
