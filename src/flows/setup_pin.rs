//! PIN setup flow: enter a PIN, confirm it, or skip.

use crate::auth::{Pin, User};
use crate::config::FormPrefill;
use crate::context::CoordinatorContext;
use crate::core::{Coordinator, Reduced, RouteStack, Router, RouterAction, RouterState, Screen};
use crate::effects::Command;
use crate::screens::{confirm_pin, input_pin, ConfirmPin, InputPin};
use serde::{Deserialize, Serialize};

crate::screen_union! {
    pub struct SetupPinScreens {
        env: CoordinatorContext,
        state: SetupPinScreen,
        action: SetupPinScreenAction,
        screens: {
            InputPin => InputPin,
            ConfirmPin => ConfirmPin,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetupPinState {
    pub routes: RouteStack<SetupPinScreen>,
}

impl SetupPinState {
    pub fn new(user: &User, prefill: &FormPrefill) -> Self {
        Self {
            routes: RouteStack::new(SetupPinScreen::InputPin(input_pin::State::new(
                user,
                prefill.pin.clone(),
            ))),
        }
    }
}

impl RouterState for SetupPinState {
    type Screen = SetupPinScreen;

    fn routes(&self) -> &RouteStack<SetupPinScreen> {
        &self.routes
    }

    fn routes_mut(&mut self) -> &mut RouteStack<SetupPinScreen> {
        &mut self.routes
    }
}

impl Screen for SetupPinState {
    fn name(&self) -> &str {
        SetupPinFlow::NAME
    }

    fn path(&self) -> Vec<&str> {
        let mut path = vec![self.name()];
        path.extend(self.routes.active_path());
        path
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SetupPinDelegate {
    /// `None` when the user skipped.
    FinishedSettingPin(Option<Pin>),
}

pub struct SetupPinFlow;

impl Coordinator for SetupPinFlow {
    const NAME: &'static str = "SetupPin";

    type Screens = SetupPinScreens;
    type State = SetupPinState;
    type Delegate = SetupPinDelegate;

    fn route(
        state: &mut SetupPinState,
        _index: usize,
        action: &SetupPinScreenAction,
        env: &CoordinatorContext,
    ) -> Reduced<RouterAction<Self>> {
        match action {
            SetupPinScreenAction::InputPin(input_pin::Action::Delegate(delegate)) => match delegate {
                input_pin::Delegate::FinishedInputtingPin(pin) => {
                    state
                        .routes
                        .push(SetupPinScreen::ConfirmPin(confirm_pin::State::new(
                            pin.clone(),
                            env.config().prefill.pin.clone(),
                        )));
                }
                input_pin::Delegate::Skip => {
                    return Ok(Self::delegate(SetupPinDelegate::FinishedSettingPin(None)))
                }
            },
            SetupPinScreenAction::InputPin(_) => {}
            SetupPinScreenAction::ConfirmPin(confirm_pin::Action::Delegate(delegate)) => {
                return Ok(match delegate {
                    confirm_pin::Delegate::ConfirmedPin(pin) => {
                        env.auth.set_pin(pin.clone());
                        Self::delegate(SetupPinDelegate::FinishedSettingPin(Some(pin.clone())))
                    }
                    confirm_pin::Delegate::Skip => {
                        Self::delegate(SetupPinDelegate::FinishedSettingPin(None))
                    }
                })
            }
            SetupPinScreenAction::ConfirmPin(_) => {}
        }
        Ok(Command::none())
    }
}

pub type SetupPinCoordinator = Router<SetupPinFlow>;
