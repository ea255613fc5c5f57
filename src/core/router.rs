//! Coordinators: reducers that own a route stack.
//!
//! A coordinator hosts a screen union (see [`screen_union!`](crate::screen_union))
//! and reacts to the delegate events its screens emit. [`Router`] turns any
//! [`Coordinator`] into a [`Reducer`] by running two phases per routed
//! action:
//!
//! 1. the union reducer advances the addressed screen; its effects are lifted
//!    back into routed actions for the same index;
//! 2. if the addressed route is the active one, [`Coordinator::route`] sees
//!    the same action and may push, replace the root, or emit the
//!    coordinator's own delegate.
//!
//! Actions addressed to an index that no longer exists, or whose tag does
//! not match the route at that index, are dropped. This is how completions
//! of effects that outlived a navigation change are discarded.

use super::error::InvariantViolation;
use super::reducer::{Reduced, Reducer};
use super::route::RouteStack;
use super::state::{Screen, ScreenUnion};
use crate::effects::Command;
use std::fmt::Debug;
use std::marker::PhantomData;
use tracing::debug;

/// State of a coordinator: at least a route stack.
pub trait RouterState {
    type Screen;

    fn routes(&self) -> &RouteStack<Self::Screen>;

    fn routes_mut(&mut self) -> &mut RouteStack<Self::Screen>;
}

/// Actions understood by every coordinator.
#[derive(Clone, Debug, PartialEq)]
pub enum CoordinatorAction<S, A, D> {
    /// An action for the screen at `index`.
    Route { index: usize, action: A },
    /// The rendering surface reports the stack it now shows, e.g. after the
    /// platform's back gesture.
    UpdateRoutes(RouteStack<S>),
    /// This coordinator's outcome, observed by its parent.
    Delegate(D),
}

impl<S, A, D> CoordinatorAction<S, A, D> {
    pub fn route(index: usize, action: A) -> Self {
        Self::Route { index, action }
    }
}

pub type ScreensState<C> = <<C as Coordinator>::Screens as Reducer>::State;
pub type ScreensAction<C> = <<C as Coordinator>::Screens as Reducer>::Action;
pub type ScreensEnv<C> = <<C as Coordinator>::Screens as Reducer>::Env;
pub type RouterAction<C> =
    CoordinatorAction<ScreensState<C>, ScreensAction<C>, <C as Coordinator>::Delegate>;

/// A route reducer over a screen union.
pub trait Coordinator: 'static {
    /// Name used in logs and invariant errors.
    const NAME: &'static str;

    type Screens: Reducer;
    type State: RouterState<Screen = ScreensState<Self>>;
    type Delegate: Clone + Debug + PartialEq + Send + 'static;

    /// React to an action observed at the active route `index`.
    ///
    /// Called after the screen itself has reduced the action. Anything not
    /// matched must be a no-op.
    fn route(
        state: &mut Self::State,
        index: usize,
        action: &ScreensAction<Self>,
        env: &ScreensEnv<Self>,
    ) -> Reduced<RouterAction<Self>>;

    /// Emit this coordinator's own delegate event.
    fn delegate(delegate: Self::Delegate) -> Command<RouterAction<Self>> {
        Command::send(CoordinatorAction::Delegate(delegate))
    }

    /// Build the error for flow data a previous step should have stored.
    fn missing(event: &'static str, missing: &'static str) -> InvariantViolation {
        InvariantViolation::MissingFlowData {
            coordinator: Self::NAME,
            event,
            missing,
        }
    }
}

/// Reducer for a coordinator: screen union first, route reducer second.
pub struct Router<C>(PhantomData<C>);

impl<C> Reducer for Router<C>
where
    C: Coordinator,
    ScreensState<C>: ScreenUnion<Action = ScreensAction<C>> + Send + 'static,
{
    type State = C::State;
    type Action = RouterAction<C>;
    type Env = ScreensEnv<C>;

    fn reduce(
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Env,
    ) -> Reduced<Self::Action> {
        match action {
            CoordinatorAction::Route { index, action } => route_action::<C>(state, index, action, env),
            CoordinatorAction::UpdateRoutes(routes) => {
                if *state.routes() != routes {
                    debug!(coordinator = C::NAME, depth = routes.len(), "routes updated by surface");
                    *state.routes_mut() = routes;
                }
                Ok(Command::none())
            }
            CoordinatorAction::Delegate(_) => Ok(Command::none()),
        }
    }
}

fn route_action<C>(
    state: &mut C::State,
    index: usize,
    action: ScreensAction<C>,
    env: &ScreensEnv<C>,
) -> Reduced<RouterAction<C>>
where
    C: Coordinator,
    ScreensState<C>: ScreenUnion<Action = ScreensAction<C>> + Send + 'static,
{
    let Some(screen) = state.routes_mut().get_mut(index) else {
        debug!(coordinator = C::NAME, index, "dropping action for a route that no longer exists");
        return Ok(Command::none());
    };

    if !screen.accepts(&action) {
        debug!(
            coordinator = C::NAME,
            index,
            screen = screen.name(),
            "dropping action addressed to a different screen"
        );
        return Ok(Command::none());
    }

    let screen_command = C::Screens::reduce(screen, action.clone(), env)?
        .map(move |action| CoordinatorAction::Route { index, action });

    if !state.routes().is_active(index) {
        return Ok(screen_command);
    }

    let route_command = C::route(state, index, &action, env)?;
    Ok(screen_command.merge(route_command))
}

impl<S: Screen> RouteStack<S> {
    /// Path of the active route, down to the innermost screen.
    pub fn active_path(&self) -> Vec<&str> {
        self.top().path()
    }
}
