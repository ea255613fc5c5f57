//! Splash screen: waits, then reports whether a user is signed in.
//!
//! The check runs as a deferred task against a read-only auth handle. Its
//! result comes back as [`Action::LoadUserResult`] through the normal
//! dispatch path; if the splash route was replaced in the meantime, the
//! coordinator drops it. Every appear schedules its own lookup, so a splash
//! restored from a checkpoint or left behind by cancelled effects recovers
//! the next time it is shown.

use crate::auth::{AuthReader, User};
use crate::context::ScreenContext;
use crate::core::{Reduced, Reducer, Screen};
use crate::effects::Command;
use serde::{Deserialize, Serialize};
use stillwater::prelude::*;
use tracing::debug;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct State;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    OnAppear,
    LoadUserResult(Option<User>),
    Delegate(Delegate),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Delegate {
    NotSignedIn,
    SignedIn(User),
}

pub struct Splash;

impl Reducer for Splash {
    type State = State;
    type Action = Action;
    type Env = ScreenContext;

    fn reduce(_state: &mut State, action: Action, env: &ScreenContext) -> Reduced<Action> {
        match action {
            Action::OnAppear => {
                let delay = env.config.splash_delay();
                debug!(?delay, "splash: scheduling user lookup");
                Ok(Command::deferred(
                    delay,
                    from_fn(|auth: &AuthReader| Ok(Action::LoadUserResult(auth.current_user())))
                        .boxed(),
                ))
            }
            Action::LoadUserResult(user) => {
                let delegate = match user {
                    Some(user) => Delegate::SignedIn(user),
                    None => Delegate::NotSignedIn,
                };
                Ok(Command::send(Action::Delegate(delegate)))
            }
            Action::Delegate(_) => Ok(Command::none()),
        }
    }
}

impl Screen for State {
    fn name(&self) -> &str {
        "Splash"
    }
}
