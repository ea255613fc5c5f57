//! Core navigation types and logic.
//!
//! This module contains the pure core of the coordinator:
//! - Screens via the [`Screen`] trait, and unions of them via [`screen_union!`](crate::screen_union)
//! - The [`Reducer`] contract shared by screens and coordinators
//! - Route stacks and the two-phase [`Router`]
//! - Immutable navigation history
//!
//! Nothing here performs effects. Reducers describe them as
//! [`Command`](crate::effects::Command) values that the
//! [`Store`](crate::effects::Store) executes.

mod error;
mod history;
mod macros;
mod reducer;
mod route;
mod router;
mod state;

pub use error::InvariantViolation;
pub use history::{NavigationChange, NavigationHistory};
pub use reducer::{Reduced, Reducer};
pub use route::{Route, RouteStack, RouteStackError};
pub use router::{
    Coordinator, CoordinatorAction, Router, RouterAction, RouterState, ScreensAction, ScreensEnv,
    ScreensState,
};
pub use state::{Screen, ScreenUnion};
