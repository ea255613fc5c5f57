//! Waypoint: composable navigation coordinators
//!
//! Waypoint models an app's navigation as a hierarchy of reducers built on
//! Stillwater's Effect system. Screens are small state machines that report
//! outcomes upward as delegate events; coordinators own a stack of routes
//! and decide, from those events, what to push or which root to show next.
//!
//! # Core Concepts
//!
//! - **Screen**: a route's state, named for display and logging
//! - **Reducer**: `(state, action) -> effects`, pure apart from mutating its state
//! - **Coordinator**: a route reducer over a union of screens, nestable
//! - **Store**: the single mutator, running deferred effects cooperatively
//!
//! # Example
//!
//! ```rust
//! use waypoint::auth::AuthStore;
//! use waypoint::config::CoordinatorConfig;
//! use waypoint::flows::app::{self, AppScreenAction};
//! use waypoint::core::CoordinatorAction;
//! use waypoint::screens::splash;
//!
//! # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
//! let auth = AuthStore::new();
//! let config = CoordinatorConfig::default().with_splash_delay(std::time::Duration::ZERO);
//! let mut store = app::launch(&auth, config);
//!
//! store
//!     .send(CoordinatorAction::route(0, AppScreenAction::Splash(splash::Action::OnAppear)))
//!     .unwrap();
//! store.settle().await.unwrap();
//!
//! assert_eq!(store.active_path(), vec!["App", "Onboarding", "Welcome"]);
//! # });
//! ```

pub mod auth;
pub mod checkpoint;
pub mod config;
pub mod context;
pub mod core;
pub mod effects;
pub mod flows;
pub mod screens;
pub mod validation;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use crate::core::{Coordinator, CoordinatorAction, Reducer, RouteStack, Router, Screen};
pub use effects::{Command, Store};
