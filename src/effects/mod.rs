//! The effectful shell around the pure reducers.
//!
//! Reducers return a [`Command`] describing what should happen next; the
//! [`Store`] executes it. Immediately-sent actions are dispatched in FIFO
//! order within the same [`Store::send`] call. Deferred work is a Stillwater
//! `BoxedEffect` run against a read-only [`AuthReader`](crate::auth::AuthReader)
//! after a delay, and its result is dispatched like any other action.
//!
//! # Example
//!
//! ```rust
//! use waypoint::effects::Command;
//! use stillwater::prelude::*;
//! use std::time::Duration;
//!
//! let command: Command<u32> = Command::batch(vec![
//!     Command::send(1),
//!     Command::deferred(Duration::from_millis(800), pure(2).boxed()),
//! ]);
//!
//! assert_eq!(command.type_name(), "Batch");
//! assert_eq!(command.deferred_count(), 1);
//! ```

mod command;
mod store;

pub use command::{Command, EffectError, Task};
pub use store::Store;
