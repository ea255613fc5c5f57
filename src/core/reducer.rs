//! The reducer contract shared by screens, unions and coordinators.

use super::error::InvariantViolation;
use crate::effects::Command;
use std::fmt::Debug;

/// Outcome of a single reduction: effects to run, or a broken invariant.
pub type Reduced<A> = Result<Command<A>, InvariantViolation>;

/// A state machine step: `(state, action) -> (new state, effects)`.
///
/// `reduce` mutates `state` in place and returns the effects to execute.
/// It must not perform effects itself; anything asynchronous is described
/// by the returned [`Command`].
///
/// # Example
///
/// ```rust
/// use waypoint::core::{Reduced, Reducer};
/// use waypoint::effects::Command;
///
/// struct Counter;
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum CounterAction {
///     Increment,
///     Reached(u32),
/// }
///
/// impl Reducer for Counter {
///     type State = u32;
///     type Action = CounterAction;
///     type Env = ();
///
///     fn reduce(state: &mut u32, action: CounterAction, _env: &()) -> Reduced<CounterAction> {
///         match action {
///             CounterAction::Increment => {
///                 *state += 1;
///                 Ok(Command::send(CounterAction::Reached(*state)))
///             }
///             CounterAction::Reached(_) => Ok(Command::none()),
///         }
///     }
/// }
///
/// let mut count = 0;
/// let command = Counter::reduce(&mut count, CounterAction::Increment, &()).unwrap();
/// assert_eq!(count, 1);
/// assert_eq!(command.into_sent(), vec![CounterAction::Reached(1)]);
/// ```
pub trait Reducer {
    type State;
    type Action: Clone + Debug + Send + 'static;
    type Env;

    fn reduce(state: &mut Self::State, action: Self::Action, env: &Self::Env)
        -> Reduced<Self::Action>;
}
