//! The store: single owner and mutator of the root coordinator state.

use super::command::{Command, Task};
use crate::auth::AuthReader;
use crate::checkpoint::{Checkpoint, CheckpointError};
use crate::context::ScreenContext;
use crate::core::{InvariantViolation, NavigationChange, NavigationHistory, Reducer, Screen};
use chrono::Utc;
use futures::future::LocalBoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::VecDeque;
use std::time::Duration;
use stillwater::effect::Effect;
use tracing::{debug, error, info, warn};

type InFlight<A> = LocalBoxFuture<'static, Option<A>>;

/// Runs a root reducer and the effects it describes.
///
/// Every state change goes through [`Store::send`], so transitions never
/// overlap. Deferred tasks are polled on the caller's task by
/// [`Store::settle`] or [`Store::next_effect`]; actions may be sent while
/// they are suspended, and their results re-enter through `send` like any
/// other action.
pub struct Store<R: Reducer> {
    state: R::State,
    env: R::Env,
    in_flight: FuturesUnordered<InFlight<R::Action>>,
    history: NavigationHistory,
}

impl<R> Store<R>
where
    R: Reducer,
    R::State: Screen,
    R::Env: AsRef<ScreenContext>,
{
    pub fn new(state: R::State, env: R::Env) -> Self {
        debug!(path = ?state.path(), "store created");
        Self {
            state,
            env,
            in_flight: FuturesUnordered::new(),
            history: NavigationHistory::new(),
        }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    pub fn env(&self) -> &R::Env {
        &self.env
    }

    /// Names from the root down to the innermost active screen.
    pub fn active_path(&self) -> Vec<&str> {
        self.state.path()
    }

    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    /// Reduce `action` and every action sent in response, in FIFO order.
    ///
    /// Deferred tasks produced along the way are started but not awaited.
    /// On an invariant violation the remaining queued actions are dropped
    /// and the violation is returned.
    pub fn send(&mut self, action: R::Action) -> Result<(), InvariantViolation> {
        let before = owned_path(&self.state);
        let result = self.drain(VecDeque::from([action]));
        self.record_navigation(before);

        if let Err(violation) = &result {
            error!(origin = violation.origin(), %violation, "invariant violated");
        }
        result
    }

    /// Drive in-flight tasks until none remain, dispatching each result.
    pub async fn settle(&mut self) -> Result<(), InvariantViolation> {
        while self.next_effect().await? {}
        Ok(())
    }

    /// Wait for one in-flight task and dispatch its result.
    ///
    /// Returns `false` when nothing was in flight.
    pub async fn next_effect(&mut self) -> Result<bool, InvariantViolation> {
        match self.in_flight.next().await {
            None => Ok(false),
            Some(None) => Ok(true),
            Some(Some(action)) => {
                self.send(action)?;
                Ok(true)
            }
        }
    }

    /// Drop every in-flight task. Their results will never be dispatched.
    pub fn cancel_effects(&mut self) {
        let dropped = self.in_flight.len();
        if dropped > 0 {
            debug!(dropped, "cancelling in-flight effects");
        }
        self.in_flight = FuturesUnordered::new();
    }

    pub fn has_pending_effects(&self) -> bool {
        !self.in_flight.is_empty()
    }

    pub fn pending_effects(&self) -> usize {
        self.in_flight.len()
    }

    fn drain(&mut self, mut queue: VecDeque<R::Action>) -> Result<(), InvariantViolation> {
        while let Some(action) = queue.pop_front() {
            let command = R::reduce(&mut self.state, action, &self.env)?;
            self.schedule(command, &mut queue);
        }
        Ok(())
    }

    fn schedule(&mut self, command: Command<R::Action>, queue: &mut VecDeque<R::Action>) {
        match command {
            Command::None => {}
            Command::Send(action) => queue.push_back(action),
            Command::Deferred { delay, task } => self.start(delay, task),
            Command::Batch(commands) => {
                for command in commands {
                    self.schedule(command, queue);
                }
            }
        }
    }

    fn start(&mut self, delay: Duration, task: Task<R::Action>) {
        let reader: AuthReader = self.env.as_ref().auth.clone();
        debug!(?delay, "starting deferred task");
        let future = async move {
            tokio::time::sleep(delay).await;
            match task.run(&reader).await {
                Ok(action) => Some(action),
                Err(error) => {
                    warn!(%error, "deferred task failed");
                    None
                }
            }
        };
        self.in_flight.push(futures::FutureExt::boxed_local(future));
    }

    fn record_navigation(&mut self, before: Vec<String>) {
        let after = self.state.path();
        if before.iter().map(String::as_str).eq(after.iter().copied()) {
            return;
        }
        info!(from = ?before, to = ?after, "navigated");
        let before: Vec<&str> = before.iter().map(String::as_str).collect();
        let change = NavigationChange::new(&before, &after, Utc::now());
        self.history = self.history.record(change);
    }
}

impl<R> Store<R>
where
    R: Reducer,
    R::State: Screen + Serialize + DeserializeOwned,
    R::Env: AsRef<ScreenContext>,
{
    /// Capture the current state and history.
    pub fn checkpoint(&self) -> Checkpoint<R::State> {
        Checkpoint::new(self.state.clone(), self.history.clone())
    }

    /// Rebuild a store from a checkpoint. No effects are in flight afterwards.
    pub fn restore(checkpoint: Checkpoint<R::State>, env: R::Env) -> Self {
        info!(id = %checkpoint.id, path = ?checkpoint.state.path(), "restoring checkpoint");
        let mut store = Self::new(checkpoint.state, env);
        store.history = checkpoint.history;
        store
    }

    pub fn restore_json(json: &str, env: R::Env) -> Result<Self, CheckpointError> {
        Ok(Self::restore(Checkpoint::from_json(json)?, env))
    }
}

fn owned_path<S: Screen>(state: &S) -> Vec<String> {
    state.path().into_iter().map(str::to_string).collect()
}
