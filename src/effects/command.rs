//! Commands describing the effects a reducer wants executed.

use crate::auth::AuthReader;
use std::fmt;
use std::time::Duration;
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;

/// Errors raised while running a deferred task.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum EffectError {
    #[error("Deferred task failed: {0}")]
    TaskFailed(String),
}

/// An asynchronous unit of work that eventually yields an action.
///
/// Tasks run against a read-only auth handle: effects may observe the shared
/// record but never write it.
pub type Task<A> = BoxedEffect<A, EffectError, AuthReader>;

/// Effects returned from a reducer alongside its state change.
///
/// Commands are values; the [`Store`](crate::effects::Store) executes them.
/// Reducers never run effects themselves.
#[derive(Default)]
pub enum Command<A> {
    /// No effect.
    #[default]
    None,
    /// Dispatch an action right after the current one.
    Send(A),
    /// Wait `delay`, run `task`, then dispatch its result.
    Deferred { delay: Duration, task: Task<A> },
    /// Several commands, executed in order.
    Batch(Vec<Command<A>>),
}

impl<A: fmt::Debug> fmt::Debug for Command<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Send(action) => f.debug_tuple("Send").field(action).finish(),
            Self::Deferred { delay, .. } => f
                .debug_struct("Deferred")
                .field("delay", delay)
                .finish_non_exhaustive(),
            Self::Batch(commands) => f.debug_tuple("Batch").field(commands).finish(),
        }
    }
}

impl<A> Command<A> {
    pub fn none() -> Self {
        Self::None
    }

    pub fn send(action: A) -> Self {
        Self::Send(action)
    }

    pub fn deferred(delay: Duration, task: Task<A>) -> Self {
        Self::Deferred { delay, task }
    }

    /// Combine commands, dropping no-ops.
    pub fn batch(commands: Vec<Self>) -> Self {
        let mut commands: Vec<Self> = commands.into_iter().filter(|c| !c.is_none()).collect();
        match commands.len() {
            0 => Self::None,
            1 => commands.remove(0),
            _ => Self::Batch(commands),
        }
    }

    /// Run `self` then `other`.
    pub fn merge(self, other: Self) -> Self {
        match (self, other) {
            (Self::None, other) => other,
            (this, Self::None) => this,
            (Self::Batch(mut commands), other) => {
                commands.push(other);
                Self::Batch(commands)
            }
            (this, other) => Self::Batch(vec![this, other]),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Stable name for tracing.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Send(_) => "Send",
            Self::Deferred { .. } => "Deferred",
            Self::Batch(_) => "Batch",
        }
    }

    /// Immediately-sent actions, in execution order. Deferred tasks are skipped.
    pub fn into_sent(self) -> Vec<A> {
        match self {
            Self::None | Self::Deferred { .. } => Vec::new(),
            Self::Send(action) => vec![action],
            Self::Batch(commands) => commands.into_iter().flat_map(Self::into_sent).collect(),
        }
    }

    /// Number of deferred tasks this command would start.
    pub fn deferred_count(&self) -> usize {
        match self {
            Self::None | Self::Send(_) => 0,
            Self::Deferred { .. } => 1,
            Self::Batch(commands) => commands.iter().map(Self::deferred_count).sum(),
        }
    }
}

impl<A: Send + 'static> Command<A> {
    /// Lift every action this command produces into a parent action type.
    ///
    /// Deferred tasks are wrapped, not run: their payload stays opaque to
    /// the parent.
    pub fn map<B, F>(self, f: F) -> Command<B>
    where
        B: Send + 'static,
        F: Fn(A) -> B + Clone + Send + Sync + 'static,
    {
        match self {
            Self::None => Command::None,
            Self::Send(action) => Command::Send(f(action)),
            Self::Deferred { delay, task } => Command::Deferred {
                delay,
                task: task.map(f).boxed(),
            },
            Self::Batch(commands) => Command::Batch(
                commands
                    .into_iter()
                    .map(|command| command.map(f.clone()))
                    .collect(),
            ),
        }
    }
}
