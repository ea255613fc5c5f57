//! Invariant violation errors raised by reducers.

use thiserror::Error;

/// A broken invariant in coordinator wiring.
///
/// These never come from bad external input: they mean an intent reached a
/// screen whose precondition was false, or a coordinator finished a sub-flow
/// without the data an earlier step was required to collect.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvariantViolation {
    #[error("{screen}: '{intent}' sent while its precondition does not hold ({reason})")]
    PreconditionFailed {
        screen: &'static str,
        intent: &'static str,
        reason: String,
    },

    #[error("{coordinator}: '{event}' observed before {missing} was collected")]
    MissingFlowData {
        coordinator: &'static str,
        event: &'static str,
        missing: &'static str,
    },
}

impl InvariantViolation {
    /// Name of the screen or coordinator whose invariant broke.
    pub fn origin(&self) -> &'static str {
        match self {
            Self::PreconditionFailed { screen, .. } => screen,
            Self::MissingFlowData { coordinator, .. } => coordinator,
        }
    }
}
