//! Navigation history tracking.
//!
//! Records every change of the active screen path as an immutable value,
//! so a host can replay or inspect how a session moved through the app.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single change of the active path.
///
/// # Example
///
/// ```rust
/// use waypoint::core::NavigationChange;
/// use chrono::Utc;
///
/// let change = NavigationChange::new(&["App", "Splash"], &["App", "Onboarding", "Welcome"], Utc::now());
/// assert_eq!(change.to_screen(), Some("Welcome"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavigationChange {
    /// Active path before the change
    pub from: Vec<String>,
    /// Active path after the change
    pub to: Vec<String>,
    /// When the change was observed
    pub timestamp: DateTime<Utc>,
}

impl NavigationChange {
    pub fn new(from: &[&str], to: &[&str], timestamp: DateTime<Utc>) -> Self {
        Self {
            from: from.iter().map(|name| name.to_string()).collect(),
            to: to.iter().map(|name| name.to_string()).collect(),
            timestamp,
        }
    }

    /// Innermost screen shown after the change.
    pub fn to_screen(&self) -> Option<&str> {
        self.to.last().map(String::as_str)
    }
}

/// Ordered history of navigation changes.
///
/// History is immutable - the `record` method returns a new history
/// with the change added.
///
/// # Example
///
/// ```rust
/// use waypoint::core::{NavigationChange, NavigationHistory};
/// use chrono::Utc;
///
/// let history = NavigationHistory::new()
///     .record(NavigationChange::new(&["App", "Splash"], &["App", "Main"], Utc::now()));
///
/// assert_eq!(history.get_path(), vec![vec!["App", "Splash"], vec!["App", "Main"]]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationHistory {
    changes: Vec<NavigationChange>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a change, returning a new history.
    pub fn record(&self, change: NavigationChange) -> Self {
        let mut changes = self.changes.clone();
        changes.push(change);
        Self { changes }
    }

    /// Active paths visited: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<Vec<&str>> {
        fn as_strs(path: &[String]) -> Vec<&str> {
            path.iter().map(String::as_str).collect()
        }

        let mut visited = Vec::new();
        if let Some(first) = self.changes.first() {
            visited.push(as_strs(&first.from));
        }
        visited.extend(self.changes.iter().map(|change| as_strs(&change.to)));
        visited
    }

    /// Time between the first and last recorded change.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.changes.first()?, self.changes.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn changes(&self) -> &[NavigationChange] {
        &self.changes
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}
