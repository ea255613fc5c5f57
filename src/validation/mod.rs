//! Validation of form fields.
//!
//! Form screens derive their "enabled" state from these rules on every read
//! instead of caching it. Checks use Stillwater's `Validation` so every
//! violated rule is reported at once, not only the first.
//!
//! # Example
//!
//! ```rust
//! use waypoint::validation::rules::{all, non_empty};
//!
//! let check = all(vec![non_empty("email", ""), non_empty("password", "")]);
//! assert!(check.is_failure());
//! ```

pub mod rules;
pub mod violations;

pub use rules::FieldCheck;
pub use violations::FieldViolation;
