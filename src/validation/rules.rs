//! Field rules built on `Validation`.

use crate::core::InvariantViolation;
use crate::validation::violations::FieldViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of checking one or more fields.
pub type FieldCheck = Validation<(), NonEmptyVec<FieldViolation>>;

pub fn non_empty(field: &'static str, value: &str) -> FieldCheck {
    if value.is_empty() {
        Validation::fail(FieldViolation::Empty { field })
    } else {
        Validation::success(())
    }
}

/// `value` must equal `expected`; `expected_field` names what it is compared to.
pub fn matches(
    field: &'static str,
    value: &str,
    expected_field: &'static str,
    expected: &str,
) -> FieldCheck {
    if value == expected {
        Validation::success(())
    } else {
        Validation::fail(FieldViolation::Mismatch {
            field,
            expected: expected_field,
        })
    }
}

/// Run every check, accumulating ALL violations.
pub fn all(checks: Vec<FieldCheck>) -> FieldCheck {
    Validation::all_vec(checks).map(|_| ())
}

/// Turn a failed check into the invariant violation for `intent` on `screen`.
///
/// Submit-style intents are only reachable when their fields are valid, so
/// a failure here means the intent bypassed the screen's enabled state.
pub fn precondition(
    screen: &'static str,
    intent: &'static str,
    check: FieldCheck,
) -> Result<(), InvariantViolation> {
    match check {
        Validation::Success(()) => Ok(()),
        Validation::Failure(violations) => Err(InvariantViolation::PreconditionFailed {
            screen,
            intent,
            reason: violations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_accepts_text() {
        assert!(non_empty("email", "a@b.com").is_success());
    }

    #[test]
    fn non_empty_rejects_blank() {
        match non_empty("email", "") {
            Validation::Failure(violations) => {
                assert_eq!(violations.len(), 1);
                assert!(violations
                    .iter()
                    .any(|v| *v == FieldViolation::Empty { field: "email" }));
            }
            Validation::Success(_) => panic!("Expected failure, got success"),
        }
    }

    #[test]
    fn all_accumulates_every_violation() {
        let check = all(vec![non_empty("email", ""), non_empty("password", "")]);

        match check {
            Validation::Failure(violations) => assert_eq!(violations.len(), 2),
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn all_succeeds_when_every_check_passes() {
        let check = all(vec![non_empty("email", "x"), matches("pin", "1", "pin to confirm", "1")]);
        assert!(check.is_success());
    }

    #[test]
    fn matches_reports_mismatch() {
        let check = matches("pin", "1111", "pin to confirm", "9999");
        assert!(check.is_failure());
    }

    #[test]
    fn precondition_names_all_violations() {
        let check = all(vec![non_empty("firstname", ""), non_empty("lastname", "")]);

        let error = precondition("PersonalInfo", "signUp", check).unwrap_err();

        match error {
            InvariantViolation::PreconditionFailed {
                screen,
                intent,
                reason,
            } => {
                assert_eq!(screen, "PersonalInfo");
                assert_eq!(intent, "signUp");
                assert!(reason.contains("firstname must not be empty"));
                assert!(reason.contains("lastname must not be empty"));
            }
            other => panic!("Unexpected violation: {other:?}"),
        }
    }

    #[test]
    fn precondition_passes_valid_check() {
        assert!(precondition("Credentials", "next", non_empty("email", "x")).is_ok());
    }
}
