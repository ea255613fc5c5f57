//! Signed-up user values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Login credentials collected on the first sign-up screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Name details collected on the second sign-up screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub firstname: String,
    pub lastname: String,
}

/// A signed-up user. Built once, when sign-up completes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub credentials: Credentials,
    pub personal_info: PersonalInfo,
}

impl User {
    pub fn new(credentials: Credentials, personal_info: PersonalInfo) -> Self {
        Self {
            credentials,
            personal_info,
        }
    }

    pub fn firstname(&self) -> &str {
        &self.personal_info.firstname
    }
}

/// An opaque PIN code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pin(String);

impl Pin {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Pin {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("****")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_exposes_firstname() {
        let user = User::new(
            Credentials {
                email: "a@b.com".to_string(),
                password: "pw".to_string(),
            },
            PersonalInfo {
                firstname: "Jane".to_string(),
                lastname: "Doe".to_string(),
            },
        );

        assert_eq!(user.firstname(), "Jane");
    }

    #[test]
    fn pin_display_is_masked() {
        let pin = Pin::from("9999");
        assert_eq!(pin.to_string(), "****");
        assert_eq!(pin.as_str(), "9999");
    }

    #[test]
    fn pin_serializes_as_plain_string() {
        let json = serde_json::to_string(&Pin::new("1234")).unwrap();
        assert_eq!(json, "\"1234\"");
    }
}
