//! Shared fixtures for unit tests.

use crate::auth::{AuthStore, Credentials, PersonalInfo, User};
use crate::config::CoordinatorConfig;
use crate::context::{CoordinatorContext, ScreenContext};

pub fn jane() -> User {
    User::new(
        Credentials {
            email: "jane.doe@cool.me".to_string(),
            password: "secretstuff".to_string(),
        },
        PersonalInfo {
            firstname: "Jane".to_string(),
            lastname: "Doe".to_string(),
        },
    )
}

/// A screen context over an empty auth record.
pub fn screen_context() -> ScreenContext {
    coordinator_context(&AuthStore::new()).screen().clone()
}

/// A coordinator context writing to `store`, with default config.
pub fn coordinator_context(store: &AuthStore) -> CoordinatorContext {
    CoordinatorContext::new(store, CoordinatorConfig::default())
}
