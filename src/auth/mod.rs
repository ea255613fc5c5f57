//! Authentication record shared across coordinator levels.

mod store;
mod user;

pub use store::{AuthReader, AuthSnapshot, AuthStore, AuthWriter};
pub use user::{Credentials, PersonalInfo, Pin, User};
