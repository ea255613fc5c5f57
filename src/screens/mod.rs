//! Leaf screens.
//!
//! Each module holds one screen's `State`, its `Action` (user intents plus a
//! `Delegate(..)` wrapper for outcomes reported upward) and a unit reducer
//! struct. Leaf screens read the auth record at most; they never navigate
//! and never write. Delegate actions fed back into a screen are no-ops.

pub mod confirm_pin;
pub mod credentials;
pub mod input_pin;
pub mod main_screen;
pub mod personal_info;
pub mod splash;
pub mod terms_of_service;
pub mod welcome;

pub use confirm_pin::ConfirmPin;
pub use credentials::Credentials;
pub use input_pin::InputPin;
pub use main_screen::Main;
pub use personal_info::PersonalInfo;
pub use splash::Splash;
pub use terms_of_service::TermsOfService;
pub use welcome::Welcome;
