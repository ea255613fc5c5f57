//! The coordinator hierarchy.
//!
//! ```text
//! App
//! ├── Splash
//! ├── Onboarding
//! │   ├── Welcome
//! │   ├── TermsOfService
//! │   ├── SignUp
//! │   │   ├── Credentials
//! │   │   └── PersonalInfo
//! │   └── SetupPin
//! │       ├── InputPin
//! │       └── ConfirmPin
//! └── Main
//! ```
//!
//! Each level is a [`Coordinator`](crate::core::Coordinator) whose state is
//! a route stack over its own screen union. Child coordinators report their
//! outcome with a delegate event that the parent's route reducer observes.

pub mod app;
pub mod onboarding;
pub mod setup_pin;
pub mod sign_up;

pub use app::{
    launch, AppAction, AppCoordinator, AppFlow, AppScreen, AppScreenAction, AppState, AppStore,
};
pub use onboarding::{
    OnboardingCoordinator, OnboardingDelegate, OnboardingFlow, OnboardingScreen,
    OnboardingScreenAction, OnboardingState,
};
pub use setup_pin::{
    SetupPinCoordinator, SetupPinDelegate, SetupPinFlow, SetupPinScreen, SetupPinScreenAction,
    SetupPinState,
};
pub use sign_up::{
    SignUpCoordinator, SignUpDelegate, SignUpFlow, SignUpScreen, SignUpScreenAction, SignUpState,
};
