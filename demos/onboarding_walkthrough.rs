//! Onboarding Walkthrough
//!
//! This demo drives the whole app flow from a script of user intents.
//!
//! Key concepts:
//! - Intents addressed to a route index, nested through each coordinator
//! - The splash delay running as a deferred effect
//! - Sign-up and PIN setup writing the shared auth record
//! - Checkpointing the session and restoring it into a new store
//!
//! Run with: RUST_LOG=waypoint=debug cargo run --example onboarding_walkthrough

use std::error::Error;
use tracing_subscriber::EnvFilter;
use waypoint::auth::AuthStore;
use waypoint::config::CoordinatorConfig;
use waypoint::context::CoordinatorContext;
use waypoint::core::CoordinatorAction;
use waypoint::flows::{
    launch, AppAction, AppScreenAction, AppStore, OnboardingScreenAction, SetupPinScreenAction,
    SignUpScreenAction,
};
use waypoint::screens::{
    confirm_pin, credentials, input_pin, main_screen, personal_info, splash, terms_of_service,
    welcome,
};

fn onboarding(index: usize, action: OnboardingScreenAction) -> AppAction {
    CoordinatorAction::route(
        0,
        AppScreenAction::Onboarding(CoordinatorAction::route(index, action)),
    )
}

fn sign_up(index: usize, action: SignUpScreenAction) -> AppAction {
    onboarding(
        2,
        OnboardingScreenAction::SignUp(CoordinatorAction::route(index, action)),
    )
}

fn setup_pin(index: usize, action: SetupPinScreenAction) -> AppAction {
    onboarding(
        3,
        OnboardingScreenAction::SetupPin(CoordinatorAction::route(index, action)),
    )
}

fn show(store: &AppStore) {
    println!("  -> {}", store.active_path().join(" / "));
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();

    println!("=== Onboarding Walkthrough ===\n");

    let auth = AuthStore::new();
    let config = CoordinatorConfig::demo();
    let mut store = launch(&auth, config.clone());
    show(&store);

    println!("Splash appears, waiting {:?}", config.splash_delay());
    store.send(CoordinatorAction::route(
        0,
        AppScreenAction::Splash(splash::Action::OnAppear),
    ))?;
    store.settle().await?;
    show(&store);

    println!("\nWelcome and terms");
    store.send(onboarding(
        0,
        OnboardingScreenAction::Welcome(welcome::Action::StartTapped),
    ))?;
    show(&store);
    store.send(onboarding(
        1,
        OnboardingScreenAction::TermsOfService(terms_of_service::Action::AcceptTapped),
    ))?;
    show(&store);

    println!("\nSign-up with pre-filled forms");
    store.send(sign_up(
        0,
        SignUpScreenAction::Credentials(credentials::Action::NextTapped),
    ))?;
    show(&store);

    let checkpoint = store.checkpoint().to_json()?;
    println!("  [Checkpoint] {} bytes of JSON", checkpoint.len());

    store.send(sign_up(
        1,
        SignUpScreenAction::PersonalInfo(personal_info::Action::SignUpTapped),
    ))?;
    show(&store);

    println!("\nPIN setup");
    store.send(setup_pin(
        0,
        SetupPinScreenAction::InputPin(input_pin::Action::NextTapped),
    ))?;
    show(&store);
    store.send(setup_pin(
        1,
        SetupPinScreenAction::ConfirmPin(confirm_pin::Action::ConfirmTapped),
    ))?;
    show(&store);

    let record = auth.read();
    println!(
        "\nSigned in: {}, PIN set: {}",
        record.is_authenticated(),
        record.pin.is_some()
    );

    println!("\nSign out");
    store.send(CoordinatorAction::route(
        0,
        AppScreenAction::Main(main_screen::Action::SignOutTapped),
    ))?;
    show(&store);

    println!("\nRestoring the sign-up checkpoint");
    let context = CoordinatorContext::new(&auth, config);
    let restored = AppStore::restore_json(&checkpoint, context)?;
    show(&restored);

    println!("\nVisited:");
    for path in store.history().get_path() {
        println!("  {}", path.join(" / "));
    }

    println!("\n=== Walkthrough Complete ===");
    Ok(())
}
