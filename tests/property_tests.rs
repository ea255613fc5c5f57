//! Property-based tests for route stacks and the coordinator hierarchy.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use chrono::Utc;
use proptest::prelude::*;
use waypoint::auth::{AuthStore, Credentials, PersonalInfo, User};
use waypoint::config::CoordinatorConfig;
use waypoint::core::{CoordinatorAction, NavigationChange, NavigationHistory, RouteStack};
use waypoint::flows::{
    launch, AppAction, AppScreen, AppScreenAction, AppState, OnboardingScreen,
    OnboardingScreenAction, SetupPinScreenAction, SignUpScreenAction,
};
use waypoint::screens::{
    confirm_pin, credentials, input_pin, main_screen, personal_info, splash, terms_of_service,
    welcome,
};

fn jane() -> User {
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

fn app(index: usize, action: AppScreenAction) -> AppAction {
    CoordinatorAction::route(index, action)
}

fn onboarding(index: usize, action: OnboardingScreenAction) -> AppAction {
    app(
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

prop_compose! {
    fn arbitrary_intent()(index in 0..5usize, kind in 0..14u8) -> AppAction {
        match kind {
            0 => app(index, AppScreenAction::Splash(splash::Action::LoadUserResult(None))),
            1 => app(index, AppScreenAction::Splash(splash::Action::LoadUserResult(Some(jane())))),
            2 => onboarding(index, OnboardingScreenAction::Welcome(welcome::Action::StartTapped)),
            3 => onboarding(
                index,
                OnboardingScreenAction::TermsOfService(terms_of_service::Action::AcceptTapped),
            ),
            4 => sign_up(
                index,
                SignUpScreenAction::Credentials(credentials::Action::SetEmail(String::new())),
            ),
            5 => sign_up(
                index,
                SignUpScreenAction::Credentials(credentials::Action::SetEmail("a@b.com".into())),
            ),
            6 => sign_up(index, SignUpScreenAction::Credentials(credentials::Action::NextTapped)),
            7 => sign_up(
                index,
                SignUpScreenAction::PersonalInfo(personal_info::Action::SignUpTapped),
            ),
            8 => setup_pin(index, SetupPinScreenAction::InputPin(input_pin::Action::NextTapped)),
            9 => setup_pin(index, SetupPinScreenAction::InputPin(input_pin::Action::SkipTapped)),
            10 => setup_pin(
                index,
                SetupPinScreenAction::ConfirmPin(confirm_pin::Action::SetPin("0000".into())),
            ),
            11 => setup_pin(
                index,
                SetupPinScreenAction::ConfirmPin(confirm_pin::Action::ConfirmTapped),
            ),
            12 => setup_pin(index, SetupPinScreenAction::ConfirmPin(confirm_pin::Action::SkipTapped)),
            _ => app(index, AppScreenAction::Main(main_screen::Action::SignOutTapped)),
        }
    }
}

fn check_stack<S>(routes: &RouteStack<S>) -> Result<(), TestCaseError> {
    prop_assert!(!routes.is_empty());
    prop_assert!(routes.routes()[0].is_root());
    prop_assert!(routes.routes()[1..].iter().all(|route| !route.is_root()));
    Ok(())
}

fn check_app(state: &AppState) -> Result<(), TestCaseError> {
    check_stack(&state.routes)?;
    for screen in state.routes.screens() {
        if let AppScreen::Onboarding(onboarding) = screen {
            check_stack(&onboarding.routes)?;
            for child in onboarding.routes.screens() {
                match child {
                    OnboardingScreen::SignUp(flow) => check_stack(&flow.routes)?,
                    OnboardingScreen::SetupPin(flow) => check_stack(&flow.routes)?,
                    OnboardingScreen::Welcome(_) | OnboardingScreen::TermsOfService(_) => {}
                }
            }
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn route_stacks_never_empty(intents in prop::collection::vec(arbitrary_intent(), 0..40)) {
        let auth = AuthStore::new();
        let mut store = launch(&auth, CoordinatorConfig::demo());

        for intent in intents {
            // Violations are expected for intents sent while disabled.
            let _ = store.send(intent);
            check_app(store.state())?;
        }
    }

    #[test]
    fn push_appends_without_touching_existing(
        root in any::<u8>(),
        pushed in prop::collection::vec(any::<u8>(), 0..8),
        next in any::<u8>(),
    ) {
        let mut stack = RouteStack::new(root);
        for screen in &pushed {
            stack.push(*screen);
        }
        let before: Vec<u8> = stack.screens().copied().collect();

        stack.push(next);

        let after: Vec<u8> = stack.screens().copied().collect();
        prop_assert_eq!(after.len(), before.len() + 1);
        prop_assert_eq!(&after[..before.len()], &before[..]);
        prop_assert_eq!(*stack.top(), next);
        check_stack(&stack)?;
    }

    #[test]
    fn replace_root_leaves_exactly_one(
        root in any::<u8>(),
        pushed in prop::collection::vec(any::<u8>(), 0..8),
        replacement in any::<u8>(),
    ) {
        let mut stack = RouteStack::new(root);
        for screen in pushed {
            stack.push(screen);
        }

        stack.replace_root(replacement);

        prop_assert_eq!(stack.len(), 1);
        prop_assert_eq!(*stack.root(), replacement);
        prop_assert_eq!(stack, RouteStack::new(replacement));
    }

    #[test]
    fn stack_serialization_round_trips(
        root in any::<u8>(),
        pushed in prop::collection::vec(any::<u8>(), 0..8),
    ) {
        let mut stack = RouteStack::new(root);
        for screen in pushed {
            stack.push(screen);
        }

        let json = serde_json::to_string(&stack).unwrap();
        let restored: RouteStack<u8> = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(restored, stack);
    }

    #[test]
    fn history_preserves_order(screens in prop::collection::vec("[A-Z][a-z]{1,8}", 1..10)) {
        let mut history = NavigationHistory::new();
        for pair in screens.windows(2) {
            history = history.record(NavigationChange::new(
                &[pair[0].as_str()],
                &[pair[1].as_str()],
                Utc::now(),
            ));
        }

        let visited: Vec<&str> = history.get_path().into_iter().flatten().collect();
        if screens.len() > 1 {
            let expected: Vec<&str> = screens.iter().map(String::as_str).collect();
            prop_assert_eq!(visited, expected);
        } else {
            prop_assert!(visited.is_empty());
        }
    }
}
