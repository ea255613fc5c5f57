//! Macros for composing screen reducers.

/// Generate a screen union: a state enum, an action enum and a reducer that
/// dispatches each action to the child whose tag matches.
///
/// Every variant is wired into the state enum, the action enum, the tag
/// check and the dispatch at once, so a screen kind cannot be added to the
/// union without being reachable. Each child's environment is obtained from
/// the union's environment through `AsRef`. An action whose tag does not
/// match the state is a no-op.
///
/// # Example
///
/// ```
/// use waypoint::context::ScreenContext;
/// use waypoint::screen_union;
/// use waypoint::screens::{TermsOfService, Welcome};
///
/// screen_union! {
///     pub struct IntroScreens {
///         env: ScreenContext,
///         state: IntroScreen,
///         action: IntroScreenAction,
///         screens: {
///             Welcome => Welcome,
///             Terms => TermsOfService,
///         }
///     }
/// }
/// ```
#[macro_export]
macro_rules! screen_union {
    (
        $(#[$meta:meta])*
        $vis:vis struct $reducer:ident {
            env: $env:ty,
            state: $state:ident,
            action: $action:ident,
            screens: {
                $(
                    $variant:ident => $child:ty
                ),+ $(,)?
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default)]
        $vis struct $reducer;

        #[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
        $vis enum $state {
            $(
                $variant(<$child as $crate::core::Reducer>::State)
            ),+
        }

        #[derive(Clone, Debug, PartialEq)]
        $vis enum $action {
            $(
                $variant(<$child as $crate::core::Reducer>::Action)
            ),+
        }

        impl $crate::core::Screen for $state {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant(screen) => $crate::core::Screen::name(screen)),+
                }
            }

            fn path(&self) -> Vec<&str> {
                match self {
                    $(Self::$variant(screen) => $crate::core::Screen::path(screen)),+
                }
            }
        }

        impl $crate::core::ScreenUnion for $state {
            type Action = $action;

            #[allow(unreachable_patterns)]
            fn accepts(&self, action: &$action) -> bool {
                match (self, action) {
                    $(($state::$variant(_), $action::$variant(_)) => true,)+
                    _ => false,
                }
            }
        }

        impl $crate::core::Reducer for $reducer {
            type State = $state;
            type Action = $action;
            type Env = $env;

            #[allow(unreachable_patterns)]
            fn reduce(
                state: &mut $state,
                action: $action,
                env: &$env,
            ) -> $crate::core::Reduced<$action> {
                match (state, action) {
                    $(
                        ($state::$variant(screen), $action::$variant(action)) => {
                            let env: &<$child as $crate::core::Reducer>::Env =
                                ::core::convert::AsRef::as_ref(env);
                            Ok(<$child as $crate::core::Reducer>::reduce(screen, action, env)?
                                .map($action::$variant))
                        }
                    )+
                    _ => Ok($crate::effects::Command::none()),
                }
            }
        }
    };
}
