//! Core Screen trait for route states.
//!
//! Every state that can sit inside a route implements this trait, which
//! provides pure methods for naming the screen and describing which screen
//! is currently active underneath it.

use std::fmt::Debug;

/// Trait for screen states hosted by a route.
///
/// All methods are pure - no side effects. Screens are plain values
/// describing what a rendering surface should currently show.
///
/// # Example
///
/// ```rust
/// use waypoint::core::Screen;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Settings {
///     dark_mode: bool,
/// }
///
/// impl Screen for Settings {
///     fn name(&self) -> &str {
///         "Settings"
///     }
/// }
///
/// let settings = Settings { dark_mode: true };
/// assert_eq!(settings.path(), vec!["Settings"]);
/// ```
pub trait Screen: Clone + PartialEq + Debug {
    /// Get the screen kind's name for display/logging.
    fn name(&self) -> &str;

    /// Names from this screen down to the innermost active screen.
    ///
    /// Leaf screens return just their own name. Coordinator states override
    /// this to append the path of their topmost route.
    ///
    /// Default implementation returns `[self.name()]`.
    fn path(&self) -> Vec<&str> {
        vec![self.name()]
    }
}

/// A tagged union of screens that can tell whether an action belongs to it.
///
/// Implemented by the state enums generated with
/// [`screen_union!`](crate::screen_union).
pub trait ScreenUnion: Screen {
    /// The matching union of actions.
    type Action;

    /// Check whether `action` is tagged with this screen's kind.
    fn accepts(&self, action: &Self::Action) -> bool;
}
