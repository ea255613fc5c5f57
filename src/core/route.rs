//! Routes and the navigation stack that owns them.
//!
//! A [`RouteStack`] is never empty: it is created from a root screen and
//! only changes through [`RouteStack::push`] and [`RouteStack::replace_root`].
//! Routes are addressed by position, so any reordering invalidates events
//! that were addressed to an index before the change.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// One entry in a navigation stack.
///
/// The variant records how the screen was presented: the first entry is
/// always the `Root`, every later entry was pushed on top of it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Route<S> {
    /// The bottom of the stack.
    Root(S),
    /// A screen pushed on top of the root.
    Push(S),
}

impl<S> Route<S> {
    /// The screen state carried by this route.
    pub fn screen(&self) -> &S {
        match self {
            Self::Root(screen) | Self::Push(screen) => screen,
        }
    }

    /// Mutable access to the carried screen state.
    pub fn screen_mut(&mut self) -> &mut S {
        match self {
            Self::Root(screen) | Self::Push(screen) => screen,
        }
    }

    /// Consume the route, returning its screen state.
    pub fn into_screen(self) -> S {
        match self {
            Self::Root(screen) | Self::Push(screen) => screen,
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, Self::Root(_))
    }
}

/// Errors raised when building a stack from raw routes.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RouteStackError {
    #[error("Route stack must contain at least a root route")]
    Empty,

    #[error("Route at index 0 must be a root route")]
    MissingRoot,

    #[error("Route at index {index} is a root route; only index 0 may be a root")]
    MisplacedRoot { index: usize },
}

/// Ordered, non-empty sequence of routes. Index 0 is the root.
///
/// Equality is structural, which lets callers skip redundant updates.
///
/// # Example
///
/// ```rust
/// use waypoint::core::RouteStack;
///
/// let mut stack = RouteStack::new("welcome");
/// stack.push("terms");
/// assert_eq!(stack.len(), 2);
/// assert_eq!(stack.top(), &"terms");
///
/// stack.replace_root("main");
/// assert_eq!(stack.len(), 1);
/// assert_eq!(stack.root(), &"main");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RouteStack<S> {
    routes: Vec<Route<S>>,
}

impl<S> RouteStack<S> {
    /// Create a stack holding only `root`.
    pub fn new(root: S) -> Self {
        Self {
            routes: vec![Route::Root(root)],
        }
    }

    /// Append `screen`; it becomes the active route.
    ///
    /// Existing entries are left untouched. A stack always has a root, so
    /// there is no "push without root" failure mode to handle here.
    pub fn push(&mut self, screen: S) {
        self.routes.push(Route::Push(screen));
    }

    /// Replace every entry with a single root route.
    pub fn replace_root(&mut self, screen: S) {
        self.routes = vec![Route::Root(screen)];
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Always `false`: a stack holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Index of the active (topmost) route.
    pub fn top_index(&self) -> usize {
        self.routes.len() - 1
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.top_index()
    }

    /// The active route's screen.
    pub fn top(&self) -> &S {
        self.routes[self.top_index()].screen()
    }

    pub fn top_mut(&mut self) -> &mut S {
        let index = self.top_index();
        self.routes[index].screen_mut()
    }

    pub fn root(&self) -> &S {
        self.routes[0].screen()
    }

    pub fn get(&self, index: usize) -> Option<&S> {
        self.routes.get(index).map(Route::screen)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut S> {
        self.routes.get_mut(index).map(Route::screen_mut)
    }

    /// All routes, root first.
    pub fn routes(&self) -> &[Route<S>] {
        &self.routes
    }

    /// Iterate screens from root to top.
    pub fn screens(&self) -> impl Iterator<Item = &S> {
        self.routes.iter().map(Route::screen)
    }
}

impl<S> TryFrom<Vec<Route<S>>> for RouteStack<S> {
    type Error = RouteStackError;

    fn try_from(routes: Vec<Route<S>>) -> Result<Self, Self::Error> {
        match routes.first() {
            None => return Err(RouteStackError::Empty),
            Some(first) if !first.is_root() => return Err(RouteStackError::MissingRoot),
            Some(_) => {}
        }

        if let Some(index) = routes.iter().skip(1).position(Route::is_root) {
            return Err(RouteStackError::MisplacedRoot { index: index + 1 });
        }

        Ok(Self { routes })
    }
}

impl<S: Serialize> Serialize for RouteStack<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        self.routes.serialize(serializer)
    }
}

impl<'de, S: Deserialize<'de>> Deserialize<'de> for RouteStack<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let routes = Vec::<Route<S>>::deserialize(deserializer)?;
        Self::try_from(routes).map_err(serde::de::Error::custom)
    }
}
