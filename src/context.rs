//! Environments threaded through reducer dispatch.
//!
//! Leaf screens get a [`ScreenContext`] (read-only auth); coordinators get a
//! [`CoordinatorContext`], the only place an [`AuthWriter`] is reachable.
//! A coordinator context can always be narrowed to a screen context through
//! `AsRef`, which is how unions hand each child the environment it declares.

use crate::auth::{AuthReader, AuthStore, AuthWriter};
use crate::config::CoordinatorConfig;
use std::sync::Arc;

/// Environment for leaf screens and deferred tasks.
#[derive(Clone, Debug)]
pub struct ScreenContext {
    pub auth: AuthReader,
    pub config: Arc<CoordinatorConfig>,
}

/// Environment for coordinators.
#[derive(Clone, Debug)]
pub struct CoordinatorContext {
    pub auth: AuthWriter,
    screen: ScreenContext,
}

impl CoordinatorContext {
    pub fn new(store: &AuthStore, config: CoordinatorConfig) -> Self {
        Self {
            auth: store.writer(),
            screen: ScreenContext {
                auth: store.reader(),
                config: Arc::new(config),
            },
        }
    }

    pub fn config(&self) -> &CoordinatorConfig {
        &self.screen.config
    }

    pub fn screen(&self) -> &ScreenContext {
        &self.screen
    }
}

impl AsRef<ScreenContext> for ScreenContext {
    fn as_ref(&self) -> &ScreenContext {
        self
    }
}

impl AsRef<ScreenContext> for CoordinatorContext {
    fn as_ref(&self) -> &ScreenContext {
        &self.screen
    }
}

impl AsRef<CoordinatorContext> for CoordinatorContext {
    fn as_ref(&self) -> &CoordinatorContext {
        self
    }
}
