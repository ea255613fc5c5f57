//! Shared authentication record and its capability handles.
//!
//! The record is created once by the host and shared by every coordinator
//! level. Reading and writing are split into two handles so that write
//! access can be granted only to route reducers: leaf screens and deferred
//! tasks receive an [`AuthReader`], coordinators an [`AuthWriter`].

use super::user::{Pin, User};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::info;

/// Point-in-time copy of the auth record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthSnapshot {
    pub user: Option<User>,
    pub pin: Option<Pin>,
}

impl AuthSnapshot {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Process-wide holder of the signed-in user and configured PIN.
#[derive(Clone, Debug, Default)]
pub struct AuthStore {
    record: Arc<RwLock<AuthSnapshot>>,
}

impl AuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `user` already signed in, as if restored by the host.
    pub fn signed_in(user: User, pin: Option<Pin>) -> Self {
        Self {
            record: Arc::new(RwLock::new(AuthSnapshot {
                user: Some(user),
                pin,
            })),
        }
    }

    pub fn read(&self) -> AuthSnapshot {
        self.record.read().clone()
    }

    /// Forget both the user and the PIN.
    pub fn clear(&self) {
        *self.record.write() = AuthSnapshot::default();
        info!("auth record: cleared");
    }

    pub fn reader(&self) -> AuthReader {
        AuthReader {
            record: Arc::clone(&self.record),
        }
    }

    pub fn writer(&self) -> AuthWriter {
        AuthWriter {
            record: Arc::clone(&self.record),
        }
    }
}

/// Read-only view of the auth record.
#[derive(Clone, Debug)]
pub struct AuthReader {
    record: Arc<RwLock<AuthSnapshot>>,
}

impl AuthReader {
    pub fn read(&self) -> AuthSnapshot {
        self.record.read().clone()
    }

    pub fn current_user(&self) -> Option<User> {
        self.record.read().user.clone()
    }

    pub fn current_pin(&self) -> Option<Pin> {
        self.record.read().pin.clone()
    }
}

/// Write capability over the auth record. Only coordinators hold one.
#[derive(Clone, Debug)]
pub struct AuthWriter {
    record: Arc<RwLock<AuthSnapshot>>,
}

impl AuthWriter {
    pub fn read(&self) -> AuthSnapshot {
        self.record.read().clone()
    }

    /// Downgrade to a read-only handle for child screens.
    pub fn reader(&self) -> AuthReader {
        AuthReader {
            record: Arc::clone(&self.record),
        }
    }

    pub fn set_user(&self, user: User) {
        self.record.write().user = Some(user);
        info!("auth record: user stored");
    }

    pub fn set_pin(&self, pin: Pin) {
        self.record.write().pin = Some(pin);
        info!("auth record: pin stored");
    }

    /// Forget the user. A stored PIN is kept.
    pub fn sign_out(&self) {
        self.record.write().user = None;
        info!("auth record: user signed out");
    }
}
