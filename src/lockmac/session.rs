//! The desktop session lock capability.
//!
//! Locking is the one effect this program has on the outside world, so it
//! sits behind a trait: `main` binds [`SystemLock`], tests bind
//! [`RecordingLock`] and observe the invocation count instead of losing
//! their desktop session.

use crate::error::Result;
use std::cell::Cell;

#[cfg(target_os = "macos")]
#[link(name = "login", kind = "framework")]
#[allow(non_snake_case)]
extern "C" {
    // Undocumented symbol from the private login framework; the call
    // reports nothing about the outcome.
    fn SACLockScreenImmediate();
}

/// A zero-argument capability that locks the current desktop session.
pub trait SessionLock {
    /// Lock the session immediately. The platform call is synchronous and
    /// its success is not observable.
    fn lock_now(&self) -> Result<()>;
}

/// Production lock, bound to the platform entry point.
///
/// Only macOS has one; every other target gets
/// [`LockmacError::UnsupportedPlatform`](crate::error::LockmacError).
pub struct SystemLock;

impl SessionLock for SystemLock {
    fn lock_now(&self) -> Result<()> {
        #[cfg(target_os = "macos")]
        {
            unsafe { SACLockScreenImmediate() };
            Ok(())
        }

        #[cfg(not(target_os = "macos"))]
        {
            Err(crate::error::LockmacError::UnsupportedPlatform)
        }
    }
}

/// Test double that records invocations instead of locking the session.
///
/// Uses `Cell` for interior mutability since lockmac is single-threaded and
/// the trait takes `&self`. Counts every attempt, including simulated
/// failures.
#[derive(Default)]
pub struct RecordingLock {
    invocations: Cell<u32>,
    simulate_failure: Cell<bool>,
}

impl RecordingLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `lock_now` has been called on this double.
    pub fn invocations(&self) -> u32 {
        self.invocations.get()
    }

    /// Make subsequent `lock_now` calls fail, for testing error handling.
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.set(simulate);
    }
}

impl SessionLock for RecordingLock {
    fn lock_now(&self) -> Result<()> {
        self.invocations.set(self.invocations.get() + 1);
        if self.simulate_failure.get() {
            Err(crate::error::LockmacError::UnsupportedPlatform)
        } else {
            Ok(())
        }
    }
}
