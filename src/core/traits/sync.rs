//! Synchronized access to state shared with the navigation engine.
//!
//! The mission list is read by the navigation engine and written by the
//! preset task. [`SharedState`] hides the locking mechanism so the preset
//! task can run against an Embassy critical-section mutex on target and a
//! `RefCell` in host tests.
//!
//! Everything done inside one `with_mut` closure is observed by other
//! accessors as a single step.

/// Platform-agnostic synchronized state access.
///
/// - `EmbassyState<T>` for embedded targets (feature `embassy`)
/// - `MockState<T>` for host testing
pub trait SharedState<T> {
    /// Access state immutably.
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R;

    /// Access state mutably.
    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R;
}

// ============================================================================
// Embassy Implementation
// ============================================================================

#[cfg(feature = "embassy")]
use embassy_sync::blocking_mutex::{raw::CriticalSectionRawMutex, Mutex};

/// Embassy-based synchronized state using a critical-section Mutex.
///
/// Safe to use from async tasks and interrupt handlers. Suitable for
/// `static` items through the const constructor.
#[cfg(feature = "embassy")]
pub struct EmbassyState<T> {
    inner: Mutex<CriticalSectionRawMutex, ::core::cell::RefCell<T>>,
}

#[cfg(feature = "embassy")]
impl<T> EmbassyState<T> {
    pub const fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(::core::cell::RefCell::new(value)),
        }
    }
}

#[cfg(feature = "embassy")]
impl<T> SharedState<T> for EmbassyState<T> {
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        self.inner.lock(|cell| f(&cell.borrow()))
    }

    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock synchronized state using RefCell for single-threaded testing.
///
/// # Panics
///
/// Panics if borrowing rules are violated (e.g., calling `with_mut` while
/// `with` is active). This indicates a bug in the test code.
pub struct MockState<T> {
    inner: ::core::cell::RefCell<T>,
}

impl<T> MockState<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: ::core::cell::RefCell::new(value),
        }
    }

    /// Consume the wrapper and return the inner value
    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }
}

impl<T> SharedState<T> for MockState<T> {
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.inner.borrow())
    }

    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        f(&mut self.inner.borrow_mut())
    }
}
