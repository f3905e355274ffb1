// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference-counted page scroll lock.
//!
//! Modal surfaces (drawers, dialogs) stop the page behind them from scrolling.
//! Several can be open at once, so the lock is shared: the first
//! [`ScrollLock::acquire`] saves the scroll offset and applies the lock, and dropping
//! the last [`ScrollLockGuard`] removes it and restores the saved offset.
//!
//! ```
//! use understory_overlay::scroll_lock::{ScrollBackend, ScrollLock};
//!
//! #[derive(Default)]
//! struct Page { scroll_y: f64, locked: bool }
//!
//! impl ScrollBackend for Page {
//!     fn scroll_offset(&self) -> f64 { self.scroll_y }
//!     fn lock(&mut self, _saved: f64) { self.locked = true; }
//!     fn unlock(&mut self, restore: f64) { self.locked = false; self.scroll_y = restore; }
//! }
//!
//! let lock = ScrollLock::new(Page { scroll_y: 240.0, locked: false });
//! let a = lock.acquire();
//! let b = lock.acquire();
//! drop(a);
//! assert!(lock.with_backend(|p| p.locked));
//! drop(b);
//! assert!(!lock.with_backend(|p| p.locked));
//! assert_eq!(lock.with_backend(|p| p.scroll_y), 240.0);
//! ```

use alloc::rc::Rc;
use core::cell::RefCell;

/// Applies and removes the platform scroll lock.
pub trait ScrollBackend {
    /// Current vertical scroll offset of the page.
    fn scroll_offset(&self) -> f64;
    /// Freeze the page at `saved` and suppress wheel/touch scrolling.
    fn lock(&mut self, saved: f64);
    /// Unfreeze the page and scroll back to `restore`.
    fn unlock(&mut self, restore: f64);
}

#[derive(Debug)]
struct Shared<B> {
    backend: B,
    holders: usize,
    saved: f64,
}

/// Shared handle to a scroll lock. Clones refer to the same lock.
#[derive(Debug)]
pub struct ScrollLock<B: ScrollBackend> {
    shared: Rc<RefCell<Shared<B>>>,
}

impl<B: ScrollBackend> Clone for ScrollLock<B> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<B: ScrollBackend> ScrollLock<B> {
    /// Create an unlocked lock over `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            shared: Rc::new(RefCell::new(Shared {
                backend,
                holders: 0,
                saved: 0.0,
            })),
        }
    }

    /// Take a hold on the lock; the lock is applied on the first hold.
    pub fn acquire(&self) -> ScrollLockGuard<B> {
        let mut s = self.shared.borrow_mut();
        if s.holders == 0 {
            s.saved = s.backend.scroll_offset();
            let saved = s.saved;
            s.backend.lock(saved);
            tracing::debug!(saved, "scroll locked");
        }
        s.holders += 1;
        ScrollLockGuard {
            shared: Rc::clone(&self.shared),
        }
    }

    /// Whether any guard is alive.
    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }

    /// Number of live guards.
    pub fn holders(&self) -> usize {
        self.shared.borrow().holders
    }

    /// Inspect the backend.
    pub fn with_backend<R>(&self, f: impl FnOnce(&B) -> R) -> R {
        f(&self.shared.borrow().backend)
    }
}

/// A hold on a [`ScrollLock`]; released on drop.
#[derive(Debug)]
#[must_use = "the scroll lock is released as soon as the guard is dropped"]
pub struct ScrollLockGuard<B: ScrollBackend> {
    shared: Rc<RefCell<Shared<B>>>,
}

impl<B: ScrollBackend> Drop for ScrollLockGuard<B> {
    fn drop(&mut self) {
        let mut s = self.shared.borrow_mut();
        s.holders -= 1;
        if s.holders == 0 {
            let saved = s.saved;
            s.backend.unlock(saved);
            tracing::debug!(restored = saved, "scroll unlocked");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[derive(Default)]
    struct Page {
        scroll_y: f64,
        calls: Vec<&'static str>,
    }

    impl ScrollBackend for Page {
        fn scroll_offset(&self) -> f64 {
            self.scroll_y
        }
        fn lock(&mut self, _saved: f64) {
            self.calls.push("lock");
        }
        fn unlock(&mut self, restore: f64) {
            self.scroll_y = restore;
            self.calls.push("unlock");
        }
    }

    #[test]
    fn lock_applies_once_and_releases_at_zero() {
        let lock = ScrollLock::new(Page::default());
        let a = lock.acquire();
        let b = lock.clone().acquire();
        assert_eq!(lock.holders(), 2);
        drop(b);
        assert!(lock.is_locked());
        drop(a);
        assert!(!lock.is_locked());
        assert_eq!(lock.with_backend(|p| p.calls.clone()), ["lock", "unlock"]);
    }

    #[test]
    fn restores_offset_saved_by_first_holder() {
        let lock = ScrollLock::new(Page {
            scroll_y: 500.0,
            calls: Vec::new(),
        });
        let a = lock.acquire();
        // The page moves underneath (for example a programmatic scroll).
        lock.shared.borrow_mut().backend.scroll_y = 0.0;
        let b = lock.acquire();
        drop(a);
        drop(b);
        assert_eq!(lock.with_backend(|p| p.scroll_y), 500.0);
    }

    #[test]
    fn relock_after_release_saves_again() {
        let lock = ScrollLock::new(Page::default());
        drop(lock.acquire());
        lock.shared.borrow_mut().backend.scroll_y = 75.0;
        let g = lock.acquire();
        assert_eq!(lock.shared.borrow().saved, 75.0);
        drop(g);
        assert_eq!(
            lock.with_backend(|p| p.calls.clone()),
            ["lock", "unlock", "lock", "unlock"]
        );
    }
}
