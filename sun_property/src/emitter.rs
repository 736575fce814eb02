// Copyright 2025 the Sun Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered listener sets.
//!
//! An [`Emitter`] keeps listeners in insertion order and treats them as a set:
//! identity is the listener's `Rc` allocation, so adding the same [`Listener`]
//! twice registers it once.
//!
//! ```
//! use std::rc::Rc;
//! use core::cell::Cell;
//! use sun_property::{Emitter, Listener};
//!
//! let hits = Rc::new(Cell::new(0));
//! let counter = hits.clone();
//! let listener: Listener<()> = Rc::new(move |_| counter.set(counter.get() + 1));
//!
//! let emitter = Emitter::new();
//! emitter.add_listener(&listener);
//! emitter.add_listener(&listener);
//! emitter.emit(&());
//! assert_eq!(hits.get(), 1);
//! ```

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

/// A shared callback registered with an [`Emitter`].
pub type Listener<A> = Rc<dyn Fn(&A)>;

/// An ordered set of listeners invoked by [`Emitter::emit`].
pub struct Emitter<A> {
    listeners: RefCell<Vec<Listener<A>>>,
}

impl<A> Default for Emitter<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for Emitter<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

impl<A> Emitter<A> {
    /// Create an emitter with no listeners.
    pub const fn new() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Append `listener` unless it is already registered.
    ///
    /// Returns `true` if the listener was added.
    pub fn add_listener(&self, listener: &Listener<A>) -> bool {
        if self.has_listener(listener) {
            return false;
        }
        self.listeners.borrow_mut().push(listener.clone());
        true
    }

    /// Remove `listener` if present.
    ///
    /// Returns `true` if the listener was registered.
    pub fn remove_listener(&self, listener: &Listener<A>) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let Some(i) = listeners.iter().position(|l| Rc::ptr_eq(l, listener)) else {
            return false;
        };
        listeners.remove(i);
        true
    }

    /// Whether `listener` is registered.
    pub fn has_listener(&self, listener: &Listener<A>) -> bool {
        self.listeners
            .borrow()
            .iter()
            .any(|l| Rc::ptr_eq(l, listener))
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Remove every listener.
    pub fn remove_all(&self) {
        self.listeners.borrow_mut().clear();
    }

    /// Invoke every listener in insertion order.
    ///
    /// The listener list is copied first: listeners added or removed by a
    /// listener take effect on the next emit.
    pub fn emit(&self, args: &A) {
        let snapshot: Vec<Listener<A>> = self.listeners.borrow().clone();
        for listener in snapshot {
            listener(args);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use core::cell::Cell;

    fn tagged(log: &Rc<RefCell<Vec<char>>>, tag: char) -> Listener<()> {
        let log = log.clone();
        Rc::new(move |_| log.borrow_mut().push(tag))
    }

    #[test]
    fn emits_in_insertion_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let e = Emitter::new();
        e.add_listener(&tagged(&log, 'x'));
        e.add_listener(&tagged(&log, 'y'));
        e.add_listener(&tagged(&log, 'z'));
        e.emit(&());
        assert_eq!(*log.borrow(), vec!['x', 'y', 'z']);
    }

    #[test]
    fn add_and_remove_are_idempotent() {
        let e: Emitter<()> = Emitter::new();
        let l: Listener<()> = Rc::new(|_| {});
        let other: Listener<()> = Rc::new(|_| {});
        assert!(e.add_listener(&l));
        assert!(!e.add_listener(&l));
        assert_eq!(e.listener_count(), 1);
        assert!(!e.remove_listener(&other));
        assert_eq!(e.listener_count(), 1);
        assert!(e.remove_listener(&l));
        assert!(!e.remove_listener(&l));
        assert_eq!(e.listener_count(), 0);
    }

    #[test]
    fn removal_during_emit_applies_to_next_emit() {
        let e: Rc<Emitter<()>> = Rc::new(Emitter::new());
        let second_calls = Rc::new(Cell::new(0));
        let calls = second_calls.clone();
        let second: Listener<()> = Rc::new(move |_| calls.set(calls.get() + 1));

        let remover_emitter = e.clone();
        let victim = second.clone();
        let first: Listener<()> = Rc::new(move |_| {
            remover_emitter.remove_listener(&victim);
        });

        e.add_listener(&first);
        e.add_listener(&second);
        e.emit(&());
        assert_eq!(second_calls.get(), 1, "in-progress dispatch is unaffected");
        e.emit(&());
        assert_eq!(second_calls.get(), 1, "removed listener is not called again");
    }

    #[test]
    fn passes_arguments() {
        let total = Rc::new(Cell::new(0_u32));
        let sink = total.clone();
        let e: Emitter<u32> = Emitter::new();
        e.add_listener(&(Rc::new(move |n: &u32| sink.set(sink.get() + n)) as Listener<u32>));
        e.emit(&4);
        e.emit(&5);
        assert_eq!(total.get(), 9);
    }
}
