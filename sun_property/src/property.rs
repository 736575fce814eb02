// Copyright 2025 the Sun Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observable values.
//!
//! See the [crate docs](crate) for the notification contract.

use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;

type Observer<T> = Rc<dyn Fn(&T, Option<&T>)>;

struct Shared<T> {
    value: RefCell<T>,
    initial: T,
    observers: RefCell<Vec<(u64, Observer<T>)>>,
    next_id: Cell<u64>,
}

/// Type-erased unlink hook so a [`Subscription`] does not carry `T`.
trait Detach {
    fn detach(&self, id: u64);
}

impl<T> Detach for Shared<T> {
    fn detach(&self, id: u64) {
        self.observers.borrow_mut().retain(|(i, _)| *i != id);
    }
}

/// An observable value.
///
/// Cloning a `Property` yields another handle to the same value; all handles
/// observe and mutate the same state.
pub struct Property<T> {
    shared: Rc<Shared<T>>,
}

impl<T> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &*self.shared.value.borrow())
            .field("observers", &self.shared.observers.borrow().len())
            .finish_non_exhaustive()
    }
}

impl<T: Clone + PartialEq + 'static> Property<T> {
    /// Create a property holding `value`, which is also its reset value.
    pub fn new(value: T) -> Self {
        Self {
            shared: Rc::new(Shared {
                value: RefCell::new(value.clone()),
                initial: value,
                observers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Return a clone of the current value.
    pub fn get(&self) -> T {
        self.shared.value.borrow().clone()
    }

    /// Borrow the current value for the duration of `f`.
    ///
    /// `f` must not call [`set`](Self::set) on this property.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.shared.value.borrow())
    }

    /// Store `value` and notify observers if it differs from the current value.
    ///
    /// Returns `true` when the value changed.
    pub fn set(&self, value: T) -> bool {
        let old = {
            let mut current = self.shared.value.borrow_mut();
            if *current == value {
                return false;
            }
            core::mem::replace(&mut *current, value.clone())
        };
        self.notify(&value, Some(&old));
        true
    }

    /// Restore the value the property was created with.
    pub fn reset(&self) {
        self.set(self.shared.initial.clone());
    }

    /// Observe the current value now and every subsequent change.
    ///
    /// The first call receives `(current, None)`.
    pub fn link(&self, observer: impl Fn(&T, Option<&T>) + 'static) -> Subscription {
        let observer: Observer<T> = Rc::new(observer);
        let subscription = self.attach(observer.clone());
        let current = self.get();
        observer(&current, None);
        subscription
    }

    /// Observe subsequent changes only.
    pub fn lazy_link(&self, observer: impl Fn(&T, Option<&T>) + 'static) -> Subscription {
        self.attach(Rc::new(observer))
    }

    /// Number of attached observers.
    pub fn link_count(&self) -> usize {
        self.shared.observers.borrow().len()
    }

    /// A handle that can observe but not mutate this property.
    pub fn read_only(&self) -> ReadOnlyProperty<T> {
        ReadOnlyProperty {
            inner: self.clone(),
        }
    }

    fn attach(&self, observer: Observer<T>) -> Subscription {
        let id = self.shared.next_id.get();
        self.shared.next_id.set(id + 1);
        self.shared.observers.borrow_mut().push((id, observer));
        let weak: Weak<dyn Detach> = Rc::downgrade(&self.shared) as Weak<dyn Detach>;
        Subscription {
            target: Some((weak, id)),
        }
    }

    fn notify(&self, new: &T, old: Option<&T>) {
        let snapshot: Vec<Observer<T>> = self
            .shared
            .observers
            .borrow()
            .iter()
            .map(|(_, o)| o.clone())
            .collect();
        tracing::trace!(observers = snapshot.len(), "property changed");
        for observer in snapshot {
            observer(new, old);
        }
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// An observe-only view of a [`Property`].
///
/// Models hand these out for derived state (such as a button's interaction
/// state) that only the model itself may change.
pub struct ReadOnlyProperty<T> {
    inner: Property<T>,
}

impl<T> Clone for ReadOnlyProperty<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ReadOnlyProperty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ReadOnlyProperty").field(&self.inner).finish()
    }
}

impl<T: Clone + PartialEq + 'static> ReadOnlyProperty<T> {
    /// See [`Property::get`].
    pub fn get(&self) -> T {
        self.inner.get()
    }

    /// See [`Property::with`].
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.inner.with(f)
    }

    /// See [`Property::link`].
    pub fn link(&self, observer: impl Fn(&T, Option<&T>) + 'static) -> Subscription {
        self.inner.link(observer)
    }

    /// See [`Property::lazy_link`].
    pub fn lazy_link(&self, observer: impl Fn(&T, Option<&T>) + 'static) -> Subscription {
        self.inner.lazy_link(observer)
    }

    /// See [`Property::link_count`].
    pub fn link_count(&self) -> usize {
        self.inner.link_count()
    }
}

impl<T: Clone + PartialEq + 'static> From<Property<T>> for ReadOnlyProperty<T> {
    fn from(inner: Property<T>) -> Self {
        Self { inner }
    }
}

/// An attached observer.
///
/// Dropping the subscription unlinks the observer. Dropping it after the
/// property is gone is a no-op.
#[must_use = "dropping a Subscription unlinks its observer; call `persist` to keep it"]
pub struct Subscription {
    target: Option<(Weak<dyn Detach>, u64)>,
}

impl Subscription {
    /// Keep the observer attached for as long as the property lives.
    pub fn persist(mut self) {
        self.target = None;
    }

    /// Unlink now. Equivalent to dropping.
    pub fn unlink(self) {}
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.target.as_ref().map(|(_, id)| *id))
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some((weak, id)) = self.target.take()
            && let Some(shared) = weak.upgrade()
        {
            shared.detach(id);
        }
    }
}
