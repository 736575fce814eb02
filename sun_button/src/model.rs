// Copyright 2025 the Sun Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The button model: interaction tracking and firing.
//!
//! ## Lifecycle
//!
//! For one pointer, the host delivers enter → (down → up)* → exit. The model
//! tracks at most one hovering pointer; only that pointer can press the button.
//!
//! - A completed press (down then up while still over) fires listeners once.
//! - With [`ButtonOptions::fire_on_down`] the press fires at down instead and
//!   the release fires nothing.
//! - Releasing after the pointer exited ends the press without firing.
//! - Disabling clears the hovering pointer and any press. Re-enabling starts
//!   from [`InteractionState::Idle`], even if a pointer is still physically
//!   over the button; it becomes `Over` again on the next enter.
//!
//! A down or up from a pointer the model is not tracking is a caller bug. It
//! panics in debug builds and is logged and ignored otherwise.

use alloc::rc::{Rc, Weak};
use core::cell::Cell;
use core::fmt;

use sun_property::{Emitter, Listener, Property, ReadOnlyProperty, Subscription};
use sun_responder::pointer::PointerId;

use crate::interaction::InteractionState;

/// Configuration for a [`ButtonModel`].
#[derive(Clone, Debug, Default)]
pub struct ButtonOptions {
    /// Fire when the button is pressed rather than when it is released.
    pub fire_on_down: bool,
    /// Share an existing enabled property (for example one controlling a whole
    /// panel). A fresh property holding `true` is created when `None`.
    pub enabled_property: Option<Property<bool>>,
}

impl ButtonOptions {
    /// Set [`fire_on_down`](Self::fire_on_down).
    #[must_use]
    pub fn with_fire_on_down(mut self, fire_on_down: bool) -> Self {
        self.fire_on_down = fire_on_down;
        self
    }

    /// Set [`enabled_property`](Self::enabled_property).
    #[must_use]
    pub fn with_enabled_property(mut self, enabled: Property<bool>) -> Self {
        self.enabled_property = Some(enabled);
        self
    }
}

struct Tracking {
    enabled: Property<bool>,
    over: Cell<Option<PointerId>>,
    pressed_by: Cell<Option<PointerId>>,
    fire_on_down: bool,
    listeners: Emitter<()>,
    state: Property<InteractionState>,
}

impl Tracking {
    fn recompute(&self) {
        let state = InteractionState::from_flags(
            self.enabled.get(),
            self.over.get().is_some(),
            self.pressed_by.get().is_some(),
        );
        if self.state.set(state) {
            tracing::trace!(?state, "button interaction state changed");
        }
    }

    fn enabled_changed(&self, enabled: bool) {
        if !enabled {
            self.over.set(None);
            self.pressed_by.set(None);
        }
        self.recompute();
    }

    fn fire(&self) {
        tracing::trace!(listeners = self.listeners.listener_count(), "button fired");
        self.listeners.emit(&());
    }
}

/// Tracks one button's hover/press lifecycle and fires its listeners.
///
/// The model is driven by the four pointer callbacks ([`on_enter`](Self::on_enter),
/// [`on_exit`](Self::on_exit), [`on_down`](Self::on_down), [`on_up`](Self::on_up))
/// and the enabled flag, and publishes an [`InteractionState`] observable for views.
///
/// ```
/// use core::cell::Cell;
/// use std::rc::Rc;
/// use sun_button::{ButtonModel, ButtonOptions, InteractionState};
/// use sun_responder::pointer::PointerId;
///
/// let clicks = Rc::new(Cell::new(0));
/// let button = ButtonModel::new(ButtonOptions::default());
/// let counter = clicks.clone();
/// let _listener = button.on_fire(move || counter.set(counter.get() + 1));
///
/// let mouse = PointerId(0);
/// button.on_enter(mouse);
/// button.on_down(mouse);
/// assert_eq!(button.state(), InteractionState::Pressed);
/// button.on_up(mouse);
/// assert_eq!(clicks.get(), 1);
/// assert_eq!(button.state(), InteractionState::Over);
/// ```
pub struct ButtonModel {
    tracking: Rc<Tracking>,
    _enabled_link: Subscription,
}

impl fmt::Debug for ButtonModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonModel")
            .field("state", &self.state())
            .field("over", &self.tracking.over.get())
            .field("pressed_by", &self.tracking.pressed_by.get())
            .field("fire_on_down", &self.tracking.fire_on_down)
            .field("listeners", &self.tracking.listeners.listener_count())
            .finish()
    }
}

impl Default for ButtonModel {
    fn default() -> Self {
        Self::new(ButtonOptions::default())
    }
}

impl ButtonModel {
    /// Create a model. It starts `Idle`, or `Disabled` if the enabled property is `false`.
    pub fn new(options: ButtonOptions) -> Self {
        let enabled = options
            .enabled_property
            .unwrap_or_else(|| Property::new(true));
        let initial = InteractionState::from_flags(enabled.get(), false, false);
        let tracking = Rc::new(Tracking {
            enabled: enabled.clone(),
            over: Cell::new(None),
            pressed_by: Cell::new(None),
            fire_on_down: options.fire_on_down,
            listeners: Emitter::new(),
            state: Property::new(initial),
        });
        // Weak: the enabled property may be shared and outlive this model.
        let weak: Weak<Tracking> = Rc::downgrade(&tracking);
        let enabled_link = enabled.lazy_link(move |enabled, _| {
            if let Some(tracking) = weak.upgrade() {
                tracking.enabled_changed(*enabled);
            }
        });
        Self {
            tracking,
            _enabled_link: enabled_link,
        }
    }

    /// A pointer started hovering the button.
    pub fn on_enter(&self, pointer: PointerId) {
        let t = &self.tracking;
        if !t.enabled.get() {
            return;
        }
        if t.over.get().is_none() {
            t.over.set(Some(pointer));
        }
        t.recompute();
    }

    /// A pointer stopped hovering the button.
    pub fn on_exit(&self, pointer: PointerId) {
        let t = &self.tracking;
        if !t.enabled.get() {
            return;
        }
        if t.over.get() == Some(pointer) {
            t.over.set(None);
        }
        t.recompute();
    }

    /// A pointer was pressed on the button. Only the hovering pointer may press.
    pub fn on_down(&self, pointer: PointerId) {
        let t = &self.tracking;
        if !t.enabled.get() {
            return;
        }
        debug_assert_eq!(
            t.over.get(),
            Some(pointer),
            "{pointer:?} pressed a button it is not over"
        );
        if t.over.get() != Some(pointer) {
            tracing::warn!(?pointer, over = ?t.over.get(), "ignoring down from untracked pointer");
            return;
        }
        t.pressed_by.set(Some(pointer));
        if t.fire_on_down {
            t.fire();
        }
        t.recompute();
    }

    /// A pointer was released. Fires if it pressed the button and is still over it.
    pub fn on_up(&self, pointer: PointerId) {
        let t = &self.tracking;
        if !t.enabled.get() {
            return;
        }
        match t.pressed_by.get() {
            None => return,
            Some(pressing) if pressing != pointer => {
                debug_assert_eq!(
                    pressing, pointer,
                    "{pointer:?} released a button pressed by {pressing:?}"
                );
                tracing::warn!(?pointer, ?pressing, "ignoring up from untracked pointer");
                return;
            }
            Some(_) => {}
        }
        if !t.fire_on_down && t.over.get() == Some(pointer) {
            t.fire();
        }
        t.pressed_by.set(None);
        t.recompute();
    }

    /// Invoke every listener, in insertion order, from a snapshot of the list.
    pub fn fire(&self) {
        self.tracking.fire();
    }

    /// Register `listener`; no-op if already registered. Returns `true` if added.
    pub fn add_listener(&self, listener: &Listener<()>) -> bool {
        self.tracking.listeners.add_listener(listener)
    }

    /// Unregister `listener`; no-op if absent. Returns `true` if removed.
    pub fn remove_listener(&self, listener: &Listener<()>) -> bool {
        self.tracking.listeners.remove_listener(listener)
    }

    /// Whether `listener` is registered.
    pub fn has_listener(&self, listener: &Listener<()>) -> bool {
        self.tracking.listeners.has_listener(listener)
    }

    /// Register a closure and return its handle for later removal.
    pub fn on_fire(&self, f: impl Fn() + 'static) -> Listener<()> {
        let listener: Listener<()> = Rc::new(move |_| f());
        self.add_listener(&listener);
        listener
    }

    /// Whether the button accepts input.
    pub fn enabled(&self) -> bool {
        self.tracking.enabled.get()
    }

    /// Enable or disable the button.
    pub fn set_enabled(&self, enabled: bool) {
        self.tracking.enabled.set(enabled);
    }

    /// The enabled property, shared with whoever configured it.
    pub fn enabled_property(&self) -> &Property<bool> {
        &self.tracking.enabled
    }

    /// The observable interaction state, for views.
    pub fn interaction_state(&self) -> ReadOnlyProperty<InteractionState> {
        self.tracking.state.read_only()
    }

    /// The current interaction state.
    pub fn state(&self) -> InteractionState {
        self.tracking.state.get()
    }

    /// The pointer currently hovering the button.
    pub fn over_pointer(&self) -> Option<PointerId> {
        self.tracking.over.get()
    }

    /// Whether a pointer is hovering the button.
    pub fn is_over(&self) -> bool {
        self.tracking.over.get().is_some()
    }

    /// The pointer currently pressing the button.
    pub fn pressed_pointer(&self) -> Option<PointerId> {
        self.tracking.pressed_by.get()
    }

    /// Whether the button is pressed.
    pub fn is_pressed(&self) -> bool {
        self.tracking.pressed_by.get().is_some()
    }

    /// Whether this button fires on down rather than up.
    pub fn fire_on_down(&self) -> bool {
        self.tracking.fire_on_down
    }
}
