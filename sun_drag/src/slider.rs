// Copyright 2025 the Sun Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider thumb dragging.
//!
//! A [`SliderModel`] maps a horizontal track onto a numeric range and updates a
//! value property while its thumb is dragged. Each drag sample is mapped to a value,
//! passed through the optional `constrain` function (for snapping), clamped to the
//! enabled range, and stored. The pointer keeps its initial offset from the thumb
//! center, so grabbing the thumb off-center does not make it jump.

use alloc::rc::Rc;
use core::cell::Cell;
use core::fmt;

use sun_property::Property;
use sun_responder::pointer::{PointerEvent, PointerId};

/// Why a slider range or model was rejected.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SliderError {
    /// A bound is NaN or infinite.
    #[error("slider range bounds must be finite, got {min}..={max}")]
    NonFinite {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// `min > max`.
    #[error("slider range is inverted: {min} > {max}")]
    Inverted {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// The enabled range is not contained in the slider range.
    #[error("enabled range {min}..={max} lies outside the slider range")]
    EnabledOutsideRange {
        /// Lower bound of the enabled range.
        min: f64,
        /// Upper bound of the enabled range.
        max: f64,
    },
    /// The track has no usable length.
    #[error("slider track length must be positive and finite, got {0}")]
    TrackLength(f64),
}

/// A closed numeric interval.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SliderRange {
    min: f64,
    max: f64,
}

impl SliderRange {
    /// Validate and create `min..=max`.
    pub fn new(min: f64, max: f64) -> Result<Self, SliderError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(SliderError::NonFinite { min, max });
        }
        if min > max {
            return Err(SliderError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// `max - min`.
    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    /// Clamp `value` into the range.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Whether `other` lies within this range.
    pub fn contains_range(&self, other: &Self) -> bool {
        other.min >= self.min && other.max <= self.max
    }
}

/// Configuration for a [`SliderModel`].
#[derive(Clone)]
pub struct SliderOptions {
    /// Narrower range the value may take; defaults to the full range.
    pub enabled_range: Option<SliderRange>,
    /// Track start, in the pointer's coordinate space.
    pub track_origin: f64,
    /// Track length, in the pointer's coordinate space.
    pub track_length: f64,
    /// Applied to every dragged value before clamping, e.g. to snap to integers.
    pub constrain: Option<Rc<dyn Fn(f64) -> f64>>,
    /// Shared enabled flag; a fresh `true` property when `None`.
    pub enabled_property: Option<Property<bool>>,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            enabled_range: None,
            track_origin: 0.0,
            track_length: 100.0,
            constrain: None,
            enabled_property: None,
        }
    }
}

impl fmt::Debug for SliderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderOptions")
            .field("enabled_range", &self.enabled_range)
            .field("track_origin", &self.track_origin)
            .field("track_length", &self.track_length)
            .field("constrain", &self.constrain.is_some())
            .field("enabled_property", &self.enabled_property)
            .finish()
    }
}

impl SliderOptions {
    /// Place the track.
    #[must_use]
    pub fn with_track(mut self, origin: f64, length: f64) -> Self {
        self.track_origin = origin;
        self.track_length = length;
        self
    }

    /// Restrict the values the thumb can reach.
    #[must_use]
    pub fn with_enabled_range(mut self, range: SliderRange) -> Self {
        self.enabled_range = Some(range);
        self
    }

    /// Snap or otherwise adjust dragged values.
    #[must_use]
    pub fn with_constrain(mut self, constrain: impl Fn(f64) -> f64 + 'static) -> Self {
        self.constrain = Some(Rc::new(constrain));
        self
    }

    /// Share an enabled property.
    #[must_use]
    pub fn with_enabled_property(mut self, enabled: Property<bool>) -> Self {
        self.enabled_property = Some(enabled);
        self
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct ThumbDrag {
    pointer: PointerId,
    offset: f64,
}

/// A horizontal slider's value and thumb-drag state.
pub struct SliderModel {
    value: Property<f64>,
    range: SliderRange,
    enabled_range: Cell<SliderRange>,
    enabled: Property<bool>,
    track_origin: f64,
    track_length: f64,
    constrain: Option<Rc<dyn Fn(f64) -> f64>>,
    drag: Cell<Option<ThumbDrag>>,
}

impl fmt::Debug for SliderModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderModel")
            .field("value", &self.value.get())
            .field("range", &self.range)
            .field("enabled_range", &self.enabled_range.get())
            .field("dragging", &self.drag.get().is_some())
            .finish_non_exhaustive()
    }
}

impl SliderModel {
    /// Create a slider over `value`. The value is clamped into the enabled range.
    pub fn new(
        value: Property<f64>,
        range: SliderRange,
        options: SliderOptions,
    ) -> Result<Self, SliderError> {
        if !(options.track_length.is_finite() && options.track_length > 0.0) {
            return Err(SliderError::TrackLength(options.track_length));
        }
        let enabled_range = options.enabled_range.unwrap_or(range);
        if !range.contains_range(&enabled_range) {
            return Err(SliderError::EnabledOutsideRange {
                min: enabled_range.min,
                max: enabled_range.max,
            });
        }
        let model = Self {
            value,
            range,
            enabled_range: Cell::new(enabled_range),
            enabled: options
                .enabled_property
                .unwrap_or_else(|| Property::new(true)),
            track_origin: options.track_origin,
            track_length: options.track_length,
            constrain: options.constrain,
            drag: Cell::new(None),
        };
        model.clamp_value();
        Ok(model)
    }

    /// The value property.
    pub fn value(&self) -> &Property<f64> {
        &self.value
    }

    /// The full range.
    pub fn range(&self) -> SliderRange {
        self.range
    }

    /// The range the thumb can currently reach.
    pub fn enabled_range(&self) -> SliderRange {
        self.enabled_range.get()
    }

    /// Narrow or widen the reachable range, clamping the value into it.
    pub fn set_enabled_range(&self, enabled_range: SliderRange) -> Result<(), SliderError> {
        if !self.range.contains_range(&enabled_range) {
            return Err(SliderError::EnabledOutsideRange {
                min: enabled_range.min,
                max: enabled_range.max,
            });
        }
        self.enabled_range.set(enabled_range);
        self.clamp_value();
        Ok(())
    }

    /// The enabled property.
    pub fn enabled_property(&self) -> &Property<bool> {
        &self.enabled
    }

    /// Whether a thumb drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.get().is_some()
    }

    /// Track position of `value`.
    pub fn value_to_position(&self, value: f64) -> f64 {
        let span = self.range.length();
        if span == 0.0 {
            return self.track_origin;
        }
        self.track_origin + (value - self.range.min) / span * self.track_length
    }

    /// Value at track position `x`, unclamped.
    pub fn position_to_value(&self, x: f64) -> f64 {
        self.range.min + (x - self.track_origin) / self.track_length * self.range.length()
    }

    /// Where the thumb center sits on the track.
    pub fn thumb_position(&self) -> f64 {
        self.value_to_position(self.value.get())
    }

    /// Begin dragging the thumb. Returns `false` if disabled or already dragging.
    pub fn start_drag(&self, event: &PointerEvent) -> bool {
        if !self.enabled.get() || self.drag.get().is_some() {
            return false;
        }
        self.drag.set(Some(ThumbDrag {
            pointer: event.pointer,
            offset: self.thumb_position() - event.position.x,
        }));
        tracing::debug!(pointer = ?event.pointer, "slider drag started");
        true
    }

    /// Move the thumb with the dragging pointer. Other pointers are ignored.
    pub fn drag(&self, event: &PointerEvent) {
        let Some(drag) = self.drag.get() else {
            return;
        };
        if drag.pointer != event.pointer {
            return;
        }
        if !self.enabled.get() {
            self.drag.set(None);
            return;
        }
        self.set_from_position(event.position.x + drag.offset);
    }

    /// Finish the drag started by `event`'s pointer.
    pub fn end_drag(&self, event: &PointerEvent) {
        if self
            .drag
            .get()
            .is_some_and(|d| d.pointer == event.pointer)
        {
            self.drag.set(None);
            tracing::trace!(pointer = ?event.pointer, "slider drag ended");
        }
    }

    /// Jump the value to a click on the track.
    pub fn click_track(&self, event: &PointerEvent) {
        if self.enabled.get() {
            self.set_from_position(event.position.x);
        }
    }

    fn set_from_position(&self, x: f64) {
        let mut value = self.position_to_value(x);
        if let Some(constrain) = &self.constrain {
            value = constrain(value);
        }
        if value.is_nan() {
            tracing::warn!("ignoring NaN slider value");
            return;
        }
        self.value.set(self.enabled_range.get().clamp(value));
    }

    fn clamp_value(&self) {
        let clamped = self.enabled_range.get().clamp(self.value.get());
        self.value.set(clamped);
    }
}
