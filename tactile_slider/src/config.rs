// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider configuration.

use alloc::string::String;
use alloc::vec::Vec;

use tactile_aria::Label;
use tactile_nav::TextDirection;

use crate::error::SliderError;
use crate::math::Axis;

/// How values are quantized.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SliderStep {
    /// Values are floored to multiples of this step, counted from `min`.
    Value(f64),
    /// Values snap to the nearest configured stop.
    Snap,
}

impl Default for SliderStep {
    fn default() -> Self {
        Self::Value(1.0)
    }
}

/// A labelled point on the track.
#[derive(Clone, Debug, PartialEq)]
pub struct Stop {
    /// Value of the stop.
    pub value: f64,
    /// Text shown under the stop, also used as `aria-valuetext`.
    pub label: Option<String>,
}

impl Stop {
    /// An unlabelled stop.
    pub fn new(value: f64) -> Self {
        Self { value, label: None }
    }

    /// A labelled stop.
    pub fn labelled(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: Some(label.into()),
        }
    }
}

/// Where the stops of a slider are.
#[derive(Clone, Debug, PartialEq)]
pub enum Stops {
    /// `n` stops spread evenly from `min` to `max`, both included.
    Count(usize),
    /// Explicit stops.
    List(Vec<Stop>),
}

/// Construction parameters of a [`Slider`](crate::Slider).
#[derive(Clone, Debug, PartialEq)]
pub struct SliderConfig {
    /// Lower bound of the range.
    pub min: f64,
    /// Upper bound of the range.
    pub max: f64,
    /// Quantization of pointer and keyboard input.
    pub step: SliderStep,
    /// Optional stops, required for [`SliderStep::Snap`].
    pub stops: Option<Stops>,
    /// Two thumbs selecting a range instead of one selecting a value.
    pub multi_thumb: bool,
    /// Host-controlled values, one per thumb.
    pub value: Option<Vec<f64>>,
    /// Initial values of an uncontrolled slider, one per thumb.
    pub default_value: Option<Vec<f64>>,
    /// Accessible names of the thumbs; empty, or one per thumb.
    pub labels: Vec<Label>,
    /// Host id of the slider root; thumb and track ids derive from it.
    pub id: Option<String>,
    /// Track axis.
    pub axis: Axis,
    /// Layout direction; flips horizontal tracks.
    pub direction: TextDirection,
    /// Disabled sliders ignore all input.
    pub disabled: bool,
}

impl SliderConfig {
    /// A single-thumb slider over `[min, max]` with a step of 1.
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: SliderStep::default(),
            stops: None,
            multi_thumb: false,
            value: None,
            default_value: None,
            labels: Vec::new(),
            id: None,
            axis: Axis::default(),
            direction: TextDirection::default(),
            disabled: false,
        }
    }

    /// Set the step.
    pub fn with_step(mut self, step: SliderStep) -> Self {
        self.step = step;
        self
    }

    /// Set the stops.
    pub fn with_stops(mut self, stops: Stops) -> Self {
        self.stops = Some(stops);
        self
    }

    /// Use two thumbs.
    pub fn with_multi_thumb(mut self, multi_thumb: bool) -> Self {
        self.multi_thumb = multi_thumb;
        self
    }

    /// Make the slider host-controlled.
    pub fn with_value(mut self, value: Vec<f64>) -> Self {
        self.value = Some(value);
        self
    }

    /// Seed an uncontrolled slider.
    pub fn with_default_value(mut self, value: Vec<f64>) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Name the thumbs.
    pub fn with_labels(mut self, labels: Vec<Label>) -> Self {
        self.labels = labels;
        self
    }

    /// Name the next thumb from optional label shapes, exactly one of which must be given.
    pub fn with_label_parts(
        mut self,
        visible: Option<String>,
        screen_reader: Option<String>,
        labelled_by: Option<String>,
    ) -> Result<Self, SliderError> {
        self.labels.push(Label::from_parts(visible, screen_reader, labelled_by)?);
        Ok(self)
    }

    /// Use a host-supplied id for the root.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the track axis.
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Set the layout direction.
    pub fn with_direction(mut self, direction: TextDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Disable the slider.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Number of thumbs this configuration describes.
    pub fn thumb_count(&self) -> usize {
        if self.multi_thumb { 2 } else { 1 }
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self::new(0.0, 100.0)
    }
}
