// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tactile_aria::LabelError;
use thiserror::Error;

/// Invalid slider configuration.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SliderError {
    /// `min` or `max` is NaN or infinite.
    #[error("slider bounds must be finite, got min={min} max={max}")]
    NonFiniteBounds {
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },
    /// `max < min`.
    #[error("slider max ({max}) is less than min ({min})")]
    InvertedBounds {
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },
    /// A numeric step that is zero, negative, or not finite.
    #[error("slider step must be a positive finite number, got {0}")]
    InvalidStep(f64),
    /// Snap stepping was requested but no usable stops were configured.
    #[error("snap stepping requires at least one stop within the slider range")]
    SnapWithoutStops,
    /// The number of values does not match the thumb count.
    #[error("expected {expected} slider value(s), got {found}")]
    ValueArity {
        /// Values a slider with this thumb count takes.
        expected: usize,
        /// Values supplied.
        found: usize,
    },
    /// The number of thumb labels does not match the thumb count.
    #[error("expected {expected} thumb label(s), got {found}")]
    LabelArity {
        /// Labels a slider with this thumb count takes.
        expected: usize,
        /// Labels supplied.
        found: usize,
    },
    /// A thumb label was given in more than one shape, or in none.
    #[error("invalid thumb label: {0}")]
    Label(#[from] LabelError),
    /// A value pair with the lower value above the upper one, and no earlier valid pair
    /// to fall back to.
    #[error("slider values are out of order: {lower} > {upper}")]
    InvalidValuePair {
        /// Supplied value of the lower thumb.
        lower: f64,
        /// Supplied value of the upper thumb.
        upper: f64,
    },
}
