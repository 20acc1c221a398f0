// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure value/coordinate math for sliders.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect};
use tactile_nav::TextDirection;

/// Slider track axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// `min` on the leading edge (left in LTR, right in RTL).
    #[default]
    Horizontal,
    /// `min` at the bottom.
    Vertical,
}

/// Tolerance for floating-point error when flooring to a step.
pub(crate) const STEP_EPSILON: f64 = 1e-9;

/// Map a pointer position over `track` to a value in `[min, max]`.
///
/// The position is made track-relative and clamped to the track extent first, so
/// positions outside the track land on `min` or `max`.
pub fn value_at(
    position: Point,
    track: Rect,
    axis: Axis,
    direction: TextDirection,
    min: f64,
    max: f64,
) -> f64 {
    let (offset, extent) = match axis {
        Axis::Horizontal => (position.x - track.x0, track.width()),
        Axis::Vertical => (track.y1 - position.y, track.height()),
    };
    if !(extent > 0.0) {
        return min;
    }
    let mut ratio = offset.clamp(0.0, extent) / extent;
    if axis == Axis::Horizontal && direction == TextDirection::Rtl {
        ratio = 1.0 - ratio;
    }
    min + ratio * (max - min)
}

/// Position of `value` along `[min, max]` as a percentage of the track.
pub fn percent(value: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    if !(range > 0.0) {
        return 0.0;
    }
    ((value - min) / range * 100.0).clamp(0.0, 100.0)
}

/// Floor `value` to a multiple of `step` counted from `min`, staying within `[min, max]`.
pub fn floor_to_step(value: f64, step: f64, min: f64, max: f64) -> f64 {
    if !(step > 0.0) {
        return value.clamp(min, max);
    }
    let steps = ((value - min) / step + STEP_EPSILON).floor();
    (min + steps * step).clamp(min, max)
}

/// Index of the stop nearest to `target` in ascending `stops`.
///
/// Starts at the middle stop and walks towards `target` while the distance keeps
/// shrinking, so only the stops between the middle and the answer are visited.
pub fn nearest_stop(stops: &[f64], target: f64) -> Option<usize> {
    if stops.is_empty() {
        return None;
    }
    let distance = |i: usize| (stops[i] - target).abs();
    let mut i = stops.len() / 2;
    if stops[i] < target {
        while i + 1 < stops.len() && distance(i + 1) < distance(i) {
            i += 1;
        }
    } else {
        while i > 0 && distance(i - 1) < distance(i) {
            i -= 1;
        }
    }
    Some(i)
}
