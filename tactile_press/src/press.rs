// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer press tracking for a single control.
//!
//! A press that starts on a control and is released over it activates the control.
//! Controls often move or resize while pressed (a pressed-state scale effect, a layout
//! shift), so a release just outside the control can still count, as long as the
//! pointer stayed within a small distance of where it went down and the release came
//! soon enough.
//!
//! ```
//! use kurbo::Point;
//! use tactile_press::{PressResult, PressTracker};
//!
//! let mut press = PressTracker::new();
//! press.on_down(None, Point::new(10.0, 10.0), 1000);
//! // Released over the control: always an activation.
//! assert_eq!(press.on_up(None, true, Point::new(40.0, 10.0), 1500), PressResult::Activate);
//! ```

use alloc::collections::BTreeMap;
use core::num::NonZeroU64;

use kurbo::Point;
use tactile_modality::PointerId;

const PRIMARY: PointerId = NonZeroU64::MIN;

/// Outcome of releasing a pointer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PressResult {
    /// The release completes a press and should activate the control.
    Activate,
    /// The release does not activate (no press, or outside tolerance).
    Suppressed,
}

#[derive(Copy, Clone, Debug)]
struct Press {
    down_position: Point,
    down_time: u64,
    distance_exceeded: bool,
}

/// Press state for one control.
#[derive(Clone, Debug)]
pub struct PressTracker {
    presses: BTreeMap<PointerId, Press>,
    /// Maximum pointer travel for a release outside the control to still activate.
    pub slop: Option<f64>,
    /// Maximum press duration (milliseconds) for a release outside the control to still activate.
    pub time_threshold: Option<u64>,
}

impl PressTracker {
    /// Create a tracker with a 5 px / 100 ms tolerance for releases outside the control.
    pub fn new() -> Self {
        Self::with_thresholds(Some(5.0), Some(100))
    }

    /// Create a tracker with custom tolerances; `None` disables that check.
    ///
    /// With both set to `None`, only releases over the control activate.
    pub fn with_thresholds(slop: Option<f64>, time_threshold: Option<u64>) -> Self {
        Self {
            presses: BTreeMap::new(),
            slop,
            time_threshold,
        }
    }

    /// Record a pointer going down on the control.
    pub fn on_down(&mut self, pointer: Option<PointerId>, position: Point, now: u64) {
        self.presses.insert(
            pointer.unwrap_or(PRIMARY),
            Press {
                down_position: position,
                down_time: now,
                distance_exceeded: false,
            },
        );
    }

    /// Record pointer movement. Returns `true` the first time the slop is exceeded.
    pub fn on_move(&mut self, pointer: Option<PointerId>, position: Point) -> bool {
        let Some(press) = self.presses.get_mut(&pointer.unwrap_or(PRIMARY)) else {
            return false;
        };
        match self.slop {
            Some(slop) if !press.distance_exceeded => {
                press.distance_exceeded = press.down_position.distance(position) > slop;
                press.distance_exceeded
            }
            _ => false,
        }
    }

    /// Record a pointer release; `inside` tells whether it happened over the control.
    pub fn on_up(
        &mut self,
        pointer: Option<PointerId>,
        inside: bool,
        position: Point,
        now: u64,
    ) -> PressResult {
        let Some(press) = self.presses.remove(&pointer.unwrap_or(PRIMARY)) else {
            return PressResult::Suppressed;
        };
        if inside {
            return PressResult::Activate;
        }
        if (self.slop.is_none() && self.time_threshold.is_none()) || press.distance_exceeded {
            return PressResult::Suppressed;
        }
        let distance_ok = self
            .slop
            .is_none_or(|slop| press.down_position.distance(position) <= slop);
        let time_ok = self
            .time_threshold
            .is_none_or(|t| now.saturating_sub(press.down_time) <= t);
        if distance_ok && time_ok {
            PressResult::Activate
        } else {
            PressResult::Suppressed
        }
    }

    /// Abandon the press of one pointer. Returns `true` if there was one.
    pub fn cancel(&mut self, pointer: Option<PointerId>) -> bool {
        self.presses.remove(&pointer.unwrap_or(PRIMARY)).is_some()
    }

    /// Abandon every press.
    pub fn clear(&mut self) {
        self.presses.clear();
    }

    /// Returns `true` while any pointer is pressing the control.
    pub fn is_pressed(&self) -> bool {
        !self.presses.is_empty()
    }
}

impl Default for PressTracker {
    fn default() -> Self {
        Self::new()
    }
}
