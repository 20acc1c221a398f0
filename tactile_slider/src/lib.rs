// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Slider: a headless slider engine.
//!
//! [`Slider`] models a track with one thumb, or two thumbs selecting a range. Hosts
//! report the track layout and forward pointer and key input; the slider answers with
//! [`SliderChange`]s for the consumer.
//!
//! - Pointer positions map linearly onto `[min, max]` (right-to-left and vertical tracks
//!   included), then floor to the [`SliderStep`] or snap to the nearest [`Stop`].
//! - The two thumbs never cross: each one is clamped to the other's value.
//! - Track and stop-label clicks move whichever thumb is closer, preferring the lower
//!   one on ties. Clicks right after a drag are ignored.
//! - Arrow keys step, `PageUp`/`PageDown` step ten times, `Home`/`End` jump to the
//!   thumb's bounds. Under snap stepping, keys move between stops.
//! - Every part carries a `data-slot` marker and an id derived from the root id, and
//!   each thumb takes its accessible name from a [`Label`](tactile_aria::Label).
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use tactile_slider::{Slider, SliderConfig, Thumb};
//!
//! let mut slider = Slider::new(
//!     SliderConfig::new(0.0, 100.0)
//!         .with_multi_thumb(true)
//!         .with_default_value(vec![10.0, 50.0]),
//! )
//! .unwrap();
//! slider.set_track(Rect::new(0.0, 0.0, 200.0, 20.0));
//!
//! // Dragging the lower thumb past the upper one stops at the upper one.
//! slider.pointer_down_thumb(Thumb::Infimum, None);
//! let change = slider.pointer_move(None, Point::new(160.0, 10.0)).unwrap();
//! assert_eq!(change.values.as_slice(), &[50.0, 50.0]);
//! slider.pointer_up(None, 1_000);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod math;
mod slider;

pub use config::{SliderConfig, SliderStep, Stop, Stops};
pub use error::SliderError;
pub use math::{Axis, floor_to_step, nearest_stop, percent, value_at};
pub use slider::{
    DRAG_CLICK_SUPPRESSION_MS, KeyResponse, PAGE_STEPS, RangeAria, Segment, Slider, SliderAria,
    SliderChange, Thumb, ThumbAria, ThumbInfo, ThumbLabel, TrackAria,
};
