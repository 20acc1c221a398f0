// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Press: activation for custom controls.
//!
//! ## Buttons
//!
//! [`Button`] turns pointer presses and Space/Enter into one activation path,
//! [`Button::click`]. Space and Enter are intercepted on key-down (so the page doesn't
//! scroll or a form doesn't submit) and activate on key-up. Disabled buttons swallow
//! input and never activate. [`PressTracker`] decides whether a pointer release
//! completes a press, tolerating small movements of the control during the press.
//!
//! ## Check controls
//!
//! [`Check`] layers toggle semantics on a button:
//! - [`ControlStrategy::Checkbox`] flips on every activation,
//! - [`ControlStrategy::Radio`] only checks (unless `toggle` is set),
//! - [`EnterKey`] picks between native checkbox Enter (submit) and toggling.
//!
//! Groups pass a [`GroupController`] into every call; [`RadioGroupValue`] and
//! [`CheckGroupValue`] are the two stock controllers. Radios in a group also get
//! arrow-key roving that skips disabled siblings.
//!
//! ```rust
//! use tactile_press::{Check, CheckConfig, CheckGroupValue};
//!
//! let mut group: CheckGroupValue<&str> = CheckGroupValue::new(None, None);
//! let mut items: Vec<Check<&str>> = ["0", "1", "2", "3"]
//!     .into_iter()
//!     .map(|k| Check::new(k, CheckConfig::default(), None, None))
//!     .collect();
//! for item in &mut items {
//!     item.mount();
//! }
//!
//! items[0].click(Some(&mut group));
//! items[3].click(Some(&mut group));
//! assert_eq!(group.value(), &["0", "3"]);
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

mod button;
mod check;
mod group;
mod press;

pub use button::{Button, ButtonConfig, FocusRequest, Response};
pub use check::{Check, CheckConfig, CheckResponse, ControlStrategy, EnterKey};
pub use group::{CheckGroupValue, GroupController, RadioGroupValue};
pub use press::{PressResult, PressTracker};
pub use tactile_modality::PointerId;
