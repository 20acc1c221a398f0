// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Value: state plumbing shared by every headless widget.
//!
//! - [`ControlledValue`] unifies host-owned and widget-owned values behind one change path.
//! - [`IdGenerator`] hands out deterministic ids for elements that reference each other.
//! - [`InteractionState`] and [`ByState`] let hosts compute presentation from an
//!   immutable snapshot of a control's state.
//!
//! ```rust
//! use tactile_value::{ByState, ControlledValue, InteractionState};
//!
//! let mut checked = ControlledValue::new(None, None, false);
//! assert_eq!(checked.set(true), Some(true));
//!
//! let class = ByState::derived(|s: InteractionState| s.contains(InteractionState::CHECKED));
//! let mut state = InteractionState::empty();
//! state.set(InteractionState::CHECKED, *checked.get());
//! assert!(class.resolve(state));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controlled;
mod id;
mod state;

pub use controlled::{ControlledValue, Ownership};
pub use id::IdGenerator;
pub use state::{ByState, InteractionState};
