// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Nav: keyboard navigation inside composite widgets.
//!
//! Radio groups, tab lists, accordions, menus, and sliders all need the same few
//! pieces:
//!
//! - [`next_enabled`]: a circular search for the next item that isn't disabled. It
//!   visits each item at most once, so it terminates even when everything is disabled.
//! - [`NavIntent::from_key`]: arrow/Home/End keys mapped to intents, honoring
//!   [`Orientation`] and right-to-left [`TextDirection`].
//! - [`Registry`]: the live, insertion-ordered set of items a container owns.
//! - [`Roving`]: the focused item plus [`Activation`] policy (does moving focus also select?).
//! - [`TypeAhead`]: jump to an item by typing the start of its label.
//!
//! ## Minimal example
//!
//! ```rust
//! use tactile_modality::Key;
//! use tactile_nav::{Activation, Roving, RovingConfig};
//!
//! let mut group: Roving<&str, ()> = Roving::new(RovingConfig {
//!     activation: Activation::Automatic,
//!     ..RovingConfig::default()
//! });
//! for key in ["a", "b", "c", "d"] {
//!     group.registry_mut().register(key, ());
//! }
//! group.registry_mut().set_disabled(&"a", true);
//!
//! group.focus("d");
//! // Down from the last item wraps around and skips the disabled first one.
//! let step = group.on_key(Key::ArrowDown).unwrap();
//! assert_eq!(step.target, "b");
//! assert!(step.activate);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod navigate;
mod registry;
mod roving;
mod typeahead;

pub use navigate::{
    NavIntent, Navigable, Orientation, Step, TextDirection, WrapMode, first_enabled,
    last_enabled, next_enabled, next_enabled_by, resolve,
};
pub use registry::{Registry, RegistryEntry};
pub use roving::{Activation, Roving, RovingConfig, RovingMove};
pub use typeahead::{RESET_MS, SearchItem, TypeAhead};
