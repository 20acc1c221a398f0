// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Modality: which device is driving the UI, and whether focus should show.
//!
//! - [`Key`] and [`Modifiers`] describe keyboard input in a toolkit-neutral way.
//! - [`ModalitySource`] is the read-only "last input modality" signal. Use
//!   [`ModalityRoot`] + [`GlobalModality`] for a process-wide signal, or
//!   [`LocalModality`] for one owned by a single UI.
//! - [`FocusVisible`] decides, per element, whether focus came from the keyboard and
//!   should be drawn with a focus ring.
//!
//! ```rust
//! use tactile_modality::{FocusVisible, Key, LocalModality, Modifiers, PointerKind};
//!
//! let modality = LocalModality::new();
//! let mut button = FocusVisible::new();
//!
//! modality.pointer_down(PointerKind::Mouse);
//! assert!(!button.on_focus(&modality));
//! button.on_blur();
//!
//! modality.key_down(Key::Tab, Modifiers::empty());
//! assert!(button.on_focus(&modality));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod focus_visible;
mod key;
mod modality;

pub use focus_visible::FocusVisible;
pub use key::{Key, Modifiers};
pub use modality::{
    GlobalModality, LocalModality, Modality, ModalityRoot, ModalitySource, PointerId, PointerKind,
};
