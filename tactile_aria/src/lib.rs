// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile ARIA: the accessibility contract shared by headless widgets.
//!
//! - [`Relationships`] links parts that live apart in the tree (a tab and its panel,
//!   a label and its control) by id, keyed by the logical item they belong to.
//! - [`Slot`] names the part an element plays (`data-slot`), [`Role`] its ARIA role.
//! - [`Label`] is the accessible name of a control, given in exactly one shape.
//!
//! ```rust
//! use tactile_aria::{Part, Relationships};
//!
//! let mut links = Relationships::new();
//! links.attach("details", Part::Trigger, "tactile-1");
//! links.attach("details", Part::Panel, "tactile-2");
//! assert_eq!(links.aria_controls(&"details"), Some("tactile-2"));
//! assert_eq!(links.panel_labelled_by(&"details"), Some("tactile-1"));
//!
//! // The panel remounts with a new id.
//! links.detach(&"details", Part::Panel);
//! links.attach("details", Part::Panel, "tactile-7");
//! assert_eq!(links.aria_controls(&"details"), Some("tactile-7"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod label;
mod relationships;
mod slot;

pub use label::{Label, LabelError};
pub use relationships::{Links, Part, Relationships};
pub use slot::{Role, Slot};
