// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Widgets: headless state models for accessible widgets.
//!
//! Each widget is a plain state machine composed from the Tactile primitives. The
//! host renders whatever it likes, forwards input events, and applies the returned
//! responses (`prevent_default`, focus moves, value changes) and attribute snapshots.
//!
//! - [`Checkbox`] covers checkboxes and switches.
//! - [`RadioGroup`] and [`CheckGroup`] own a group value and thread it to their items.
//! - [`TabGroup`], [`Expandable`], and [`Accordion`] link triggers to panels.
//! - [`Menu`] is a menu button with roving focus and type-ahead.
//! - [`Breadcrumb`] validates a trail, [`Toast`] runs an auto-dismiss timer.
//!
//! Composites own an [`IdGenerator`](tactile_value::IdGenerator) or an id prefix and
//! a relationship table, so `aria-controls` and `aria-labelledby` are available as
//! soon as both parts are mounted. Looking up an item a composite doesn't own logs an
//! error and yields nothing.
//!
//! ```rust
//! use tactile_modality::{Key, LocalModality, Modifiers};
//! use tactile_value::IdGenerator;
//! use tactile_widgets::{RadioGroup, RadioGroupConfig};
//!
//! let modality = LocalModality::new();
//! let mut ids = IdGenerator::new("form");
//! let mut size = RadioGroup::new(RadioGroupConfig::new("Size"), &mut ids);
//! size.add("s", true);
//! size.add("m", false);
//! size.add("l", false);
//!
//! modality.key_down(Key::ArrowDown, Modifiers::empty());
//! size.focus(&"m", &modality);
//! let out = size.key_down(&"m", Key::ArrowDown, &modality);
//! assert_eq!(out.focus, Some("l"));
//! assert_eq!(out.changed, Some(Some("l")));
//!
//! // Wraps around, skipping the disabled first item.
//! let out = size.key_down(&"l", Key::ArrowDown, &modality);
//! assert_eq!(out.focus, Some("m"));
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

mod accordion;
mod breadcrumb;
mod check_group;
mod checkbox;
mod context;
mod expandable;
mod menu;
mod parts;
mod radio_group;
mod tabs;
mod toast;

pub use accordion::{Accordion, AccordionConfig, AccordionResponse};
pub use breadcrumb::{Breadcrumb, BreadcrumbAria, BreadcrumbChild, BreadcrumbPart, Crumb};
pub use check_group::CheckGroup;
pub use checkbox::{Checkbox, CheckboxConfig, ToggleAria, ToggleKind};
pub use expandable::{ExpandEvent, ExpandResponse, Expandable, ExpandableConfig};
pub use menu::{Menu, MenuConfig, MenuFocus, MenuResponse, MenuTarget};
pub use parts::{GroupAria, ItemAria, PanelAria, TriggerAria};
pub use radio_group::{RadioGroup, RadioGroupConfig, RadioResponse};
pub use tabs::{TabGroup, TabGroupConfig, TabResponse};
pub use toast::{DEFAULT_DURATION_MS, Toast, ToastAria, ToastConfig, Urgency};
