// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reconciliation of host-owned ("controlled") and widget-owned ("uncontrolled") values.
//!
//! A [`ControlledValue`] decides its [`Ownership`] once, at construction, and keeps it
//! for the lifetime of the widget instance. Every accepted change goes through
//! [`ControlledValue::set`], which is the single place that decides whether the
//! consumer's change callback should fire.
//!
//! ```
//! use tactile_value::{ControlledValue, Ownership};
//!
//! // Uncontrolled: seeded by the default, mutated by interaction.
//! let mut open = ControlledValue::new(None, Some(true), false);
//! assert_eq!(open.ownership(), Ownership::Uncontrolled);
//! assert_eq!(open.set(false), Some(false));
//! assert!(!*open.get());
//!
//! // Controlled: the host has the final word on every render.
//! let mut selected = ControlledValue::new(Some(3_u32), None, 0);
//! assert_eq!(selected.set(4), Some(4));
//! selected.sync(Some(3));
//! assert_eq!(*selected.get(), 3);
//! ```

use log::{debug, warn};

/// Which side owns a [`ControlledValue`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Ownership {
    /// The host application supplies the value on every render.
    Controlled,
    /// The widget instance owns the value, seeded by a default.
    Uncontrolled,
}

/// A widget value that is either host-owned or widget-owned.
///
/// Ownership never changes after construction. Switching modes across renders is
/// reported once with a warning and otherwise ignored; see [`ControlledValue::sync`].
#[derive(Clone, Debug)]
pub struct ControlledValue<T> {
    ownership: Ownership,
    value: T,
    /// Set once a mode switch has been reported for this instance.
    warned: bool,
}

impl<T: Clone + PartialEq> ControlledValue<T> {
    /// Establish the initial value.
    ///
    /// A `controlled` value wins and makes the value host-owned. Otherwise
    /// `default` (or `hard_default` when absent) seeds widget-owned state.
    pub fn new(controlled: Option<T>, default: Option<T>, hard_default: T) -> Self {
        match controlled {
            Some(value) => Self::controlled(value),
            None => Self::uncontrolled(default.unwrap_or(hard_default)),
        }
    }

    /// Create a host-owned value.
    pub fn controlled(value: T) -> Self {
        Self {
            ownership: Ownership::Controlled,
            value,
            warned: false,
        }
    }

    /// Create a widget-owned value seeded with `default`.
    pub fn uncontrolled(default: T) -> Self {
        Self {
            ownership: Ownership::Uncontrolled,
            value: default,
            warned: false,
        }
    }

    /// The value the widget should currently reflect.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Which side owns this value.
    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    /// Returns `true` if the host owns this value.
    pub fn is_controlled(&self) -> bool {
        self.ownership == Ownership::Controlled
    }

    /// Accept a change produced by interaction.
    ///
    /// Returns `Some(next)` when the value actually changed and the consumer should be
    /// notified, `None` otherwise. For controlled values the change is held locally
    /// until the next [`sync`](Self::sync), which may overwrite it.
    pub fn set(&mut self, next: T) -> Option<T> {
        if self.value == next {
            return None;
        }
        self.value = next.clone();
        Some(next)
    }

    /// Derive the next value from the current one and [`set`](Self::set) it.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) -> Option<T> {
        let next = f(&self.value);
        self.set(next)
    }

    /// Reconcile with the value the host supplied for this render.
    ///
    /// - Controlled + `Some(v)`: adopts `v`, discarding any local echo.
    /// - Uncontrolled + `None`: nothing to do.
    /// - Any other combination is a mode switch: warned about once, then ignored.
    pub fn sync(&mut self, controlled: Option<T>) {
        match (self.ownership, controlled) {
            (Ownership::Controlled, Some(value)) => {
                if self.value != value {
                    debug!("host value replaced a local echo");
                }
                self.value = value;
            }
            (Ownership::Uncontrolled, None) => {}
            (Ownership::Controlled, None) => self.warn_switch("controlled", "uncontrolled"),
            (Ownership::Uncontrolled, Some(_)) => self.warn_switch("uncontrolled", "controlled"),
        }
    }

    fn warn_switch(&mut self, from: &str, to: &str) {
        if !self.warned {
            self.warned = true;
            warn!("a widget value switched from {from} to {to}; keeping it {from}");
        }
    }
}
