// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction state snapshots and values derived from them.

use alloc::boxed::Box;
use core::fmt;

bitflags::bitflags! {
    /// Immutable snapshot of a control's interaction state.
    ///
    /// Hosts derive class names, labels, or any other presentation from this value.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct InteractionState: u16 {
        /// The pointer is over the control.
        const HOVERED       = 1 << 0;
        /// The control has focus.
        const FOCUSED       = 1 << 1;
        /// The control has focus and it should be visibly indicated.
        const FOCUS_VISIBLE = 1 << 2;
        /// The control is being pressed.
        const PRESSED       = 1 << 3;
        /// The control is disabled.
        const DISABLED      = 1 << 4;
        /// The control is checked.
        const CHECKED       = 1 << 5;
        /// The control is in a mixed state.
        const INDETERMINATE = 1 << 6;
        /// The control is the selected member of a composite.
        const SELECTED      = 1 << 7;
        /// The control's panel is expanded.
        const EXPANDED      = 1 << 8;
    }
}

/// A value that is either fixed or computed from an [`InteractionState`].
///
/// The derived form must be a pure function: it is evaluated during rendering and
/// must not feed back into widget state.
pub enum ByState<T> {
    /// The same value for every state.
    Static(T),
    /// A pure function of the state.
    Derived(Box<dyn Fn(InteractionState) -> T>),
}

impl<T: Clone> ByState<T> {
    /// Wrap a pure function of the interaction state.
    pub fn derived(f: impl Fn(InteractionState) -> T + 'static) -> Self {
        Self::Derived(Box::new(f))
    }

    /// Evaluate for `state`.
    pub fn resolve(&self, state: InteractionState) -> T {
        match self {
            Self::Static(value) => value.clone(),
            Self::Derived(f) => f(state),
        }
    }
}

impl<T> From<T> for ByState<T> {
    fn from(value: T) -> Self {
        Self::Static(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for ByState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(value) => f.debug_tuple("Static").field(value).finish(),
            Self::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}
