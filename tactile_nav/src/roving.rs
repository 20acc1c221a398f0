// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Roving focus for composite widgets (radio groups, tab lists, menus).

use core::hash::Hash;

use tactile_modality::Key;

use crate::navigate::{NavIntent, Orientation, TextDirection, WrapMode};
use crate::registry::Registry;

/// Whether moving focus to an item also activates it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Activation {
    /// Focus and selection move together.
    #[default]
    Automatic,
    /// Focus moves alone; Space/Enter activates.
    Manual,
}

/// Layout and behavior of a roving composite.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RovingConfig {
    /// Which arrows move focus.
    pub orientation: Orientation,
    /// Writing direction.
    pub direction: TextDirection,
    /// Edge behavior.
    pub wrap: WrapMode,
    /// Whether focus moves activate.
    pub activation: Activation,
}

/// A focus move requested by a key press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RovingMove<K> {
    /// Item that should receive focus.
    pub target: K,
    /// Whether the host should also activate (click) the target.
    pub activate: bool,
}

/// Tracks the focused item of a composite over its live [`Registry`].
#[derive(Clone, Debug)]
pub struct Roving<K, Id> {
    registry: Registry<K, Id>,
    config: RovingConfig,
    focused: Option<K>,
}

impl<K: Clone + Eq + Hash, Id> Roving<K, Id> {
    /// Create an empty composite.
    pub fn new(config: RovingConfig) -> Self {
        Self {
            registry: Registry::new(),
            config,
            focused: None,
        }
    }

    /// The configuration.
    pub fn config(&self) -> &RovingConfig {
        &self.config
    }

    /// Replace the configuration.
    pub fn set_config(&mut self, config: RovingConfig) {
        self.config = config;
    }

    /// The item registry.
    pub fn registry(&self) -> &Registry<K, Id> {
        &self.registry
    }

    /// Mutable access to the item registry.
    ///
    /// If the focused item is unregistered, focus is forgotten.
    pub fn registry_mut(&mut self) -> &mut Registry<K, Id> {
        &mut self.registry
    }

    /// The item that currently has focus, if it is still registered.
    pub fn focused(&self) -> Option<&K> {
        self.focused.as_ref().filter(|k| self.registry.contains(k))
    }

    /// Record that `key` received focus (by pointer, key, or code).
    pub fn focus(&mut self, key: K) {
        self.focused = Some(key);
    }

    /// Record that focus left the composite.
    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Handle a key press on the focused item.
    ///
    /// Returns the move to perform, or `None` if the key isn't a navigation key for
    /// this layout or there is nowhere to go.
    pub fn on_key(&mut self, key: Key) -> Option<RovingMove<K>> {
        let intent = NavIntent::from_key(key, self.config.orientation, self.config.direction)?;
        let target = self
            .registry
            .navigate(self.focused(), intent, self.config.wrap)?
            .clone();
        if self.focused() == Some(&target) {
            return None;
        }
        self.focused = Some(target.clone());
        Some(RovingMove {
            target,
            activate: self.config.activation == Activation::Automatic,
        })
    }

    /// The single item that should be reachable with Tab (`tabindex=0`).
    ///
    /// That is the `selected` item when it is enabled, else the focused item, else the
    /// first enabled item.
    pub fn tab_stop<'a>(&'a self, selected: Option<&'a K>) -> Option<&'a K> {
        selected
            .filter(|k| self.registry.is_enabled(k))
            .or_else(|| self.focused().filter(|k| self.registry.is_enabled(k)))
            .or_else(|| self.registry.first_enabled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radios(activation: Activation) -> Roving<u8, ()> {
        let mut r = Roving::new(RovingConfig {
            activation,
            ..RovingConfig::default()
        });
        for k in 0..4 {
            r.registry_mut().register(k, ());
        }
        r.registry_mut().set_disabled(&0, true);
        r
    }

    #[test]
    fn automatic_activation_moves_and_activates() {
        let mut r = radios(Activation::Automatic);
        r.focus(1);
        assert_eq!(
            r.on_key(Key::ArrowDown),
            Some(RovingMove {
                target: 2,
                activate: true
            })
        );
        assert_eq!(r.focused(), Some(&2));
        r.focus(3);
        assert_eq!(r.on_key(Key::ArrowRight).map(|m| m.target), Some(1));
    }

    #[test]
    fn manual_activation_only_moves() {
        let mut r = radios(Activation::Manual);
        r.focus(2);
        let m = r.on_key(Key::ArrowUp).expect("previous enabled radio");
        assert_eq!(m.target, 1);
        assert!(!m.activate);
    }

    #[test]
    fn non_navigation_keys_are_ignored() {
        let mut r = radios(Activation::Automatic);
        r.focus(1);
        assert_eq!(r.on_key(Key::Space), None);
        assert_eq!(r.on_key(Key::Char('x')), None);
        // Home on the first enabled item goes nowhere.
        assert_eq!(r.on_key(Key::Home), None);
    }

    #[test]
    fn tab_stop_prefers_selected_then_focus_then_first() {
        let mut r = radios(Activation::Automatic);
        assert_eq!(r.tab_stop(None), Some(&1));
        assert_eq!(r.tab_stop(Some(&0)), Some(&1));
        r.focus(3);
        assert_eq!(r.tab_stop(None), Some(&3));
        assert_eq!(r.tab_stop(Some(&2)), Some(&2));
    }
}
