// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared state for groups of check controls.
//!
//! A group container creates one controller and passes it explicitly to each of its
//! items' [`Check`](crate::Check) calls. Nothing is looked up implicitly.

use alloc::vec::Vec;
use core::hash::Hash;

use tactile_modality::Key;
use tactile_nav::{Registry, Roving, RovingConfig, RovingMove};
use tactile_value::ControlledValue;

/// Capability object shared by the items of a check or radio group.
pub trait GroupController<K> {
    /// Returns `true` if the item `key` is checked according to the group value.
    fn is_checked(&self, key: &K) -> bool;

    /// An item asks to become checked or unchecked.
    fn on_change(&mut self, key: &K, checked: bool);

    /// An item mounted (or re-mounted with a new disabled state).
    fn register(&mut self, key: K, disabled: bool);

    /// An item unmounted.
    fn unregister(&mut self, key: &K);

    /// Resolve an arrow key pressed on `from` to a focus move among the siblings.
    ///
    /// Groups without roving navigation return `None`.
    fn navigate(&mut self, from: &K, key: Key) -> Option<RovingMove<K>> {
        let _ = (from, key);
        None
    }
}

/// Group value of a radio group: at most one checked key.
#[derive(Clone, Debug)]
pub struct RadioGroupValue<K> {
    value: ControlledValue<Option<K>>,
    roving: Roving<K, ()>,
    pending: Option<Option<K>>,
}

impl<K: Clone + Eq + Hash> RadioGroupValue<K> {
    /// Create the group value.
    ///
    /// `value` is `Some(..)` when the host controls the selection (`Some(None)` meaning
    /// "controlled, nothing selected"), otherwise `default_value` seeds it.
    pub fn new(value: Option<Option<K>>, default_value: Option<K>, config: RovingConfig) -> Self {
        Self {
            value: ControlledValue::new(value, Some(default_value), None),
            roving: Roving::new(config),
            pending: None,
        }
    }

    /// The checked key.
    pub fn value(&self) -> Option<&K> {
        self.value.get().as_ref()
    }

    /// Reconcile with the host value for this render.
    pub fn sync(&mut self, value: Option<Option<K>>) {
        self.value.sync(value);
    }

    /// The change produced by the last interaction, to report to the consumer.
    pub fn take_change(&mut self) -> Option<Option<K>> {
        self.pending.take()
    }

    /// Roving focus state of the group.
    pub fn roving(&self) -> &Roving<K, ()> {
        &self.roving
    }

    /// Mutable roving focus state of the group.
    pub fn roving_mut(&mut self) -> &mut Roving<K, ()> {
        &mut self.roving
    }

    /// The radio that should be reachable with Tab.
    pub fn tab_stop(&self) -> Option<&K> {
        self.roving.tab_stop(self.value())
    }
}

impl<K: Clone + Eq + Hash> GroupController<K> for RadioGroupValue<K> {
    fn is_checked(&self, key: &K) -> bool {
        self.value() == Some(key)
    }

    fn on_change(&mut self, key: &K, checked: bool) {
        let next = if checked {
            Some(key.clone())
        } else if self.is_checked(key) {
            None
        } else {
            return;
        };
        if let Some(change) = self.value.set(next) {
            self.pending = Some(change);
        }
    }

    fn register(&mut self, key: K, disabled: bool) {
        let registry = self.roving.registry_mut();
        registry.register(key.clone(), ());
        registry.set_disabled(&key, disabled);
    }

    fn unregister(&mut self, key: &K) {
        self.roving.registry_mut().unregister(key);
    }

    fn navigate(&mut self, from: &K, key: Key) -> Option<RovingMove<K>> {
        self.roving.focus(from.clone());
        self.roving.on_key(key)
    }
}

/// Group value of a checkbox group: the checked keys, in the order they were checked.
#[derive(Clone, Debug)]
pub struct CheckGroupValue<K> {
    value: ControlledValue<Vec<K>>,
    registry: Registry<K, ()>,
    pending: Option<Vec<K>>,
}

impl<K: Clone + Eq + Hash> CheckGroupValue<K> {
    /// Create the group value; a `Some` value makes it host-controlled.
    pub fn new(value: Option<Vec<K>>, default_value: Option<Vec<K>>) -> Self {
        Self {
            value: ControlledValue::new(value, default_value, Vec::new()),
            registry: Registry::new(),
            pending: None,
        }
    }

    /// The checked keys.
    pub fn value(&self) -> &[K] {
        self.value.get()
    }

    /// Reconcile with the host value for this render.
    pub fn sync(&mut self, value: Option<Vec<K>>) {
        self.value.sync(value);
    }

    /// The change produced by the last interaction, to report to the consumer.
    pub fn take_change(&mut self) -> Option<Vec<K>> {
        self.pending.take()
    }

    /// Registered items.
    pub fn registry(&self) -> &Registry<K, ()> {
        &self.registry
    }
}

impl<K: Clone + Eq + Hash> GroupController<K> for CheckGroupValue<K> {
    fn is_checked(&self, key: &K) -> bool {
        self.value().contains(key)
    }

    fn on_change(&mut self, key: &K, checked: bool) {
        let change = self.value.update(|current| {
            let mut next = current.clone();
            if checked {
                if !next.contains(key) {
                    next.push(key.clone());
                }
            } else {
                next.retain(|k| k != key);
            }
            next
        });
        if let Some(change) = change {
            self.pending = Some(change);
        }
    }

    fn register(&mut self, key: K, disabled: bool) {
        self.registry.register(key.clone(), ());
        self.registry.set_disabled(&key, disabled);
    }

    fn unregister(&mut self, key: &K) {
        self.registry.unregister(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn radio_value_is_exclusive() {
        let mut g: RadioGroupValue<u8> = RadioGroupValue::new(None, Some(1), RovingConfig::default());
        assert!(g.is_checked(&1));
        g.on_change(&2, true);
        assert!(g.is_checked(&2));
        assert!(!g.is_checked(&1));
        assert_eq!(g.take_change(), Some(Some(2)));
        assert_eq!(g.take_change(), None);
        // Unchecking another key is meaningless.
        g.on_change(&1, false);
        assert_eq!(g.take_change(), None);
        g.on_change(&2, false);
        assert_eq!(g.value(), None);
    }

    #[test]
    fn check_group_accumulates_in_click_order() {
        let mut g: CheckGroupValue<&str> = CheckGroupValue::new(None, None);
        let mut seen = Vec::new();
        for (key, checked) in [("0", true), ("3", true), ("0", false), ("3", false)] {
            g.on_change(&key, checked);
            seen.push(g.take_change().expect("every click changes the value"));
        }
        assert_eq!(seen, vec![vec!["0"], vec!["0", "3"], vec!["3"], vec![]]);
    }

    #[test]
    fn radio_navigation_uses_registered_siblings() {
        let mut g: RadioGroupValue<u8> = RadioGroupValue::new(None, None, RovingConfig::default());
        g.register(0, true);
        for k in 1..4 {
            g.register(k, false);
        }
        assert_eq!(g.tab_stop(), Some(&1));
        let step = g.navigate(&3, Key::ArrowDown).expect("wraps to first enabled");
        assert_eq!(step.target, 1);
    }
}
