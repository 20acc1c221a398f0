// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insertion-ordered registry of the items of a composite widget.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::navigate::{self, NavIntent, Navigable, Step, WrapMode};

/// One registered item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryEntry<K, Id> {
    /// Logical key chosen by the host.
    pub key: K,
    /// Element identifier the key maps to.
    pub id: Id,
    /// Disabled items stay registered but are skipped by navigation.
    pub disabled: bool,
}

impl<K, Id> Navigable for RegistryEntry<K, Id> {
    fn is_enabled(&self) -> bool {
        !self.disabled
    }
}

/// Insertion-ordered mapping from item keys to element ids.
///
/// A composite container owns one of these. Children register as they mount and
/// unregister as they unmount, and navigation always runs against the live entries.
#[derive(Clone, Debug)]
pub struct Registry<K, Id> {
    entries: Vec<RegistryEntry<K, Id>>,
    positions: HashMap<K, usize>,
}

impl<K: Clone + Eq + Hash, Id> Registry<K, Id> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Register `key` with `id`.
    ///
    /// Re-registering an existing key (for example after a remount) replaces its id,
    /// keeps its position, and returns the previous id.
    pub fn register(&mut self, key: K, id: Id) -> Option<Id> {
        if let Some(&pos) = self.positions.get(&key) {
            return Some(core::mem::replace(&mut self.entries[pos].id, id));
        }
        self.positions.insert(key.clone(), self.entries.len());
        self.entries.push(RegistryEntry {
            key,
            id,
            disabled: false,
        });
        None
    }

    /// Remove `key`, returning its id.
    pub fn unregister(&mut self, key: &K) -> Option<Id> {
        let pos = self.positions.remove(key)?;
        let entry = self.entries.remove(pos);
        for later in &self.entries[pos..] {
            if let Some(p) = self.positions.get_mut(&later.key) {
                *p -= 1;
            }
        }
        Some(entry.id)
    }

    /// Mark `key` as disabled or enabled. Returns `false` for unknown keys.
    pub fn set_disabled(&mut self, key: &K, disabled: bool) -> bool {
        match self.positions.get(key) {
            Some(&pos) => {
                self.entries[pos].disabled = disabled;
                true
            }
            None => false,
        }
    }

    /// Returns `true` if `key` is registered and not disabled.
    pub fn is_enabled(&self, key: &K) -> bool {
        self.entry(key).is_some_and(|e| !e.disabled)
    }

    /// Returns `true` if `key` is registered.
    pub fn contains(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    /// Element id registered for `key`.
    pub fn id(&self, key: &K) -> Option<&Id> {
        self.entry(key).map(|e| &e.id)
    }

    /// Full entry for `key`.
    pub fn entry(&self, key: &K) -> Option<&RegistryEntry<K, Id>> {
        self.positions.get(key).map(|&pos| &self.entries[pos])
    }

    /// Position of `key` in insertion order.
    pub fn position(&self, key: &K) -> Option<usize> {
        self.positions.get(key).copied()
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[RegistryEntry<K, Id>] {
        &self.entries
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|e| &e.key)
    }

    /// Number of registered items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The first enabled key.
    pub fn first_enabled(&self) -> Option<&K> {
        navigate::first_enabled(&self.entries).map(|i| &self.entries[i].key)
    }

    /// The last enabled key.
    pub fn last_enabled(&self) -> Option<&K> {
        navigate::last_enabled(&self.entries).map(|i| &self.entries[i].key)
    }

    /// The next enabled key after `from` in `step` direction.
    pub fn next_enabled(&self, from: &K, step: Step, wrap: WrapMode) -> Option<&K> {
        let from = self.position(from).unwrap_or(usize::MAX);
        navigate::next_enabled(&self.entries, from, step, wrap).map(|i| &self.entries[i].key)
    }

    /// Resolve a navigation intent starting at `from`.
    pub fn navigate(&self, from: Option<&K>, intent: NavIntent, wrap: WrapMode) -> Option<&K> {
        let from = from.and_then(|k| self.position(k));
        navigate::resolve(&self.entries, from, intent, wrap).map(|i| &self.entries[i].key)
    }
}

impl<K: Clone + Eq + Hash, Id> Default for Registry<K, Id> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};

    fn abcd() -> Registry<&'static str, String> {
        let mut r = Registry::new();
        for k in ["a", "b", "c", "d"] {
            r.register(k, k.to_string() + "-id");
        }
        r.set_disabled(&"a", true);
        r
    }

    #[test]
    fn insertion_order_and_lookup() {
        let r = abcd();
        assert_eq!(r.keys().copied().collect::<Vec<_>>(), ["a", "b", "c", "d"]);
        assert_eq!(r.id(&"c").map(String::as_str), Some("c-id"));
        assert!(!r.is_enabled(&"a"));
        assert!(r.is_enabled(&"b"));
        assert!(!r.is_enabled(&"zz"));
    }

    #[test]
    fn navigation_skips_disabled() {
        let r = abcd();
        assert_eq!(r.next_enabled(&"b", Step::Forward, WrapMode::Wrap), Some(&"c"));
        assert_eq!(r.next_enabled(&"d", Step::Forward, WrapMode::Wrap), Some(&"b"));
        assert_eq!(r.navigate(Some(&"c"), NavIntent::First, WrapMode::Wrap), Some(&"b"));
        assert_eq!(r.navigate(None, NavIntent::Next, WrapMode::Wrap), Some(&"b"));
    }

    #[test]
    fn reregister_keeps_position() {
        let mut r = abcd();
        let old = r.register("b", "b-remounted".to_string());
        assert_eq!(old.as_deref(), Some("b-id"));
        assert_eq!(r.position(&"b"), Some(1));
        assert_eq!(r.id(&"b").map(String::as_str), Some("b-remounted"));
    }

    #[test]
    fn unregister_shifts_positions() {
        let mut r = abcd();
        assert_eq!(r.unregister(&"b").as_deref(), Some("b-id"));
        assert_eq!(r.position(&"c"), Some(1));
        assert_eq!(r.position(&"d"), Some(2));
        assert_eq!(r.len(), 3);
        assert_eq!(r.unregister(&"b"), None);
        assert_eq!(r.next_enabled(&"d", Step::Forward, WrapMode::Wrap), Some(&"c"));
    }
}
