// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Checkbox group: a set of checked keys.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashMap;
use tactile_aria::{Label, Part, Relationships, Role, Slot};
use tactile_modality::{Key, ModalitySource};
use tactile_press::{
    ButtonConfig, Check, CheckConfig, CheckGroupValue, CheckResponse, EnterKey, GroupController,
};
use tactile_value::{IdGenerator, InteractionState};

use crate::context::missing;
use crate::parts::{GroupAria, ItemAria};

/// A group of checkboxes sharing one list value.
///
/// The value keeps keys in the order they were checked.
#[derive(Clone, Debug)]
pub struct CheckGroup<K> {
    value: CheckGroupValue<K>,
    items: HashMap<K, Check<K>>,
    links: Relationships<K>,
    ids: IdGenerator,
    id: String,
    label: Label,
    disabled: bool,
}

impl<K: Clone + Eq + Hash + Debug> CheckGroup<K> {
    /// Create an empty group. A `Some` value makes it host-controlled.
    pub fn new(
        label: impl Into<Label>,
        value: Option<Vec<K>>,
        default_value: Option<Vec<K>>,
        ids: &mut IdGenerator,
    ) -> Self {
        let id = ids.generate();
        Self {
            value: CheckGroupValue::new(value, default_value),
            items: HashMap::new(),
            links: Relationships::new(),
            ids: IdGenerator::new(id.clone()),
            id,
            label: label.into(),
            disabled: false,
        }
    }

    /// Disable every checkbox.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        for item in self.items.values_mut() {
            item.set_disabled(disabled);
        }
    }

    /// Mount a checkbox. Returns its id.
    pub fn add(&mut self, key: K, disabled: bool) -> String {
        let mut item = Check::new(
            key.clone(),
            CheckConfig {
                enter: EnterKey::Submit,
                button: ButtonConfig {
                    disabled: disabled || self.disabled,
                    auto_focus: false,
                },
                ..CheckConfig::default()
            },
            None,
            None,
        );
        item.mount();
        self.value.register(key.clone(), disabled);
        let id = self.ids.generate();
        self.links.attach(key.clone(), Part::Control, id.clone());
        self.items.insert(key, item);
        id
    }

    /// Unmount a checkbox. Its key stays in the value.
    pub fn remove(&mut self, key: &K) {
        if let Some(mut item) = self.items.remove(key) {
            item.unmount();
        }
        self.value.unregister(key);
        self.links.remove(key);
    }

    /// The checked keys, in the order they were checked.
    pub fn value(&self) -> &[K] {
        self.value.value()
    }

    /// Reconcile with the host-controlled value.
    pub fn sync(&mut self, value: Option<Vec<K>>) {
        self.value.sync(value);
    }

    /// Click on a checkbox. Returns the new group value if it changed.
    pub fn click(&mut self, key: &K) -> Option<Vec<K>> {
        let Some(item) = self.items.get_mut(key) else {
            return missing("CheckGroup", key);
        };
        item.click(Some(&mut self.value));
        self.value.take_change()
    }

    /// Key pressed on a checkbox.
    pub fn key_down(&mut self, key: &K, pressed: Key, source: &dyn ModalitySource) -> CheckResponse<K> {
        let Some(item) = self.items.get_mut(key) else {
            return missing("CheckGroup", key).unwrap_or_default();
        };
        item.key_down(pressed, true, source, Some(&mut self.value))
    }

    /// Key released on a checkbox. Returns the response and the new group value.
    pub fn key_up(&mut self, key: &K, released: Key) -> (CheckResponse<K>, Option<Vec<K>>) {
        let Some(item) = self.items.get_mut(key) else {
            return missing("CheckGroup", key).unwrap_or_default();
        };
        let out = item.key_up(released, true, Some(&mut self.value));
        (out, self.value.take_change())
    }

    /// A checkbox received focus.
    pub fn focus(&mut self, key: &K, source: &dyn ModalitySource) -> bool {
        self.items
            .get_mut(key)
            .is_some_and(|item| item.button_mut().focus(source))
    }

    /// A checkbox lost focus.
    pub fn blur(&mut self, key: &K) {
        if let Some(item) = self.items.get_mut(key) {
            item.button_mut().blur();
        }
    }

    /// Interaction state of a checkbox.
    pub fn item_state(&self, key: &K) -> Option<InteractionState> {
        let Some(item) = self.items.get(key) else {
            return missing("CheckGroup", key);
        };
        Some(item.state(Some(&self.value)))
    }

    /// Attributes of the group element.
    pub fn aria(&self) -> GroupAria<'_> {
        GroupAria {
            slot: Slot::CheckGroup,
            role: Role::Group,
            id: Some(&self.id),
            orientation: None,
            label: self.label.aria_label(),
            labelled_by: self.label.aria_labelledby(None),
            disabled: self.disabled,
        }
    }

    /// Attributes of a checkbox.
    pub fn item_aria(&self, key: &K) -> Option<ItemAria<'_>> {
        let Some(item) = self.items.get(key) else {
            return missing("CheckGroup", key);
        };
        Some(ItemAria {
            slot: Slot::Checkbox,
            role: Role::Checkbox,
            id: self.links.id(key, Part::Control),
            checked: self.value.is_checked(key),
            disabled: item.is_disabled(),
            tab_index: 0,
            controls: None,
            labelled_by: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use tactile_modality::LocalModality;

    fn group() -> CheckGroup<&'static str> {
        let mut ids = IdGenerator::default();
        let mut g = CheckGroup::new("Toppings", None, None, &mut ids);
        for key in ["0", "1", "2", "3"] {
            g.add(key, false);
        }
        g
    }

    #[test]
    fn clicks_accumulate_in_order() {
        let mut g = group();
        let changes: Vec<_> = ["0", "3", "0", "3"]
            .iter()
            .map(|k| g.click(k).unwrap())
            .collect();
        assert_eq!(changes, vec![vec!["0"], vec!["0", "3"], vec!["3"], vec![]]);
    }

    #[test]
    fn space_toggles_membership() {
        let m = LocalModality::new();
        let mut g = group();
        g.key_down(&"2", Key::Space, &m);
        let (out, value) = g.key_up(&"2", Key::Space);
        assert_eq!(out.changed, Some(true));
        assert_eq!(value, Some(vec!["2"]));
        assert!(g.item_aria(&"2").unwrap().checked);
    }

    #[test]
    fn disabled_group_ignores_clicks() {
        let mut g = group();
        g.set_disabled(true);
        assert_eq!(g.click(&"1"), None);
        assert!(g.value().is_empty());
        assert!(g.aria().disabled);
    }

    #[test]
    fn controlled_group_follows_host() {
        let mut ids = IdGenerator::default();
        let mut g = CheckGroup::new("Days", Some(vec!["mon"]), None, &mut ids);
        g.add("mon", false);
        g.add("tue", false);
        assert_eq!(g.click(&"tue"), Some(vec!["mon", "tue"]));
        g.sync(Some(vec!["mon"]));
        assert_eq!(g.value(), &["mon"]);
        assert_eq!(g.click(&"nope"), None);
    }
}
