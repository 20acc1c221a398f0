// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tab group: a tab list with roving focus and one panel per tab.

use alloc::string::String;
use core::fmt::Debug;
use core::hash::Hash;

use tactile_aria::{Part, Relationships, Role, Slot};
use tactile_modality::{FocusVisible, Key, ModalitySource};
use tactile_nav::{Activation, NavIntent, Orientation, Roving, RovingConfig};
use tactile_value::{ControlledValue, IdGenerator};

use crate::context::missing;
use crate::parts::{GroupAria, ItemAria, PanelAria, orientation_attr, tab_index};

/// Construction parameters of a [`TabGroup`].
#[derive(Clone, Debug)]
pub struct TabGroupConfig<K> {
    /// Host-controlled selected tab; `Some(None)` defers to the first enabled tab.
    pub selected: Option<Option<K>>,
    /// Initially selected tab when uncontrolled.
    pub default_selected: Option<K>,
    /// Arrow-key layout and activation. Tabs are horizontal by default.
    pub roving: RovingConfig,
}

impl<K> Default for TabGroupConfig<K> {
    fn default() -> Self {
        Self {
            selected: None,
            default_selected: None,
            roving: RovingConfig {
                orientation: Orientation::Horizontal,
                ..RovingConfig::default()
            },
        }
    }
}

/// What the host should do after forwarding an event to a [`TabGroup`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabResponse<K> {
    /// Call `preventDefault` on the event.
    pub prevent_default: bool,
    /// Move DOM focus to this tab.
    pub focus: Option<K>,
    /// Newly selected tab to report to the consumer.
    pub changed: Option<K>,
}

impl<K> Default for TabResponse<K> {
    fn default() -> Self {
        Self {
            prevent_default: false,
            focus: None,
            changed: None,
        }
    }
}

/// Tabs and their panels.
///
/// Tabs register in DOM order. Disabled tabs stay in the list but are skipped by
/// arrow keys and can't be selected. When no valid tab is selected, the first enabled
/// tab shows.
#[derive(Clone, Debug)]
pub struct TabGroup<K> {
    roving: Roving<K, ()>,
    selected: ControlledValue<Option<K>>,
    links: Relationships<K>,
    ids: IdGenerator,
    focus: FocusVisible,
}

impl<K: Clone + Eq + Hash + Debug> TabGroup<K> {
    /// Create an empty tab group. Generated ids start with `prefix`.
    pub fn new(config: TabGroupConfig<K>, prefix: impl Into<String>) -> Self {
        Self {
            roving: Roving::new(config.roving),
            selected: ControlledValue::new(config.selected, Some(config.default_selected), None),
            links: Relationships::new(),
            ids: IdGenerator::new(prefix),
            focus: FocusVisible::new(),
        }
    }

    /// Mount a tab. Returns its element id.
    pub fn add_tab(&mut self, key: K, host_id: Option<&str>, disabled: bool) -> String {
        let id = self.ids.resolve(host_id);
        let registry = self.roving.registry_mut();
        registry.register(key.clone(), ());
        registry.set_disabled(&key, disabled);
        self.links.attach(key, Part::Trigger, id.clone());
        id
    }

    /// Unmount a tab.
    pub fn remove_tab(&mut self, key: &K) {
        self.roving.registry_mut().unregister(key);
        self.links.detach(key, Part::Trigger);
    }

    /// Enable or disable a tab.
    pub fn set_tab_disabled(&mut self, key: &K, disabled: bool) {
        if !self.roving.registry_mut().set_disabled(key, disabled) {
            missing::<_, ()>("TabGroup", key);
        }
    }

    /// Mount the panel of a tab. Returns its element id.
    pub fn mount_panel(&mut self, key: K, host_id: Option<&str>) -> String {
        let id = self.ids.resolve(host_id);
        self.links.attach(key, Part::Panel, id.clone());
        id
    }

    /// Unmount the panel of a tab.
    pub fn unmount_panel(&mut self, key: &K) {
        self.links.detach(key, Part::Panel);
    }

    /// The tab whose panel shows.
    pub fn selected(&self) -> Option<&K> {
        let registry = self.roving.registry();
        self.selected
            .get()
            .as_ref()
            .filter(|k| registry.is_enabled(k))
            .or_else(|| registry.first_enabled())
    }

    /// Reconcile with the host-controlled selection.
    pub fn sync(&mut self, selected: Option<Option<K>>) {
        self.selected.sync(selected);
    }

    /// Select a tab. Returns the key to report, or `None` if nothing changed.
    pub fn select(&mut self, key: &K) -> Option<K> {
        let registry = self.roving.registry();
        if !registry.contains(key) {
            return missing("TabGroup", key);
        }
        if !registry.is_enabled(key) || self.selected() == Some(key) {
            return None;
        }
        self.selected.set(Some(key.clone())).flatten()
    }

    /// Click on a tab.
    pub fn click(&mut self, key: &K) -> TabResponse<K> {
        if !self.roving.registry().is_enabled(key) {
            return TabResponse::default();
        }
        self.roving.focus(key.clone());
        TabResponse {
            prevent_default: false,
            focus: Some(key.clone()),
            changed: self.select(key),
        }
    }

    /// Key pressed on a tab.
    pub fn key_down(&mut self, key: &K, pressed: Key, source: &dyn ModalitySource) -> TabResponse<K> {
        if !self.roving.registry().contains(key) {
            return missing("TabGroup", key).unwrap_or_default();
        }
        self.roving.focus(key.clone());
        self.focus.on_key_down(source);
        let config = *self.roving.config();
        if matches!(pressed, Key::Space | Key::Enter) {
            return TabResponse {
                prevent_default: true,
                changed: self.select(key),
                focus: None,
            };
        }
        if NavIntent::from_key(pressed, config.orientation, config.direction).is_none() {
            return TabResponse::default();
        }
        let mut response = TabResponse {
            prevent_default: true,
            ..TabResponse::default()
        };
        if let Some(step) = self.roving.on_key(pressed) {
            if step.activate {
                response.changed = self.select(&step.target);
            }
            self.focus.on_focus(source);
            response.focus = Some(step.target);
        }
        response
    }

    /// A tab received focus. Returns `true` if the focus should be indicated.
    pub fn focus(&mut self, key: &K, source: &dyn ModalitySource) -> bool {
        self.roving.focus(key.clone());
        self.focus.on_focus(source)
    }

    /// Focus left the tab list.
    pub fn blur(&mut self) {
        self.roving.blur();
        self.focus.on_blur();
    }

    /// Attributes of the tab list.
    pub fn list_aria(&self) -> GroupAria<'_> {
        GroupAria {
            slot: Slot::TabList,
            role: Role::TabList,
            id: None,
            orientation: orientation_attr(self.roving.config().orientation),
            label: None,
            labelled_by: None,
            disabled: false,
        }
    }

    /// Attributes of a tab.
    pub fn tab_aria(&self, key: &K) -> Option<ItemAria<'_>> {
        let registry = self.roving.registry();
        if !registry.contains(key) {
            return missing("TabGroup", key);
        }
        let selected = self.selected() == Some(key);
        Some(ItemAria {
            slot: Slot::Tab,
            role: Role::Tab,
            id: self.links.id(key, Part::Trigger),
            checked: selected,
            disabled: !registry.is_enabled(key),
            tab_index: tab_index(self.roving.tab_stop(self.selected()) == Some(key)),
            controls: self.links.aria_controls(key),
            labelled_by: None,
        })
    }

    /// Attributes of a tab's panel.
    pub fn panel_aria(&self, key: &K) -> Option<PanelAria<'_>> {
        let id = self.links.id(key, Part::Panel);
        if id.is_none() {
            return missing("TabGroup", key);
        }
        Some(PanelAria {
            slot: Slot::TabPanel,
            role: Role::TabPanel,
            id,
            labelled_by: self.links.panel_labelled_by(key),
            hidden: self.selected() != Some(key),
        })
    }

    /// Returns `true` if focus in the tab list should be indicated.
    pub fn is_focus_visible(&self) -> bool {
        self.focus.is_focus_visible()
    }

    /// Whether arrow keys select as they move.
    pub fn activation(&self) -> Activation {
        self.roving.config().activation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactile_modality::{LocalModality, Modifiers};

    fn tabs(config: TabGroupConfig<u8>) -> TabGroup<u8> {
        let mut t = TabGroup::new(config, "tabs");
        for key in 0..4 {
            t.add_tab(key, None, key == 2);
            t.mount_panel(key, None);
        }
        t
    }

    #[test]
    fn first_enabled_tab_shows_by_default() {
        let t = tabs(TabGroupConfig::default());
        assert_eq!(t.selected(), Some(&0));
        assert!(!t.panel_aria(&0).unwrap().hidden);
        assert!(t.panel_aria(&1).unwrap().hidden);
    }

    #[test]
    fn arrows_skip_disabled_and_select() {
        let m = LocalModality::new();
        let mut t = tabs(TabGroupConfig::default());
        m.key_down(Key::ArrowRight, Modifiers::empty());
        let out = t.key_down(&1, Key::ArrowRight, &m);
        assert_eq!(out.focus, Some(3));
        assert_eq!(out.changed, Some(3));
        assert!(t.is_focus_visible());
        let out = t.key_down(&3, Key::Home, &m);
        assert_eq!(out.focus, Some(0));
        // Vertical keys don't belong to a horizontal list.
        assert_eq!(t.key_down(&0, Key::ArrowDown, &m), TabResponse::default());
    }

    #[test]
    fn manual_activation_waits_for_enter() {
        let m = LocalModality::new();
        let mut t = tabs(TabGroupConfig {
            roving: RovingConfig {
                orientation: Orientation::Horizontal,
                activation: Activation::Manual,
                ..RovingConfig::default()
            },
            ..TabGroupConfig::default()
        });
        let out = t.key_down(&0, Key::ArrowRight, &m);
        assert_eq!((out.focus, out.changed), (Some(1), None));
        assert_eq!(t.selected(), Some(&0));
        assert_eq!(t.key_down(&1, Key::Enter, &m).changed, Some(1));
    }

    #[test]
    fn disabled_tab_cannot_be_selected() {
        let mut t = tabs(TabGroupConfig::default());
        assert_eq!(t.click(&2), TabResponse::default());
        assert_eq!(t.select(&2), None);
        assert!(t.tab_aria(&2).unwrap().disabled);
    }

    #[test]
    fn tab_and_panel_reference_each_other() {
        let mut t = tabs(TabGroupConfig::default());
        let tab = t.tab_aria(&1).unwrap();
        let panel = t.panel_aria(&1).unwrap();
        assert_eq!(tab.controls, panel.id);
        assert_eq!(panel.labelled_by, tab.id);

        t.unmount_panel(&1);
        assert_eq!(t.tab_aria(&1).unwrap().controls, None);
        let new_id = t.mount_panel(1, Some("custom-panel"));
        assert_eq!(t.tab_aria(&1).unwrap().controls, Some(new_id.as_str()));
    }

    #[test]
    fn controlled_selection_follows_host() {
        let mut t = tabs(TabGroupConfig {
            selected: Some(Some(1)),
            ..TabGroupConfig::default()
        });
        assert_eq!(t.click(&3).changed, Some(3));
        t.sync(Some(Some(1)));
        assert_eq!(t.selected(), Some(&1));
        assert_eq!(t.tab_aria(&1).unwrap().tab_index, 0);
        assert_eq!(t.tab_aria(&3).unwrap().tab_index, -1);
    }
}
