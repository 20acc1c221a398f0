// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accordion: a stack of expandables with arrow-key navigation between triggers.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashMap;
use tactile_modality::{Key, ModalitySource};
use tactile_nav::{Activation, NavIntent, Orientation, Roving, RovingConfig};
use tactile_value::IdGenerator;

use crate::context::missing;
use crate::expandable::{ExpandEvent, ExpandResponse, Expandable, ExpandableConfig};
use crate::parts::{PanelAria, TriggerAria};

/// Construction parameters of an [`Accordion`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AccordionConfig {
    /// Expanding one item collapses the others.
    pub single: bool,
    /// Arrow-key layout of the triggers.
    pub roving: RovingConfig,
}

impl Default for AccordionConfig {
    fn default() -> Self {
        Self {
            single: false,
            roving: RovingConfig {
                orientation: Orientation::Vertical,
                activation: Activation::Manual,
                ..RovingConfig::default()
            },
        }
    }
}

/// What the host should do after forwarding an event to an [`Accordion`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccordionResponse<K> {
    /// Call `preventDefault` on the event.
    pub prevent_default: bool,
    /// Move DOM focus to the trigger of this item.
    pub focus: Option<K>,
    /// `onExpand` / `onCollapse` to fire, in order.
    pub events: Vec<(K, ExpandEvent)>,
}

impl<K> Default for AccordionResponse<K> {
    fn default() -> Self {
        Self {
            prevent_default: false,
            focus: None,
            events: Vec::new(),
        }
    }
}

/// A set of expandables under one root.
#[derive(Clone, Debug)]
pub struct Accordion<K> {
    config: AccordionConfig,
    roving: Roving<K, ()>,
    items: HashMap<K, Expandable>,
    ids: IdGenerator,
}

impl<K: Clone + Eq + Hash + Debug> Accordion<K> {
    /// Create an empty accordion. Generated ids start with `prefix`.
    pub fn new(config: AccordionConfig, prefix: impl Into<String>) -> Self {
        Self {
            config,
            roving: Roving::new(config.roving),
            items: HashMap::new(),
            ids: IdGenerator::new(prefix),
        }
    }

    /// Mount an item with its trigger and panel. Returns their ids.
    pub fn add(&mut self, key: K, config: ExpandableConfig) -> (String, String) {
        let mut item = Expandable::new(config, self.ids.generate());
        item.mount();
        let ids = (item.mount_trigger(None), item.mount_panel(None));
        let registry = self.roving.registry_mut();
        registry.register(key.clone(), ());
        registry.set_disabled(&key, config.disabled);
        self.items.insert(key, item);
        ids
    }

    /// Unmount an item.
    pub fn remove(&mut self, key: &K) {
        self.roving.registry_mut().unregister(key);
        if let Some(mut item) = self.items.remove(key) {
            item.unmount();
        }
    }

    /// The state of one item.
    pub fn item(&self, key: &K) -> Option<&Expandable> {
        match self.items.get(key) {
            Some(item) => Some(item),
            None => missing("Accordion", key),
        }
    }

    /// Returns `true` if the item's panel shows.
    pub fn is_expanded(&self, key: &K) -> bool {
        self.items.get(key).is_some_and(Expandable::is_expanded)
    }

    /// Expanded items in DOM order.
    pub fn expanded(&self) -> Vec<K> {
        self.roving
            .registry()
            .keys()
            .filter(|k| self.is_expanded(k))
            .cloned()
            .collect()
    }

    /// Flip an item from code.
    pub fn toggle(&mut self, key: &K) -> AccordionResponse<K> {
        let Some(item) = self.items.get_mut(key) else {
            return missing("Accordion", key).unwrap_or_default();
        };
        let out = item.toggle();
        self.settle(key, out)
    }

    /// Reconcile one item with its host-controlled state.
    pub fn sync(&mut self, key: &K, expanded: Option<bool>) -> Option<ExpandEvent> {
        let Some(item) = self.items.get_mut(key) else {
            return missing("Accordion", key);
        };
        item.sync(expanded)
    }

    /// Click on an item's trigger.
    pub fn trigger_click(&mut self, key: &K) -> AccordionResponse<K> {
        let Some(item) = self.items.get_mut(key) else {
            return missing("Accordion", key).unwrap_or_default();
        };
        let out = item.trigger_click();
        self.roving.focus(key.clone());
        self.settle(key, out)
    }

    /// Key pressed on an item's trigger.
    pub fn trigger_key_down(
        &mut self,
        key: &K,
        pressed: Key,
        source: &dyn ModalitySource,
    ) -> AccordionResponse<K> {
        let Some(item) = self.items.get_mut(key) else {
            return missing("Accordion", key).unwrap_or_default();
        };
        let config = self.config.roving;
        if NavIntent::from_key(pressed, config.orientation, config.direction).is_none() {
            let out = item.trigger_key_down(pressed, source);
            return self.settle(key, out);
        }
        self.roving.focus(key.clone());
        let mut response = AccordionResponse {
            prevent_default: true,
            ..AccordionResponse::default()
        };
        if let Some(step) = self.roving.on_key(pressed) {
            if let Some(target) = self.items.get_mut(&step.target) {
                target.trigger_mut().focus(source);
            }
            if step.activate {
                let out = self.toggle(&step.target);
                response.events = out.events;
            }
            response.focus = Some(step.target);
        }
        response
    }

    /// Key released on an item's trigger.
    pub fn trigger_key_up(&mut self, key: &K, released: Key) -> AccordionResponse<K> {
        let Some(item) = self.items.get_mut(key) else {
            return missing("Accordion", key).unwrap_or_default();
        };
        let out = item.trigger_key_up(released);
        self.settle(key, out)
    }

    /// Focus left an item's trigger.
    pub fn blur(&mut self, key: &K) {
        if let Some(item) = self.items.get_mut(key) {
            item.trigger_mut().blur();
        }
        self.roving.blur();
    }

    /// Collect the event of `key` and, in single mode, collapse its siblings.
    fn settle(&mut self, key: &K, out: ExpandResponse) -> AccordionResponse<K> {
        let mut events = Vec::new();
        if let Some(event) = out.event {
            events.push((key.clone(), event));
        }
        if self.config.single && out.event == Some(ExpandEvent::Expand) {
            for other in self.roving.registry().keys() {
                if other == key {
                    continue;
                }
                if let Some(item) = self.items.get_mut(other) {
                    if let Some(event) = item.set_expanded(false).event {
                        events.push((other.clone(), event));
                    }
                }
            }
        }
        AccordionResponse {
            prevent_default: out.prevent_default,
            focus: None,
            events,
        }
    }

    /// Attributes of an item's trigger.
    pub fn trigger_aria(&self, key: &K) -> Option<TriggerAria<'_>> {
        self.item(key).map(Expandable::trigger_aria)
    }

    /// Attributes of an item's panel.
    pub fn panel_aria(&self, key: &K) -> Option<PanelAria<'_>> {
        self.item(key).map(Expandable::panel_aria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use tactile_modality::{LocalModality, Modifiers};

    fn accordion(single: bool) -> Accordion<char> {
        let mut a = Accordion::new(
            AccordionConfig {
                single,
                ..AccordionConfig::default()
            },
            "acc",
        );
        for key in ['a', 'b', 'c'] {
            a.add(
                key,
                ExpandableConfig {
                    disabled: key == 'b',
                    ..ExpandableConfig::default()
                },
            );
        }
        a
    }

    #[test]
    fn items_get_their_own_ids() {
        let mut a = Accordion::<u8>::new(AccordionConfig::default(), "acc");
        assert_eq!(
            a.add(1, ExpandableConfig::default()),
            ("acc-0-trigger".into(), "acc-0-panel".into())
        );
        assert_eq!(a.trigger_aria(&1).unwrap().controls, Some("acc-0-panel"));
        assert_eq!(a.panel_aria(&1).unwrap().labelled_by, Some("acc-0-trigger"));
    }

    #[test]
    fn single_mode_collapses_siblings() {
        let mut a = accordion(true);
        a.trigger_click(&'a');
        let out = a.trigger_click(&'c');
        assert_eq!(
            out.events,
            vec![('c', ExpandEvent::Expand), ('a', ExpandEvent::Collapse)]
        );
        assert_eq!(a.expanded(), vec!['c']);
    }

    #[test]
    fn multi_mode_keeps_siblings_open() {
        let mut a = accordion(false);
        a.trigger_click(&'a');
        a.trigger_click(&'c');
        assert_eq!(a.expanded(), vec!['a', 'c']);
    }

    #[test]
    fn arrows_move_between_enabled_triggers() {
        let m = LocalModality::new();
        m.key_down(Key::ArrowDown, Modifiers::empty());
        let mut a = accordion(false);
        let out = a.trigger_key_down(&'a', Key::ArrowDown, &m);
        assert!(out.prevent_default);
        assert_eq!(out.focus, Some('c'));
        assert!(out.events.is_empty());
        assert_eq!(a.trigger_key_down(&'c', Key::ArrowDown, &m).focus, Some('a'));
        assert_eq!(a.trigger_key_down(&'a', Key::End, &m).focus, Some('c'));
    }

    #[test]
    fn enter_toggles_the_focused_item() {
        let m = LocalModality::new();
        let mut a = accordion(false);
        a.trigger_key_down(&'c', Key::Enter, &m);
        let out = a.trigger_key_up(&'c', Key::Enter);
        assert_eq!(out.events, vec![('c', ExpandEvent::Expand)]);
    }

    #[test]
    fn unknown_item_renders_nothing() {
        let a = accordion(false);
        assert!(a.item(&'z').is_none());
        assert!(a.trigger_aria(&'z').is_none());
    }
}
