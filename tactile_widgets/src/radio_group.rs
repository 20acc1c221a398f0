// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radio group: one checked item, arrow keys rove among enabled radios.

use alloc::string::String;
use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashMap;
use tactile_aria::{Label, Part, Relationships, Role, Slot};
use tactile_modality::{Key, ModalitySource};
use tactile_nav::RovingConfig;
use tactile_press::{
    ButtonConfig, Check, CheckConfig, ControlStrategy, EnterKey, GroupController, RadioGroupValue,
};
use tactile_value::{IdGenerator, InteractionState};

use crate::context::missing;
use crate::parts::{GroupAria, ItemAria, orientation_attr, tab_index};

/// Construction parameters of a [`RadioGroup`].
#[derive(Clone, Debug)]
pub struct RadioGroupConfig<K> {
    /// Host-controlled checked key; `Some(None)` means controlled with nothing checked.
    pub value: Option<Option<K>>,
    /// Initially checked key when uncontrolled.
    pub default_value: Option<K>,
    /// Arrow-key layout and activation.
    pub roving: RovingConfig,
    /// Disable every radio.
    pub disabled: bool,
    /// Accessible name of the group.
    pub label: Label,
    /// Host-supplied id of the group element.
    pub id: Option<String>,
}

impl<K> RadioGroupConfig<K> {
    /// An uncontrolled group with nothing checked.
    pub fn new(label: impl Into<Label>) -> Self {
        Self {
            value: None,
            default_value: None,
            roving: RovingConfig::default(),
            disabled: false,
            label: label.into(),
            id: None,
        }
    }
}

/// What the host should do after forwarding an event to a [`RadioGroup`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RadioResponse<K> {
    /// Call `preventDefault` on the event.
    pub prevent_default: bool,
    /// Move DOM focus to this radio.
    pub focus: Option<K>,
    /// New group value to report to the consumer.
    pub changed: Option<Option<K>>,
    /// The enclosing form should be submitted.
    pub submit: bool,
}

impl<K> Default for RadioResponse<K> {
    fn default() -> Self {
        Self {
            prevent_default: false,
            focus: None,
            changed: None,
            submit: false,
        }
    }
}

/// A group of mutually exclusive radios.
#[derive(Clone, Debug)]
pub struct RadioGroup<K> {
    value: RadioGroupValue<K>,
    items: HashMap<K, Check<K>>,
    links: Relationships<K>,
    ids: IdGenerator,
    id: String,
    label: Label,
    disabled: bool,
}

impl<K: Clone + Eq + Hash + Debug> RadioGroup<K> {
    /// Create an empty group.
    pub fn new(config: RadioGroupConfig<K>, ids: &mut IdGenerator) -> Self {
        let id = ids.resolve(config.id.as_deref());
        Self {
            value: RadioGroupValue::new(config.value, config.default_value, config.roving),
            items: HashMap::new(),
            links: Relationships::new(),
            ids: IdGenerator::new(id.clone()),
            id,
            label: config.label,
            disabled: config.disabled,
        }
    }

    /// Mount a radio. Returns the ids of the radio and its label.
    pub fn add(&mut self, key: K, disabled: bool) -> (String, String) {
        let mut radio = Check::new(
            key.clone(),
            CheckConfig {
                strategy: ControlStrategy::Radio,
                toggle: false,
                enter: EnterKey::Submit,
                button: ButtonConfig {
                    disabled: disabled || self.disabled,
                    auto_focus: false,
                },
            },
            None,
            None,
        );
        radio.mount();
        self.value.register(key.clone(), disabled || self.disabled);
        let control = self.ids.generate();
        let label = IdGenerator::part(&control, "label");
        self.links.attach(key.clone(), Part::Control, control.clone());
        self.links.attach(key.clone(), Part::Label, label.clone());
        self.items.insert(key, radio);
        (control, label)
    }

    /// Unmount a radio.
    pub fn remove(&mut self, key: &K) {
        if let Some(mut radio) = self.items.remove(key) {
            radio.unmount();
        }
        self.value.unregister(key);
        self.links.remove(key);
    }

    /// Enable or disable one radio.
    pub fn set_item_disabled(&mut self, key: &K, disabled: bool) {
        let Some(radio) = self.items.get_mut(key) else {
            return missing("RadioGroup", key).unwrap_or_default();
        };
        radio.set_disabled(disabled || self.disabled);
        self.value.register(key.clone(), disabled || self.disabled);
    }

    /// The checked key.
    pub fn value(&self) -> Option<&K> {
        self.value.value()
    }

    /// Reconcile with the host-controlled value.
    pub fn sync(&mut self, value: Option<Option<K>>) {
        self.value.sync(value);
    }

    /// The radio reachable with Tab.
    pub fn tab_stop(&self) -> Option<&K> {
        self.value.tab_stop()
    }

    /// Click on a radio or its label.
    pub fn click(&mut self, key: &K) -> RadioResponse<K> {
        let Some(radio) = self.items.get_mut(key) else {
            return missing("RadioGroup", key).unwrap_or_default();
        };
        let out = radio.click(Some(&mut self.value));
        if out.changed.is_some() {
            self.value.roving_mut().focus(key.clone());
        }
        RadioResponse {
            prevent_default: out.prevent_default,
            changed: self.value.take_change(),
            ..RadioResponse::default()
        }
    }

    /// Key pressed on a radio.
    ///
    /// Arrow keys on a radio with visible focus move focus to the next enabled radio,
    /// checking it under automatic activation.
    pub fn key_down(&mut self, key: &K, pressed: Key, source: &dyn ModalitySource) -> RadioResponse<K> {
        let Some(radio) = self.items.get_mut(key) else {
            return missing("RadioGroup", key).unwrap_or_default();
        };
        let out = radio.key_down(pressed, true, source, Some(&mut self.value));
        let mut response = RadioResponse {
            prevent_default: out.prevent_default,
            ..RadioResponse::default()
        };
        if let Some(step) = out.roving {
            radio.button_mut().blur();
            if let Some(target) = self.items.get_mut(&step.target) {
                target.button_mut().focus(source);
                if step.activate {
                    target.click(Some(&mut self.value));
                }
            }
            response.focus = Some(step.target);
        }
        response.changed = self.value.take_change();
        response
    }

    /// Key released on a radio.
    pub fn key_up(&mut self, key: &K, released: Key) -> RadioResponse<K> {
        let Some(radio) = self.items.get_mut(key) else {
            return missing("RadioGroup", key).unwrap_or_default();
        };
        let out = radio.key_up(released, true, Some(&mut self.value));
        RadioResponse {
            prevent_default: out.prevent_default,
            submit: out.submit,
            changed: self.value.take_change(),
            ..RadioResponse::default()
        }
    }

    /// A radio received focus. Returns `true` if the focus should be indicated.
    pub fn focus(&mut self, key: &K, source: &dyn ModalitySource) -> bool {
        let Some(radio) = self.items.get_mut(key) else {
            return missing("RadioGroup", key).unwrap_or_default();
        };
        self.value.roving_mut().focus(key.clone());
        radio.button_mut().focus(source)
    }

    /// A radio lost focus.
    pub fn blur(&mut self, key: &K) {
        if let Some(radio) = self.items.get_mut(key) {
            radio.button_mut().blur();
        }
    }

    /// Interaction state of a radio.
    pub fn item_state(&self, key: &K) -> Option<InteractionState> {
        let Some(radio) = self.items.get(key) else {
            return missing("RadioGroup", key);
        };
        Some(radio.state(Some(&self.value)))
    }

    /// Attributes of the group element.
    pub fn aria(&self) -> GroupAria<'_> {
        GroupAria {
            slot: Slot::RadioGroup,
            role: Role::RadioGroup,
            id: Some(&self.id),
            orientation: orientation_attr(self.value.roving().config().orientation),
            label: self.label.aria_label(),
            labelled_by: self.label.aria_labelledby(None),
            disabled: self.disabled,
        }
    }

    /// Attributes of a radio.
    pub fn item_aria(&self, key: &K) -> Option<ItemAria<'_>> {
        let Some(radio) = self.items.get(key) else {
            return missing("RadioGroup", key);
        };
        Some(ItemAria {
            slot: Slot::Radio,
            role: Role::Radio,
            id: self.links.id(key, Part::Control),
            checked: self.value.is_checked(key),
            disabled: radio.is_disabled(),
            tab_index: tab_index(self.tab_stop() == Some(key)),
            controls: None,
            labelled_by: self.links.control_labelled_by(key),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactile_modality::{LocalModality, Modifiers, PointerKind};
    use tactile_nav::Activation;

    fn group(config: RadioGroupConfig<&'static str>) -> RadioGroup<&'static str> {
        let mut ids = IdGenerator::default();
        let mut g = RadioGroup::new(config, &mut ids);
        g.add("0", true);
        for key in ["1", "2", "3"] {
            g.add(key, false);
        }
        g
    }

    #[test]
    fn arrow_down_focuses_and_checks_next_enabled() {
        let m = LocalModality::new();
        let mut g = group(RadioGroupConfig::new("Size"));
        m.key_down(Key::Tab, Modifiers::empty());
        assert!(g.focus(&"1", &m));

        m.key_down(Key::ArrowDown, Modifiers::empty());
        let out = g.key_down(&"1", Key::ArrowDown, &m);
        assert!(out.prevent_default);
        assert_eq!(out.focus, Some("2"));
        assert_eq!(out.changed, Some(Some("2")));
        assert_eq!(g.value(), Some(&"2"));
        let state = g.item_state(&"2").unwrap();
        assert!(state.contains(InteractionState::FOCUS_VISIBLE | InteractionState::CHECKED));
    }

    #[test]
    fn navigation_wraps_past_disabled_items() {
        let m = LocalModality::new();
        let mut g = group(RadioGroupConfig::new("Size"));
        m.key_down(Key::Tab, Modifiers::empty());
        g.focus(&"3", &m);
        let out = g.key_down(&"3", Key::ArrowDown, &m);
        assert_eq!(out.focus, Some("1"));
    }

    #[test]
    fn manual_activation_moves_focus_only() {
        let m = LocalModality::new();
        let mut config = RadioGroupConfig::new("Size");
        config.roving.activation = Activation::Manual;
        let mut g = group(config);
        m.key_down(Key::Tab, Modifiers::empty());
        g.focus(&"1", &m);
        let out = g.key_down(&"1", Key::ArrowDown, &m);
        assert_eq!(out.focus, Some("2"));
        assert_eq!(out.changed, None);
        g.key_down(&"2", Key::Space, &m);
        assert_eq!(g.key_up(&"2", Key::Space).changed, Some(Some("2")));
    }

    #[test]
    fn arrows_after_pointer_focus_do_not_rove() {
        let m = LocalModality::new();
        let mut g = group(RadioGroupConfig::new("Size"));
        m.pointer_down(PointerKind::Mouse);
        assert!(!g.focus(&"1", &m));
        let out = g.key_down(&"1", Key::ArrowDown, &m);
        assert_eq!(out.focus, None);
    }

    #[test]
    fn clicking_disabled_or_checked_radio_is_a_no_op() {
        let mut g = group(RadioGroupConfig {
            default_value: Some("1"),
            ..RadioGroupConfig::new("Size")
        });
        assert_eq!(g.click(&"1").changed, None);
        assert_eq!(g.click(&"0").changed, None);
        assert_eq!(g.click(&"3").changed, Some(Some("3")));
        assert_eq!(g.item_aria(&"3").unwrap().tab_index, 0);
        assert_eq!(g.item_aria(&"1").unwrap().tab_index, -1);
    }

    #[test]
    fn unknown_key_renders_nothing() {
        let mut g = group(RadioGroupConfig::new("Size"));
        assert_eq!(g.item_aria(&"9"), None);
        assert_eq!(g.click(&"9"), RadioResponse::default());
    }

    #[test]
    fn radios_are_labelled_by_their_labels() {
        let mut ids = IdGenerator::new("form");
        let mut g: RadioGroup<u8> = RadioGroup::new(RadioGroupConfig::new("Plan"), &mut ids);
        let (control, label) = g.add(7, false);
        assert_eq!(control, "form-0-0");
        let aria = g.item_aria(&7).unwrap();
        assert_eq!(aria.id, Some(control.as_str()));
        assert_eq!(aria.labelled_by, Some(label.as_str()));
        assert_eq!(g.aria().role, Role::RadioGroup);
    }
}
