// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu button: a trigger that opens a list of actions.
//!
//! Focus moves into the list when it opens and returns to the trigger when it
//! closes, except when the user tabs away. Inside the list, arrow keys and type-ahead
//! move focus, and Enter or Space activates the focused item.

use alloc::string::String;
use core::fmt::Debug;
use core::hash::Hash;

use tactile_aria::{Part, Relationships, Role, Slot};
use tactile_modality::{FocusVisible, Key, ModalitySource, Modifiers};
use tactile_nav::{Activation, NavIntent, Orientation, Roving, RovingConfig, TypeAhead};
use tactile_press::{Button, ButtonConfig, FocusRequest, Response};
use tactile_value::{ControlledValue, IdGenerator};

use crate::context::missing;
use crate::parts::{GroupAria, ItemAria, TriggerAria, orientation_attr, tab_index};

/// Which item receives focus when the menu opens.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MenuFocus {
    /// The first enabled item.
    #[default]
    First,
    /// The last enabled item.
    Last,
}

/// Where DOM focus should go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuTarget<K> {
    /// The menu trigger.
    Trigger,
    /// An item of the list.
    Item(K),
}

/// Construction parameters of a [`Menu`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MenuConfig {
    /// Host-controlled open state.
    pub open: Option<bool>,
    /// Initial open state when uncontrolled.
    pub default_open: Option<bool>,
    /// Disable the trigger.
    pub disabled: bool,
    /// Arrow-key layout of the list.
    pub roving: RovingConfig,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            open: None,
            default_open: None,
            disabled: false,
            roving: RovingConfig {
                orientation: Orientation::Vertical,
                activation: Activation::Manual,
                ..RovingConfig::default()
            },
        }
    }
}

/// What the host should do after forwarding an event to a [`Menu`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuResponse<K> {
    /// Call `preventDefault` on the event.
    pub prevent_default: bool,
    /// Move DOM focus here.
    pub focus: Option<MenuTarget<K>>,
    /// Item whose action should run.
    pub activated: Option<K>,
    /// New open state to report through `onOpenChange`.
    pub open_changed: Option<bool>,
}

impl<K> Default for MenuResponse<K> {
    fn default() -> Self {
        Self {
            prevent_default: false,
            focus: None,
            activated: None,
            open_changed: None,
        }
    }
}

impl<K> MenuResponse<K> {
    fn prevented() -> Self {
        Self {
            prevent_default: true,
            ..Self::default()
        }
    }
}

/// State of a menu button and its list.
#[derive(Clone, Debug)]
pub struct Menu<K> {
    open: ControlledValue<bool>,
    /// Items keyed by host key, with their labels as ids for type-ahead.
    roving: Roving<K, String>,
    type_ahead: TypeAhead,
    trigger: Button,
    focus: FocusVisible,
    links: Relationships<()>,
    item_ids: Relationships<K>,
    ids: IdGenerator,
    id: String,
}

impl<K: Clone + Eq + Hash + Debug> Menu<K> {
    /// Create a menu. Part ids are derived from `id`.
    pub fn new(config: MenuConfig, id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            open: ControlledValue::new(config.open, config.default_open, false),
            roving: Roving::new(config.roving),
            type_ahead: TypeAhead::new(),
            trigger: Button::new(ButtonConfig {
                disabled: config.disabled,
                auto_focus: false,
            }),
            focus: FocusVisible::new(),
            links: Relationships::new(),
            item_ids: Relationships::new(),
            ids: IdGenerator::new(IdGenerator::part(&id, "item")),
            id,
        }
    }

    /// The trigger is rendered. Returns its element id.
    pub fn mount_trigger(&mut self, host_id: Option<&str>) -> (String, Option<FocusRequest>) {
        let id = host_id.map_or_else(|| IdGenerator::part(&self.id, "trigger"), String::from);
        self.links.attach((), Part::Trigger, id.clone());
        (id, self.trigger.mount())
    }

    /// The item list is rendered. Returns its element id.
    pub fn mount_list(&mut self, host_id: Option<&str>) -> String {
        let id = host_id.map_or_else(|| IdGenerator::part(&self.id, "list"), String::from);
        self.links.attach((), Part::Panel, id.clone());
        id
    }

    /// The item list is gone.
    pub fn unmount_list(&mut self) {
        self.links.detach(&(), Part::Panel);
    }

    /// Everything is gone.
    pub fn unmount(&mut self) {
        self.trigger.unmount();
        self.focus.on_blur();
        self.type_ahead.reset();
    }

    /// Mount an item. `label` is the text type-ahead matches. Returns its element id.
    pub fn add_item(&mut self, key: K, label: impl Into<String>, disabled: bool) -> String {
        let registry = self.roving.registry_mut();
        registry.register(key.clone(), label.into());
        registry.set_disabled(&key, disabled);
        self.type_ahead.reset();
        let id = self.ids.generate();
        self.item_ids.attach(key, Part::Control, id.clone());
        id
    }

    /// Unmount an item.
    pub fn remove_item(&mut self, key: &K) {
        self.roving.registry_mut().unregister(key);
        self.item_ids.remove(key);
        self.type_ahead.reset();
    }

    /// Enable or disable an item.
    pub fn set_item_disabled(&mut self, key: &K, disabled: bool) {
        if !self.roving.registry_mut().set_disabled(key, disabled) {
            missing::<_, ()>("Menu", key);
        }
        self.type_ahead.reset();
    }

    /// Returns `true` if the list shows.
    pub fn is_open(&self) -> bool {
        *self.open.get()
    }

    /// The item that has focus while the list is open.
    pub fn focused(&self) -> Option<&K> {
        self.roving.focused().filter(|_| self.is_open())
    }

    /// Reconcile with the host-controlled open state.
    pub fn sync(&mut self, open: Option<bool>) {
        self.open.sync(open);
        if !self.is_open() {
            self.roving.blur();
        }
    }

    /// Open the list and focus its first or last enabled item.
    pub fn open(&mut self, focus: MenuFocus) -> MenuResponse<K> {
        let registry = self.roving.registry();
        let target = match focus {
            MenuFocus::First => registry.first_enabled(),
            MenuFocus::Last => registry.last_enabled(),
        }
        .cloned();
        let open_changed = self.open.set(true);
        self.type_ahead.reset();
        match &target {
            Some(key) => self.roving.focus(key.clone()),
            None => self.roving.blur(),
        }
        MenuResponse {
            prevent_default: true,
            focus: target.map(MenuTarget::Item),
            activated: None,
            open_changed,
        }
    }

    /// Close the list, returning focus to the trigger if `return_focus`.
    pub fn close(&mut self, return_focus: bool) -> MenuResponse<K> {
        let open_changed = self.open.set(false);
        self.roving.blur();
        self.focus.on_blur();
        self.type_ahead.reset();
        MenuResponse {
            prevent_default: false,
            focus: return_focus.then_some(MenuTarget::Trigger),
            activated: None,
            open_changed,
        }
    }

    fn toggle_from_trigger(&mut self, response: Response) -> MenuResponse<K> {
        if !response.activated {
            return MenuResponse {
                prevent_default: response.prevent_default,
                ..MenuResponse::default()
            };
        }
        let mut out = if self.is_open() {
            self.close(true)
        } else {
            self.open(MenuFocus::First)
        };
        out.prevent_default |= response.prevent_default;
        out
    }

    /// Click on the trigger.
    pub fn trigger_click(&mut self) -> MenuResponse<K> {
        let response = self.trigger.click();
        self.toggle_from_trigger(response)
    }

    /// Key pressed on the trigger. ArrowDown and ArrowUp open the list.
    pub fn trigger_key_down(&mut self, key: Key, source: &dyn ModalitySource) -> MenuResponse<K> {
        let response = self.trigger.key_down(key, true, source);
        if self.trigger.is_disabled() || !self.trigger.is_mounted() {
            return MenuResponse {
                prevent_default: response.prevent_default,
                ..MenuResponse::default()
            };
        }
        let out = match key {
            Key::ArrowDown => self.open(MenuFocus::First),
            Key::ArrowUp => self.open(MenuFocus::Last),
            _ => return self.toggle_from_trigger(response),
        };
        self.focus.focus_programmatic(source.keyboard_driven());
        out
    }

    /// Key released on the trigger.
    pub fn trigger_key_up(&mut self, key: Key) -> MenuResponse<K> {
        let response = self.trigger.key_up(key, true);
        self.toggle_from_trigger(response)
    }

    /// The trigger received focus.
    pub fn trigger_focus(&mut self, source: &dyn ModalitySource) -> bool {
        self.trigger.focus(source)
    }

    /// The trigger lost focus.
    pub fn trigger_blur(&mut self) {
        self.trigger.blur();
    }

    /// Key pressed on an item at time `now` (milliseconds).
    pub fn item_key_down(
        &mut self,
        key: &K,
        pressed: Key,
        modifiers: Modifiers,
        now: u64,
        source: &dyn ModalitySource,
    ) -> MenuResponse<K> {
        if !self.roving.registry().contains(key) {
            return missing("Menu", key).unwrap_or_default();
        }
        if !self.is_open() {
            return MenuResponse::default();
        }
        self.roving.focus(key.clone());
        self.focus.on_key_down(source);
        match pressed {
            Key::Escape => {
                return MenuResponse {
                    prevent_default: true,
                    ..self.close(true)
                };
            }
            Key::Tab => return self.close(false),
            Key::Enter => return self.activate(key),
            Key::Space if !self.type_ahead.is_typing(now) => return self.activate(key),
            _ => {}
        }
        let config = *self.roving.config();
        if NavIntent::from_key(pressed, config.orientation, config.direction).is_some() {
            let mut out = MenuResponse::prevented();
            if let Some(step) = self.roving.on_key(pressed) {
                self.focus.on_focus(source);
                out.focus = Some(MenuTarget::Item(step.target));
            }
            return out;
        }
        let registry = self.roving.registry();
        let current = registry.position(key);
        let Some(index) =
            self.type_ahead
                .on_key(pressed, modifiers, now, registry.entries(), current)
        else {
            return MenuResponse::default();
        };
        let target = registry.entries()[index].key.clone();
        self.roving.focus(target.clone());
        MenuResponse {
            prevent_default: true,
            focus: Some(MenuTarget::Item(target)),
            ..MenuResponse::default()
        }
    }

    /// Click on an item.
    pub fn item_click(&mut self, key: &K) -> MenuResponse<K> {
        if !self.roving.registry().contains(key) {
            return missing("Menu", key).unwrap_or_default();
        }
        self.activate(key)
    }

    /// The pointer moved onto an item. Enabled items take focus.
    pub fn item_hover(&mut self, key: &K) -> Option<K> {
        if !self.is_open() || !self.roving.registry().is_enabled(key) {
            return None;
        }
        if self.roving.focused() == Some(key) {
            return None;
        }
        self.roving.focus(key.clone());
        self.focus.focus_programmatic(false);
        Some(key.clone())
    }

    fn activate(&mut self, key: &K) -> MenuResponse<K> {
        if !self.roving.registry().is_enabled(key) {
            return MenuResponse::prevented();
        }
        MenuResponse {
            prevent_default: true,
            activated: Some(key.clone()),
            ..self.close(true)
        }
    }

    /// Returns `true` if focus inside the list should be indicated.
    pub fn is_focus_visible(&self) -> bool {
        self.is_open() && self.focus.is_focus_visible()
    }

    /// Attributes of the trigger.
    pub fn trigger_aria(&self) -> TriggerAria<'_> {
        TriggerAria {
            slot: Slot::MenuTrigger,
            id: self.links.id(&(), Part::Trigger),
            controls: self.links.aria_controls(&()).filter(|_| self.is_open()),
            expanded: self.is_open(),
            disabled: self.trigger.is_disabled(),
        }
    }

    /// Attributes of the item list.
    pub fn list_aria(&self) -> GroupAria<'_> {
        GroupAria {
            slot: Slot::MenuList,
            role: Role::Menu,
            id: self.links.id(&(), Part::Panel),
            orientation: orientation_attr(self.roving.config().orientation),
            label: None,
            labelled_by: self.links.panel_labelled_by(&()),
            disabled: false,
        }
    }

    /// Attributes of an item.
    pub fn item_aria(&self, key: &K) -> Option<ItemAria<'_>> {
        let registry = self.roving.registry();
        if !registry.contains(key) {
            return missing("Menu", key);
        }
        Some(ItemAria {
            slot: Slot::MenuItem,
            role: Role::MenuItem,
            id: self.item_ids.id(key, Part::Control),
            checked: false,
            disabled: !registry.is_enabled(key),
            tab_index: tab_index(self.focused() == Some(key)),
            controls: None,
            labelled_by: None,
        })
    }
}
