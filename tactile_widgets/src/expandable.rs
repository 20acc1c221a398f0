// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Disclosure: a trigger that shows and hides one panel.

use alloc::string::String;

use tactile_aria::{Part, Relationships, Role, Slot};
use tactile_modality::{Key, ModalitySource};
use tactile_press::{Button, ButtonConfig, FocusRequest, Response};
use tactile_value::{ControlledValue, IdGenerator, InteractionState};

use crate::parts::{PanelAria, TriggerAria};

/// An observed change of the expanded state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ExpandEvent {
    /// The panel opened.
    Expand,
    /// The panel closed.
    Collapse,
}

impl ExpandEvent {
    fn from_expanded(expanded: bool) -> Self {
        if expanded {
            Self::Expand
        } else {
            Self::Collapse
        }
    }
}

/// Construction parameters of an [`Expandable`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpandableConfig {
    /// Host-controlled expanded state.
    pub expanded: Option<bool>,
    /// Initial state when uncontrolled.
    pub default_expanded: Option<bool>,
    /// Disable the trigger.
    pub disabled: bool,
}

/// What the host should do after forwarding an event to the trigger.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpandResponse {
    /// Call `preventDefault` on the event.
    pub prevent_default: bool,
    /// New expanded state to report through `onChange`.
    pub changed: Option<bool>,
    /// `onExpand` / `onCollapse` to fire.
    pub event: Option<ExpandEvent>,
}

/// State of one trigger/panel pair.
///
/// Events are derived from the state the widget shows, so they fire once per actual
/// change and never for the state it mounted with.
#[derive(Clone, Debug)]
pub struct Expandable {
    expanded: ControlledValue<bool>,
    reported: bool,
    trigger: Button,
    links: Relationships<()>,
    id: String,
}

impl Expandable {
    /// Create the state. Part ids are derived from `id`.
    pub fn new(config: ExpandableConfig, id: impl Into<String>) -> Self {
        let expanded = ControlledValue::new(config.expanded, config.default_expanded, false);
        Self {
            reported: *expanded.get(),
            expanded,
            trigger: Button::new(ButtonConfig {
                disabled: config.disabled,
                auto_focus: false,
            }),
            links: Relationships::new(),
            id: id.into(),
        }
    }

    /// The root is rendered. Never produces an event.
    pub fn mount(&mut self) -> Option<FocusRequest> {
        self.reported = self.is_expanded();
        self.trigger.mount()
    }

    /// The root is gone.
    pub fn unmount(&mut self) {
        self.trigger.unmount();
    }

    /// The trigger is rendered. Returns its element id.
    pub fn mount_trigger(&mut self, host_id: Option<&str>) -> String {
        let id = self.part_id(host_id, "trigger");
        self.links.attach((), Part::Trigger, id.clone());
        id
    }

    /// The panel is rendered. Returns its element id.
    pub fn mount_panel(&mut self, host_id: Option<&str>) -> String {
        let id = self.part_id(host_id, "panel");
        self.links.attach((), Part::Panel, id.clone());
        id
    }

    /// The panel is gone.
    pub fn unmount_panel(&mut self) {
        self.links.detach(&(), Part::Panel);
    }

    fn part_id(&self, host_id: Option<&str>, part: &str) -> String {
        host_id.map_or_else(|| IdGenerator::part(&self.id, part), String::from)
    }

    /// Returns `true` if the panel shows.
    pub fn is_expanded(&self) -> bool {
        *self.expanded.get()
    }

    /// Returns `true` if the trigger is disabled.
    pub fn is_disabled(&self) -> bool {
        self.trigger.is_disabled()
    }

    /// Enable or disable the trigger.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.trigger.set_disabled(disabled);
    }

    /// Change the expanded state from code.
    pub fn set_expanded(&mut self, expanded: bool) -> ExpandResponse {
        let changed = self.expanded.set(expanded);
        ExpandResponse {
            prevent_default: false,
            changed,
            event: self.observe(),
        }
    }

    /// Flip the expanded state.
    pub fn toggle(&mut self) -> ExpandResponse {
        self.set_expanded(!self.is_expanded())
    }

    /// Reconcile with the host-controlled state.
    ///
    /// Returns the event to fire if the shown state changed.
    pub fn sync(&mut self, expanded: Option<bool>) -> Option<ExpandEvent> {
        self.expanded.sync(expanded);
        self.observe()
    }

    fn observe(&mut self) -> Option<ExpandEvent> {
        let now = self.is_expanded();
        if now == self.reported {
            return None;
        }
        self.reported = now;
        Some(ExpandEvent::from_expanded(now))
    }

    fn activate(&mut self, response: Response) -> ExpandResponse {
        let mut out = if response.activated {
            self.toggle()
        } else {
            ExpandResponse::default()
        };
        out.prevent_default = response.prevent_default;
        out
    }

    /// Click on the trigger.
    pub fn trigger_click(&mut self) -> ExpandResponse {
        let response = self.trigger.click();
        self.activate(response)
    }

    /// Key pressed on the trigger.
    pub fn trigger_key_down(&mut self, key: Key, source: &dyn ModalitySource) -> ExpandResponse {
        let response = self.trigger.key_down(key, true, source);
        self.activate(response)
    }

    /// Key released on the trigger.
    pub fn trigger_key_up(&mut self, key: Key) -> ExpandResponse {
        let response = self.trigger.key_up(key, true);
        self.activate(response)
    }

    /// The underlying trigger button, for pointer and focus input.
    pub fn trigger_mut(&mut self) -> &mut Button {
        &mut self.trigger
    }

    /// Attributes of the trigger.
    pub fn trigger_aria(&self) -> TriggerAria<'_> {
        TriggerAria {
            slot: Slot::ExpandableTrigger,
            id: self.links.id(&(), Part::Trigger),
            controls: self.links.aria_controls(&()),
            expanded: self.is_expanded(),
            disabled: self.is_disabled(),
        }
    }

    /// Attributes of the panel.
    pub fn panel_aria(&self) -> PanelAria<'_> {
        PanelAria {
            slot: Slot::ExpandablePanel,
            role: Role::Region,
            id: self.links.id(&(), Part::Panel),
            labelled_by: self.links.panel_labelled_by(&()),
            hidden: !self.is_expanded(),
        }
    }

    /// Interaction state of the trigger.
    pub fn state(&self) -> InteractionState {
        let mut state = self.trigger.state();
        state.set(InteractionState::EXPANDED, self.is_expanded());
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use tactile_modality::LocalModality;

    fn mounted(config: ExpandableConfig) -> Expandable {
        let mut e = Expandable::new(config, "faq");
        e.mount();
        e.mount_trigger(None);
        e.mount_panel(None);
        e
    }

    #[test]
    fn toggling_twice_restores_initial_state() {
        for initial in [false, true] {
            let mut e = mounted(ExpandableConfig {
                default_expanded: Some(initial),
                ..ExpandableConfig::default()
            });
            let before = (e.trigger_aria().expanded, e.panel_aria().hidden);
            let events: Vec<_> = (0..2).filter_map(|_| e.trigger_click().event).collect();
            let expected = if initial {
                [ExpandEvent::Collapse, ExpandEvent::Expand]
            } else {
                [ExpandEvent::Expand, ExpandEvent::Collapse]
            };
            assert_eq!(events, expected);
            assert_eq!((e.trigger_aria().expanded, e.panel_aria().hidden), before);
            assert_eq!(before, (initial, !initial));
        }
    }

    #[test]
    fn mount_fires_nothing() {
        let mut e = Expandable::new(
            ExpandableConfig {
                expanded: Some(true),
                ..ExpandableConfig::default()
            },
            "x",
        );
        e.mount();
        assert_eq!(e.sync(Some(true)), None);
        assert!(e.trigger_aria().expanded);
    }

    #[test]
    fn trigger_and_panel_are_wired() {
        let mut e = mounted(ExpandableConfig::default());
        assert_eq!(e.trigger_aria().controls, Some("faq-panel"));
        assert_eq!(e.panel_aria().labelled_by, Some("faq-trigger"));
        assert_eq!(e.panel_aria().role, Role::Region);
        assert!(e.panel_aria().hidden);

        e.unmount_panel();
        assert_eq!(e.trigger_aria().controls, None);
        e.mount_panel(Some("answer"));
        assert_eq!(e.trigger_aria().controls, Some("answer"));
    }

    #[test]
    fn keyboard_toggles_on_release() {
        let m = LocalModality::new();
        let mut e = mounted(ExpandableConfig::default());
        let down = e.trigger_key_down(Key::Enter, &m);
        assert!(down.prevent_default);
        assert_eq!(down.event, None);
        let up = e.trigger_key_up(Key::Enter);
        assert_eq!(up.changed, Some(true));
        assert_eq!(up.event, Some(ExpandEvent::Expand));
        assert!(e.state().contains(InteractionState::EXPANDED));
    }

    #[test]
    fn controlled_events_follow_shown_state() {
        let mut e = mounted(ExpandableConfig {
            expanded: Some(false),
            ..ExpandableConfig::default()
        });
        let out = e.trigger_click();
        assert_eq!(out.changed, Some(true));
        assert_eq!(out.event, Some(ExpandEvent::Expand));
        // The host keeps it closed.
        assert_eq!(e.sync(Some(false)), Some(ExpandEvent::Collapse));
        assert_eq!(e.sync(Some(false)), None);
    }

    #[test]
    fn disabled_trigger_does_nothing() {
        let mut e = mounted(ExpandableConfig {
            disabled: true,
            ..ExpandableConfig::default()
        });
        let out = e.trigger_click();
        assert!(out.prevent_default);
        assert_eq!(out.event, None);
        assert!(e.trigger_aria().disabled);
    }
}
