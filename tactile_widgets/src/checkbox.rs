// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Standalone checkbox and switch.

use alloc::string::String;

use log::warn;
use tactile_aria::{Label, Role, Slot};
use tactile_modality::{Key, ModalitySource};
use tactile_press::{
    ButtonConfig, Check, CheckConfig, CheckResponse, ControlStrategy, EnterKey, FocusRequest,
};
use tactile_value::{IdGenerator, InteractionState};

/// Checkbox or switch.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToggleKind {
    /// Two-state checkbox that can also show a mixed state.
    #[default]
    Checkbox,
    /// On/off switch.
    Switch,
}

/// Construction parameters of a [`Checkbox`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckboxConfig {
    /// Checkbox or switch.
    pub kind: ToggleKind,
    /// Host-controlled checked state.
    pub checked: Option<bool>,
    /// Initial state when uncontrolled.
    pub default_checked: Option<bool>,
    /// Start in the mixed state (checkboxes only).
    pub indeterminate: bool,
    /// Disable the control.
    pub disabled: bool,
    /// Focus the control once after it mounts.
    pub auto_focus: bool,
    /// What releasing Enter does.
    pub enter: EnterKey,
    /// Accessible name.
    pub label: Label,
    /// Host-supplied element id.
    pub id: Option<String>,
}

impl CheckboxConfig {
    /// An unchecked, uncontrolled checkbox.
    pub fn new(label: impl Into<Label>) -> Self {
        Self {
            kind: ToggleKind::Checkbox,
            checked: None,
            default_checked: None,
            indeterminate: false,
            disabled: false,
            auto_focus: false,
            enter: EnterKey::default(),
            label: label.into(),
            id: None,
        }
    }

    /// An unchecked, uncontrolled switch.
    pub fn switch(label: impl Into<Label>) -> Self {
        Self {
            kind: ToggleKind::Switch,
            ..Self::new(label)
        }
    }
}

/// Attributes of a checkbox or switch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ToggleAria<'a> {
    /// `data-slot`
    pub slot: Slot,
    /// `role`
    pub role: Role,
    /// Element id.
    pub id: &'a str,
    /// `aria-checked`: `"true"`, `"false"`, or `"mixed"`.
    pub checked: &'static str,
    /// `aria-disabled`
    pub disabled: bool,
    /// `aria-label`
    pub label: Option<&'a str>,
    /// `aria-labelledby`
    pub labelled_by: Option<&'a str>,
}

/// A standalone checkbox or switch.
#[derive(Clone, Debug)]
pub struct Checkbox {
    kind: ToggleKind,
    check: Check<()>,
    label: Label,
    id: String,
    label_id: Option<String>,
}

impl Checkbox {
    /// Create the control; `ids` names it unless the config carries an id.
    pub fn new(config: CheckboxConfig, ids: &mut IdGenerator) -> Self {
        let CheckboxConfig {
            kind,
            checked,
            default_checked,
            indeterminate,
            disabled,
            auto_focus,
            enter,
            label,
            id,
        } = config;
        let mut check = Check::new(
            (),
            CheckConfig {
                strategy: ControlStrategy::Checkbox,
                toggle: false,
                enter,
                button: ButtonConfig {
                    disabled,
                    auto_focus,
                },
            },
            checked,
            default_checked,
        );
        if indeterminate {
            if kind == ToggleKind::Switch {
                warn!("switches have no mixed state; ignoring `indeterminate`");
            } else {
                check.set_indeterminate(true);
            }
        }
        let id = ids.resolve(id.as_deref());
        let label_id = label
            .visible_text()
            .map(|_| IdGenerator::part(&id, "label"));
        Self {
            kind,
            check,
            label,
            id,
            label_id,
        }
    }

    /// Checkbox or switch.
    pub fn kind(&self) -> ToggleKind {
        self.kind
    }

    /// Element id of the control.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Element id of the visible label, if the label is visible text.
    pub fn label_id(&self) -> Option<&str> {
        self.label_id.as_deref()
    }

    /// Accessible name.
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// The underlying check primitive, for pointer input.
    pub fn check_mut(&mut self) -> &mut Check<()> {
        &mut self.check
    }

    /// The element exists. Returns a focus request for `auto_focus` controls.
    pub fn mount(&mut self) -> Option<FocusRequest> {
        self.check.mount()
    }

    /// The element is gone.
    pub fn unmount(&mut self) {
        self.check.unmount();
    }

    /// Current checked state.
    pub fn is_checked(&self) -> bool {
        self.check.is_checked(None)
    }

    /// Returns `true` in the mixed state.
    pub fn is_indeterminate(&self) -> bool {
        self.check.is_indeterminate()
    }

    /// Enter or leave the mixed state. Switches have none.
    pub fn set_indeterminate(&mut self, indeterminate: bool) {
        if self.kind == ToggleKind::Switch {
            if indeterminate {
                warn!("switches have no mixed state; ignoring `indeterminate`");
            }
            return;
        }
        self.check.set_indeterminate(indeterminate);
    }

    /// Enable or disable the control.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.check.set_disabled(disabled);
    }

    /// Reconcile with the host-controlled state.
    pub fn sync(&mut self, checked: Option<bool>) {
        self.check.sync(checked);
    }

    /// Click on the control or its label.
    pub fn click(&mut self) -> CheckResponse<()> {
        self.check.click(None)
    }

    /// Key pressed on the control.
    pub fn key_down(&mut self, key: Key, source: &dyn ModalitySource) -> CheckResponse<()> {
        self.check.key_down(key, true, source, None)
    }

    /// Key released on the control.
    pub fn key_up(&mut self, key: Key) -> CheckResponse<()> {
        self.check.key_up(key, true, None)
    }

    /// The control received focus.
    pub fn focus(&mut self, source: &dyn ModalitySource) -> bool {
        self.check.button_mut().focus(source)
    }

    /// The control lost focus.
    pub fn blur(&mut self) {
        self.check.button_mut().blur();
    }

    /// Interaction state for render props.
    pub fn state(&self) -> InteractionState {
        self.check.state(None)
    }

    /// Attributes of the control.
    pub fn aria(&self) -> ToggleAria<'_> {
        let (slot, role) = match self.kind {
            ToggleKind::Checkbox => (Slot::Checkbox, Role::Checkbox),
            ToggleKind::Switch => (Slot::Switch, Role::Switch),
        };
        let checked = if self.is_indeterminate() {
            "mixed"
        } else if self.is_checked() {
            "true"
        } else {
            "false"
        };
        ToggleAria {
            slot,
            role,
            id: &self.id,
            checked,
            disabled: self.check.is_disabled(),
            label: self.label.aria_label(),
            labelled_by: self.label.aria_labelledby(self.label_id.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactile_modality::LocalModality;

    fn mounted(config: CheckboxConfig) -> Checkbox {
        let mut ids = IdGenerator::default();
        let mut c = Checkbox::new(config, &mut ids);
        c.mount();
        c
    }

    #[test]
    fn click_toggles_and_reports() {
        let mut c = mounted(CheckboxConfig::new("Subscribe"));
        assert_eq!(c.aria().checked, "false");
        assert_eq!(c.click().changed, Some(true));
        assert_eq!(c.aria().checked, "true");
        assert_eq!(c.click().changed, Some(false));
    }

    #[test]
    fn enter_submits_and_space_toggles() {
        let m = LocalModality::new();
        let mut c = mounted(CheckboxConfig::new("Remember me"));
        c.key_down(Key::Enter, &m);
        let enter = c.key_up(Key::Enter);
        assert!(enter.submit);
        assert_eq!(enter.changed, None);
        c.key_down(Key::Space, &m);
        assert_eq!(c.key_up(Key::Space).changed, Some(true));
    }

    #[test]
    fn mixed_state_clears_on_change() {
        let mut c = mounted(CheckboxConfig {
            indeterminate: true,
            ..CheckboxConfig::new("All")
        });
        assert_eq!(c.aria().checked, "mixed");
        c.click();
        assert_eq!(c.aria().checked, "true");
    }

    #[test]
    fn switch_has_no_mixed_state() {
        let mut s = mounted(CheckboxConfig {
            indeterminate: true,
            ..CheckboxConfig::switch("Wi-Fi")
        });
        s.set_indeterminate(true);
        let aria = s.aria();
        assert_eq!(aria.role, Role::Switch);
        assert_eq!(aria.checked, "false");
    }

    #[test]
    fn controlled_state_follows_host() {
        let mut c = mounted(CheckboxConfig {
            checked: Some(false),
            ..CheckboxConfig::new("Terms")
        });
        assert_eq!(c.click().changed, Some(true));
        // The host rejects the change.
        c.sync(Some(false));
        assert!(!c.is_checked());
    }

    #[test]
    fn label_shapes_map_to_attributes() {
        let mut ids = IdGenerator::new("form");
        let visible = Checkbox::new(CheckboxConfig::new("Visible"), &mut ids);
        assert_eq!(visible.id(), "form-0");
        assert_eq!(visible.aria().labelled_by, Some("form-0-label"));

        let hidden = Checkbox::new(
            CheckboxConfig::new(Label::ScreenReader("Select row".into())),
            &mut ids,
        );
        assert_eq!(hidden.aria().label, Some("Select row"));
        assert_eq!(hidden.aria().labelled_by, None);
        assert_eq!(hidden.label_id(), None);
    }

    #[test]
    fn disabled_checkbox_never_changes() {
        let mut c = mounted(CheckboxConfig {
            disabled: true,
            ..CheckboxConfig::new("Locked")
        });
        let out = c.click();
        assert!(out.prevent_default);
        assert_eq!(out.changed, None);
        assert!(c.state().contains(InteractionState::DISABLED));
    }
}
