// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toggle and selection semantics on top of [`Button`].

use tactile_modality::{Key, ModalitySource};
use tactile_nav::RovingMove;
use tactile_value::{ControlledValue, InteractionState};

use crate::button::{Button, ButtonConfig, FocusRequest, Response};
use crate::group::GroupController;

/// How a check control treats activation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ControlStrategy {
    /// Every activation flips the checked state.
    #[default]
    Checkbox,
    /// Activation checks; a checked radio stays checked unless toggling is allowed.
    Radio,
}

/// What releasing Enter does on a check control.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EnterKey {
    /// Ask the enclosing form to submit, like a native checkbox.
    #[default]
    Submit,
    /// Toggle, like Space.
    Toggle,
}

/// Configuration for a [`Check`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckConfig {
    /// Checkbox or radio semantics.
    pub strategy: ControlStrategy,
    /// Let a checked radio uncheck itself.
    pub toggle: bool,
    /// Enter key behavior.
    pub enter: EnterKey,
    /// Underlying button configuration.
    pub button: ButtonConfig,
}

/// What the host should do after forwarding an event to a [`Check`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckResponse<K> {
    /// Call `preventDefault` on the event.
    pub prevent_default: bool,
    /// New checked state to report to the consumer.
    pub changed: Option<bool>,
    /// The enclosing form should be submitted.
    pub submit: bool,
    /// Focus should move to a sibling (and activate it if requested).
    pub roving: Option<RovingMove<K>>,
}

impl<K> Default for CheckResponse<K> {
    fn default() -> Self {
        Self::from_button(Response::IGNORED)
    }
}

impl<K> CheckResponse<K> {
    fn from_button(response: Response) -> Self {
        Self {
            prevent_default: response.prevent_default,
            changed: None,
            submit: false,
            roving: None,
        }
    }
}

/// A checkbox, switch, or radio.
///
/// Outside a group the checked state lives in the control (controlled or not). Inside
/// a group the [`GroupController`] passed to each call is the source of truth.
#[derive(Clone, Debug)]
pub struct Check<K> {
    key: K,
    config: CheckConfig,
    button: Button,
    checked: ControlledValue<bool>,
    indeterminate: bool,
}

impl<K: Clone> Check<K> {
    /// Create a control identified by `key` within its group.
    pub fn new(key: K, config: CheckConfig, checked: Option<bool>, default_checked: Option<bool>) -> Self {
        Self {
            key,
            button: Button::new(config.button),
            config,
            checked: ControlledValue::new(checked, default_checked, false),
            indeterminate: false,
        }
    }

    /// The item key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The configuration.
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// The underlying button.
    pub fn button(&self) -> &Button {
        &self.button
    }

    /// Mutable access to the underlying button (focus, hover, mount).
    pub fn button_mut(&mut self) -> &mut Button {
        &mut self.button
    }

    /// The element now exists.
    pub fn mount(&mut self) -> Option<FocusRequest> {
        self.button.mount()
    }

    /// The element is gone.
    pub fn unmount(&mut self) {
        self.button.unmount();
    }

    /// Enable or disable the control.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.button.disabled = disabled;
        self.button.set_disabled(disabled);
    }

    /// Returns `true` if the control is disabled.
    pub fn is_disabled(&self) -> bool {
        self.button.is_disabled()
    }

    /// Reconcile with the host's `checked` value for this render.
    pub fn sync(&mut self, checked: Option<bool>) {
        self.checked.sync(checked);
    }

    /// Show the mixed state. Any change clears it.
    pub fn set_indeterminate(&mut self, indeterminate: bool) {
        self.indeterminate = indeterminate;
    }

    /// Returns `true` while the mixed state is shown.
    pub fn is_indeterminate(&self) -> bool {
        self.indeterminate
    }

    /// Current checked state.
    pub fn is_checked(&self, group: Option<&dyn GroupController<K>>) -> bool {
        match group {
            Some(g) => g.is_checked(&self.key),
            None => *self.checked.get(),
        }
    }

    /// Request a new checked state.
    ///
    /// Does nothing when disabled or unmounted, or for a checked radio that may not
    /// toggle. Returns the new state when it changed.
    pub fn emit_change(
        &mut self,
        next: bool,
        group: Option<&mut dyn GroupController<K>>,
    ) -> Option<bool> {
        if self.button.is_disabled() || !self.button.is_mounted() {
            return None;
        }
        let current = self.is_checked(group.as_deref());
        if self.config.strategy == ControlStrategy::Radio && current && !self.config.toggle {
            return None;
        }
        self.indeterminate = false;
        match group {
            Some(g) => {
                if next == current {
                    return None;
                }
                g.on_change(&self.key, next);
                Some(next)
            }
            None => self.checked.set(next),
        }
    }

    /// Activation by click (pointer, or synthesized by the host).
    pub fn click(&mut self, group: Option<&mut dyn GroupController<K>>) -> CheckResponse<K> {
        let response = self.button.click();
        let mut out = CheckResponse::from_button(response);
        if response.activated {
            let current = self.is_checked(group.as_deref());
            out.changed = self.emit_change(!current, group);
        }
        out
    }

    /// Key pressed on the control.
    ///
    /// For radios inside a group, arrow keys on a focus-visible item resolve to a
    /// [`RovingMove`] among the enabled siblings.
    pub fn key_down(
        &mut self,
        key: Key,
        on_self: bool,
        source: &dyn ModalitySource,
        group: Option<&mut dyn GroupController<K>>,
    ) -> CheckResponse<K> {
        let response = self.button.key_down(key, on_self, source);
        let mut out = CheckResponse::from_button(response);
        if self.button.is_disabled() || !self.button.is_mounted() {
            return out;
        }
        let roving = self.config.strategy == ControlStrategy::Radio
            && key.is_arrow()
            && self.button.is_focus_visible();
        if let (true, Some(g)) = (roving, group) {
            out.roving = g.navigate(&self.key, key);
            out.prevent_default = true;
        }
        out
    }

    /// Key released on the control.
    pub fn key_up(
        &mut self,
        key: Key,
        on_self: bool,
        group: Option<&mut dyn GroupController<K>>,
    ) -> CheckResponse<K> {
        if !self.button.is_mounted() {
            return CheckResponse::from_button(Response::IGNORED);
        }
        if self.button.is_disabled() {
            return CheckResponse::from_button(Response::PREVENTED);
        }
        if !self.button.release_key(key, on_self) {
            return CheckResponse::from_button(Response::IGNORED);
        }
        let mut out = CheckResponse::from_button(Response::PREVENTED);
        let toggles = match key {
            Key::Space => true,
            Key::Enter => self.config.enter == EnterKey::Toggle,
            _ => false,
        };
        if toggles {
            let current = self.is_checked(group.as_deref());
            out.changed = self.emit_change(!current, group);
        } else if key == Key::Enter {
            out.submit = true;
        }
        out
    }

    /// Snapshot of the interaction state, including checked/mixed.
    pub fn state(&self, group: Option<&dyn GroupController<K>>) -> InteractionState {
        let mut s = self.button.state();
        s.set(InteractionState::CHECKED, self.is_checked(group));
        s.set(InteractionState::INDETERMINATE, self.indeterminate);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::{CheckGroupValue, RadioGroupValue};
    use tactile_modality::{LocalModality, Modifiers};
    use tactile_nav::RovingConfig;

    fn checkbox(config: CheckConfig) -> Check<()> {
        let mut c = Check::new((), config, None, None);
        c.mount();
        c
    }

    fn radio(key: u8) -> Check<u8> {
        let mut c = Check::new(
            key,
            CheckConfig {
                strategy: ControlStrategy::Radio,
                ..CheckConfig::default()
            },
            None,
            None,
        );
        c.mount();
        c
    }

    #[test]
    fn click_toggles_standalone_checkbox() {
        let mut c = checkbox(CheckConfig::default());
        assert_eq!(c.click(None).changed, Some(true));
        assert!(c.is_checked(None));
        assert_eq!(c.click(None).changed, Some(false));
    }

    #[test]
    fn space_toggles_enter_submits_by_default() {
        let m = LocalModality::new();
        let mut c = checkbox(CheckConfig::default());
        c.key_down(Key::Space, true, &m, None);
        assert_eq!(c.key_up(Key::Space, true, None).changed, Some(true));

        c.key_down(Key::Enter, true, &m, None);
        let up = c.key_up(Key::Enter, true, None);
        assert!(up.submit);
        assert_eq!(up.changed, None);
        assert!(c.is_checked(None));
    }

    #[test]
    fn enter_can_toggle() {
        let m = LocalModality::new();
        let mut c = checkbox(CheckConfig {
            enter: EnterKey::Toggle,
            ..CheckConfig::default()
        });
        c.key_down(Key::Enter, true, &m, None);
        let up = c.key_up(Key::Enter, true, None);
        assert!(!up.submit);
        assert_eq!(up.changed, Some(true));
    }

    #[test]
    fn checked_radio_does_not_uncheck_itself() {
        let mut group = RadioGroupValue::new(None, Some(1), RovingConfig::default());
        let mut r = radio(1);
        assert_eq!(r.click(Some(&mut group)).changed, None);
        assert!(r.is_checked(Some(&group)));

        let mut other = radio(2);
        assert_eq!(other.click(Some(&mut group)).changed, Some(true));
        assert!(!r.is_checked(Some(&group)));
        assert_eq!(group.take_change(), Some(Some(2)));
    }

    #[test]
    fn toggle_radio_can_uncheck() {
        let mut group = RadioGroupValue::new(None, Some(1), RovingConfig::default());
        let mut r = Check::new(
            1,
            CheckConfig {
                strategy: ControlStrategy::Radio,
                toggle: true,
                ..CheckConfig::default()
            },
            None,
            None,
        );
        r.mount();
        assert_eq!(r.click(Some(&mut group)).changed, Some(false));
        assert_eq!(group.value(), None);
    }

    #[test]
    fn disabled_or_unmounted_never_changes() {
        let mut c = checkbox(CheckConfig::default());
        c.set_disabled(true);
        assert_eq!(c.emit_change(true, None), None);
        assert!(c.click(None).prevent_default);
        c.set_disabled(false);
        c.unmount();
        assert_eq!(c.emit_change(true, None), None);
    }

    #[test]
    fn indeterminate_cleared_by_change() {
        let mut c = checkbox(CheckConfig::default());
        c.set_indeterminate(true);
        assert!(c.state(None).contains(InteractionState::INDETERMINATE));
        c.click(None);
        assert!(!c.is_indeterminate());
        assert!(c.state(None).contains(InteractionState::CHECKED));
    }

    #[test]
    fn check_group_items_report_through_group() {
        let mut group: CheckGroupValue<u8> = CheckGroupValue::new(None, None);
        let mut a = Check::new(0, CheckConfig::default(), None, None);
        a.mount();
        assert_eq!(a.click(Some(&mut group)).changed, Some(true));
        assert_eq!(group.value(), &[0]);
    }

    #[test]
    fn arrow_on_focus_visible_radio_roves() {
        let m = LocalModality::new();
        let mut group = RadioGroupValue::new(None, None, RovingConfig::default());
        let mut radios: [Check<u8>; 4] = core::array::from_fn(|i| radio(i as u8));
        radios[0].set_disabled(true);
        for r in &radios {
            group.register(*r.key(), r.is_disabled());
        }

        m.key_down(Key::Tab, Modifiers::empty());
        radios[1].button_mut().focus(&m);
        m.key_down(Key::ArrowDown, Modifiers::empty());
        let out = radios[1].key_down(Key::ArrowDown, true, &m, Some(&mut group));
        assert!(out.prevent_default);
        assert_eq!(
            out.roving,
            Some(RovingMove {
                target: 2,
                activate: true
            })
        );
    }
}
