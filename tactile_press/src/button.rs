// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press and keyboard activation for custom clickable controls.

use kurbo::Point;
use tactile_modality::{FocusVisible, Key, ModalitySource, PointerId};
use tactile_value::InteractionState;

use crate::press::{PressResult, PressTracker};

/// What the host should do with the event it just forwarded.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Response {
    /// Call `preventDefault` (or the toolkit equivalent) on the event.
    pub prevent_default: bool,
    /// The control was activated by this event.
    pub activated: bool,
}

impl Response {
    /// Nothing happened; let the event continue.
    pub const IGNORED: Self = Self {
        prevent_default: false,
        activated: false,
    };
    /// Swallow the event without activating.
    pub const PREVENTED: Self = Self {
        prevent_default: true,
        activated: false,
    };
    /// The control was activated.
    pub const ACTIVATED: Self = Self {
        prevent_default: false,
        activated: true,
    };
}

/// Request to move focus to the control, emitted once after mount for `auto_focus`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FocusRequest;

/// Configuration for a [`Button`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ButtonConfig {
    /// Disabled buttons swallow pointer and keyboard input and never activate.
    pub disabled: bool,
    /// Focus the control once, right after it mounts.
    pub auto_focus: bool,
}

/// Interaction state of a custom button.
///
/// Mouse, touch, Space, and Enter all end up in [`Button::click`], the one place that
/// decides whether the control activates.
#[derive(Clone, Debug)]
pub struct Button {
    config: ButtonConfig,
    focus: FocusVisible,
    press: PressTracker,
    armed: Option<Key>,
    hovered: bool,
    mounted: bool,
    auto_focused: bool,
}

impl Button {
    /// Create an unmounted button.
    pub fn new(config: ButtonConfig) -> Self {
        Self {
            config,
            focus: FocusVisible::new(),
            press: PressTracker::new(),
            armed: None,
            hovered: false,
            mounted: false,
            auto_focused: false,
        }
    }

    /// The current configuration.
    pub fn config(&self) -> ButtonConfig {
        self.config
    }

    /// Enable or disable the button. Disabling drops any in-progress press.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
        if disabled {
            self.press.clear();
            self.armed = None;
        }
    }

    /// Returns `true` if the button is disabled.
    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    /// Returns `true` between [`mount`](Self::mount) and [`unmount`](Self::unmount).
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// The element now exists.
    ///
    /// Returns a [`FocusRequest`] the first time an `auto_focus` button mounts. The
    /// resulting focus is visible regardless of the last input modality.
    pub fn mount(&mut self) -> Option<FocusRequest> {
        self.mounted = true;
        if self.config.auto_focus && !self.auto_focused {
            self.auto_focused = true;
            self.focus.focus_programmatic(true);
            return Some(FocusRequest);
        }
        None
    }

    /// The element is gone; later events are ignored.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.press.clear();
        self.armed = None;
        self.focus.on_blur();
    }

    /// The single activation path.
    pub fn click(&mut self) -> Response {
        if !self.mounted {
            return Response::IGNORED;
        }
        if self.config.disabled {
            return Response::PREVENTED;
        }
        Response::ACTIVATED
    }

    /// Pointer pressed on the element.
    pub fn pointer_down(&mut self, pointer: Option<PointerId>, position: Point, now: u64) -> Response {
        if !self.mounted {
            return Response::IGNORED;
        }
        if self.config.disabled {
            return Response::PREVENTED;
        }
        self.press.on_down(pointer, position, now);
        Response::IGNORED
    }

    /// Pointer moved while possibly pressing the element.
    pub fn pointer_move(&mut self, pointer: Option<PointerId>, position: Point) {
        self.press.on_move(pointer, position);
    }

    /// Pointer released; `inside` tells whether it was over the element.
    pub fn pointer_up(
        &mut self,
        pointer: Option<PointerId>,
        inside: bool,
        position: Point,
        now: u64,
    ) -> Response {
        if self.config.disabled {
            self.press.cancel(pointer);
            return Response::PREVENTED;
        }
        match self.press.on_up(pointer, inside, position, now) {
            PressResult::Activate => self.click(),
            PressResult::Suppressed => Response::IGNORED,
        }
    }

    /// Pointer entered or left the element.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Key pressed while the element or one of its descendants has focus.
    ///
    /// `on_self` is `true` when the element itself is the event target.
    pub fn key_down(&mut self, key: Key, on_self: bool, source: &dyn ModalitySource) -> Response {
        if !self.mounted {
            return Response::IGNORED;
        }
        if self.config.disabled {
            return swallow_unless_tab(key);
        }
        self.focus.on_key_down(source);
        if on_self && matches!(key, Key::Space | Key::Enter) {
            self.armed = Some(key);
            return Response::PREVENTED;
        }
        Response::IGNORED
    }

    /// Key released; Space/Enter released on the element synthesizes a click.
    pub fn key_up(&mut self, key: Key, on_self: bool) -> Response {
        if !self.mounted {
            return Response::IGNORED;
        }
        if self.config.disabled {
            return swallow_unless_tab(key);
        }
        if self.release_key(key, on_self) {
            let response = self.click();
            return Response {
                prevent_default: true,
                ..response
            };
        }
        Response::IGNORED
    }

    /// Disarm `key` if it was armed by [`key_down`](Self::key_down) on the element.
    ///
    /// Returns `true` if the release completes a keyboard activation gesture.
    pub fn release_key(&mut self, key: Key, on_self: bool) -> bool {
        if on_self && self.armed == Some(key) {
            self.armed = None;
            return true;
        }
        false
    }

    /// The element received focus.
    pub fn focus(&mut self, source: &dyn ModalitySource) -> bool {
        self.focus.on_focus(source)
    }

    /// The element lost focus. Any armed key is dropped.
    pub fn blur(&mut self) {
        self.focus.on_blur();
        self.armed = None;
    }

    /// Returns `true` if the element has focus that should be indicated.
    pub fn is_focus_visible(&self) -> bool {
        self.focus.is_focus_visible()
    }

    /// Returns `true` if the element has focus.
    pub fn is_focused(&self) -> bool {
        self.focus.is_focused()
    }

    /// Snapshot of the interaction state.
    pub fn state(&self) -> InteractionState {
        let mut s = InteractionState::empty();
        s.set(InteractionState::HOVERED, self.hovered && !self.config.disabled);
        s.set(InteractionState::FOCUSED, self.focus.is_focused());
        s.set(InteractionState::FOCUS_VISIBLE, self.focus.is_focus_visible());
        s.set(
            InteractionState::PRESSED,
            self.press.is_pressed() || self.armed.is_some(),
        );
        s.set(InteractionState::DISABLED, self.config.disabled);
        s
    }
}

fn swallow_unless_tab(key: Key) -> Response {
    if key == Key::Tab {
        Response::IGNORED
    } else {
        Response::PREVENTED
    }
}
