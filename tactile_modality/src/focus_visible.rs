// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-element focus-visible detection.

use crate::modality::ModalitySource;

/// Focus and focus-visible state of a single element.
///
/// Each focusable element owns its own detector. On focus it reads the shared
/// modality signal: focus that arrives while the keyboard is in use (including arrow-key
/// moves between siblings of a composite, where the key is still held) is visible,
/// pointer focus is not. Programmatic focus is visible only by explicit opt-in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FocusVisible {
    focused: bool,
    visible: bool,
}

impl FocusVisible {
    /// Create an unfocused detector.
    pub const fn new() -> Self {
        Self {
            focused: false,
            visible: false,
        }
    }

    /// Handle the element gaining focus. Returns whether the focus is visible.
    pub fn on_focus(&mut self, source: &dyn ModalitySource) -> bool {
        self.focused = true;
        self.visible = source.keyboard_driven();
        self.visible
    }

    /// Handle focus placed by code, bypassing modality inference.
    pub fn focus_programmatic(&mut self, visible: bool) {
        self.focused = true;
        self.visible = visible;
    }

    /// Handle a key press while focused.
    ///
    /// Pressing a key after focusing with the pointer switches to a visible indicator.
    pub fn on_key_down(&mut self, source: &dyn ModalitySource) {
        if self.focused && source.keyboard_driven() {
            self.visible = true;
        }
    }

    /// Handle the element losing focus.
    pub fn on_blur(&mut self) {
        self.focused = false;
        self.visible = false;
    }

    /// Returns `true` while the element has focus.
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Returns `true` while the element has focus that should be indicated.
    pub const fn is_focus_visible(&self) -> bool {
        self.focused && self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Key, LocalModality, Modifiers, PointerKind};

    #[test]
    fn pointer_focus_is_not_visible() {
        let m = LocalModality::new();
        let mut f = FocusVisible::new();
        m.pointer_down(PointerKind::Mouse);
        assert!(!f.on_focus(&m));
        assert!(f.is_focused());
        assert!(!f.is_focus_visible());
    }

    #[test]
    fn keyboard_focus_is_visible_until_blur() {
        let m = LocalModality::new();
        let mut f = FocusVisible::new();
        m.key_down(Key::Tab, Modifiers::empty());
        assert!(f.on_focus(&m));
        f.on_blur();
        assert!(!f.is_focus_visible());
        assert!(!f.is_focused());
    }

    #[test]
    fn sibling_moves_preserve_visibility() {
        let m = LocalModality::new();
        let mut a = FocusVisible::new();
        let mut b = FocusVisible::new();
        m.key_down(Key::Tab, Modifiers::empty());
        m.key_up();
        a.on_focus(&m);
        // Arrow key moves focus from `a` to `b` while the key is held.
        m.key_down(Key::ArrowDown, Modifiers::empty());
        a.on_blur();
        assert!(b.on_focus(&m));
    }

    #[test]
    fn typing_after_click_shows_ring() {
        let m = LocalModality::new();
        let mut f = FocusVisible::new();
        m.pointer_down(PointerKind::Mouse);
        f.on_focus(&m);
        m.key_down(Key::Space, Modifiers::empty());
        f.on_key_down(&m);
        assert!(f.is_focus_visible());
    }

    #[test]
    fn programmatic_focus_is_opt_in() {
        let mut f = FocusVisible::new();
        f.focus_programmatic(true);
        assert!(f.is_focus_visible());
        f.focus_programmatic(false);
        assert!(!f.is_focus_visible());
    }
}
