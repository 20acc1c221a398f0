// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard input as seen by interaction primitives.

/// A logical key.
///
/// Only the keys that interaction primitives react to get their own variant;
/// everything else is [`Key::Other`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A key producing a printable character.
    Char(char),
    /// The space bar.
    Space,
    /// Enter / Return.
    Enter,
    /// Arrow up.
    ArrowUp,
    /// Arrow down.
    ArrowDown,
    /// Arrow left.
    ArrowLeft,
    /// Arrow right.
    ArrowRight,
    /// Home.
    Home,
    /// End.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Tab.
    Tab,
    /// Escape.
    Escape,
    /// Any other key (function keys, bare modifiers, ...).
    Other,
}

impl Key {
    /// The printable character this key produces, if any.
    ///
    /// Space counts as printable so that type-ahead queries can contain spaces.
    pub fn printable(self) -> Option<char> {
        match self {
            Self::Char(c) if !c.is_control() => Some(c),
            Self::Space => Some(' '),
            _ => None,
        }
    }

    /// Returns `true` for the four arrow keys.
    pub fn is_arrow(self) -> bool {
        matches!(
            self,
            Self::ArrowUp | Self::ArrowDown | Self::ArrowLeft | Self::ArrowRight
        )
    }
}

bitflags::bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 0b0001;
        /// Control.
        const CTRL  = 0b0010;
        /// Alt / Option.
        const ALT   = 0b0100;
        /// Meta / Command / Windows.
        const META  = 0b1000;
    }
}

impl Modifiers {
    /// Returns `true` if a shortcut modifier (Ctrl, Alt, Meta) is held.
    ///
    /// Shortcuts are not navigation: they neither mark keyboard modality nor feed type-ahead.
    pub fn is_shortcut(self) -> bool {
        self.intersects(Self::CTRL | Self::ALT | Self::META)
    }
}
