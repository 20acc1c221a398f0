// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The "last input modality" signal.
//!
//! Interactive roots observe raw input and record which kind of device was used last.
//! Individual controls only ever read that signal through [`ModalitySource`].
//!
//! Two sources are provided:
//! - [`GlobalModality`]: process-wide state whose lifecycle is tied to [`ModalityRoot`]
//!   guards. The first root initializes it, every root feeds it, and dropping the last
//!   root tears it down.
//! - [`LocalModality`]: a self-contained signal for hosts that embed several independent
//!   UIs in one process, and for tests.

use core::cell::Cell;
use core::num::NonZeroU64;
use core::sync::atomic::{AtomicBool, AtomicU8, AtomicUsize, Ordering};

use crate::key::{Key, Modifiers};

/// The kind of input that most recently interacted with the UI.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Modality {
    /// Keyboard or assistive technology driving the keyboard interface.
    Keyboard,
    /// Mouse or pen.
    Pointer,
    /// Touch screen.
    Touch,
    /// Focus moved by code (for example an `autofocus` request).
    Programmatic,
}

impl Modality {
    const fn encode(m: Option<Self>) -> u8 {
        match m {
            None => 0,
            Some(Self::Keyboard) => 1,
            Some(Self::Pointer) => 2,
            Some(Self::Touch) => 3,
            Some(Self::Programmatic) => 4,
        }
    }

    const fn decode(raw: u8) -> Option<Self> {
        match raw {
            1 => Some(Self::Keyboard),
            2 => Some(Self::Pointer),
            3 => Some(Self::Touch),
            4 => Some(Self::Programmatic),
            _ => None,
        }
    }
}

/// Pointer identifier for telling concurrent pointers apart.
pub type PointerId = NonZeroU64;

/// Kind of pointing device.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Mouse.
    Mouse,
    /// Pen or stylus.
    Pen,
    /// Touch contact.
    Touch,
}

impl PointerKind {
    /// The modality this device contributes.
    pub fn modality(self) -> Modality {
        match self {
            Self::Mouse | Self::Pen => Modality::Pointer,
            Self::Touch => Modality::Touch,
        }
    }
}

/// Read-only view of the input modality signal.
pub trait ModalitySource {
    /// The most recent modality, or `None` before any input was seen.
    fn last(&self) -> Option<Modality>;

    /// Returns `true` while a non-shortcut key is held down.
    fn key_in_flight(&self) -> bool;

    /// Returns `true` if focus arriving now should be visibly indicated.
    fn keyboard_driven(&self) -> bool {
        self.key_in_flight() || self.last() == Some(Modality::Keyboard)
    }
}

static LAST: AtomicU8 = AtomicU8::new(0);
static KEY_HELD: AtomicBool = AtomicBool::new(false);
static ROOTS: AtomicUsize = AtomicUsize::new(0);

/// Read-only accessor for the process-wide modality signal.
///
/// Reports `None` whenever no [`ModalityRoot`] is alive.
#[derive(Copy, Clone, Debug, Default)]
pub struct GlobalModality;

impl ModalitySource for GlobalModality {
    fn last(&self) -> Option<Modality> {
        if ROOTS.load(Ordering::Acquire) == 0 {
            return None;
        }
        Modality::decode(LAST.load(Ordering::Relaxed))
    }

    fn key_in_flight(&self) -> bool {
        ROOTS.load(Ordering::Acquire) > 0 && KEY_HELD.load(Ordering::Relaxed)
    }
}

/// Lifecycle guard for the process-wide modality signal.
///
/// Each interactive root holds one guard and forwards its raw input to it.
/// The signal is reset when the last guard is dropped.
#[derive(Debug)]
pub struct ModalityRoot {
    _private: (),
}

impl ModalityRoot {
    /// Register an interactive root.
    pub fn acquire() -> Self {
        if ROOTS.fetch_add(1, Ordering::AcqRel) == 0 {
            reset_global();
        }
        Self { _private: () }
    }

    /// Number of live roots.
    pub fn live_roots() -> usize {
        ROOTS.load(Ordering::Acquire)
    }

    /// Read-only accessor to hand to controls.
    pub fn source(&self) -> GlobalModality {
        GlobalModality
    }

    /// Record a key press anywhere in the root.
    pub fn key_down(&self, key: Key, modifiers: Modifiers) {
        if let Some(m) = keyboard_modality(key, modifiers) {
            LAST.store(Modality::encode(Some(m)), Ordering::Relaxed);
            KEY_HELD.store(true, Ordering::Relaxed);
        }
    }

    /// Record a key release anywhere in the root.
    pub fn key_up(&self) {
        KEY_HELD.store(false, Ordering::Relaxed);
    }

    /// Record a pointer press anywhere in the root.
    pub fn pointer_down(&self, kind: PointerKind) {
        LAST.store(Modality::encode(Some(kind.modality())), Ordering::Relaxed);
        KEY_HELD.store(false, Ordering::Relaxed);
    }

    /// Record that code is about to move focus.
    pub fn programmatic(&self) {
        LAST.store(
            Modality::encode(Some(Modality::Programmatic)),
            Ordering::Relaxed,
        );
    }
}

impl Drop for ModalityRoot {
    fn drop(&mut self) {
        if ROOTS.fetch_sub(1, Ordering::AcqRel) == 1 {
            reset_global();
        }
    }
}

fn reset_global() {
    LAST.store(0, Ordering::Relaxed);
    KEY_HELD.store(false, Ordering::Relaxed);
}

fn keyboard_modality(key: Key, modifiers: Modifiers) -> Option<Modality> {
    if modifiers.is_shortcut() || key == Key::Other {
        return None;
    }
    Some(Modality::Keyboard)
}

/// A modality signal owned by one UI instead of the whole process.
#[derive(Debug, Default)]
pub struct LocalModality {
    last: Cell<Option<Modality>>,
    key_held: Cell<bool>,
}

impl LocalModality {
    /// Create an empty signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press.
    pub fn key_down(&self, key: Key, modifiers: Modifiers) {
        if let Some(m) = keyboard_modality(key, modifiers) {
            self.last.set(Some(m));
            self.key_held.set(true);
        }
    }

    /// Record a key release.
    pub fn key_up(&self) {
        self.key_held.set(false);
    }

    /// Record a pointer press.
    pub fn pointer_down(&self, kind: PointerKind) {
        self.last.set(Some(kind.modality()));
        self.key_held.set(false);
    }

    /// Record that code is about to move focus.
    pub fn programmatic(&self) {
        self.last.set(Some(Modality::Programmatic));
    }
}

impl ModalitySource for LocalModality {
    fn last(&self) -> Option<Modality> {
        self.last.get()
    }

    fn key_in_flight(&self) -> bool {
        self.key_held.get()
    }
}

impl<S: ModalitySource + ?Sized> ModalitySource for &S {
    fn last(&self) -> Option<Modality> {
        (**self).last()
    }

    fn key_in_flight(&self) -> bool {
        (**self).key_in_flight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_tracks_last_device() {
        let m = LocalModality::new();
        assert_eq!(m.last(), None);
        assert!(!m.keyboard_driven());

        m.key_down(Key::Tab, Modifiers::empty());
        assert_eq!(m.last(), Some(Modality::Keyboard));
        assert!(m.key_in_flight());
        m.key_up();
        assert!(!m.key_in_flight());
        assert!(m.keyboard_driven());

        m.pointer_down(PointerKind::Touch);
        assert_eq!(m.last(), Some(Modality::Touch));
        assert!(!m.keyboard_driven());
    }

    #[test]
    fn shortcuts_do_not_count_as_keyboard() {
        let m = LocalModality::new();
        m.pointer_down(PointerKind::Mouse);
        m.key_down(Key::Char('c'), Modifiers::CTRL);
        assert_eq!(m.last(), Some(Modality::Pointer));
        assert!(!m.key_in_flight());
    }

    // The only test touching the process-wide signal, so test threads cannot race on it.
    #[test]
    fn global_lifecycle() {
        let global = GlobalModality;
        assert_eq!(global.last(), None);

        let first = ModalityRoot::acquire();
        let second = ModalityRoot::acquire();
        assert_eq!(ModalityRoot::live_roots(), 2);

        first.key_down(Key::ArrowDown, Modifiers::empty());
        assert_eq!(second.source().last(), Some(Modality::Keyboard));

        drop(first);
        assert_eq!(global.last(), Some(Modality::Keyboard));

        second.pointer_down(PointerKind::Pen);
        assert_eq!(global.last(), Some(Modality::Pointer));

        drop(second);
        assert_eq!(ModalityRoot::live_roots(), 0);
        assert_eq!(global.last(), None);
    }
}
