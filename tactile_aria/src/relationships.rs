// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Id links between structurally separate parts of a widget.
//!
//! A composite container owns one [`Relationships`] table. Each part records its
//! element id under the logical key it shares with its counterpart when it mounts,
//! and removes it when it unmounts. The attributes are then looked up by key, so a
//! part that remounts with a new id is picked up on the next lookup.

use alloc::string::String;
use core::hash::Hash;

use hashbrown::HashMap;
use log::debug;

/// The part an id belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    /// Element that controls a panel (tab, expandable trigger, menu trigger).
    Trigger,
    /// Element controlled by a trigger.
    Panel,
    /// Text labelling a control.
    Label,
    /// Element named by a label.
    Control,
}

impl Part {
    fn index(self) -> usize {
        match self {
            Self::Trigger => 0,
            Self::Panel => 1,
            Self::Label => 2,
            Self::Control => 3,
        }
    }
}

/// Linking attributes of one element.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Links<'a> {
    /// `aria-controls`
    pub controls: Option<&'a str>,
    /// `aria-labelledby`
    pub labelled_by: Option<&'a str>,
    /// `for` (`htmlFor`) of a label.
    pub label_for: Option<&'a str>,
}

#[derive(Clone, Debug, Default)]
struct Entry {
    ids: [Option<String>; 4],
}

impl Entry {
    fn is_empty(&self) -> bool {
        self.ids.iter().all(Option::is_none)
    }
}

/// Relationship table of one composite root.
#[derive(Clone, Debug)]
pub struct Relationships<K> {
    entries: HashMap<K, Entry>,
}

impl<K> Default for Relationships<K> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> Relationships<K> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the id of `part` for `key`, returning the id it replaces.
    pub fn attach(&mut self, key: K, part: Part, id: impl Into<String>) -> Option<String> {
        let id = id.into();
        let slot = &mut self.entries.entry(key).or_default().ids[part.index()];
        let old = slot.replace(id);
        if let (Some(old), Some(new)) = (&old, slot.as_deref()) {
            if old != new {
                debug!("{part:?} id changed from `{old}` to `{new}`");
            }
        }
        old
    }

    /// Forget the id of `part` for `key`, returning it.
    pub fn detach(&mut self, key: &K, part: Part) -> Option<String> {
        let entry = self.entries.get_mut(key)?;
        let old = entry.ids[part.index()].take();
        if entry.is_empty() {
            self.entries.remove(key);
        }
        old
    }

    /// Forget every part of `key`.
    pub fn remove(&mut self, key: &K) {
        self.entries.remove(key);
    }

    /// The recorded id of `part` for `key`.
    pub fn id(&self, key: &K, part: Part) -> Option<&str> {
        self.entries.get(key)?.ids[part.index()].as_deref()
    }

    /// `aria-controls` of the trigger of `key`: its panel's id.
    pub fn aria_controls(&self, key: &K) -> Option<&str> {
        self.id(key, Part::Panel)
    }

    /// `aria-labelledby` of the panel of `key`: its trigger's id.
    pub fn panel_labelled_by(&self, key: &K) -> Option<&str> {
        self.id(key, Part::Trigger)
    }

    /// `aria-labelledby` of the control of `key`: its label's id.
    pub fn control_labelled_by(&self, key: &K) -> Option<&str> {
        self.id(key, Part::Label)
    }

    /// Every linking attribute of the `part` element of `key`.
    ///
    /// Links to counterparts that aren't mounted are left unset.
    pub fn links(&self, key: &K, part: Part) -> Links<'_> {
        match part {
            Part::Trigger => Links {
                controls: self.aria_controls(key),
                ..Links::default()
            },
            Part::Panel => Links {
                labelled_by: self.panel_labelled_by(key),
                ..Links::default()
            },
            Part::Control => Links {
                labelled_by: self.control_labelled_by(key),
                ..Links::default()
            },
            Part::Label => Links {
                label_for: self.id(key, Part::Control),
                ..Links::default()
            },
        }
    }

    /// Number of keys with at least one part attached.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is attached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
