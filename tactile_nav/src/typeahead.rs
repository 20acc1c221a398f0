// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Type-ahead ("char search") over a list of labelled items.

use alloc::string::String;

use smallvec::SmallVec;
use tactile_modality::{Key, Modifiers};

use crate::registry::RegistryEntry;

/// Inactivity after which the accumulated query is discarded, in milliseconds.
pub const RESET_MS: u64 = 1500;

/// An item that type-ahead can land on.
pub trait SearchItem {
    /// Text matched against the query.
    fn label(&self) -> &str;

    /// Disabled items are never matched.
    fn is_disabled(&self) -> bool {
        false
    }

    /// Hidden items are never matched.
    fn is_hidden(&self) -> bool {
        false
    }
}

impl SearchItem for &str {
    fn label(&self) -> &str {
        self
    }
}

/// Registry entries whose id is their label.
impl<K, Id: AsRef<str>> SearchItem for RegistryEntry<K, Id> {
    fn label(&self) -> &str {
        self.id.as_ref()
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }
}

#[derive(Clone, Debug)]
struct MatchCache {
    ch: char,
    len: usize,
    matches: SmallVec<[usize; 8]>,
}

/// Accumulates printable keystrokes and finds the item they name.
///
/// - Keys typed within [`RESET_MS`] of each other extend the query.
/// - Repeating one character (`"b"`, `"bb"`, ...) cycles through the items starting
///   with it. The match set for that character is cached while the repetition lasts.
/// - Any other query selects the first item, starting at the current one, whose label
///   starts with the query. Matching is case-insensitive.
#[derive(Clone, Debug, Default)]
pub struct TypeAhead {
    query: String,
    last_at: Option<u64>,
    cache: Option<MatchCache>,
}

impl TypeAhead {
    /// Create an idle searcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// The query accumulated so far.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns `true` if a query is in progress at `now`.
    ///
    /// While typing, Space belongs to the query instead of activating the item.
    pub fn is_typing(&self, now: u64) -> bool {
        !self.query.is_empty() && self.last_at.is_some_and(|t| now.saturating_sub(t) < RESET_MS)
    }

    /// Drop the query and the cached matches.
    ///
    /// Call this when the item list changes.
    pub fn reset(&mut self) {
        self.query.clear();
        self.last_at = None;
        self.cache = None;
    }

    /// Feed a key press at time `now` (milliseconds).
    ///
    /// Returns the index of the item to focus, or `None` if the key is not part of a
    /// query or nothing matches.
    ///
    /// The cached match set is rechecked against `items` on every repeated press, so
    /// reordered items never yield stale indices. An item that starts matching without
    /// any cached match going away (a relabel or a re-enable) is only picked up after
    /// [`reset`](Self::reset).
    pub fn on_key<T: SearchItem>(
        &mut self,
        key: Key,
        modifiers: Modifiers,
        now: u64,
        items: &[T],
        current: Option<usize>,
    ) -> Option<usize> {
        if modifiers.is_shortcut() {
            return None;
        }
        let ch = key.printable()?;
        if self.last_at.is_some_and(|t| now.saturating_sub(t) >= RESET_MS) {
            self.reset();
        }
        if ch == ' ' && self.query.is_empty() {
            return None;
        }
        self.last_at = Some(now);
        self.query.extend(ch.to_lowercase());

        let mut chars = self.query.chars();
        let first = chars.next()?;
        if chars.all(|c| c == first) {
            self.cycle(first, items, current)
        } else {
            self.cache = None;
            self.prefix_search(items, current)
        }
    }

    fn cycle<T: SearchItem>(
        &mut self,
        ch: char,
        items: &[T],
        current: Option<usize>,
    ) -> Option<usize> {
        let stale = self.cache.as_ref().is_none_or(|c| {
            c.ch != ch
                || c.len != items.len()
                || !c.matches.iter().all(|&i| matches_char(&items[i], ch))
        });
        if stale {
            let matches = items
                .iter()
                .enumerate()
                .filter(|(_, item)| matches_char(*item, ch))
                .map(|(i, _)| i)
                .collect();
            self.cache = Some(MatchCache {
                ch,
                len: items.len(),
                matches,
            });
        }
        let matches = &self.cache.as_ref()?.matches;
        let next = match current {
            Some(cur) => matches.iter().copied().find(|&i| i > cur),
            None => None,
        };
        next.or_else(|| matches.first().copied())
    }

    fn prefix_search<T: SearchItem>(&self, items: &[T], current: Option<usize>) -> Option<usize> {
        let len = items.len();
        let start = current.filter(|&c| c < len).unwrap_or(0);
        (0..len)
            .map(|offset| (start + offset) % len)
            .find(|&i| searchable(&items[i]) && starts_with_query(items[i].label(), &self.query))
    }
}

fn searchable<T: SearchItem>(item: &T) -> bool {
    !item.is_disabled() && !item.is_hidden()
}

fn matches_char<T: SearchItem>(item: &T, ch: char) -> bool {
    searchable(item) && starts_with_char(item.label(), ch)
}

fn starts_with_char(label: &str, ch: char) -> bool {
    label
        .trim_start()
        .chars()
        .next()
        .is_some_and(|c| c.to_lowercase().eq(ch.to_lowercase()))
}

fn starts_with_query(label: &str, query: &str) -> bool {
    let mut label = label.trim_start().chars().flat_map(char::to_lowercase);
    query.chars().all(|q| label.next() == Some(q))
}
