// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circular search for enabled items and key-to-intent mapping.

use tactile_modality::Key;

/// Direction of a single navigation step through an ordered collection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// Towards higher indices.
    Forward,
    /// Towards lower indices.
    Backward,
}

/// Behavior at the ends of the collection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WrapMode {
    /// Stop at the first/last item.
    Never,
    /// Continue from the other end.
    #[default]
    Wrap,
}

/// Which arrow keys a composite responds to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Left/Right.
    Horizontal,
    /// Up/Down.
    Vertical,
    /// All four arrows (radio groups).
    #[default]
    Both,
}

/// Writing direction, used to flip Left/Right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextDirection {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

/// What a navigation key asks for, independent of layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavIntent {
    /// The previous enabled item.
    Prev,
    /// The next enabled item.
    Next,
    /// The first enabled item.
    First,
    /// The last enabled item.
    Last,
}

impl NavIntent {
    /// Map a key to an intent for a composite laid out with `orientation` in `direction`.
    pub fn from_key(key: Key, orientation: Orientation, direction: TextDirection) -> Option<Self> {
        let horizontal = matches!(orientation, Orientation::Horizontal | Orientation::Both);
        let vertical = matches!(orientation, Orientation::Vertical | Orientation::Both);
        let rtl = direction == TextDirection::Rtl;
        match key {
            Key::ArrowLeft if horizontal => Some(if rtl { Self::Next } else { Self::Prev }),
            Key::ArrowRight if horizontal => Some(if rtl { Self::Prev } else { Self::Next }),
            Key::ArrowUp if vertical => Some(Self::Prev),
            Key::ArrowDown if vertical => Some(Self::Next),
            Key::Home => Some(Self::First),
            Key::End => Some(Self::Last),
            _ => None,
        }
    }
}

/// Something that can be skipped during navigation.
pub trait Navigable {
    /// Returns `true` if the item can receive focus.
    fn is_enabled(&self) -> bool;
}

impl Navigable for bool {
    fn is_enabled(&self) -> bool {
        *self
    }
}

/// Find the next enabled item after `from`, stepping in `step` direction.
///
/// `from` itself is never returned. An out-of-range `from` means "outside the
/// collection": a forward search starts at the first item and a backward search at
/// the last. The search visits each item at most once, so it terminates with `None`
/// when every other item is disabled.
pub fn next_enabled<T: Navigable>(
    items: &[T],
    from: usize,
    step: Step,
    wrap: WrapMode,
) -> Option<usize> {
    next_enabled_by(items.len(), from, step, wrap, |i| items[i].is_enabled())
}

/// [`next_enabled`] over an implicit collection of `len` items.
pub fn next_enabled_by(
    len: usize,
    from: usize,
    step: Step,
    wrap: WrapMode,
    is_enabled: impl Fn(usize) -> bool,
) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len_i = len as isize;
    let delta: isize = match step {
        Step::Forward => 1,
        Step::Backward => -1,
    };
    let inside = from < len;
    let mut cursor: isize = match (inside, step) {
        (true, _) => from as isize,
        (false, Step::Forward) => -1,
        (false, Step::Backward) => len_i,
    };
    for _ in 0..len {
        cursor += delta;
        if !(0..len_i).contains(&cursor) {
            match wrap {
                WrapMode::Never => return None,
                WrapMode::Wrap => cursor = cursor.rem_euclid(len_i),
            }
        }
        let idx = cursor as usize;
        if inside && idx == from {
            return None;
        }
        if is_enabled(idx) {
            return Some(idx);
        }
    }
    None
}

/// Index of the first enabled item.
pub fn first_enabled<T: Navigable>(items: &[T]) -> Option<usize> {
    items.iter().position(Navigable::is_enabled)
}

/// Index of the last enabled item.
pub fn last_enabled<T: Navigable>(items: &[T]) -> Option<usize> {
    items.iter().rposition(Navigable::is_enabled)
}

/// Resolve an intent against `items`, starting from `from` (if any).
///
/// With no current item, `Next` lands on the first enabled item and `Prev` on the last.
pub fn resolve<T: Navigable>(
    items: &[T],
    from: Option<usize>,
    intent: NavIntent,
    wrap: WrapMode,
) -> Option<usize> {
    let from = from.unwrap_or(usize::MAX);
    match intent {
        NavIntent::Next => next_enabled(items, from, Step::Forward, wrap),
        NavIntent::Prev => next_enabled(items, from, Step::Backward, wrap),
        NavIntent::First => first_enabled(items),
        NavIntent::Last => last_enabled(items),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A is disabled; B, C, D are enabled.
    const ITEMS: [bool; 4] = [false, true, true, true];

    #[test]
    fn forward_skips_disabled_and_wraps() {
        assert_eq!(next_enabled(&ITEMS, 1, Step::Forward, WrapMode::Wrap), Some(2));
        assert_eq!(next_enabled(&ITEMS, 3, Step::Forward, WrapMode::Wrap), Some(1));
    }

    #[test]
    fn backward_skips_disabled_and_wraps() {
        assert_eq!(next_enabled(&ITEMS, 1, Step::Backward, WrapMode::Wrap), Some(3));
        assert_eq!(next_enabled(&ITEMS, 3, Step::Backward, WrapMode::Wrap), Some(2));
    }

    #[test]
    fn never_wrap_stops_at_edges() {
        assert_eq!(next_enabled(&ITEMS, 3, Step::Forward, WrapMode::Never), None);
        assert_eq!(next_enabled(&ITEMS, 1, Step::Backward, WrapMode::Never), None);
    }

    #[test]
    fn all_disabled_terminates() {
        let items = [false; 5];
        assert_eq!(next_enabled(&items, 2, Step::Forward, WrapMode::Wrap), None);
        assert_eq!(next_enabled(&items, 9, Step::Backward, WrapMode::Wrap), None);
        // Only the origin is enabled.
        let lonely = [false, true, false];
        assert_eq!(next_enabled(&lonely, 1, Step::Forward, WrapMode::Wrap), None);
    }

    #[test]
    fn outside_origin_starts_at_an_end() {
        assert_eq!(resolve(&ITEMS, None, NavIntent::Next, WrapMode::Never), Some(1));
        assert_eq!(resolve(&ITEMS, None, NavIntent::Prev, WrapMode::Never), Some(3));
        assert_eq!(next_enabled::<bool>(&[], 0, Step::Forward, WrapMode::Wrap), None);
    }

    #[test]
    fn first_and_last() {
        let items = [false, true, true, false];
        assert_eq!(resolve(&items, Some(2), NavIntent::First, WrapMode::Wrap), Some(1));
        assert_eq!(resolve(&items, Some(1), NavIntent::Last, WrapMode::Wrap), Some(2));
    }

    #[test]
    fn keys_respect_orientation_and_direction() {
        use Orientation::*;
        use TextDirection::*;
        assert_eq!(NavIntent::from_key(Key::ArrowRight, Horizontal, Ltr), Some(NavIntent::Next));
        assert_eq!(NavIntent::from_key(Key::ArrowRight, Horizontal, Rtl), Some(NavIntent::Prev));
        assert_eq!(NavIntent::from_key(Key::ArrowLeft, Both, Rtl), Some(NavIntent::Next));
        assert_eq!(NavIntent::from_key(Key::ArrowDown, Horizontal, Ltr), None);
        assert_eq!(NavIntent::from_key(Key::ArrowLeft, Vertical, Ltr), None);
        assert_eq!(NavIntent::from_key(Key::ArrowUp, Vertical, Rtl), Some(NavIntent::Prev));
        assert_eq!(NavIntent::from_key(Key::End, Vertical, Ltr), Some(NavIntent::Last));
    }
}
