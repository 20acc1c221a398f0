// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;

use log::error;

/// Report a lookup of a part that `owner` doesn't contain.
///
/// Always returns `None`, so callers can `return missing(..)` and render nothing.
pub(crate) fn missing<K: Debug, T>(owner: &str, key: &K) -> Option<T> {
    error!("{owner} has no item {key:?}; render it inside the {owner} that owns it");
    None
}
