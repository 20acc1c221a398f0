// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic element identifiers.

use alloc::format;
use alloc::string::String;

/// Generates identifiers for elements that need to be cross-referenced.
///
/// Ids are `"{prefix}-{n}"` where `n` counts up in the order ids are requested.
/// Rendering the same tree twice with a fresh generator (for example once on a
/// server and once on a client) therefore yields the same ids.
#[derive(Clone, Debug)]
pub struct IdGenerator {
    prefix: String,
    next: u32,
}

impl IdGenerator {
    /// Create a generator whose ids start with `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }

    /// Produce the next generated id.
    pub fn generate(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }

    /// Use the host-supplied id when present, otherwise generate one.
    ///
    /// A host id does not consume a counter value, so the ids of later elements do
    /// not depend on which earlier elements were given explicit ids.
    pub fn resolve(&mut self, host_id: Option<&str>) -> String {
        match host_id {
            Some(id) => String::from(id),
            None => self.generate(),
        }
    }

    /// Derive a child id from a parent id, for parts that belong to one element.
    pub fn part(parent: &str, part: &str) -> String {
        format!("{parent}-{part}")
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new("tactile")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_renders_agree() {
        let mut server = IdGenerator::new("t");
        let mut client = IdGenerator::new("t");
        let a: [String; 3] = core::array::from_fn(|_| server.generate());
        let b: [String; 3] = core::array::from_fn(|_| client.generate());
        assert_eq!(a, b);
        assert_eq!(a[2], "t-2");
    }

    #[test]
    fn host_id_wins_without_consuming() {
        let mut ids = IdGenerator::default();
        assert_eq!(ids.resolve(Some("mine")), "mine");
        assert_eq!(ids.resolve(None), "tactile-0");
        assert_eq!(IdGenerator::part("tactile-0", "panel"), "tactile-0-panel");
    }
}
