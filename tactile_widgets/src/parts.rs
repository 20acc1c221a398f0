// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute snapshots shared by several widgets.

use tactile_aria::{Role, Slot};
use tactile_nav::Orientation;

/// Attributes of an element that shows and hides a panel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TriggerAria<'a> {
    /// `data-slot`
    pub slot: Slot,
    /// Element id.
    pub id: Option<&'a str>,
    /// `aria-controls`, set once the panel is mounted.
    pub controls: Option<&'a str>,
    /// `aria-expanded`
    pub expanded: bool,
    /// `aria-disabled`
    pub disabled: bool,
}

/// Attributes of a panel shown by a trigger.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PanelAria<'a> {
    /// `data-slot`
    pub slot: Slot,
    /// `role`
    pub role: Role,
    /// Element id.
    pub id: Option<&'a str>,
    /// `aria-labelledby`, set once the trigger is mounted.
    pub labelled_by: Option<&'a str>,
    /// The panel is collapsed (`hidden`).
    pub hidden: bool,
}

/// Attributes of a composite container (radio group, tab list, menu).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GroupAria<'a> {
    /// `data-slot`
    pub slot: Slot,
    /// `role`
    pub role: Role,
    /// Element id.
    pub id: Option<&'a str>,
    /// `aria-orientation`
    pub orientation: Option<&'static str>,
    /// `aria-label`
    pub label: Option<&'a str>,
    /// `aria-labelledby`
    pub labelled_by: Option<&'a str>,
    /// `aria-disabled`
    pub disabled: bool,
}

/// Attributes of an item of a composite (radio, checkbox in a group, tab, menu item).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ItemAria<'a> {
    /// `data-slot`
    pub slot: Slot,
    /// `role`
    pub role: Role,
    /// Element id.
    pub id: Option<&'a str>,
    /// `aria-checked` or `aria-selected`, depending on the role.
    pub checked: bool,
    /// `aria-disabled`
    pub disabled: bool,
    /// `tabindex`: `0` for the item reachable with Tab, `-1` otherwise.
    pub tab_index: i8,
    /// `aria-controls`
    pub controls: Option<&'a str>,
    /// `aria-labelledby`
    pub labelled_by: Option<&'a str>,
}

pub(crate) fn orientation_attr(orientation: Orientation) -> Option<&'static str> {
    match orientation {
        Orientation::Horizontal => Some("horizontal"),
        Orientation::Vertical => Some("vertical"),
        Orientation::Both => None,
    }
}

pub(crate) fn tab_index(reachable: bool) -> i8 {
    if reachable { 0 } else { -1 }
}
