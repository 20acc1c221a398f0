// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breadcrumb trail.

use alloc::string::String;
use alloc::vec::Vec;

use log::{error, warn};
use tactile_aria::{Label, Role, Slot};

/// One link of the trail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    /// Link text.
    pub label: String,
    /// Link target. The current page usually has none.
    pub href: Option<String>,
    /// This crumb is the current page (`aria-current="page"`).
    pub current: bool,
}

impl Crumb {
    /// A link to another page.
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
            current: false,
        }
    }

    /// The current page.
    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
            current: true,
        }
    }
}

/// A child passed to a [`Breadcrumb`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BreadcrumbChild {
    /// A crumb.
    Item(Crumb),
    /// Anything else, described for the log. It is dropped.
    Other(String),
}

impl From<Crumb> for BreadcrumbChild {
    fn from(crumb: Crumb) -> Self {
        Self::Item(crumb)
    }
}

/// A rendered part of the trail.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BreadcrumbPart<'a> {
    /// A crumb.
    Item {
        /// `data-slot`
        slot: Slot,
        /// The crumb.
        crumb: &'a Crumb,
        /// `aria-current`
        current: Option<&'static str>,
    },
    /// The separator between two crumbs.
    Separator {
        /// `data-slot`
        slot: Slot,
        /// `role`
        role: Role,
    },
}

/// Attributes of the breadcrumb root.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BreadcrumbAria<'a> {
    /// `data-slot`
    pub slot: Slot,
    /// `role`
    pub role: Role,
    /// `aria-label`
    pub label: Option<&'a str>,
    /// `aria-labelledby`
    pub labelled_by: Option<&'a str>,
}

/// A validated breadcrumb trail.
#[derive(Clone, Debug)]
pub struct Breadcrumb {
    label: Label,
    crumbs: Vec<Crumb>,
}

impl Breadcrumb {
    /// Build the trail from its children.
    ///
    /// Children that aren't crumbs are logged and dropped. A last crumb that isn't
    /// marked current is logged but kept as is.
    pub fn new(label: impl Into<Label>, children: impl IntoIterator<Item = BreadcrumbChild>) -> Self {
        let crumbs: Vec<Crumb> = children
            .into_iter()
            .filter_map(|child| match child {
                BreadcrumbChild::Item(crumb) => Some(crumb),
                BreadcrumbChild::Other(what) => {
                    error!("Breadcrumb only accepts breadcrumb items; dropping {what}");
                    None
                }
            })
            .collect();
        if let Some(last) = crumbs.last() {
            if !last.current {
                warn!(
                    "the last breadcrumb item `{}` should be marked as the current page",
                    last.label
                );
            }
        }
        Self {
            label: label.into(),
            crumbs,
        }
    }

    /// The crumbs that survived validation.
    pub fn crumbs(&self) -> &[Crumb] {
        &self.crumbs
    }

    /// Crumbs interleaved with separators, in render order.
    pub fn parts(&self) -> Vec<BreadcrumbPart<'_>> {
        let mut parts = Vec::with_capacity(self.crumbs.len() * 2);
        for (i, crumb) in self.crumbs.iter().enumerate() {
            if i > 0 {
                parts.push(BreadcrumbPart::Separator {
                    slot: Slot::BreadcrumbSeparator,
                    role: Role::Separator,
                });
            }
            parts.push(BreadcrumbPart::Item {
                slot: Slot::BreadcrumbItem,
                crumb,
                current: crumb.current.then_some("page"),
            });
        }
        parts
    }

    /// Attributes of the root.
    pub fn aria(&self) -> BreadcrumbAria<'_> {
        BreadcrumbAria {
            slot: Slot::Breadcrumb,
            role: Role::Navigation,
            label: self.label.aria_label(),
            labelled_by: self.label.aria_labelledby(None),
        }
    }
}
