// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use thiserror::Error;

/// Accessible name of a control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Label {
    /// Visible text, rendered in a label element linked to the control.
    Visible(String),
    /// Text only exposed to assistive technology (`aria-label`).
    ScreenReader(String),
    /// Id of an existing element naming the control (`aria-labelledby`).
    LabelledBy(String),
}

/// A label given in more than one shape, or in none.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum LabelError {
    /// No label shape was given.
    #[error("a label is required: pass visible text, a screen reader label, or `labelled_by`")]
    Missing,
    /// Several label shapes were given.
    #[error("{0} label shapes were given; pass exactly one")]
    Ambiguous(usize),
}

impl Label {
    /// Build a label from optional shapes, exactly one of which must be present.
    pub fn from_parts(
        visible: Option<String>,
        screen_reader: Option<String>,
        labelled_by: Option<String>,
    ) -> Result<Self, LabelError> {
        let given = [&visible, &screen_reader, &labelled_by]
            .into_iter()
            .filter(|s| s.is_some())
            .count();
        match (visible, screen_reader, labelled_by) {
            (Some(text), None, None) => Ok(Self::Visible(text)),
            (None, Some(text), None) => Ok(Self::ScreenReader(text)),
            (None, None, Some(id)) => Ok(Self::LabelledBy(id)),
            (None, None, None) => Err(LabelError::Missing),
            _ => Err(LabelError::Ambiguous(given)),
        }
    }

    /// Text to render in a visible label element.
    pub fn visible_text(&self) -> Option<&str> {
        match self {
            Self::Visible(text) => Some(text),
            _ => None,
        }
    }

    /// `aria-label` of the control.
    pub fn aria_label(&self) -> Option<&str> {
        match self {
            Self::ScreenReader(text) => Some(text),
            _ => None,
        }
    }

    /// `aria-labelledby` of the control, given the id of its rendered label element.
    pub fn aria_labelledby<'a>(&'a self, label_id: Option<&'a str>) -> Option<&'a str> {
        match self {
            Self::Visible(_) => label_id,
            Self::ScreenReader(_) => None,
            Self::LabelledBy(id) => Some(id),
        }
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Self::Visible(text.into())
    }
}

impl From<String> for Label {
    fn from(text: String) -> Self {
        Self::Visible(text)
    }
}
