// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Part markers and roles.

/// Stable marker naming the part an element plays in a widget.
///
/// Hosts render it as `data-slot`, for styling and test selectors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Custom button.
    Button,
    /// Checkbox control.
    Checkbox,
    /// Switch control.
    Switch,
    /// Container of a checkbox group.
    CheckGroup,
    /// Container of a radio group.
    RadioGroup,
    /// Radio control.
    Radio,
    /// Visible label of a control.
    Label,
    /// Root of a tab group.
    TabGroup,
    /// Container of the tabs.
    TabList,
    /// A tab.
    Tab,
    /// Panel shown for a tab.
    TabPanel,
    /// Root of an expandable.
    Expandable,
    /// Button toggling an expandable.
    ExpandableTrigger,
    /// Content of an expandable.
    ExpandablePanel,
    /// Root of an accordion.
    Accordion,
    /// Root of a slider.
    Slider,
    /// Slider track.
    SliderTrack,
    /// Filled part of the track between the thumbs.
    SliderRange,
    /// Slider thumb.
    SliderThumb,
    /// Stop label under the track.
    SliderSegment,
    /// Root of a menu.
    Menu,
    /// Button opening a menu.
    MenuTrigger,
    /// Popup list of a menu.
    MenuList,
    /// Menu entry.
    MenuItem,
    /// Root of a breadcrumb trail.
    Breadcrumb,
    /// Entry of a breadcrumb trail.
    BreadcrumbItem,
    /// Separator between breadcrumb entries.
    BreadcrumbSeparator,
    /// Toast message.
    Toast,
}

impl Slot {
    /// The `data-slot` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Checkbox => "checkbox",
            Self::Switch => "switch",
            Self::CheckGroup => "check-group",
            Self::RadioGroup => "radio-group",
            Self::Radio => "radio",
            Self::Label => "label",
            Self::TabGroup => "tab-group",
            Self::TabList => "tab-list",
            Self::Tab => "tab",
            Self::TabPanel => "tab-panel",
            Self::Expandable => "expandable",
            Self::ExpandableTrigger => "expandable-trigger",
            Self::ExpandablePanel => "expandable-panel",
            Self::Accordion => "accordion",
            Self::Slider => "slider",
            Self::SliderTrack => "slider-track",
            Self::SliderRange => "slider-range",
            Self::SliderThumb => "slider-thumb",
            Self::SliderSegment => "slider-segment",
            Self::Menu => "menu",
            Self::MenuTrigger => "menu-trigger",
            Self::MenuList => "menu-list",
            Self::MenuItem => "menu-item",
            Self::Breadcrumb => "breadcrumb",
            Self::BreadcrumbItem => "breadcrumb-item",
            Self::BreadcrumbSeparator => "breadcrumb-separator",
            Self::Toast => "toast",
        }
    }
}

/// WAI-ARIA role of an element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// `button`
    Button,
    /// `checkbox`
    Checkbox,
    /// `switch`
    Switch,
    /// `radio`
    Radio,
    /// `radiogroup`
    RadioGroup,
    /// `group`
    Group,
    /// `tablist`
    TabList,
    /// `tab`
    Tab,
    /// `tabpanel`
    TabPanel,
    /// `region`
    Region,
    /// `slider`
    Slider,
    /// `menu`
    Menu,
    /// `menuitem`
    MenuItem,
    /// `navigation`
    Navigation,
    /// `separator`
    Separator,
    /// `alert`, announced assertively.
    Alert,
    /// `status`, announced politely.
    Status,
}

impl Role {
    /// The `role` attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Checkbox => "checkbox",
            Self::Switch => "switch",
            Self::Radio => "radio",
            Self::RadioGroup => "radiogroup",
            Self::Group => "group",
            Self::TabList => "tablist",
            Self::Tab => "tab",
            Self::TabPanel => "tabpanel",
            Self::Region => "region",
            Self::Slider => "slider",
            Self::Menu => "menu",
            Self::MenuItem => "menuitem",
            Self::Navigation => "navigation",
            Self::Separator => "separator",
            Self::Alert => "alert",
            Self::Status => "status",
        }
    }

    /// Implicit `aria-live` politeness of live-region roles.
    pub fn live(self) -> Option<&'static str> {
        match self {
            Self::Alert => Some("assertive"),
            Self::Status => Some("polite"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_are_kebab_case() {
        assert_eq!(Slot::ExpandableTrigger.as_str(), "expandable-trigger");
        assert_eq!(Slot::SliderThumb.as_str(), "slider-thumb");
        assert_eq!(Role::RadioGroup.as_str(), "radiogroup");
    }

    #[test]
    fn only_live_regions_are_live() {
        assert_eq!(Role::Alert.live(), Some("assertive"));
        assert_eq!(Role::Status.live(), Some("polite"));
        assert_eq!(Role::Region.live(), None);
    }
}
