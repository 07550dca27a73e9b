//! Multi-select capability
//!
//! Any control that can present `{value, label}` pairs and report which of
//! them are chosen can drive the option selection.

use crate::options::set::{DisplayOption, OptionSet};

/// One entry offered by a multi-select control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectItem {
    pub value: &'static str,
    pub label: &'static str,
}

impl From<DisplayOption> for SelectItem {
    fn from(option: DisplayOption) -> Self {
        Self {
            value: option.name(),
            label: option.label(),
        }
    }
}

/// The entries every selector offers, in presentation order.
pub fn display_items() -> Vec<SelectItem> {
    DisplayOption::ALL.into_iter().map(SelectItem::from).collect()
}

pub trait OptionSelector {
    /// Items currently presented to the user.
    fn items(&self) -> &[SelectItem];

    /// The subset currently chosen.
    fn chosen(&self) -> OptionSet;
}

/// A checkbox list: each item is independently checked or not.
#[derive(Debug, Clone)]
pub struct CheckboxSelector {
    items: Vec<SelectItem>,
    checked: OptionSet,
}

impl Default for CheckboxSelector {
    fn default() -> Self {
        Self {
            items: display_items(),
            checked: OptionSet::default(),
        }
    }
}

impl CheckboxSelector {
    pub fn set_checked(&mut self, option: DisplayOption, checked: bool) {
        self.checked = self.checked.with(option, checked);
    }

    /// Flips one checkbox and returns its new state.
    pub fn toggle(&mut self, option: DisplayOption) -> bool {
        let checked = !self.checked.is_selected(option);
        self.set_checked(option, checked);
        checked
    }

    /// Replaces the whole selection.
    pub fn replace(&mut self, options: OptionSet) {
        self.checked = options;
    }
}

impl OptionSelector for CheckboxSelector {
    fn items(&self) -> &[SelectItem] {
        &self.items
    }

    fn chosen(&self) -> OptionSet {
        self.checked
    }
}
