use crate::date_string::DateComponents;
use crate::ui::mvi::Intent;

/// Field updates for the date selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateSelectIntent {
    /// Partial update of the three fields.
    ///
    /// `Some(value)` overwrites a field, with `Some("")` as an explicit
    /// clear. `None` retains the prior value, so an incomplete decomposition
    /// of an external date never disturbs fields it says nothing about.
    SetDate {
        year: Option<String>,
        month: Option<String>,
        day: Option<String>,
    },
    /// Reset every field to the unselected state.
    Clear,
}

impl Intent for DateSelectIntent {}

impl DateSelectIntent {
    pub fn year(value: impl Into<String>) -> Self {
        Self::SetDate {
            year: Some(value.into()),
            month: None,
            day: None,
        }
    }

    pub fn month(value: impl Into<String>) -> Self {
        Self::SetDate {
            year: None,
            month: Some(value.into()),
            day: None,
        }
    }

    pub fn day(value: impl Into<String>) -> Self {
        Self::SetDate {
            year: None,
            month: None,
            day: Some(value.into()),
        }
    }

    /// Update carrying the fields present in `components`, rendered in the
    /// unpadded form the option lists use.
    pub fn from_components(components: DateComponents) -> Self {
        Self::SetDate {
            year: components.year.map(|y| y.to_string()),
            month: components.month.map(|m| m.to_string()),
            day: components.day.map(|d| d.to_string()),
        }
    }
}
