use crate::date_string::{compile_date_string, parse_field};
use crate::ui::mvi::UiState;

/// Selector-field values and the date they compose.
///
/// The string fields mirror a selector's current textual value; empty
/// string means no selection. `date_string` is derived on every reduction
/// and is `None` while any field is missing or the combination is not a
/// real calendar date. It is never set directly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DateSelectState {
    pub year_value: String,
    pub month_value: String,
    pub day_value: String,
    pub date_string: Option<String>,
}

impl UiState for DateSelectState {}

impl DateSelectState {
    /// Recompiles the derived date from the current field values.
    pub(crate) fn with_recomputed_date(mut self) -> Self {
        self.date_string = compile_date_string(
            parse_field(&self.year_value),
            parse_field(&self.month_value),
            parse_field(&self.day_value),
        );
        self
    }

    /// The composed date, normalized to the empty string when absent.
    /// This is the shape an externally owned value slot stores.
    pub fn value(&self) -> &str {
        self.date_string.as_deref().unwrap_or_default()
    }

    /// Whether the three fields currently compose a date.
    pub fn is_complete(&self) -> bool {
        self.date_string.is_some()
    }
}
