use tracing::debug;

use crate::date_string::parse_date_string;
use crate::range::range_labels;
use crate::ui::date_select::intent::DateSelectIntent;
use crate::ui::date_select::reducer::DateSelectReducer;
use crate::ui::date_select::state::DateSelectState;
use crate::ui::mvi;

/// Fixed option bounds for the month and day selectors.
const MONTH_BOUNDS: (i32, i32) = (1, 12);
const DAY_BOUNDS: (i32, i32) = (1, 31);

/// One of the three selector columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectField {
    Year,
    Month,
    Day,
}

impl SelectField {
    pub fn label(self) -> &'static str {
        match self {
            SelectField::Year => "Year",
            SelectField::Month => "Month",
            SelectField::Day => "Day",
        }
    }
}

/// Caller-supplied bounds for the year selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSelectOptions {
    pub min_year: i32,
    pub max_year: i32,
}

impl Default for DateSelectOptions {
    fn default() -> Self {
        // The span the stock widget ships with.
        Self {
            min_year: 1960,
            max_year: 2000,
        }
    }
}

/// Widget controller: owns the reducer state and reconciles it with an
/// externally owned date value.
///
/// Field updates go through [`DateSelect::dispatch`]; the outward edge is
/// [`DateSelect::sync`], which reports the derived date at most once per
/// observed transition; the inward edge is [`DateSelect::apply_date_string`].
pub struct DateSelect {
    opts: DateSelectOptions,
    state: DateSelectState,
    /// Last (derived, external) pair `sync` evaluated. Re-evaluating with
    /// an unchanged pair must not re-notify.
    last_seen: Option<(String, String)>,
}

impl DateSelect {
    pub fn new(opts: DateSelectOptions) -> Self {
        Self {
            opts,
            state: DateSelectState::default(),
            last_seen: None,
        }
    }

    pub fn state(&self) -> &DateSelectState {
        &self.state
    }

    pub fn opts(&self) -> DateSelectOptions {
        self.opts
    }

    /// Applies one reducer transition.
    pub fn dispatch(&mut self, intent: DateSelectIntent) {
        mvi::apply::<DateSelectReducer>(&mut self.state, intent);
    }

    pub fn set_year(&mut self, value: impl Into<String>) {
        self.dispatch(DateSelectIntent::year(value));
    }

    pub fn set_month(&mut self, value: impl Into<String>) {
        self.dispatch(DateSelectIntent::month(value));
    }

    pub fn set_day(&mut self, value: impl Into<String>) {
        self.dispatch(DateSelectIntent::day(value));
    }

    pub fn set_field(&mut self, field: SelectField, value: impl Into<String>) {
        match field {
            SelectField::Year => self.set_year(value),
            SelectField::Month => self.set_month(value),
            SelectField::Day => self.set_day(value),
        }
    }

    /// Resets the selection to the mount state.
    pub fn clear(&mut self) {
        self.dispatch(DateSelectIntent::Clear);
    }

    /// Inward sync: decomposes `raw` and updates the fields it names.
    ///
    /// Malformed input decomposes to nothing and leaves every field
    /// unchanged; that is the only failure behavior.
    pub fn apply_date_string(&mut self, raw: &str) {
        let components = parse_date_string(raw);
        self.dispatch(DateSelectIntent::from_components(components));
    }

    /// Outward sync edge.
    ///
    /// Compares the derived date (normalized to `""` when absent) with the
    /// externally owned `external` value and returns the derived date when
    /// they diverge, at most once per observed (derived, external)
    /// transition. Applying the result and re-running `sync` settles in
    /// one step and never loops.
    pub fn sync(&mut self, external: &str) -> Option<String> {
        let derived = self.state.value().to_string();
        if self
            .last_seen
            .as_ref()
            .is_some_and(|(d, e)| d == &derived && e == external)
        {
            return None;
        }
        self.last_seen = Some((derived.clone(), external.to_string()));
        if derived != external {
            debug!(value = %derived, was = %external, "date select value changed");
            Some(derived)
        } else {
            None
        }
    }

    /// Ordered option labels for `field`.
    ///
    /// Years span the configured bounds, months 1-12, days 1-31. The
    /// current field value is appended when the generated range does not
    /// already contain it, so a selection can never vanish from its own
    /// list.
    pub fn options(&self, field: SelectField) -> Vec<String> {
        let labels = match field {
            SelectField::Year => range_labels(self.opts.min_year, self.opts.max_year),
            SelectField::Month => range_labels(MONTH_BOUNDS.0, MONTH_BOUNDS.1),
            SelectField::Day => range_labels(DAY_BOUNDS.0, DAY_BOUNDS.1),
        };
        include_current(labels, self.field_value(field))
    }

    /// Current textual value of `field` (empty when unselected).
    pub fn field_value(&self, field: SelectField) -> &str {
        match field {
            SelectField::Year => &self.state.year_value,
            SelectField::Month => &self.state.month_value,
            SelectField::Day => &self.state.day_value,
        }
    }

    /// Position of the current value within [`DateSelect::options`].
    pub fn selected_index(&self, field: SelectField) -> Option<usize> {
        let current = self.field_value(field);
        if current.is_empty() {
            return None;
        }
        self.options(field).iter().position(|label| label == current)
    }
}

fn include_current(mut labels: Vec<String>, current: &str) -> Vec<String> {
    if !current.is_empty() && !labels.iter().any(|label| label == current) {
        labels.push(current.to_string());
    }
    labels
}
