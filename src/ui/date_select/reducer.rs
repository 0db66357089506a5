use crate::ui::date_select::intent::DateSelectIntent;
use crate::ui::date_select::state::DateSelectState;
use crate::ui::mvi::Reducer;

/// Transition table for the date selector.
///
/// Every arm funnels through [`DateSelectState::with_recomputed_date`], so
/// the derived date can never go stale relative to the field values.
pub struct DateSelectReducer;

impl Reducer for DateSelectReducer {
    type State = DateSelectState;
    type Intent = DateSelectIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let next = match intent {
            DateSelectIntent::SetDate { year, month, day } => DateSelectState {
                year_value: year.unwrap_or(state.year_value),
                month_value: month.unwrap_or(state.month_value),
                day_value: day.unwrap_or(state.day_value),
                date_string: state.date_string,
            },
            DateSelectIntent::Clear => DateSelectState::default(),
        };
        next.with_recomputed_date()
    }
}
