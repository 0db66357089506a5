use datepick::date_string::parse_date_string;
use datepick::ui::date_select::{DateSelectIntent, DateSelectReducer, DateSelectState};
use datepick::ui::mvi::Reducer;

fn reduce_all(
    state: DateSelectState,
    intents: impl IntoIterator<Item = DateSelectIntent>,
) -> DateSelectState {
    intents.into_iter().fold(state, DateSelectReducer::reduce)
}

fn full_selection() -> DateSelectState {
    reduce_all(
        DateSelectState::default(),
        [
            DateSelectIntent::year("2024"),
            DateSelectIntent::month("2"),
            DateSelectIntent::day("20"),
        ],
    )
}

#[test]
fn set_year_updates_only_the_year() {
    let state = DateSelectReducer::reduce(DateSelectState::default(), DateSelectIntent::year("2024"));
    assert_eq!(state.year_value, "2024");
    assert_eq!(state.month_value, "");
    assert_eq!(state.day_value, "");
    assert_eq!(state.date_string, None);
}

#[test]
fn completing_the_triple_composes_the_date() {
    let state = full_selection();
    assert_eq!(state.date_string.as_deref(), Some("2024-02-20"));
    assert!(state.is_complete());
    assert_eq!(state.value(), "2024-02-20");
}

#[test]
fn fields_compose_only_once_the_triple_is_a_real_date() {
    let state =
        DateSelectReducer::reduce(DateSelectState::default(), DateSelectIntent::year("2024"));
    assert_eq!(state.date_string, None);

    // Padded field values parse the same as the option labels.
    let state = DateSelectReducer::reduce(state, DateSelectIntent::month("02"));
    assert_eq!(state.date_string, None);

    // February 2024 ends on the 29th.
    let state = DateSelectReducer::reduce(state, DateSelectIntent::day("30"));
    assert_eq!(state.date_string, None);

    let state = DateSelectReducer::reduce(state, DateSelectIntent::day("20"));
    assert_eq!(state.date_string.as_deref(), Some("2024-02-20"));
}

#[test]
fn absent_fields_retain_prior_values() {
    let state = DateSelectReducer::reduce(full_selection(), DateSelectIntent::year("2023"));
    assert_eq!(state.year_value, "2023");
    assert_eq!(state.month_value, "2");
    assert_eq!(state.day_value, "20");
    assert_eq!(state.date_string.as_deref(), Some("2023-02-20"));
}

#[test]
fn empty_string_clears_a_single_field() {
    let state = DateSelectReducer::reduce(
        full_selection(),
        DateSelectIntent::SetDate {
            year: None,
            month: None,
            day: Some(String::new()),
        },
    );
    assert_eq!(state.day_value, "");
    assert_eq!(state.year_value, "2024");
    assert_eq!(state.date_string, None);
    assert_eq!(state.value(), "");
}

#[test]
fn clear_resets_every_field() {
    let state = DateSelectReducer::reduce(full_selection(), DateSelectIntent::Clear);
    assert_eq!(state, DateSelectState::default());
    assert!(!state.is_complete());
}

#[test]
fn impossible_combination_keeps_fields_but_no_date() {
    // February 2024 has 29 days; the day choice stays visible.
    let state = DateSelectReducer::reduce(full_selection(), DateSelectIntent::day("30"));
    assert_eq!(state.day_value, "30");
    assert_eq!(state.date_string, None);
}

#[test]
fn leap_day_flips_with_the_year() {
    let state = reduce_all(
        DateSelectState::default(),
        [
            DateSelectIntent::year("2024"),
            DateSelectIntent::month("2"),
            DateSelectIntent::day("29"),
        ],
    );
    assert_eq!(state.date_string.as_deref(), Some("2024-02-29"));

    let state = DateSelectReducer::reduce(state, DateSelectIntent::year("2023"));
    assert_eq!(state.date_string, None);

    let state = DateSelectReducer::reduce(state, DateSelectIntent::year("2024"));
    assert_eq!(state.date_string.as_deref(), Some("2024-02-29"));
}

#[test]
fn non_numeric_field_never_composes() {
    let state = reduce_all(
        DateSelectState::default(),
        [
            DateSelectIntent::year("next year"),
            DateSelectIntent::month("2"),
            DateSelectIntent::day("20"),
        ],
    );
    assert_eq!(state.year_value, "next year");
    assert_eq!(state.date_string, None);
}

#[test]
fn unpadded_fields_compose_the_normalized_form() {
    let state = reduce_all(
        DateSelectState::default(),
        [
            DateSelectIntent::year("33"),
            DateSelectIntent::month("1"),
            DateSelectIntent::day("5"),
        ],
    );
    assert_eq!(state.date_string.as_deref(), Some("0033-01-05"));
}

#[test]
fn decomposed_external_value_round_trips() {
    let intent = DateSelectIntent::from_components(parse_date_string("1999-12-31"));
    let state = DateSelectReducer::reduce(DateSelectState::default(), intent);
    assert_eq!(state.year_value, "1999");
    assert_eq!(state.month_value, "12");
    assert_eq!(state.day_value, "31");
    assert_eq!(state.date_string.as_deref(), Some("1999-12-31"));
}

#[test]
fn malformed_external_value_decomposes_to_a_no_op() {
    let intent = DateSelectIntent::from_components(parse_date_string("31/12/1999"));
    let state = DateSelectReducer::reduce(full_selection(), intent);
    assert_eq!(state, full_selection());
}

#[test]
fn reduction_is_a_pure_function_of_its_inputs() {
    let a = DateSelectReducer::reduce(full_selection(), DateSelectIntent::month("3"));
    let b = DateSelectReducer::reduce(full_selection(), DateSelectIntent::month("3"));
    assert_eq!(a, b);
}

#[test]
fn setting_the_same_value_is_idempotent() {
    let once = DateSelectReducer::reduce(full_selection(), DateSelectIntent::day("20"));
    let twice = DateSelectReducer::reduce(once.clone(), DateSelectIntent::day("20"));
    assert_eq!(once, twice);
    assert_eq!(once, full_selection());
}
