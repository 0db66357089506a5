//! Date-string codec: `YYYY-MM-DD` composition and decomposition.
//!
//! Both directions are total. An incomplete or impossible date is reported
//! as absence, never as an error. Calendar validity (month lengths, leap
//! years) is delegated to [`time::Date`].

use std::ops::RangeInclusive;
use std::str::FromStr;

use time::{Date, Month};

/// Years representable in the fixed-width `YYYY` form.
pub(crate) const YEAR_RANGE: RangeInclusive<i32> = 1..=9999;

/// A possibly-incomplete calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateComponents {
    pub year: Option<i32>,
    pub month: Option<u8>,
    pub day: Option<u8>,
}

impl DateComponents {
    pub fn new(year: Option<i32>, month: Option<u8>, day: Option<u8>) -> Self {
        Self { year, month, day }
    }

    /// Whether all three components are present.
    pub fn is_complete(&self) -> bool {
        self.year.is_some() && self.month.is_some() && self.day.is_some()
    }
}

/// Composes the normalized date string, or `None` unless all three
/// components are present and name a real calendar date.
pub fn compile_date_string(
    year: Option<i32>,
    month: Option<u8>,
    day: Option<u8>,
) -> Option<String> {
    let (year, month, day) = (year?, month?, day?);
    if !is_valid_date(year, month, day) {
        return None;
    }
    Some(format!("{year:04}-{month:02}-{day:02}"))
}

/// Decomposes a date string into its components.
///
/// Empty or malformed input (wrong shape, non-numeric parts, or a
/// combination that is not a calendar date) yields all-absent components.
/// Unpadded numeric parts are accepted; re-compiling normalizes them.
pub fn parse_date_string(input: &str) -> DateComponents {
    let Some((year, month, day)) = split_date(input) else {
        return DateComponents::default();
    };
    if !is_valid_date(year, month, day) {
        return DateComponents::default();
    }
    DateComponents::new(Some(year), Some(month), Some(day))
}

/// Integer value of a selector field. Empty or non-numeric fields are
/// absent; surrounding whitespace is tolerated.
pub fn parse_field<T: FromStr>(value: &str) -> Option<T> {
    value.trim().parse().ok()
}

fn split_date(input: &str) -> Option<(i32, u8, u8)> {
    let mut parts = input.splitn(3, '-');
    let year = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let day = parts.next()?.parse().ok()?;
    Some((year, month, day))
}

fn is_valid_date(year: i32, month: u8, day: u8) -> bool {
    if !YEAR_RANGE.contains(&year) {
        return false;
    }
    let Ok(month) = Month::try_from(month) else {
        return false;
    };
    Date::from_calendar_date(year, month, day).is_ok()
}
