//! Linked year/month/day selectors with a companion date input, kept in
//! sync with an externally owned `YYYY-MM-DD` value.

pub mod config;
pub mod date_string;
pub mod logging;
pub mod range;
pub mod ui;
