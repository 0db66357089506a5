//! Shared test utilities.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use datepick::ui::date_select::{DateSelect, DateSelectOptions};

/// Controller over a small fixed year span.
pub fn make_select(min_year: i32, max_year: i32) -> DateSelect {
    DateSelect::new(DateSelectOptions { min_year, max_year })
}

/// Controller with a complete selection already made.
pub fn selected(year: &str, month: &str, day: &str) -> DateSelect {
    let mut select = make_select(1970, 1975);
    select.set_year(year);
    select.set_month(month);
    select.set_day(day);
    select
}

pub fn press(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn release(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Release,
        state: KeyEventState::empty(),
    }
}

/// Types a string into the app one key at a time.
pub fn type_str(app: &mut datepick::ui::app::App, text: &str) {
    for ch in text.chars() {
        datepick::ui::input::handle_key(app, press(KeyCode::Char(ch)));
    }
}
