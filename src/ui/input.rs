use crate::ui::app::App;
use crate::ui::date_select::Control;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Maps a key event onto the application.
///
/// Ctrl+Q and Tab work everywhere. With the input box focused every other
/// key is an edit key, except Esc which returns to the selectors; with a
/// selector focused the arrows pick and move, and single letters are
/// commands.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.focus_next();
            return;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return;
        }
        _ => {}
    }

    if app.focus() == Control::Input {
        match key.code {
            KeyCode::Esc => app.focus_selectors(),
            KeyCode::Enter => app.normalize_input(),
            code => app.on_input_key(code),
        }
        return;
    }

    match key.code {
        KeyCode::Up => app.step(-1),
        KeyCode::Down => app.step(1),
        KeyCode::Left => app.focus_prev(),
        KeyCode::Right => app.focus_next(),
        KeyCode::Char('t') => app.set_today(),
        KeyCode::Char('c') => app.clear_selection(),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
