use crossterm::event::KeyCode;

/// Longest text the normalized `YYYY-MM-DD` form needs.
const MAX_LEN: usize = 10;

/// Edit buffer for the free-form date input.
///
/// Only digits and `-` can be typed, capped at the normalized form's
/// width. The host runs the inward sync whenever an edit changes the text,
/// so a complete valid buffer updates the selectors live and a partial one
/// changes nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateInputBox {
    buffer: String,
    /// Cursor position in characters.
    cursor: usize,
}

impl DateInputBox {
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Cursor offset in characters from the start of the buffer.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replaces the buffer (external value refresh), cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor = self.buffer.chars().count();
    }

    /// Handles an edit key. Returns `true` when the text changed.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char(ch) if ch.is_ascii_digit() || ch == '-' => self.insert(ch),
            KeyCode::Backspace => self.delete_back(),
            KeyCode::Delete => self.delete_forward(),
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.char_count());
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.char_count();
                false
            }
            _ => false,
        }
    }

    fn insert(&mut self, ch: char) -> bool {
        if self.char_count() >= MAX_LEN {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.buffer.insert(at, ch);
        self.cursor += 1;
        true
    }

    fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.buffer.remove(at);
        true
    }

    fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.buffer.remove(at);
        true
    }

    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    /// Byte offset of the `n`th character. The typable alphabet is ASCII,
    /// but `set_text` accepts arbitrary strings, so stay char-correct.
    fn byte_index(&self, n: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(n)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }
}

#[cfg(test)]
mod tests {
    use super::DateInputBox;
    use crossterm::event::KeyCode;

    fn type_str(input: &mut DateInputBox, text: &str) {
        for ch in text.chars() {
            input.handle_key(KeyCode::Char(ch));
        }
    }

    #[test]
    fn typing_builds_the_buffer() {
        let mut input = DateInputBox::default();
        type_str(&mut input, "2024-02-20");
        assert_eq!(input.text(), "2024-02-20");
        assert_eq!(input.cursor(), 10);
    }

    #[test]
    fn rejects_non_date_characters() {
        let mut input = DateInputBox::default();
        assert!(!input.handle_key(KeyCode::Char('x')));
        assert!(!input.handle_key(KeyCode::Char(' ')));
        assert_eq!(input.text(), "");
    }

    #[test]
    fn caps_at_normalized_width() {
        let mut input = DateInputBox::default();
        type_str(&mut input, "2024-02-201");
        assert_eq!(input.text(), "2024-02-20");
    }

    #[test]
    fn backspace_and_delete_edit_around_cursor() {
        let mut input = DateInputBox::default();
        type_str(&mut input, "1999");
        assert!(input.handle_key(KeyCode::Backspace));
        assert_eq!(input.text(), "199");
        input.handle_key(KeyCode::Home);
        assert!(input.handle_key(KeyCode::Delete));
        assert_eq!(input.text(), "99");
        assert!(!input.handle_key(KeyCode::Backspace));
    }

    #[test]
    fn cursor_motion_is_clamped() {
        let mut input = DateInputBox::default();
        type_str(&mut input, "12");
        input.handle_key(KeyCode::Left);
        input.handle_key(KeyCode::Left);
        input.handle_key(KeyCode::Left);
        assert_eq!(input.cursor(), 0);
        input.handle_key(KeyCode::End);
        assert_eq!(input.cursor(), 2);
        input.handle_key(KeyCode::Right);
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn insert_mid_buffer() {
        let mut input = DateInputBox::default();
        type_str(&mut input, "224");
        input.handle_key(KeyCode::Home);
        input.handle_key(KeyCode::Right);
        input.handle_key(KeyCode::Char('0'));
        assert_eq!(input.text(), "2024");
    }

    #[test]
    fn set_text_moves_cursor_to_end() {
        let mut input = DateInputBox::default();
        input.set_text("2024-02-20");
        assert_eq!(input.cursor(), 10);
        assert!(input.handle_key(KeyCode::Backspace));
        assert_eq!(input.text(), "2024-02-2");
    }
}
