use crate::ui::date_select::{Control, DateInputBox, DateSelect, DateSelectOptions, SelectField};
use crossterm::event::KeyCode;
use time::OffsetDateTime;

/// Top-level application state: the date-select controller, its edit
/// buffer, and the externally owned value slot the widget reconciles
/// against.
///
/// Every mutation funnels through [`App::commit`], which runs the outward
/// sync edge and adopts whatever it reports, so `value` is always the last
/// value the widget published.
pub struct App {
    select: DateSelect,
    input: DateInputBox,
    focus: Control,
    /// The committed date value, empty when no date is set.
    value: String,
    /// Times `value` changed since startup.
    changes: u64,
    should_quit: bool,
}

impl App {
    pub fn new(opts: DateSelectOptions, initial: Option<&str>) -> Self {
        let mut app = Self {
            select: DateSelect::new(opts),
            input: DateInputBox::default(),
            focus: Control::Select(SelectField::Year),
            value: initial.unwrap_or_default().to_string(),
            changes: 0,
            should_quit: false,
        };
        if !app.value.is_empty() {
            let seed = app.value.clone();
            app.select.apply_date_string(&seed);
        }
        // A malformed seed decomposes to nothing and commits back as "".
        app.commit();
        app.refresh_input();
        app
    }

    pub fn select(&self) -> &DateSelect {
        &self.select
    }

    pub fn input(&self) -> &DateInputBox {
        &self.input
    }

    pub fn focus(&self) -> Control {
        self.focus
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn changes(&self) -> u64 {
        self.changes
    }

    pub fn year_span(&self) -> (i32, i32) {
        let opts = self.select.opts();
        (opts.min_year, opts.max_year)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_tick(&mut self) {}

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    /// Leaves the input box for the first selector column.
    pub fn focus_selectors(&mut self) {
        self.set_focus(Control::Select(SelectField::Year));
    }

    /// Moves the focused selector's choice by `delta` list positions.
    ///
    /// From the unselected state, stepping down lands on the first option
    /// and stepping up on the last. At the ends the selection stays put.
    pub fn step(&mut self, delta: i32) {
        let Control::Select(field) = self.focus else {
            return;
        };
        let labels = self.select.options(field);
        if labels.is_empty() {
            return;
        }
        let next = match self.select.selected_index(field) {
            Some(index) => {
                if delta.is_negative() {
                    index.saturating_sub(delta.unsigned_abs() as usize)
                } else {
                    (index.saturating_add(delta as usize)).min(labels.len() - 1)
                }
            }
            None if delta.is_negative() => labels.len() - 1,
            None => 0,
        };
        let label = labels[next].clone();
        self.select.set_field(field, label);
        self.commit();
        self.refresh_input();
    }

    /// Routes an edit key to the input box; a text change runs the inward
    /// sync, so a complete valid buffer moves the selectors live.
    pub fn on_input_key(&mut self, code: KeyCode) {
        if self.input.handle_key(code) {
            let text = self.input.text().to_string();
            self.select.apply_date_string(&text);
            self.commit();
        }
    }

    /// Overwrites the owned value with the current UTC date, as an external
    /// caller would, and lets the inward edge re-derive the fields. The
    /// selection then already matches the value, so no change is counted.
    pub fn set_today(&mut self) {
        let today = OffsetDateTime::now_utc().date();
        let formatted = format!(
            "{:04}-{:02}-{:02}",
            today.year(),
            u8::from(today.month()),
            today.day()
        );
        self.value = formatted;
        let seed = self.value.clone();
        self.select.apply_date_string(&seed);
        self.commit();
        self.refresh_input();
    }

    /// Applies the buffer once more and snaps it to the committed value,
    /// normalizing unpadded input in place.
    pub fn normalize_input(&mut self) {
        let text = self.input.text().to_string();
        self.select.apply_date_string(&text);
        self.commit();
        let committed = self.value.clone();
        self.input.set_text(&committed);
    }

    /// Drops the whole selection and commits the empty value.
    pub fn clear_selection(&mut self) {
        self.select.clear();
        self.commit();
        self.refresh_input();
    }

    fn set_focus(&mut self, next: Control) {
        let leaving_input = self.focus == Control::Input && next != Control::Input;
        self.focus = next;
        if leaving_input {
            // A partial edit is abandoned; the committed value is canonical.
            self.refresh_input();
        }
    }

    /// Outward edge: adopt the value the controller reports, if any.
    fn commit(&mut self) {
        if let Some(next) = self.select.sync(&self.value) {
            self.value = next;
            self.changes += 1;
        }
    }

    /// Mirrors the committed value into the edit buffer, except while the
    /// user is typing in it.
    fn refresh_input(&mut self) {
        if self.focus != Control::Input {
            let text = self.value.clone();
            self.input.set_text(&text);
        }
    }
}
