use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::ui::date_select::controller::{DateSelect, SelectField};
use crate::ui::date_select::input_box::DateInputBox;
use crate::ui::theme::{FIELD_TEXT, FOCUS_BORDER, MUTED_TEXT, SELECTED_ROW, WIDGET_BORDER};

/// Row shown at the top of a column while its field is unselected, the
/// stand-in for the disabled empty option of a form select.
const PLACEHOLDER: &str = "(none)";

const INPUT_TITLE: &str = " Date (YYYY-MM-DD) ";
const INPUT_HEIGHT: u16 = 3;

/// One of the widget's focusable sub-controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Input,
    Select(SelectField),
}

impl Control {
    pub fn next(self) -> Self {
        match self {
            Control::Input => Control::Select(SelectField::Year),
            Control::Select(SelectField::Year) => Control::Select(SelectField::Month),
            Control::Select(SelectField::Month) => Control::Select(SelectField::Day),
            Control::Select(SelectField::Day) => Control::Input,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Control::Input => Control::Select(SelectField::Day),
            Control::Select(SelectField::Year) => Control::Input,
            Control::Select(SelectField::Month) => Control::Select(SelectField::Year),
            Control::Select(SelectField::Day) => Control::Select(SelectField::Month),
        }
    }
}

/// Renders the date input box above the three selector columns.
///
/// Pure projection of controller + input + focus state: rendering twice
/// from the same inputs draws identical cells.
pub struct DateSelectView<'a> {
    select: &'a DateSelect,
    input: &'a DateInputBox,
    focus: Control,
}

impl<'a> DateSelectView<'a> {
    pub fn new(select: &'a DateSelect, input: &'a DateInputBox, focus: Control) -> Self {
        Self {
            select,
            input,
            focus,
        }
    }

    /// Screen position of the input cursor, when the input is focused and
    /// the area leaves room for it. The caller owns the frame, so cursor
    /// placement stays on its side.
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        if self.focus != Control::Input {
            return None;
        }
        let (input_area, _) = split_regions(area)?;
        let inner_width = input_area.width.saturating_sub(2);
        if inner_width == 0 || input_area.height < INPUT_HEIGHT {
            return None;
        }
        let offset = (self.input.cursor() as u16).min(inner_width.saturating_sub(1));
        Some(Position::new(input_area.x + 1 + offset, input_area.y + 1))
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.focus == Control::Input;
        let text = Span::styled(self.input.text().to_string(), Style::default().fg(FIELD_TEXT));
        Paragraph::new(Line::from(text))
            .block(titled_block(INPUT_TITLE, focused))
            .render(area, buf);
    }

    fn render_column(&self, field: SelectField, area: Rect, buf: &mut Buffer) {
        let focused = self.focus == Control::Select(field);
        let block = titled_block(field.label(), focused);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let labels = self.select.options(field);
        let selected = self.select.selected_index(field);
        // The placeholder occupies row zero only while nothing is selected.
        let (rows, highlight) = match selected {
            Some(index) => (labels, index),
            None => {
                let mut rows = vec![PLACEHOLDER.to_string()];
                rows.extend(labels);
                (rows, 0)
            }
        };

        let height = inner.height as usize;
        let offset = viewport_offset(rows.len(), highlight, height);
        let lines: Vec<Line> = rows
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
            .map(|(index, label)| self.option_line(label, index == highlight, selected.is_none()))
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }

    fn option_line(&self, label: &str, highlighted: bool, placeholder_row: bool) -> Line<'static> {
        if !highlighted {
            return Line::from(Span::styled(
                format!("  {label}"),
                Style::default().fg(FIELD_TEXT),
            ));
        }
        if placeholder_row {
            // Unselected: the marker sits on the placeholder, dimmed.
            return Line::from(Span::styled(
                format!("> {label}"),
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
            ));
        }
        Line::from(Span::styled(
            format!("> {label}"),
            Style::default()
                .fg(FIELD_TEXT)
                .bg(SELECTED_ROW)
                .add_modifier(Modifier::BOLD),
        ))
    }
}

impl Widget for DateSelectView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some((input_area, columns)) = split_regions(area) else {
            return;
        };
        self.render_input(input_area, buf);
        for (field, column) in [SelectField::Year, SelectField::Month, SelectField::Day]
            .into_iter()
            .zip(columns)
        {
            self.render_column(field, column, buf);
        }
    }
}

fn titled_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(FOCUS_BORDER)
    } else {
        Style::default().fg(WIDGET_BORDER)
    };
    let title_style = if focused {
        Style::default().fg(FOCUS_BORDER).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_TEXT)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(title.to_string(), title_style))
}

/// Input row on top, three equal selector columns below.
fn split_regions(area: Rect) -> Option<(Rect, [Rect; 3])> {
    if area.height < INPUT_HEIGHT + 3 || area.width < 12 {
        return None;
    }
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(INPUT_HEIGHT), Constraint::Min(3)])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(vertical[1]);
    Some((vertical[0], [columns[0], columns[1], columns[2]]))
}

/// First visible row index: keeps the highlight roughly centered and the
/// window inside the list.
fn viewport_offset(len: usize, highlight: usize, height: usize) -> usize {
    if height == 0 || len <= height {
        return 0;
    }
    let centered = highlight.saturating_sub(height / 2);
    centered.min(len - height)
}
