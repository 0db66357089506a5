use crate::ui::app::App;
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT, STATUS_OK, WIDGET_BORDER};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Status band: the committed value, the configured year span, and how
/// many times the value has changed.
pub struct Header<'a> {
    app: &'a App,
}

impl<'a> Header<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(MUTED_TEXT);
        let value = self.app.value();
        let value_span = if value.is_empty() {
            Span::styled("(no date)", separator_style)
        } else {
            Span::styled(value.to_string(), Style::default().fg(STATUS_OK))
        };
        let (min_year, max_year) = self.app.year_span();

        let line = Line::from(vec![
            Span::styled(
                "  datepick",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            value_span,
            Span::styled("  │  ", separator_style),
            Span::styled(format!("years {min_year}..{max_year}"), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("changes {}", self.app.changes()), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(WIDGET_BORDER)),
        )
    }
}
