use crate::ui::theme::{HEADER_TEXT, WIDGET_BORDER};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

const HINTS: &str = " Tab: Focus │ ↑/↓: Pick │ ←/→: Column │ t: Today │ c: Clear │ q: Quit";
const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"), " ");

/// Key hints on the left, the crate version tucked into the right edge.
pub struct Footer;

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Width math is in chars; the hint string is not ASCII.
        let inner = area.width.saturating_sub(2) as usize;
        let gap = inner
            .saturating_sub(HINTS.chars().count())
            .saturating_sub(VERSION.chars().count());

        let line = Line::from(vec![
            Span::raw(HINTS),
            Span::raw(" ".repeat(gap)),
            Span::raw(VERSION),
        ]);

        Paragraph::new(line)
            .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(WIDGET_BORDER)),
            )
            .render(area, buf);
    }
}
