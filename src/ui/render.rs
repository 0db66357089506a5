use crate::ui::app::App;
use crate::ui::date_select::DateSelectView;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app).widget(), header);

    frame.render_widget(Clear, body);
    let view = DateSelectView::new(app.select(), app.input(), app.focus());
    if let Some(position) = view.cursor_position(body) {
        frame.set_cursor_position(position);
    }
    frame.render_widget(view, body);

    frame.render_widget(Footer, footer);
}
