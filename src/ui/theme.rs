use ratatui::style::Color;

pub const FOCUS_BORDER: Color = Color::Rgb(0xe0, 0xaf, 0x68);
pub const WIDGET_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const FIELD_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const SELECTED_ROW: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
