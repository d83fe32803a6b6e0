use ratatui::style::{Color, Modifier, Style};
use snape_core::Theme;

/// Colours used by the picker for one [`Theme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub base: Style,
    pub accent: Color,
    pub muted: Color,
    pub filter: Color,
    pub selected: Style,
    pub success: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::System => Self {
                base: Style::default(),
                accent: Color::Cyan,
                muted: Color::DarkGray,
                filter: Color::Yellow,
                selected: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
                success: Color::Green,
            },
            Theme::Light => Self {
                base: Style::default().fg(Color::Black).bg(Color::White),
                accent: Color::Blue,
                muted: Color::Gray,
                filter: Color::Rgb(0xd9, 0x77, 0x06),
                selected: Style::default()
                    .fg(Color::Blue)
                    .bg(Color::Rgb(0xdb, 0xea, 0xfe))
                    .add_modifier(Modifier::BOLD),
                success: Color::Green,
            },
            Theme::Dark => Self {
                base: Style::default().fg(Color::White).bg(Color::Black),
                accent: Color::LightBlue,
                muted: Color::DarkGray,
                filter: Color::Rgb(0xff, 0xa5, 0x00),
                selected: Style::default()
                    .fg(Color::LightBlue)
                    .bg(Color::Rgb(0x1e, 0x29, 0x3b))
                    .add_modifier(Modifier::BOLD),
                success: Color::LightGreen,
            },
        }
    }
}
