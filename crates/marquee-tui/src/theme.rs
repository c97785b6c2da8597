use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Outer panels (the "paper" the split tears open)
    pub panel_bg: Color,
    pub panel_fg: Color,
    pub panel_muted: Color,

    // Reveal band and the content inside it
    pub reveal_bg: Color,
    pub reveal_fg: Color,
    pub reveal_muted: Color,

    // Semantic colors
    pub accent: Color,
    pub bar_bg: Color,
    pub bar_fg: Color,
    pub bar_muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Cream panels over a black reveal, matching the brand page
        Self {
            panel_bg: Color::Rgb(0xee, 0xeb, 0xdc),
            panel_fg: Color::Rgb(0x14, 0x12, 0x0e),
            panel_muted: Color::Rgb(0x6b, 0x66, 0x58),
            reveal_bg: Color::Rgb(0x00, 0x00, 0x00),
            reveal_fg: Color::Rgb(0xf2, 0xf0, 0xe8),
            reveal_muted: Color::Rgb(0xa8, 0xa4, 0x98),
            accent: Color::Rgb(0xe7, 0x8a, 0x4e),
            bar_bg: Color::Rgb(0x1c, 0x1a, 0x16),
            bar_fg: Color::Rgb(0xd4, 0xcf, 0xc0),
            bar_muted: Color::Rgb(0x92, 0x8d, 0x7e),
        }
    }
}
