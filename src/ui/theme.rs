use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub title: Color,
    pub status_bg: Color,
    /// Repeating per-index bar colors, so neighbouring equal values stay distinct
    pub gradient: [Color; 3],
    pub swap_left: Color,  // Green
    pub swap_right: Color, // Red
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    title: Color::Rgb(166, 227, 161), // Green, like the swap marker
    status_bg: Color::Rgb(50, 50, 70),
    gradient: [
        Color::Rgb(128, 128, 128),
        Color::Rgb(160, 160, 160),
        Color::Rgb(192, 192, 192),
    ],
    swap_left: Color::Rgb(0, 255, 0),
    swap_right: Color::Rgb(255, 0, 0),
};
