//! Header with the current selection and the controls

use crate::sort::{Algorithm, SortOrder};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

pub const HEADER_HEIGHT: u16 = 3;

const CONTROLS: &str = "R - Reset | SPACE - Start Sorting | A - Ascending | D - Descending";
const ALGORITHMS: &str = "I - Insertion Sort | B - Bubble Sort | Q - Quit";

pub fn title_text(algorithm: Algorithm, order: SortOrder) -> String {
    format!("{} - {}", algorithm, order)
}

pub fn render_header(frame: &mut Frame, area: Rect, algorithm: Algorithm, order: SortOrder) {
    let lines = vec![
        Line::styled(
            title_text(algorithm, order),
            Style::default()
                .fg(DEFAULT_THEME.title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(CONTROLS, Style::default().fg(DEFAULT_THEME.fg)),
        Line::styled(ALGORITHMS, Style::default().fg(DEFAULT_THEME.fg)),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(DEFAULT_THEME.bg));

    frame.render_widget(paragraph, area);
}
