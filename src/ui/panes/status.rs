//! Status bar rendering with state badge and run statistics

use crate::geometry::ValueRange;
use crate::sort::SortStats;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Badge shown at the left of the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    Idle,
    Sorting,
    Sorted,
}

impl StatusBadge {
    fn label(self) -> &'static str {
        match self {
            StatusBadge::Idle => " IDLE ",
            StatusBadge::Sorting => " ▶ SORTING ",
            StatusBadge::Sorted => " SORTED ",
        }
    }

    fn color(self) -> Color {
        match self {
            StatusBadge::Idle => DEFAULT_THEME.primary,
            StatusBadge::Sorting => DEFAULT_THEME.secondary,
            StatusBadge::Sorted => DEFAULT_THEME.success,
        }
    }
}

/// Render the status bar at the bottom.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    badge: StatusBadge,
    message: &str,
    len: usize,
    range: ValueRange,
    stats: Option<SortStats>,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let text_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);

    let left_spans = vec![
        Span::styled(
            badge.label(),
            Style::default()
                .bg(badge.color())
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", sep_style),
        Span::styled(format!(" {} ", message), text_style),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    let mut right_spans = vec![
        Span::styled(format!(" {} bars ", len), text_style),
        Span::styled("│", sep_style),
        Span::styled(format!(" {}..={} ", range.min, range.max), text_style),
    ];

    if let Some(stats) = stats {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            format!(" {} cmp ", stats.comparisons),
            text_style,
        ));
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(format!(" {} swaps ", stats.swaps), text_style));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
