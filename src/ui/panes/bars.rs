//! Bar pane: the array drawn as vertical bars
//!
//! Bar rectangles come from [`Geometry`] in fractional cell units. Each
//! terminal column is assigned to the bar covering its center, unless a
//! highlighted bar overlaps the column, in which case that bar wins. The
//! partially covered top cell of a bar is drawn with an eighth-block glyph.

use crate::geometry::{Geometry, ValueRange};
use crate::ui::theme::DEFAULT_THEME;
use crate::visualizer::{Highlight, HighlightSet};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

const EIGHTHS: [&str; 9] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

/// Color of bar `index`: the highlight override if present, else the gradient
pub fn bar_color(index: usize, highlights: &HighlightSet) -> Color {
    match highlights.get(&index) {
        Some(Highlight::Left) => DEFAULT_THEME.swap_left,
        Some(Highlight::Right) => DEFAULT_THEME.swap_right,
        None => DEFAULT_THEME.gradient[index % DEFAULT_THEME.gradient.len()],
    }
}

/// Glyph for a cell whose lower `filled` fraction (0.0..=1.0) is covered
fn block_symbol(filled: f64) -> Option<&'static str> {
    let eighths = (filled.clamp(0.0, 1.0) * 8.0).round() as usize;
    (eighths > 0).then(|| EIGHTHS[eighths])
}

pub struct BarsView<'a> {
    pub values: &'a [i64],
    pub range: ValueRange,
    pub highlights: &'a HighlightSet,
}

impl Widget for BarsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() || self.values.is_empty() {
            return;
        }

        let geometry = Geometry::new(
            self.values.len(),
            self.range,
            f64::from(area.width),
            f64::from(area.height),
        );

        for col in 0..area.width {
            let x = f64::from(col);
            // Narrow panes squeeze several bars into one column
            let highlighted = geometry
                .indices_between(x, x + 1.0)
                .find(|i| self.highlights.contains_key(i));
            let Some(index) = highlighted.or_else(|| geometry.index_at(x + 0.5)) else {
                continue;
            };
            let bar = geometry.bar(index, self.values[index]);
            let color = bar_color(index, self.highlights);

            for row in 0..area.height {
                let top = f64::from(row);
                // Rows are top-down; the bar covers everything below `bar.y`
                let filled = top + 1.0 - bar.y.max(top);
                let Some(symbol) = block_symbol(filled) else {
                    continue;
                };
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_symbol(symbol).set_fg(color);
                }
            }
        }
    }
}

/// Render the bordered bar pane
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    values: &[i64],
    range: ValueRange,
    highlights: &HighlightSet,
    is_running: bool,
) {
    let border_style = if is_running {
        Style::default()
            .fg(DEFAULT_THEME.secondary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.comment)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(DEFAULT_THEME.bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    frame.render_widget(
        BarsView {
            values,
            range,
            highlights,
        },
        inner,
    );
}
