//! Mapping from array values to bar rectangles
//!
//! All coordinates are in fractional viewport units (terminal cells when
//! rendered), with `y` growing downwards. A bar starts at its `y` and runs
//! to the bottom of the viewport; anything that would fall outside the
//! viewport is clipped by the renderer.
//!
//! When the viewport is narrower than the number of bars, several bars share
//! one terminal column. The renderer then shows one of them per column (a
//! highlighted one if any), so some unhighlighted bars are not visible.

use std::ops::Range;

/// Horizontal padding shared between the left and right edge
pub const SIDE_PAD: f64 = 4.0;

/// Space kept free above the tallest bar
pub const TOP_PAD: f64 = 1.0;

/// Smallest and largest value of the current array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    pub min: i64,
    pub max: i64,
}

impl ValueRange {
    /// Range of `values`, or `None` for an empty slice
    pub fn of(values: &[i64]) -> Option<Self> {
        let min = *values.iter().min()?;
        let max = *values.iter().max()?;
        Some(ValueRange { min, max })
    }

    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// `max - min` as a float; the full i64 span does not fit in an i64
    pub fn span(&self) -> f64 {
        offset(self.max, self.min)
    }
}

/// `value - min` without overflowing i64
fn offset(value: i64, min: i64) -> f64 {
    (i128::from(value) - i128::from(min)) as f64
}

/// A single bar, in viewport units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Derived bar layout for one array and one viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub count: usize,
    pub range: ValueRange,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub bar_width: f64,
    pub height_scale: f64,
    pub start_x: f64,
    top_pad: f64,
}

impl Geometry {
    /// Compute the layout with the default paddings
    pub fn new(count: usize, range: ValueRange, width: f64, height: f64) -> Self {
        Self::with_padding(count, range, width, height, SIDE_PAD, TOP_PAD)
    }

    pub fn with_padding(
        count: usize,
        range: ValueRange,
        width: f64,
        height: f64,
        side_pad: f64,
        top_pad: f64,
    ) -> Self {
        let usable_width = (width - side_pad).max(0.0);
        let usable_height = (height - top_pad).max(0.0);

        let bar_width = if count == 0 {
            0.0
        } else {
            usable_width / count as f64
        };

        // An all-equal array has no spread to scale by; those bars are
        // drawn at full usable height instead (see `bar`).
        let height_scale = if range.is_degenerate() {
            0.0
        } else {
            usable_height / range.span()
        };

        Geometry {
            count,
            range,
            viewport_width: width,
            viewport_height: height,
            bar_width,
            height_scale,
            start_x: (side_pad / 2.0).min(width / 2.0),
            top_pad: top_pad.min(height),
        }
    }

    /// Rectangle of bar `index` holding `value`
    pub fn bar(&self, index: usize, value: i64) -> BarRect {
        let x = self.start_x + index as f64 * self.bar_width;
        let y = if self.range.is_degenerate() {
            self.top_pad
        } else {
            self.viewport_height - offset(value, self.range.min) * self.height_scale
        };

        BarRect {
            x,
            y,
            width: self.bar_width,
            height: self.viewport_height - y,
        }
    }

    /// Indices of the bars overlapping the horizontal span `x0..x1`
    pub fn indices_between(&self, x0: f64, x1: f64) -> Range<usize> {
        if self.count == 0 || self.bar_width <= 0.0 || x1 <= self.start_x {
            return 0..0;
        }
        let lo = ((x0 - self.start_x) / self.bar_width).floor().max(0.0) as usize;
        let hi = ((x1 - self.start_x) / self.bar_width).ceil().max(0.0) as usize;
        lo.min(self.count)..hi.min(self.count)
    }

    /// Index of the bar covering horizontal position `x`, if any
    pub fn index_at(&self, x: f64) -> Option<usize> {
        if self.count == 0 || self.bar_width <= 0.0 || x < self.start_x {
            return None;
        }
        let index = ((x - self.start_x) / self.bar_width).floor() as usize;
        (index < self.count).then_some(index)
    }
}
