//! Bubble sort as an explicit stepper

use super::{SortOrder, Step};

/// Cursor over the bubble sort comparison sequence.
///
/// Pass `p` compares the adjacent pairs `(j, j + 1)` for `j` in
/// `0..len - 1 - p`, left to right. There are `len - 1` passes.
#[derive(Debug, Clone, Default)]
pub struct BubbleSort {
    pass: usize,
    index: usize,
}

impl BubbleSort {
    pub fn new() -> Self {
        BubbleSort::default()
    }

    pub fn step(&mut self, values: &mut [i64], order: SortOrder) -> Step {
        let len = values.len();
        if len < 2 || self.pass >= len - 1 {
            return Step::Done;
        }

        let left = self.index;
        let right = left + 1;

        self.index += 1;
        if self.index >= len - 1 - self.pass {
            self.pass += 1;
            self.index = 0;
        }

        if order.out_of_order(values[left], values[right]) {
            values.swap(left, right);
            Step::Swapped { left, right }
        } else {
            Step::Compared { left, right }
        }
    }
}
