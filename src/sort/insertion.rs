//! Insertion sort as an explicit stepper

use super::{SortOrder, Step};

/// Cursor over the insertion sort comparison sequence.
///
/// `next` is the index of the element currently being inserted and
/// `cursor` its present position. Each swap moves it one slot to the left;
/// a comparison that finds it in place (or reaching index 0) moves on to
/// the following element.
#[derive(Debug, Clone, Default)]
pub struct InsertionSort {
    next: usize,
    cursor: usize,
}

impl InsertionSort {
    pub fn new() -> Self {
        InsertionSort::default()
    }

    pub fn step(&mut self, values: &mut [i64], order: SortOrder) -> Step {
        if self.cursor == 0 {
            self.next += 1;
            self.cursor = self.next;
        }
        if self.next >= values.len() {
            return Step::Done;
        }

        let left = self.cursor - 1;
        let right = self.cursor;

        if order.out_of_order(values[left], values[right]) {
            values.swap(left, right);
            self.cursor = left;
            Step::Swapped { left, right }
        } else {
            // In place; pick up the next element on the following call
            self.cursor = 0;
            Step::Compared { left, right }
        }
    }
}
