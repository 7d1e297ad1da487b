//! Step-emitting sort algorithms
//!
//! Each algorithm is an explicit stepper that keeps its own cursor and
//! performs exactly one pairwise comparison per [`step`](BubbleSort::step)
//! call. The array itself is not owned by the stepper: the caller passes it
//! in on every step, so the visualizer keeps exclusive ownership and can
//! drop a half-finished process at any time.
//!
//! [`SortProcess`] pairs a stepper with the requested [`SortOrder`] and the
//! run statistics, and exposes [`SortProcess::resume`], which advances until
//! the next swap. One resumption corresponds to one rendered frame.

pub mod bubble;
pub mod insertion;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;

use std::fmt;

/// Requested ordering of the sorted array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Whether `left` must be moved after `right` for this order.
    ///
    /// Ties are never out of order, so equal elements are never swapped.
    pub fn out_of_order(self, left: i64, right: i64) -> bool {
        match self {
            SortOrder::Ascending => left > right,
            SortOrder::Descending => left < right,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Ascending",
            SortOrder::Descending => "Descending",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The supported algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Algorithm {
    #[default]
    Bubble,
    Insertion,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a single stepper call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Compared `left` and `right`; they were already in order
    Compared { left: usize, right: usize },
    /// Compared `left` and `right` and swapped them
    Swapped { left: usize, right: usize },
    /// No comparisons left
    Done,
}

/// Comparison and swap counters for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortStats {
    pub comparisons: usize,
    pub swaps: usize,
}

#[derive(Debug, Clone)]
enum Stepper {
    Bubble(BubbleSort),
    Insertion(InsertionSort),
}

/// A suspendable sort run over an externally owned array
#[derive(Debug, Clone)]
pub struct SortProcess {
    algorithm: Algorithm,
    order: SortOrder,
    stepper: Stepper,
    stats: SortStats,
    finished: bool,
}

impl SortProcess {
    pub fn new(algorithm: Algorithm, order: SortOrder) -> Self {
        let stepper = match algorithm {
            Algorithm::Bubble => Stepper::Bubble(BubbleSort::new()),
            Algorithm::Insertion => Stepper::Insertion(InsertionSort::new()),
        };
        SortProcess {
            algorithm,
            order,
            stepper,
            stats: SortStats::default(),
            finished: false,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn stats(&self) -> SortStats {
        self.stats
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Perform exactly one comparison (or report exhaustion)
    pub fn step(&mut self, values: &mut [i64]) -> Step {
        if self.finished {
            return Step::Done;
        }

        let step = match &mut self.stepper {
            Stepper::Bubble(s) => s.step(values, self.order),
            Stepper::Insertion(s) => s.step(values, self.order),
        };

        match step {
            Step::Compared { .. } => self.stats.comparisons += 1,
            Step::Swapped { .. } => {
                self.stats.comparisons += 1;
                self.stats.swaps += 1;
            }
            Step::Done => self.finished = true,
        }

        step
    }

    /// Advance until the next swap or until the algorithm is exhausted.
    ///
    /// Comparisons that need no swap are consumed silently, so the caller
    /// only ever sees `Swapped` or `Done`.
    pub fn resume(&mut self, values: &mut [i64]) -> Step {
        loop {
            match self.step(values) {
                Step::Compared { .. } => continue,
                other => return other,
            }
        }
    }

    /// Drive the process to exhaustion, collecting every swapped pair
    pub fn run_to_end(&mut self, values: &mut [i64]) -> Vec<(usize, usize)> {
        let mut swaps = Vec::new();
        while let Step::Swapped { left, right } = self.resume(values) {
            swaps.push((left, right));
        }
        swaps
    }
}
