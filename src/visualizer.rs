//! Animation state machine
//!
//! [`Visualizer`] owns the array being sorted, the selected algorithm and
//! order, and the active [`SortProcess`]. The render loop feeds it
//! [`Command`]s from the keyboard and calls [`Visualizer::tick`] once per
//! frame.
//!
//! ```text
//!            Start (idle only)
//!   Idle ───────────────────────▶ Running
//!    ▲                              │
//!    └──── exhausted / Reset ───────┘
//! ```
//!
//! Order and algorithm changes are only accepted while idle. Reset is
//! always accepted: it replaces the array and drops any active process.

use crate::geometry::ValueRange;
use crate::list::ListSpec;
use crate::sort::{Algorithm, SortOrder, SortProcess, SortStats, Step};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

/// Highlight role of a bar touched by the latest swap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// Lower index of the swapped pair
    Left,
    /// Higher index of the swapped pair
    Right,
}

/// Transient index → highlight overrides for the current frame
pub type HighlightSet = FxHashMap<usize, Highlight>;

/// User intents, decoupled from the key bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Reset,
    Start,
    SetOrder(SortOrder),
    SelectAlgorithm(Algorithm),
    Quit,
}

/// Top-level animation state
#[derive(Debug, Clone)]
pub enum Animation {
    Idle,
    Running(SortProcess),
}

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing to advance
    Idle,
    /// The active process swapped `left` and `right`
    Swapped { left: usize, right: usize },
    /// The active process ran out of comparisons and the state is idle again
    Finished(SortStats),
}

pub struct Visualizer {
    values: Vec<i64>,
    range: ValueRange,
    list_spec: ListSpec,
    rng: StdRng,
    algorithm: Algorithm,
    order: SortOrder,
    animation: Animation,
    highlights: HighlightSet,
    /// Stats of the running process, or of the last one to finish
    last_stats: Option<SortStats>,
    /// Whether the array is known to be sorted by the last finished run
    sorted: bool,
    should_quit: bool,
}

impl Visualizer {
    /// Create a visualizer with a freshly generated list
    pub fn new(list_spec: ListSpec, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let values = list_spec.generate(&mut rng);
        let mut visualizer = Self::with_values(values);
        visualizer.list_spec = list_spec;
        visualizer.rng = rng;
        visualizer
    }

    /// Create a visualizer around a fixed array.
    ///
    /// Resetting still generates lists from the default [`ListSpec`].
    pub fn with_values(values: Vec<i64>) -> Self {
        let range = range_of(&values);
        Visualizer {
            values,
            range,
            list_spec: ListSpec::default(),
            rng: StdRng::from_entropy(),
            algorithm: Algorithm::default(),
            order: SortOrder::default(),
            animation: Animation::Idle,
            highlights: HighlightSet::default(),
            last_stats: None,
            sorted: false,
            should_quit: false,
        }
    }

    pub fn with_selection(mut self, algorithm: Algorithm, order: SortOrder) -> Self {
        self.algorithm = algorithm;
        self.order = order;
        self
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn range(&self) -> ValueRange {
        self.range
    }

    pub fn list_spec(&self) -> ListSpec {
        self.list_spec
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    pub fn is_running(&self) -> bool {
        matches!(self.animation, Animation::Running(_))
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn highlights(&self) -> &HighlightSet {
        &self.highlights
    }

    /// Stats of the active run, falling back to the last finished one
    pub fn stats(&self) -> Option<SortStats> {
        match &self.animation {
            Animation::Running(process) => Some(process.stats()),
            Animation::Idle => self.last_stats,
        }
    }

    /// Apply a command. Returns `false` if it was ignored in the current state.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Quit => {
                info!("quit requested");
                self.should_quit = true;
                true
            }
            Command::Reset => {
                self.reset();
                true
            }
            Command::Start => {
                if self.is_running() {
                    debug!("start ignored: already sorting");
                    return false;
                }
                info!(
                    algorithm = %self.algorithm,
                    order = %self.order,
                    len = self.values.len(),
                    "sort started"
                );
                self.animation = Animation::Running(SortProcess::new(self.algorithm, self.order));
                self.last_stats = None;
                self.sorted = false;
                true
            }
            Command::SetOrder(order) => {
                if self.is_running() {
                    debug!(%order, "order change ignored while sorting");
                    return false;
                }
                self.order = order;
                true
            }
            Command::SelectAlgorithm(algorithm) => {
                if self.is_running() {
                    debug!(%algorithm, "algorithm change ignored while sorting");
                    return false;
                }
                self.algorithm = algorithm;
                true
            }
        }
    }

    /// Advance one frame.
    ///
    /// Highlights from the previous frame are always cleared first; while
    /// running, the process is resumed until its next swap, whose pair
    /// becomes the new highlight set.
    pub fn tick(&mut self) -> TickOutcome {
        self.highlights.clear();

        let Animation::Running(process) = &mut self.animation else {
            return TickOutcome::Idle;
        };

        match process.resume(&mut self.values) {
            Step::Swapped { left, right } => {
                self.highlights.insert(left, Highlight::Left);
                self.highlights.insert(right, Highlight::Right);
                TickOutcome::Swapped { left, right }
            }
            Step::Done | Step::Compared { .. } => {
                let stats = process.stats();
                info!(
                    comparisons = stats.comparisons,
                    swaps = stats.swaps,
                    "sort finished"
                );
                self.animation = Animation::Idle;
                self.last_stats = Some(stats);
                self.sorted = true;
                TickOutcome::Finished(stats)
            }
        }
    }

    /// Replace the array with a fresh list and return to idle
    fn reset(&mut self) {
        if self.is_running() {
            debug!("discarding active sort process");
        }
        self.values = self.list_spec.generate(&mut self.rng);
        self.range = range_of(&self.values);
        self.animation = Animation::Idle;
        self.highlights.clear();
        self.last_stats = None;
        self.sorted = false;
        info!(len = self.values.len(), "list reset");
    }
}

fn range_of(values: &[i64]) -> ValueRange {
    ValueRange::of(values).unwrap_or(ValueRange { min: 0, max: 0 })
}
