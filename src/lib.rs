//! # Introduction
//!
//! sortviz draws an integer array as vertical bars in the terminal and
//! animates bubble sort or insertion sort on it, one swap per frame. The
//! terminal UI is built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! ListSpec → Vec<i64> → SortProcess::resume → highlights → Geometry → bars
//! ```
//!
//! 1. [`list`] — random starting lists within a value range.
//! 2. [`sort`] — explicit stepper types, one comparison per step, wrapped in
//!    a resumable [`sort::SortProcess`].
//! 3. [`visualizer`] — the idle/running state machine that owns the array
//!    and applies keyboard [`visualizer::Command`]s.
//! 4. [`geometry`] — maps values and viewport size to bar rectangles.
//! 5. [`ui`] — ratatui render loop and panes; not part of the stable API.
//!
//! [`config`] and [`logging`] cover command-line options and optional file
//! logging.

pub mod config;
pub mod geometry;
pub mod list;
pub mod logging;
pub mod sort;
pub mod ui;
pub mod visualizer;
