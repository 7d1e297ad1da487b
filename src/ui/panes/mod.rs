//! TUI pane rendering modules
//!
//! - [`header`]: algorithm/order title and the controls
//! - [`bars`]: the array as vertical bars with swap highlights
//! - [`status`]: state badge, array shape and run statistics

pub mod bars;
pub mod header;
pub mod status;

pub use bars::{BarsView, render_bars_pane};
pub use header::{HEADER_HEIGHT, render_header};
pub use status::{StatusBadge, render_status_bar};
