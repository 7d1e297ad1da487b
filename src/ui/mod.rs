//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! - **[`app`]** — render loop, tick cadence, key bindings
//! - **[`panes`]** — stateless render functions for the header, bars and status bar
//! - **[`session`]** — raw mode / alternate screen acquisition and release
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point is [`App`]: construct it with a [`Visualizer`] and call
//! [`App::run`] to start the loop.
//!
//! [`Visualizer`]: crate::visualizer::Visualizer
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod session;
pub mod theme;

pub use app::App;
pub use session::TerminalSession;
