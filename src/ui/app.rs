//! Main TUI application: render loop and key handling

use crate::sort::{Algorithm, SortOrder};
use crate::ui::panes::{self, HEADER_HEIGHT, StatusBadge};
use crate::visualizer::{Command, TickOutcome, Visualizer};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Upper bound on key events handled within one tick
pub const MAX_EVENTS_PER_TICK: usize = 32;

/// Translate a key press into a command
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
        KeyCode::Char(' ') => Some(Command::Start),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::SetOrder(SortOrder::Ascending)),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::SetOrder(SortOrder::Descending)),
        KeyCode::Char('i') | KeyCode::Char('I') => {
            Some(Command::SelectAlgorithm(Algorithm::Insertion))
        }
        KeyCode::Char('b') | KeyCode::Char('B') => {
            Some(Command::SelectAlgorithm(Algorithm::Bubble))
        }
        _ => None,
    }
}

/// The main application state
pub struct App {
    /// Array, selection and animation state
    pub visualizer: Visualizer,

    /// Time allotted to one tick
    pub frame_budget: Duration,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(visualizer: Visualizer, frame_budget: Duration) -> Self {
        App {
            visualizer,
            frame_budget,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application until a quit command arrives
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let mut next_frame = Instant::now();

        while !self.visualizer.should_quit() {
            self.on_tick();
            terminal.draw(|f| self.render(f))?;

            // Fixed cadence; a slow frame delays the next one instead of
            // triggering a burst of catch-up ticks.
            next_frame += self.frame_budget;
            let now = Instant::now();
            if next_frame < now {
                next_frame = now;
            }

            self.handle_input_until(next_frame)?;
        }

        Ok(())
    }

    /// Advance the visualizer by one frame
    pub fn on_tick(&mut self) {
        match self.visualizer.tick() {
            TickOutcome::Idle => {}
            TickOutcome::Swapped { left, right } => {
                trace!(left, right, "swap");
                self.status_message = format!(
                    "{} ({}) running...",
                    self.visualizer.algorithm(),
                    self.visualizer.order()
                );
            }
            TickOutcome::Finished(stats) => {
                debug!(comparisons = stats.comparisons, swaps = stats.swaps, "run complete");
                self.status_message = "Done sorting".to_string();
            }
        }
    }

    /// Handle key events until `deadline`, then wait out the rest of the tick
    fn handle_input_until(&mut self, deadline: Instant) -> io::Result<()> {
        self.drain_input(deadline, |timeout| {
            if event::poll(timeout)? {
                event::read().map(Some)
            } else {
                Ok(None)
            }
        })?;

        let remaining = deadline.saturating_duration_since(Instant::now());
        if !remaining.is_zero() && !self.visualizer.should_quit() {
            std::thread::sleep(remaining);
        }

        Ok(())
    }

    /// Handle events from `next_event` until `deadline` or the per-tick cap.
    ///
    /// `next_event` waits up to the given timeout and returns `None` when
    /// nothing arrived. It is always called at least once, with a zero
    /// timeout if the deadline has already passed, so a late frame still
    /// picks up pending keys. Returns the number of key presses handled.
    pub fn drain_input<F>(&mut self, deadline: Instant, mut next_event: F) -> io::Result<usize>
    where
        F: FnMut(Duration) -> io::Result<Option<Event>>,
    {
        let mut handled = 0;

        while handled < MAX_EVENTS_PER_TICK && !self.visualizer.should_quit() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            let Some(event) = next_event(remaining)? else {
                break;
            };
            if let Event::Key(key) = event {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                    handled += 1;
                }
            }
        }

        Ok(handled)
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let Some(command) = command_for_key(key) else {
            return;
        };

        if !self.visualizer.apply(command) {
            debug!(?command, "command ignored");
            return;
        }

        match command {
            Command::Reset => self.status_message = "New list generated".to_string(),
            Command::Start => {
                self.status_message = format!(
                    "{} ({}) running...",
                    self.visualizer.algorithm(),
                    self.visualizer.order()
                );
            }
            Command::SetOrder(order) => self.status_message = format!("Order: {}", order),
            Command::SelectAlgorithm(algorithm) => {
                self.status_message = format!("Algorithm: {}", algorithm);
            }
            Command::Quit => {}
        }
    }

    fn badge(&self) -> StatusBadge {
        if self.visualizer.is_running() {
            StatusBadge::Sorting
        } else if self.visualizer.is_sorted() {
            StatusBadge::Sorted
        } else {
            StatusBadge::Idle
        }
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        panes::render_header(
            frame,
            chunks[0],
            self.visualizer.algorithm(),
            self.visualizer.order(),
        );

        panes::render_bars_pane(
            frame,
            chunks[1],
            self.visualizer.values(),
            self.visualizer.range(),
            self.visualizer.highlights(),
            self.visualizer.is_running(),
        );

        panes::render_status_bar(
            frame,
            chunks[2],
            self.badge(),
            &self.status_message,
            self.visualizer.values().len(),
            self.visualizer.range(),
            self.visualizer.stats(),
        );
    }
}
