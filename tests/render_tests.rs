// Rendering and key-handling tests against ratatui's TestBackend

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use sortviz::sort::{Algorithm, SortOrder};
use sortviz::ui::app::{App, MAX_EVENTS_PER_TICK, command_for_key};
use sortviz::ui::theme::DEFAULT_THEME;
use sortviz::visualizer::{Command, Visualizer};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

fn app_with(values: Vec<i64>) -> App {
    App::new(Visualizer::with_values(values), Duration::from_millis(16))
}

fn draw(app: &App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).expect("terminal");
    terminal.draw(|f| app.render(f)).expect("draw");
    terminal.backend().buffer().clone()
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

fn has_bar_cell_colored(buffer: &Buffer, color: ratatui::style::Color) -> bool {
    buffer
        .content()
        .iter()
        .any(|cell| cell.symbol() == "█" && cell.fg == color)
}

#[test]
fn test_key_bindings() {
    assert_eq!(command_for_key(key('r')), Some(Command::Reset));
    assert_eq!(command_for_key(key(' ')), Some(Command::Start));
    assert_eq!(
        command_for_key(key('a')),
        Some(Command::SetOrder(SortOrder::Ascending))
    );
    assert_eq!(
        command_for_key(key('D')),
        Some(Command::SetOrder(SortOrder::Descending))
    );
    assert_eq!(
        command_for_key(key('i')),
        Some(Command::SelectAlgorithm(Algorithm::Insertion))
    );
    assert_eq!(
        command_for_key(key('b')),
        Some(Command::SelectAlgorithm(Algorithm::Bubble))
    );
    assert_eq!(command_for_key(key('q')), Some(Command::Quit));
    assert_eq!(
        command_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(Command::Quit)
    );
    assert_eq!(command_for_key(key('x')), None);
}

#[test]
fn test_header_shows_selection() {
    let mut app = app_with(vec![4, 8, 1]);
    let buffer = draw(&app);
    assert!(row_text(&buffer, 0).contains("Bubble Sort - Ascending"));
    assert!(row_text(&buffer, 1).contains("SPACE - Start Sorting"));

    app.handle_key_event(key('i'));
    app.handle_key_event(key('d'));
    let buffer = draw(&app);
    assert!(row_text(&buffer, 0).contains("Insertion Sort - Descending"));
}

#[test]
fn test_selection_keys_ignored_while_sorting() {
    let mut app = app_with(vec![5, 3, 4, 1, 2]);
    app.handle_key_event(key(' '));
    app.on_tick();

    app.handle_key_event(key('i'));
    app.handle_key_event(key('d'));

    let buffer = draw(&app);
    assert!(row_text(&buffer, 0).contains("Bubble Sort - Ascending"));
    assert!(row_text(&buffer, 19).contains("SORTING"));
}

#[test]
fn test_idle_frame_uses_gradient_only() {
    let app = app_with(vec![1, 9, 5, 7]);
    let buffer = draw(&app);

    assert!(!has_bar_cell_colored(&buffer, DEFAULT_THEME.swap_left));
    assert!(!has_bar_cell_colored(&buffer, DEFAULT_THEME.swap_right));
    assert!(has_bar_cell_colored(&buffer, DEFAULT_THEME.gradient[1]));
}

#[test]
fn test_swapped_pair_is_highlighted_for_one_frame() {
    let mut app = app_with(vec![1, 2, 0]);
    app.handle_key_event(key('d'));
    app.handle_key_event(key(' '));

    // Descending: 1 < 2, so the first pair swaps to [2, 1, 0]
    app.on_tick();
    assert_eq!(app.visualizer.values(), &[2, 1, 0]);
    let buffer = draw(&app);
    assert!(has_bar_cell_colored(&buffer, DEFAULT_THEME.swap_left));
    assert!(has_bar_cell_colored(&buffer, DEFAULT_THEME.swap_right));

    // Already sorted: the next tick finishes and drops the highlights
    app.on_tick();
    assert!(!app.visualizer.is_running());
    let buffer = draw(&app);
    assert!(!has_bar_cell_colored(&buffer, DEFAULT_THEME.swap_left));
    assert!(row_text(&buffer, 19).contains("SORTED"));
}

#[test]
fn test_status_bar_reports_stats_after_finish() {
    let mut app = app_with(vec![2, 1]);
    app.handle_key_event(key(' '));
    app.on_tick();
    app.on_tick();

    let status = row_text(&draw(&app), 19);
    assert!(status.contains("1 swaps"));
    assert!(status.contains("1 cmp"));
}

#[test]
fn test_quit_key() {
    let mut app = app_with(vec![1, 2]);
    app.handle_key_event(key('q'));
    assert!(app.visualizer.should_quit());
}

#[test]
fn test_late_frame_still_reads_pending_keys() {
    let mut app = app_with(vec![3, 1, 2]);
    let mut pending: VecDeque<Event> = [Event::Key(key('i')), Event::Key(key('d'))].into();
    let mut timeouts = Vec::new();

    // Deadline already passed
    let deadline = Instant::now() - Duration::from_millis(5);
    let handled = app
        .drain_input(deadline, |timeout| {
            timeouts.push(timeout);
            Ok(pending.pop_front())
        })
        .expect("drain");

    assert_eq!(handled, 2);
    assert!(timeouts.iter().all(|t| t.is_zero()));
    assert_eq!(app.visualizer.algorithm(), Algorithm::Insertion);
    assert_eq!(app.visualizer.order(), SortOrder::Descending);
}

#[test]
fn test_input_drain_is_bounded_per_tick() {
    let mut app = app_with(vec![3, 1, 2]);
    let mut calls = 0;

    let handled = app
        .drain_input(Instant::now() + Duration::from_secs(60), |_| {
            calls += 1;
            Ok(Some(Event::Key(key('a'))))
        })
        .expect("drain");

    assert_eq!(handled, MAX_EVENTS_PER_TICK);
    assert_eq!(calls, MAX_EVENTS_PER_TICK);
}

#[test]
fn test_render_extreme_values() {
    let app = app_with(vec![i64::MIN, 0, i64::MAX]);
    let buffer = draw(&app);
    assert!(buffer.content().iter().any(|cell| cell.symbol() == "█"));
}
