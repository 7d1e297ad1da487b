// Integration tests for the animation state machine

use sortviz::list::ListSpec;
use sortviz::sort::{Algorithm, SortOrder, SortStats};
use sortviz::visualizer::{Command, Highlight, TickOutcome, Visualizer};

fn tick_until_finished(visualizer: &mut Visualizer) -> (usize, SortStats) {
    let mut frames = 0;
    loop {
        match visualizer.tick() {
            TickOutcome::Swapped { .. } => frames += 1,
            TickOutcome::Finished(stats) => return (frames, stats),
            TickOutcome::Idle => panic!("visualizer went idle without finishing"),
        }
        assert!(frames < 10_000, "sort did not terminate");
    }
}

#[test]
fn test_starts_idle() {
    let visualizer = Visualizer::with_values(vec![3, 1, 2]);
    assert!(!visualizer.is_running());
    assert_eq!(visualizer.algorithm(), Algorithm::Bubble);
    assert_eq!(visualizer.order(), SortOrder::Ascending);
    assert!(visualizer.highlights().is_empty());
    assert!(visualizer.stats().is_none());
}

#[test]
fn test_idle_tick_does_nothing() {
    let mut visualizer = Visualizer::with_values(vec![3, 1, 2]);
    assert_eq!(visualizer.tick(), TickOutcome::Idle);
    assert_eq!(visualizer.values(), &[3, 1, 2]);
}

#[test]
fn test_run_to_completion_returns_to_idle() {
    let mut visualizer = Visualizer::with_values(vec![5, 3, 4, 1, 2]);
    assert!(visualizer.apply(Command::Start));
    assert!(visualizer.is_running());

    let (frames, stats) = tick_until_finished(&mut visualizer);

    assert_eq!(frames, 8);
    assert_eq!(stats, SortStats { comparisons: 10, swaps: 8 });
    assert_eq!(visualizer.values(), &[1, 2, 3, 4, 5]);
    assert!(!visualizer.is_running());
    assert!(visualizer.is_sorted());
    assert_eq!(visualizer.stats(), Some(stats));
}

#[test]
fn test_one_swap_per_frame_with_highlights() {
    let mut visualizer = Visualizer::with_values(vec![5, 3, 4, 1, 2]);
    visualizer.apply(Command::Start);

    assert_eq!(visualizer.tick(), TickOutcome::Swapped { left: 0, right: 1 });
    assert_eq!(visualizer.values(), &[3, 5, 4, 1, 2]);
    assert_eq!(visualizer.highlights().len(), 2);
    assert_eq!(visualizer.highlights().get(&0), Some(&Highlight::Left));
    assert_eq!(visualizer.highlights().get(&1), Some(&Highlight::Right));

    assert_eq!(visualizer.tick(), TickOutcome::Swapped { left: 1, right: 2 });
    assert_eq!(visualizer.highlights().get(&0), None);
    assert_eq!(visualizer.highlights().get(&2), Some(&Highlight::Right));
}

#[test]
fn test_highlights_cleared_when_finished() {
    let mut visualizer = Visualizer::with_values(vec![2, 1]);
    visualizer.apply(Command::Start);

    assert!(matches!(visualizer.tick(), TickOutcome::Swapped { .. }));
    assert!(!visualizer.highlights().is_empty());
    assert!(matches!(visualizer.tick(), TickOutcome::Finished(_)));
    assert!(visualizer.highlights().is_empty());
}

#[test]
fn test_all_equal_finishes_on_first_tick() {
    for algorithm in [Algorithm::Bubble, Algorithm::Insertion] {
        let mut visualizer =
            Visualizer::with_values(vec![2, 2, 2]).with_selection(algorithm, SortOrder::Descending);
        visualizer.apply(Command::Start);

        let (frames, stats) = tick_until_finished(&mut visualizer);
        assert_eq!(frames, 0);
        assert_eq!(stats.swaps, 0);
        assert_eq!(visualizer.values(), &[2, 2, 2]);
    }
}

#[test]
fn test_empty_array_finishes_immediately() {
    let mut visualizer = Visualizer::with_values(Vec::new());
    visualizer.apply(Command::Start);
    assert_eq!(
        visualizer.tick(),
        TickOutcome::Finished(SortStats { comparisons: 0, swaps: 0 })
    );
}

// === GUARDED TRANSITIONS ===

#[test]
fn test_selection_rejected_while_running() {
    let mut visualizer = Visualizer::with_values(vec![5, 3, 4, 1, 2]);
    visualizer.apply(Command::Start);
    visualizer.tick();

    assert!(!visualizer.apply(Command::SelectAlgorithm(Algorithm::Insertion)));
    assert!(!visualizer.apply(Command::SetOrder(SortOrder::Descending)));
    assert_eq!(visualizer.algorithm(), Algorithm::Bubble);
    assert_eq!(visualizer.order(), SortOrder::Ascending);

    tick_until_finished(&mut visualizer);

    assert!(visualizer.apply(Command::SelectAlgorithm(Algorithm::Insertion)));
    assert!(visualizer.apply(Command::SetOrder(SortOrder::Descending)));
    assert_eq!(visualizer.algorithm(), Algorithm::Insertion);
    assert_eq!(visualizer.order(), SortOrder::Descending);
}

#[test]
fn test_start_ignored_while_running() {
    let mut visualizer = Visualizer::with_values(vec![5, 3, 4, 1, 2]);
    assert!(visualizer.apply(Command::Start));
    visualizer.tick();
    let snapshot = visualizer.values().to_vec();

    assert!(!visualizer.apply(Command::Start));

    // The first process keeps going from where it was
    assert_eq!(visualizer.tick(), TickOutcome::Swapped { left: 1, right: 2 });
    assert_ne!(visualizer.values(), snapshot.as_slice());
}

#[test]
fn test_start_uses_current_selection() {
    let mut visualizer = Visualizer::with_values(vec![1, 2, 3]);
    visualizer.apply(Command::SelectAlgorithm(Algorithm::Insertion));
    visualizer.apply(Command::SetOrder(SortOrder::Descending));
    visualizer.apply(Command::Start);

    tick_until_finished(&mut visualizer);
    assert_eq!(visualizer.values(), &[3, 2, 1]);
}

// === RESET ===

#[test]
fn test_reset_keeps_selection() {
    let spec = ListSpec::new(30, 0, 1000).unwrap();
    let mut visualizer =
        Visualizer::new(spec, Some(3)).with_selection(Algorithm::Insertion, SortOrder::Descending);

    assert!(visualizer.apply(Command::Reset));

    assert_eq!(visualizer.algorithm(), Algorithm::Insertion);
    assert_eq!(visualizer.order(), SortOrder::Descending);
    assert_eq!(visualizer.values().len(), 30);
    assert!(!visualizer.is_running());
}

#[test]
fn test_reset_mid_run_returns_to_idle_with_new_list() {
    let spec = ListSpec::new(40, 0, 1000).unwrap();
    let mut visualizer = Visualizer::new(spec, Some(11));
    visualizer.apply(Command::Start);

    for _ in 0..5 {
        visualizer.tick();
    }
    assert!(visualizer.is_running());
    let interrupted = visualizer.values().to_vec();

    assert!(visualizer.apply(Command::Reset));

    assert!(!visualizer.is_running());
    assert!(visualizer.highlights().is_empty());
    assert!(visualizer.stats().is_none());
    assert_eq!(visualizer.values().len(), 40);
    assert_ne!(visualizer.values(), interrupted.as_slice());
    assert!(visualizer.values().iter().all(|v| (0..=1000).contains(v)));
    assert_eq!(visualizer.tick(), TickOutcome::Idle);
}

#[test]
fn test_reset_updates_range() {
    let spec = ListSpec::new(25, -20, 20).unwrap();
    let mut visualizer = Visualizer::new(spec, Some(5));
    visualizer.apply(Command::Reset);

    let range = visualizer.range();
    assert_eq!(range.min, *visualizer.values().iter().min().unwrap());
    assert_eq!(range.max, *visualizer.values().iter().max().unwrap());
}

#[test]
fn test_seeded_visualizers_agree() {
    let spec = ListSpec::new(16, 0, 99).unwrap();
    let a = Visualizer::new(spec, Some(77));
    let b = Visualizer::new(spec, Some(77));
    assert_eq!(a.values(), b.values());
}

#[test]
fn test_quit() {
    let mut visualizer = Visualizer::with_values(vec![1]);
    assert!(!visualizer.should_quit());
    assert!(visualizer.apply(Command::Quit));
    assert!(visualizer.should_quit());
}
