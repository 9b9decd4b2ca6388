//! Registry-level navigation scenarios for the slider engine,
//! driven with fabricated clocks so nothing here sleeps.

use std::time::{Duration, Instant};

use vitrine_app::domains::ui::views::slider::{
    SliderKey, SliderPhase, SliderRegistry, SliderState, WrapMode,
};
use vitrine_app::infra::measurement::Dimension;

fn five_per_page() -> Dimension {
    Dimension::new(1120.0, 224.0)
}

fn registry_with(key: SliderKey, total: usize, wrap_mode: WrapMode) -> SliderRegistry {
    let mut registry = SliderRegistry::new();
    registry.ensure(key, total, five_per_page(), wrap_mode);
    registry
}

/// Drive one accepted move through its tween until the commit.
fn run_move(registry: &mut SliderRegistry, key: SliderKey, now: Instant, right: bool) -> Duration {
    let slider = registry.get_mut(&key).expect("slider exists");
    let from = slider.motion.offset_percent;
    let command = if right {
        slider.move_right().expect("move accepted")
    } else {
        slider.move_left().expect("move accepted")
    };
    registry
        .tween_mut(key)
        .start(from, command.target_offset, command.duration, now);

    let progress = registry
        .advance(&key, now + command.duration)
        .expect("tween advances");
    assert!(progress.finished);
    command.duration
}

#[test]
fn full_cycle_wraps_back_to_the_first_part() {
    let key = SliderKey::Custom("cycle");
    let mut registry = registry_with(key, 20, WrapMode::Paged);
    let mut now = Instant::now();

    let mut durations = Vec::new();
    for _ in 0..4 {
        let duration = run_move(&mut registry, key, now, true);
        durations.push(duration);
        now += duration;
    }

    // Three plain steps, then the loop back to part 0 takes longer.
    assert_eq!(
        durations,
        vec![
            Duration::from_millis(500),
            Duration::from_millis(500),
            Duration::from_millis(500),
            Duration::from_millis(800),
        ]
    );
    assert_eq!(registry.get(&key).unwrap().current_part, 0);
}

#[test]
fn double_click_commits_exactly_one_page() {
    let key = SliderKey::Custom("double");
    let mut registry = registry_with(key, 20, WrapMode::Paged);
    let now = Instant::now();

    let slider = registry.get_mut(&key).unwrap();
    let command = slider.move_right().expect("first move accepted");
    registry
        .tween_mut(key)
        .start(0.0, command.target_offset, command.duration, now);

    // Second click lands mid-transition and is dropped, not queued.
    assert!(registry.get_mut(&key).unwrap().move_right().is_none());

    let progress = registry.advance(&key, now + command.duration).unwrap();
    assert!(progress.finished);
    assert_eq!(registry.get(&key).unwrap().current_part, 1);

    // No second commit materializes later.
    assert!(registry.advance(&key, now + command.duration * 2).is_none());
    assert_eq!(registry.get(&key).unwrap().current_part, 1);
}

#[test]
fn unmount_mid_transition_updates_nothing() {
    let key = SliderKey::Custom("unmount");
    let mut registry = registry_with(key, 20, WrapMode::Paged);
    let now = Instant::now();

    let slider = registry.get_mut(&key).unwrap();
    let command = slider.move_right().expect("move accepted");
    registry
        .tween_mut(key)
        .start(0.0, command.target_offset, command.duration, now);
    assert!(registry.any_tween_active());

    // Unmount while moving; the late tick is a no-op.
    registry.remove(&key);
    assert!(!registry.any_tween_active());
    assert!(registry.advance(&key, now + command.duration).is_none());
    assert!(registry.get(&key).is_none());
}

#[test]
fn commit_applies_the_snap_in_the_same_pass() {
    let key = SliderKey::Custom("snap");
    let mut registry = registry_with(key, 20, WrapMode::Paged);
    let now = Instant::now();

    let slider = registry.get_mut(&key).unwrap();
    let command = slider.move_right().unwrap();
    registry
        .tween_mut(key)
        .start(0.0, command.target_offset, command.duration, now);

    // Mid-animation the offset is between start and target and the
    // transition flag stays on.
    let mid = registry.advance(&key, now + command.duration / 2).unwrap();
    assert!(!mid.finished);
    let state = registry.get(&key).unwrap();
    assert!(state.motion.transition_enabled);
    assert!(state.motion.in_progress);

    // The finishing tick commits and snaps in one step: offset is back
    // at baseline with the transition disabled, so the padding items
    // are never seen sliding past.
    let done = registry.advance(&key, now + command.duration).unwrap();
    assert!(done.finished);
    let state = registry.get(&key).unwrap();
    assert_eq!(state.current_part, 1);
    assert!(!state.motion.transition_enabled);
    assert!(!state.motion.in_progress);
    assert_eq!(state.motion.offset_percent, state.baseline_offset());
    assert_eq!(done.scroll_x, state.scroll_x());
}

#[test]
fn resize_with_identical_measurement_changes_nothing() {
    let key = SliderKey::Custom("resize");
    let mut registry = registry_with(key, 20, WrapMode::Paged);
    let now = Instant::now();
    run_move(&mut registry, key, now, true);

    let before = registry.get(&key).unwrap().clone();
    registry.ensure(key, 20, five_per_page(), WrapMode::Paged);
    let after = registry.get(&key).unwrap();

    assert_eq!(after.current_part, before.current_part);
    assert_eq!(after.bands, before.bands);
    assert_eq!(after.motion, before.motion);
}

#[test]
fn empty_collection_renders_idle_without_errors() {
    let key = SliderKey::Custom("empty");
    let mut registry = registry_with(key, 0, WrapMode::Paged);

    let slider = registry.get_mut(&key).unwrap();
    assert_eq!(slider.phase, SliderPhase::Idle);
    assert!(slider.bands.is_empty());
    assert!(slider.move_right().is_none());
    assert!(slider.move_left().is_none());
}

#[test]
fn rendered_band_row_follows_cyclic_catalog_order() {
    let key = SliderKey::Custom("order");
    let mut registry = registry_with(key, 22, WrapMode::Paged);
    let mut now = Instant::now();

    // Walk the whole cycle and verify the rendered row stays cyclically
    // consecutive at every settled position.
    for _ in 0..=5 {
        let state = registry.get(&key).unwrap();
        let rendered: Vec<usize> = state.bands.entries().map(|entry| entry.index).collect();
        for pair in rendered.windows(2) {
            assert_eq!((pair[0] + 1) % 22, pair[1], "row out of order: {rendered:?}");
        }
        let duration = run_move(&mut registry, key, now, true);
        now += duration;
    }
}

#[test]
fn my_list_slider_steps_items_continuously() {
    let key = SliderKey::MyList;
    let mut registry = registry_with(key, 9, WrapMode::Continuous);
    let mut now = Instant::now();

    // Every step is a single item with the plain transition, and the
    // window wraps seamlessly past the end.
    for expected_part in [1, 2, 3, 4, 5, 6, 7, 8, 0] {
        let duration = run_move(&mut registry, key, now, true);
        assert_eq!(duration, Duration::from_millis(500));
        now += duration;
        assert_eq!(registry.get(&key).unwrap().current_part, expected_part);
    }
}

#[test]
fn moving_left_before_any_right_move_is_rejected() {
    let mut state = SliderState::new(20, five_per_page(), WrapMode::Paged);
    assert!(state.move_left().is_none());
    assert!(!state.can_move_left());
    assert!(state.can_move_right());
}
