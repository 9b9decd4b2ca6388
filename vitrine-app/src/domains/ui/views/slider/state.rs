//! Slider pagination state machine.
//!
//! Owns the derived page layout (items per page, part count), the
//! current part, the rendered index bands, and the motion state. All
//! inputs arrive as plain data (a [`Dimension`] and an item count), so
//! every transition here is synchronous and unit-testable; animation
//! timing lives in the tween and is driven externally.

use iced::widget::scrollable::Id as ScrollableId;

use crate::domains::ui::views::slider::bands::{WindowBands, backward_indexes, forward_indexes};
use crate::domains::ui::views::slider::motion::{MotionState, compute_offset};
use crate::infra::constants::timing;
use crate::infra::measurement::Dimension;

use std::time::Duration;

/// Paging and boundary behavior of a slider instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    /// Discrete pages; wrapping last to first is a special-cased jump.
    Paged,
    /// Infinite feel: single-item stride, padding always fully wrapped,
    /// no page boundaries. Used by the "my list" row.
    Continuous,
}

/// Lifecycle of a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderPhase {
    /// Content fits in one viewport (or measurement is not ready): no
    /// paging, no wrap padding, no navigation.
    Idle,
    /// Discrete parts computed, steady state.
    Paged,
    /// A transition animation is in flight toward `target`.
    Moving { target: usize },
}

/// An accepted movement: the offset the view must animate to and how
/// long the transition runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveCommand {
    pub target_offset: f32,
    pub duration: Duration,
}

/// Windowing and pagination state for one slider instance.
#[derive(Debug, Clone)]
pub struct SliderState {
    pub total_items: usize,
    pub dimension: Dimension,
    /// Fully visible items per part, `floor(container / item)`.
    pub items_per_page: usize,
    /// Zero-based index of the last part.
    pub last_part: usize,
    pub current_part: usize,
    /// Becomes true on the first accepted rightward move; until then
    /// there is no backward band and no way to move left.
    pub moved_once: bool,
    pub phase: SliderPhase,
    pub bands: WindowBands,
    pub motion: MotionState,
    pub wrap_mode: WrapMode,
    pub scrollable_id: ScrollableId,
}

impl SliderState {
    pub fn new(total_items: usize, dimension: Dimension, wrap_mode: WrapMode) -> Self {
        let mut state = Self {
            total_items,
            dimension,
            items_per_page: 0,
            last_part: 0,
            current_part: 0,
            moved_once: false,
            phase: SliderPhase::Idle,
            bands: WindowBands::trivial(total_items),
            motion: MotionState::default(),
            wrap_mode,
            scrollable_id: ScrollableId::unique(),
        };
        state.refresh_layout();
        state
    }

    pub fn is_moving(&self) -> bool {
        matches!(self.phase, SliderPhase::Moving { .. })
    }

    /// Whether the slider pages at all (more than one part exists).
    pub fn is_pageable(&self) -> bool {
        !matches!(self.phase, SliderPhase::Idle)
    }

    pub fn can_move_right(&self) -> bool {
        self.is_pageable() && self.total_items > 0
    }

    pub fn can_move_left(&self) -> bool {
        self.is_pageable() && self.moved_once
    }

    /// Apply a new measurement. Returns whether anything changed; an
    /// identical dimension is a no-op so resize storms cannot trigger
    /// recompute loops.
    pub fn set_dimension(&mut self, dimension: Dimension) -> bool {
        if self.dimension == dimension {
            return false;
        }
        self.dimension = dimension;
        self.refresh_layout();
        true
    }

    /// Replace the item count. A changed collection starts a fresh
    /// navigation cycle from the first part.
    pub fn set_total_items(&mut self, total_items: usize) -> bool {
        if self.total_items == total_items {
            return false;
        }
        self.total_items = total_items;
        self.current_part = 0;
        self.moved_once = false;
        self.refresh_layout();
        true
    }

    /// First item index of a part's visible window. The last part is
    /// right-aligned so the viewport always shows a full window even
    /// when the count does not divide evenly.
    fn window_start(&self, part: usize) -> usize {
        match self.wrap_mode {
            WrapMode::Continuous => part,
            WrapMode::Paged => {
                if part == self.last_part {
                    self.total_items.saturating_sub(self.items_per_page)
                } else {
                    part * self.items_per_page
                }
            }
        }
    }

    /// Items traversed when stepping right out of `part`. Entering a
    /// right-aligned last part covers only the remainder; wrapping
    /// back to the first part swaps a full window.
    fn step_items_right_of(&self, part: usize) -> usize {
        match self.wrap_mode {
            WrapMode::Continuous => 1,
            WrapMode::Paged => {
                if part == self.last_part {
                    self.items_per_page
                } else {
                    self.window_start(part + 1) - self.window_start(part)
                }
            }
        }
    }

    /// Items traversed when stepping left out of `part`; mirror of
    /// [`Self::step_items_right_of`].
    fn step_items_left_of(&self, part: usize) -> usize {
        match self.wrap_mode {
            WrapMode::Continuous => 1,
            WrapMode::Paged => {
                if part == 0 {
                    self.items_per_page
                } else {
                    self.window_start(part) - self.window_start(part - 1)
                }
            }
        }
    }

    /// Number of items a given part contributes to the sequence. The
    /// last part of a paged slider carries the remainder when the
    /// count does not divide evenly.
    pub fn items_in_part(&self, part: usize) -> usize {
        match self.wrap_mode {
            WrapMode::Continuous => 1,
            WrapMode::Paged => {
                if self.items_per_page == 0 {
                    0
                } else if part == self.last_part {
                    let remainder = self.total_items % self.items_per_page;
                    if remainder == 0 {
                        self.items_per_page
                    } else {
                        remainder
                    }
                } else {
                    self.items_per_page
                }
            }
        }
    }

    pub fn next_part(&self) -> usize {
        if self.current_part == self.last_part {
            0
        } else {
            self.current_part + 1
        }
    }

    pub fn prev_part(&self) -> usize {
        if self.current_part == 0 {
            self.last_part
        } else {
            self.current_part - 1
        }
    }

    /// Steady-state offset: the rendered backward band sits off-screen
    /// to the left. Zero until the slider has moved once.
    pub fn baseline_offset(&self) -> f32 {
        if !self.moved_once || !self.is_pageable() {
            return 0.0;
        }
        -compute_offset(
            self.dimension.item_width,
            self.dimension.container_width,
            self.bands.backward.len(),
        )
    }

    /// Current offset translated to a horizontal scroll position in
    /// pixels (the band row is rendered inside a scrollable).
    pub fn scroll_x(&self) -> f32 {
        (-self.motion.offset_percent / 100.0 * self.dimension.container_width).max(0.0)
    }

    /// Begin a rightward page move. `None` when the command is dropped:
    /// already moving, nothing to page, or empty collection.
    pub fn move_right(&mut self) -> Option<MoveCommand> {
        if self.is_moving() || !self.can_move_right() {
            return None;
        }
        let step_items = self.bands.forward.len();
        let delta = compute_offset(
            self.dimension.item_width,
            self.dimension.container_width,
            step_items,
        );
        if delta <= 0.0 {
            return None;
        }
        let wraps = self.wrap_mode == WrapMode::Paged && self.current_part == self.last_part;
        let target = self.next_part();

        self.moved_once = true;
        self.phase = SliderPhase::Moving { target };
        self.motion.transition_enabled = true;
        self.motion.in_progress = true;

        Some(MoveCommand {
            target_offset: self.motion.offset_percent - delta,
            duration: transition_duration(wraps),
        })
    }

    /// Begin a leftward page move. Additionally dropped while the
    /// slider has never moved right (there is nothing rendered to move
    /// back into).
    pub fn move_left(&mut self) -> Option<MoveCommand> {
        if self.is_moving() || !self.can_move_left() {
            return None;
        }
        let step_items = self.bands.backward.len();
        let delta = compute_offset(
            self.dimension.item_width,
            self.dimension.container_width,
            step_items,
        );
        if delta <= 0.0 {
            return None;
        }
        let wraps = self.wrap_mode == WrapMode::Paged && self.current_part == 0;
        let target = self.prev_part();

        self.phase = SliderPhase::Moving { target };
        self.motion.transition_enabled = true;
        self.motion.in_progress = true;

        Some(MoveCommand {
            target_offset: self.motion.offset_percent + delta,
            duration: transition_duration(wraps),
        })
    }

    /// Commit an in-flight move: adopt the target part, refresh the
    /// bands, and snap the offset back to baseline without a
    /// transition, all in the same update pass so the padding items are
    /// never seen sliding by.
    pub fn finish_move(&mut self) {
        let SliderPhase::Moving { target } = self.phase else {
            return;
        };
        self.current_part = target;
        self.phase = SliderPhase::Paged;
        self.recompute_bands();
        self.snap_to_baseline();
        log::debug!(
            "slider committed part {}/{} ({} rendered children)",
            self.current_part,
            self.last_part,
            self.bands.len()
        );
    }

    /// Recompute the page layout from the current dimension and count.
    /// Cancels any in-flight move; callers that animate must also drop
    /// their tween when this runs.
    fn refresh_layout(&mut self) {
        let capacity = self.dimension.items_per_view();
        self.items_per_page = capacity;

        let parts = if capacity == 0 || self.total_items == 0 {
            0
        } else {
            match self.wrap_mode {
                WrapMode::Paged => self.total_items.div_ceil(capacity),
                WrapMode::Continuous => {
                    if self.total_items > capacity {
                        self.total_items
                    } else {
                        1
                    }
                }
            }
        };

        if parts <= 1 {
            self.phase = SliderPhase::Idle;
            self.last_part = 0;
            self.current_part = 0;
            self.bands = WindowBands::trivial(self.total_items);
            self.motion = MotionState::default();
            return;
        }

        self.last_part = parts - 1;
        self.current_part = self.current_part.min(self.last_part);
        self.phase = SliderPhase::Paged;
        self.recompute_bands();
        self.snap_to_baseline();
        log::debug!(
            "slider layout: {} items, {}/page, parts 0..={}, current {}",
            self.total_items,
            self.items_per_page,
            self.last_part,
            self.current_part
        );
    }

    fn recompute_bands(&mut self) {
        if !self.is_pageable() {
            self.bands = WindowBands::trivial(self.total_items);
            return;
        }

        let len = self.total_items;
        let edge = self.is_edge_part();
        let visible = self.visible_indexes();
        if visible.is_empty() {
            self.bands = WindowBands::trivial(len);
            return;
        }

        let backward = if self.moved_once {
            let count = self.step_items_left_of(self.current_part);
            backward_indexes(len, visible[0] as isize, count, edge)
        } else {
            Vec::new()
        };
        let forward = {
            let count = self.step_items_right_of(self.current_part);
            forward_indexes(len, visible[visible.len() - 1] as isize, count, edge)
        };

        self.bands = WindowBands {
            backward,
            visible,
            forward,
        };
    }

    fn visible_indexes(&self) -> Vec<usize> {
        match self.wrap_mode {
            WrapMode::Paged => {
                let first = self.window_start(self.current_part);
                (first..first + self.items_per_page).collect()
            }
            WrapMode::Continuous => forward_indexes(
                self.total_items,
                self.current_part as isize - 1,
                self.items_per_page,
                true,
            ),
        }
    }

    fn is_edge_part(&self) -> bool {
        match self.wrap_mode {
            WrapMode::Continuous => true,
            WrapMode::Paged => self.current_part == 0 || self.current_part == self.last_part,
        }
    }

    fn snap_to_baseline(&mut self) {
        self.motion.offset_percent = self.baseline_offset();
        self.motion.transition_enabled = false;
        self.motion.in_progress = false;
    }
}

fn transition_duration(wraps: bool) -> Duration {
    if wraps {
        timing::WRAP_TRANSITION
    } else {
        timing::STEP_TRANSITION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_per_page() -> Dimension {
        // 1120 / 224 = exactly 5 fully visible items.
        Dimension::new(1120.0, 224.0)
    }

    #[test]
    fn twenty_items_at_five_per_page_has_last_part_three() {
        let state = SliderState::new(20, five_per_page(), WrapMode::Paged);
        assert_eq!(state.items_per_page, 5);
        assert_eq!(state.last_part, 3);
        assert_eq!(state.phase, SliderPhase::Paged);
    }

    #[test]
    fn small_collection_is_idle_without_navigation() {
        let state = SliderState::new(3, five_per_page(), WrapMode::Paged);
        assert_eq!(state.phase, SliderPhase::Idle);
        assert!(!state.can_move_left());
        assert!(!state.can_move_right());
        assert_eq!(state.bands.visible, vec![0, 1, 2]);
        assert!(state.bands.backward.is_empty());
        assert!(state.bands.forward.is_empty());
    }

    #[test]
    fn container_narrower_than_one_item_degenerates_without_panicking() {
        let mut state = SliderState::new(20, Dimension::new(150.0, 224.0), WrapMode::Paged);
        assert_eq!(state.items_per_page, 0);
        assert_eq!(state.phase, SliderPhase::Idle);
        assert!(state.move_right().is_none());
    }

    #[test]
    fn unmeasured_slider_accepts_no_commands() {
        let mut state = SliderState::new(20, Dimension::default(), WrapMode::Paged);
        assert_eq!(state.phase, SliderPhase::Idle);
        assert!(state.move_right().is_none());
        assert!(state.move_left().is_none());
    }

    #[test]
    fn identical_dimension_is_a_no_op() {
        let mut state = SliderState::new(20, five_per_page(), WrapMode::Paged);
        state.move_right().unwrap();
        state.finish_move();
        let snapshot = (state.current_part, state.bands.clone(), state.motion);

        assert!(!state.set_dimension(five_per_page()));
        assert_eq!(
            (state.current_part, state.bands.clone(), state.motion),
            snapshot
        );
    }

    #[test]
    fn resize_clamps_current_part() {
        let mut state = SliderState::new(20, five_per_page(), WrapMode::Paged);
        for _ in 0..3 {
            state.move_right().unwrap();
            state.finish_move();
        }
        assert_eq!(state.current_part, 3);

        // Wider container: 10 per page, parts 0..=1.
        assert!(state.set_dimension(Dimension::new(2240.0, 224.0)));
        assert_eq!(state.items_per_page, 10);
        assert_eq!(state.last_part, 1);
        assert_eq!(state.current_part, 1);
    }

    #[test]
    fn move_left_requires_a_prior_move_right() {
        let mut state = SliderState::new(20, five_per_page(), WrapMode::Paged);
        assert!(state.move_left().is_none());

        state.move_right().unwrap();
        state.finish_move();
        assert!(state.move_left().is_some());
    }

    #[test]
    fn second_move_during_transition_is_dropped() {
        let mut state = SliderState::new(20, five_per_page(), WrapMode::Paged);
        assert!(state.move_right().is_some());
        assert!(state.move_right().is_none());
        assert!(state.move_left().is_none());

        state.finish_move();
        assert_eq!(state.current_part, 1);
    }

    #[test]
    fn wrap_from_last_part_uses_the_long_transition() {
        let mut state = SliderState::new(20, five_per_page(), WrapMode::Paged);

        let step = state.move_right().unwrap();
        assert_eq!(step.duration, timing::STEP_TRANSITION);
        state.finish_move();

        for _ in 0..2 {
            state.move_right().unwrap();
            state.finish_move();
        }
        assert_eq!(state.current_part, 3);

        let wrap = state.move_right().unwrap();
        assert_eq!(wrap.duration, timing::WRAP_TRANSITION);
        state.finish_move();
        assert_eq!(state.current_part, 0);
    }

    #[test]
    fn wrap_backwards_from_first_part_uses_the_long_transition() {
        let mut state = SliderState::new(20, five_per_page(), WrapMode::Paged);
        state.move_right().unwrap();
        state.finish_move();
        let back = state.move_left().unwrap();
        assert_eq!(back.duration, timing::STEP_TRANSITION);
        state.finish_move();
        assert_eq!(state.current_part, 0);

        let wrap = state.move_left().unwrap();
        assert_eq!(wrap.duration, timing::WRAP_TRANSITION);
        state.finish_move();
        assert_eq!(state.current_part, 3);
    }

    #[test]
    fn last_part_carries_the_remainder() {
        // 22 items at 5/page: parts 0..=4, last part holds 2 items.
        let state = SliderState::new(22, five_per_page(), WrapMode::Paged);
        assert_eq!(state.last_part, 4);
        assert_eq!(state.items_in_part(3), 5);
        assert_eq!(state.items_in_part(4), 2);
    }

    #[test]
    fn last_part_is_right_aligned_with_remainder_sized_steps() {
        let mut state = SliderState::new(22, five_per_page(), WrapMode::Paged);
        for _ in 0..3 {
            state.move_right().unwrap();
            state.finish_move();
        }
        assert_eq!(state.current_part, 3);
        assert_eq!(state.bands.visible, vec![15, 16, 17, 18, 19]);
        // Stepping into the right-aligned last part covers only the
        // two-item remainder.
        assert_eq!(state.bands.forward, vec![20, 21]);

        state.move_right().unwrap();
        state.finish_move();
        assert_eq!(state.bands.visible, vec![17, 18, 19, 20, 21]);
        assert_eq!(state.bands.backward, vec![15, 16]);
        // Wrapping onward swaps a full window.
        assert_eq!(state.bands.forward, vec![0, 1, 2, 3, 4]);

        // Stepping back out re-crosses the same two items.
        let back = state.move_left().unwrap();
        state.finish_move();
        assert_eq!(back.duration, timing::STEP_TRANSITION);
        assert_eq!(state.current_part, 3);
        assert_eq!(state.bands.visible, vec![15, 16, 17, 18, 19]);
    }

    #[test]
    fn commit_snaps_offset_to_baseline_without_transition() {
        let mut state = SliderState::new(20, five_per_page(), WrapMode::Paged);
        let command = state.move_right().unwrap();
        // Animate to the commanded offset, then commit.
        state.motion.offset_percent = command.target_offset;
        state.finish_move();

        assert!(!state.motion.transition_enabled);
        assert!(!state.motion.in_progress);
        assert_eq!(state.motion.offset_percent, state.baseline_offset());
        // One page of backward padding is now rendered off-screen left.
        assert_eq!(state.bands.backward.len(), 5);
        assert_eq!(state.motion.offset_percent, -100.0);
        assert_eq!(state.scroll_x(), 1120.0);
    }

    #[test]
    fn before_first_move_there_is_no_backward_band() {
        let state = SliderState::new(20, five_per_page(), WrapMode::Paged);
        assert!(state.bands.backward.is_empty());
        assert_eq!(state.bands.visible, vec![0, 1, 2, 3, 4]);
        assert_eq!(state.bands.forward, vec![5, 6, 7, 8, 9]);
        assert_eq!(state.baseline_offset(), 0.0);
    }

    #[test]
    fn bands_concatenate_in_cyclic_order_after_commits() {
        let mut state = SliderState::new(20, five_per_page(), WrapMode::Paged);
        state.move_right().unwrap();
        state.finish_move();

        let rendered: Vec<usize> = state.bands.entries().map(|entry| entry.index).collect();
        for pair in rendered.windows(2) {
            assert_eq!((pair[0] + 1) % 20, pair[1]);
        }
        assert_eq!(state.bands.visible, vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn changing_the_collection_starts_a_fresh_cycle() {
        let mut state = SliderState::new(20, five_per_page(), WrapMode::Paged);
        state.move_right().unwrap();
        state.finish_move();
        assert!(state.moved_once);

        assert!(state.set_total_items(12));
        assert_eq!(state.current_part, 0);
        assert!(!state.moved_once);
        assert_eq!(state.last_part, 2);
        assert!(state.bands.backward.is_empty());
    }

    #[test]
    fn continuous_mode_steps_one_item_with_full_wrap_padding() {
        let mut state = SliderState::new(8, five_per_page(), WrapMode::Continuous);
        assert_eq!(state.last_part, 7);
        assert_eq!(state.bands.visible, vec![0, 1, 2, 3, 4]);
        // Forward padding is always a single wrapped-if-needed item.
        assert_eq!(state.bands.forward, vec![5]);

        let command = state.move_right().unwrap();
        assert_eq!(command.duration, timing::STEP_TRANSITION);
        state.finish_move();
        assert_eq!(state.current_part, 1);
        assert_eq!(state.bands.visible, vec![1, 2, 3, 4, 5]);
        assert_eq!(state.bands.backward, vec![0]);
        assert_eq!(state.bands.forward, vec![6]);
    }

    #[test]
    fn continuous_mode_wraps_visible_window_past_the_end() {
        let mut state = SliderState::new(6, five_per_page(), WrapMode::Continuous);
        for _ in 0..4 {
            state.move_right().unwrap();
            state.finish_move();
        }
        assert_eq!(state.current_part, 4);
        assert_eq!(state.bands.visible, vec![4, 5, 0, 1, 2]);

        for _ in 0..2 {
            state.move_right().unwrap();
            state.finish_move();
        }
        // Six single-item steps return to the start.
        assert_eq!(state.current_part, 0);
    }

    #[test]
    fn continuous_mode_that_fits_in_view_is_idle() {
        let state = SliderState::new(4, five_per_page(), WrapMode::Continuous);
        assert_eq!(state.phase, SliderPhase::Idle);
    }
}
