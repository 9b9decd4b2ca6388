//! Registry for slider states keyed by [`SliderKey`].
//!
//! Each browse row owns one slider instance; the registry scopes state
//! per instance and pairs every state with its offset tween. Removing
//! a key is the unmount teardown: any in-flight animation dies with
//! the entry and late ticks become no-ops.

use std::collections::HashMap;
use std::time::Instant;

use crate::domains::ui::views::slider::motion::OffsetTween;
use crate::domains::ui::views::slider::state::{SliderState, WrapMode};
use crate::infra::measurement::Dimension;

/// Strongly-typed slider identity. A typed key avoids brittle string
/// matching and scopes state per carousel instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliderKey {
    /// A browse section row, by section position.
    Section(u32),
    /// The "my list" row.
    MyList,
    /// Ad-hoc instances (used by tests and one-off rows).
    Custom(&'static str),
}

/// Progress report from advancing one slider's tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenProgress {
    /// Scroll position the view should apply now.
    pub scroll_x: f32,
    /// Whether this tick completed the move (the commit and snap have
    /// already run).
    pub finished: bool,
}

#[derive(Debug, Default)]
pub struct SliderRegistry {
    states: HashMap<SliderKey, SliderState>,
    tweens: HashMap<SliderKey, OffsetTween>,
}

impl SliderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create a slider, bringing the item count and measurement
    /// up to date on every call so rows reflect fresh data without
    /// waiting for an interaction.
    pub fn ensure(
        &mut self,
        key: SliderKey,
        total_items: usize,
        dimension: Dimension,
        wrap_mode: WrapMode,
    ) -> &mut SliderState {
        let state = self
            .states
            .entry(key)
            .or_insert_with(|| SliderState::new(total_items, dimension, wrap_mode));

        let mut layout_changed = state.set_total_items(total_items);
        layout_changed |= state.set_dimension(dimension);
        if layout_changed {
            // The layout refresh cancelled any in-flight move.
            if let Some(tween) = self.tweens.get_mut(&key) {
                tween.cancel();
            }
        }
        self.states
            .get_mut(&key)
            .unwrap_or_else(|| unreachable!("entry inserted above"))
    }

    pub fn get(&self, key: &SliderKey) -> Option<&SliderState> {
        self.states.get(key)
    }

    pub fn get_mut(&mut self, key: &SliderKey) -> Option<&mut SliderState> {
        self.states.get_mut(key)
    }

    /// Drop a slider and its tween (unmount).
    pub fn remove(&mut self, key: &SliderKey) -> Option<SliderState> {
        self.tweens.remove(key);
        self.states.remove(key)
    }

    /// Drop everything (logout / profile switch).
    pub fn clear(&mut self) {
        self.states.clear();
        self.tweens.clear();
    }

    pub fn keys(&self) -> Vec<SliderKey> {
        self.states.keys().copied().collect()
    }

    pub fn tween_mut(&mut self, key: SliderKey) -> &mut OffsetTween {
        self.tweens.entry(key).or_default()
    }

    pub fn any_tween_active(&self) -> bool {
        self.tweens.values().any(OffsetTween::is_active)
    }

    /// Advance one slider's animation to `now`. Applies the tweened
    /// offset, runs the commit when the tween completes, and reports
    /// the scroll position to apply. `None` when the key is gone or no
    /// animation is running — a late tick after unmount lands here.
    pub fn advance(&mut self, key: &SliderKey, now: Instant) -> Option<TweenProgress> {
        let tween = self.tweens.get_mut(key)?;
        let offset = tween.tick(now)?;
        let finished = !tween.is_active();

        let state = self.states.get_mut(key)?;
        state.motion.offset_percent = offset;
        if finished {
            state.finish_move();
        }
        Some(TweenProgress {
            scroll_x: state.scroll_x(),
            finished,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dimension() -> Dimension {
        Dimension::new(1120.0, 224.0)
    }

    #[test]
    fn ensure_creates_then_updates_in_place() {
        let mut registry = SliderRegistry::new();
        let key = SliderKey::Custom("test");

        registry.ensure(key, 20, dimension(), WrapMode::Paged);
        assert_eq!(registry.get(&key).unwrap().last_part, 3);

        registry.ensure(key, 10, dimension(), WrapMode::Paged);
        assert_eq!(registry.get(&key).unwrap().last_part, 1);
        assert_eq!(registry.keys().len(), 1);
    }

    #[test]
    fn advance_after_remove_is_a_no_op() {
        let mut registry = SliderRegistry::new();
        let key = SliderKey::Custom("gone");
        let now = Instant::now();

        registry.ensure(key, 20, dimension(), WrapMode::Paged);
        let command = registry.get_mut(&key).unwrap().move_right().unwrap();
        registry.tween_mut(key).start(
            0.0,
            command.target_offset,
            command.duration,
            now,
        );
        assert!(registry.any_tween_active());

        registry.remove(&key);
        assert!(!registry.any_tween_active());
        assert!(registry.advance(&key, now + command.duration).is_none());
        assert!(registry.get(&key).is_none());
    }

    #[test]
    fn layout_change_cancels_a_running_tween() {
        let mut registry = SliderRegistry::new();
        let key = SliderKey::Custom("resize");
        let now = Instant::now();

        registry.ensure(key, 20, dimension(), WrapMode::Paged);
        let command = registry.get_mut(&key).unwrap().move_right().unwrap();
        registry.tween_mut(key).start(
            0.0,
            command.target_offset,
            command.duration,
            now,
        );

        registry.ensure(key, 20, Dimension::new(2240.0, 224.0), WrapMode::Paged);
        assert!(!registry.any_tween_active());
        let state = registry.get(&key).unwrap();
        assert!(!state.is_moving());
        assert_eq!(state.motion.offset_percent, state.baseline_offset());
    }
}
