//! Transform offset engine.
//!
//! Converts logical page movement into a single offset value (percent
//! of the container width) plus a transition flag, and tweens between
//! offsets over a fixed duration. The tween takes the current time as
//! an argument instead of reading the clock itself, so tests can drive
//! it deterministically.

use std::time::{Duration, Instant};

/// Offset needed to traverse `item_count` items, as a percentage of the
/// container width. Neutral (0) while measurement is not ready; never
/// panics.
pub fn compute_offset(item_width: f32, container_width: f32, item_count: usize) -> f32 {
    if item_width <= 0.0 || container_width <= 0.0 {
        return 0.0;
    }
    item_width / container_width * 100.0 * item_count as f32
}

/// Current visual offset of a slider's band row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    /// Signed offset in percent of container width; negative values
    /// shift the row left.
    pub offset_percent: f32,
    /// Whether the next offset application is animated. Cleared for
    /// exactly one application after each commit — the snap that hides
    /// the padding bands — then restored.
    pub transition_enabled: bool,
    /// Re-entrancy guard: while true no new move command is accepted.
    pub in_progress: bool,
}

impl Default for MotionState {
    fn default() -> Self {
        Self {
            offset_percent: 0.0,
            transition_enabled: true,
            in_progress: false,
        }
    }
}

/// Time-based tween toward a target offset, ease-out quadratic.
#[derive(Debug, Clone)]
pub struct OffsetTween {
    active: bool,
    start: f32,
    target: f32,
    started_at: Option<Instant>,
    duration: Duration,
}

impl Default for OffsetTween {
    fn default() -> Self {
        Self {
            active: false,
            start: 0.0,
            target: 0.0,
            started_at: None,
            duration: Duration::ZERO,
        }
    }
}

impl OffsetTween {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn start(&mut self, from: f32, target: f32, duration: Duration, now: Instant) {
        self.active = true;
        self.start = from;
        self.target = target;
        self.started_at = Some(now);
        self.duration = duration;
    }

    /// Next offset at `now`, or `None` when inactive. Reaching the
    /// duration yields the exact target and deactivates the tween.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        if !self.active {
            return None;
        }
        let started_at = self.started_at?;
        let elapsed = now.saturating_duration_since(started_at);
        if elapsed >= self.duration {
            self.active = false;
            return Some(self.target);
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        let eased = ease_out(t);
        Some(self.start + (self.target - self.start) * eased)
    }

    pub fn cancel(&mut self) {
        self.active = false;
    }
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_neutral_without_measurement() {
        assert_eq!(compute_offset(0.0, 1120.0, 5), 0.0);
        assert_eq!(compute_offset(224.0, 0.0, 5), 0.0);
    }

    #[test]
    fn offset_scales_with_item_count() {
        // 224px items in a 1120px container: one item is 20%.
        assert_eq!(compute_offset(224.0, 1120.0, 1), 20.0);
        assert_eq!(compute_offset(224.0, 1120.0, 5), 100.0);
    }

    #[test]
    fn tween_reaches_target_exactly_at_duration() {
        let t0 = Instant::now();
        let mut tween = OffsetTween::default();
        tween.start(0.0, -100.0, Duration::from_millis(500), t0);

        let midway = tween.tick(t0 + Duration::from_millis(250)).unwrap();
        assert!(midway < 0.0 && midway > -100.0);
        assert!(tween.is_active());

        let done = tween.tick(t0 + Duration::from_millis(500)).unwrap();
        assert_eq!(done, -100.0);
        assert!(!tween.is_active());
        assert!(tween.tick(t0 + Duration::from_millis(501)).is_none());
    }

    #[test]
    fn tween_progress_is_monotonic() {
        let t0 = Instant::now();
        let mut tween = OffsetTween::default();
        tween.start(20.0, -80.0, Duration::from_millis(800), t0);

        let mut previous = 20.0_f32;
        for ms in (0..=800).step_by(80) {
            let mut probe = tween.clone();
            let value = probe.tick(t0 + Duration::from_millis(ms)).unwrap();
            assert!(value <= previous + f32::EPSILON);
            previous = value;
        }
    }

    #[test]
    fn cancel_stops_ticks() {
        let t0 = Instant::now();
        let mut tween = OffsetTween::default();
        tween.start(0.0, 50.0, Duration::from_millis(500), t0);
        tween.cancel();
        assert!(tween.tick(t0 + Duration::from_millis(100)).is_none());
    }
}
