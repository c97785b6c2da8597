//! Split-reveal transition controller.
//!
//! Translates raw wheel and drag deltas into a bounded, eased progress
//! value, owns the scroll lock for its mount lifetime, and hands scroll
//! authority to the content pane once the split completes. Input events
//! mutate the virtual scroll accumulator eagerly; the progress recompute
//! is coalesced into a single pending update consumed once per frame by
//! `update()`, so rapid input within a frame folds into one recompute.

use tracing::debug;

use crate::config::TransitionConfig;

/// Where a raw input event should go after the controller has seen it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputDisposition {
    /// The controller took the event; the caller must not forward it.
    Consumed,
    /// The controller is not interested; the event belongs to whoever
    /// normally owns scrolling (the content pane once delegated).
    PassThrough,
}

/// Lifecycle phase of the split transition, derived from progress and
/// the reversing flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fully closed; scrolling is locked behind the panels.
    Idle,
    /// Mid-animation, driven by live input.
    Animating,
    /// Fully open; the content pane owns scroll input.
    SplitComplete,
    /// Running back toward closed.
    Reversing,
}

/// Scroll suppression flag, owned exclusively by the controller while it
/// is mounted. The render layer reads it; only the controller writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollLock {
    engaged: bool,
}

impl ScrollLock {
    fn engaged() -> Self {
        Self { engaged: true }
    }

    fn engage(&mut self) {
        self.engaged = true;
    }

    fn release(&mut self) {
        self.engaged = false;
    }

    #[inline]
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }
}

/// Virtual-scroll state machine behind the split-reveal effect.
///
/// Created fully closed with the lock engaged. Wheel and drag input
/// accumulate into `virtual_scroll`; `update()` maps the accumulator
/// through the configured easing curve once per frame.
#[derive(Debug, Clone)]
pub struct SplitTransition {
    config: TransitionConfig,
    /// Accumulated virtual scroll offset, decoupled from any real
    /// scroll position; clamped, may go slightly negative
    virtual_scroll: f64,
    /// Eased progress in [0, 1]
    progress: f64,
    /// Virtual scroll needed for a complete split
    threshold: f64,
    /// Viewport height in virtual pixels
    viewport_units: f64,
    /// Scroll authority handed to the content pane
    delegated: bool,
    /// Last input moved toward closed
    reversing: bool,
    /// Content-initiated reverse run-down is active
    reversing_from_content: bool,
    /// Recompute pending for the next frame
    dirty: bool,
    /// Last recorded drag row
    drag_origin: Option<f64>,
    lock: ScrollLock,
}

impl SplitTransition {
    pub fn new(config: TransitionConfig, viewport_rows: u16) -> Self {
        let viewport_units = viewport_rows as f64 * config.row_unit;
        let threshold = viewport_units * config.threshold_factor;
        Self {
            config,
            virtual_scroll: 0.0,
            progress: 0.0,
            threshold,
            viewport_units,
            delegated: false,
            reversing: false,
            reversing_from_content: false,
            dirty: false,
            drag_origin: None,
            lock: ScrollLock::engaged(),
        }
    }

    #[inline]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[inline]
    pub fn virtual_scroll(&self) -> f64 {
        self.virtual_scroll
    }

    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[inline]
    pub fn is_delegated(&self) -> bool {
        self.delegated
    }

    #[inline]
    pub fn lock(&self) -> &ScrollLock {
        &self.lock
    }

    /// Content pane becomes visible inside the reveal band past this point.
    #[inline]
    pub fn content_visible(&self) -> bool {
        self.progress > self.config.content_reveal_progress
    }

    pub fn phase(&self) -> Phase {
        if self.delegated {
            Phase::SplitComplete
        } else if self.progress <= 0.0 {
            Phase::Idle
        } else if self.reversing || self.reversing_from_content {
            Phase::Reversing
        } else {
            Phase::Animating
        }
    }

    /// True while a recompute is pending or a reclaim run-down is active.
    /// Drives the fast animation tick rate in the event loop.
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.dirty || self.reversing_from_content
    }

    /// Feed a wheel delta (positive = down, in virtual pixels).
    ///
    /// Not intercepted once authority is delegated (unless a content
    /// reverse is running), nor when at rest and scrolling up.
    pub fn on_wheel(&mut self, delta_y: f64) -> InputDisposition {
        let delta_y = finite_or_zero(delta_y);
        if self.delegated && !self.reversing_from_content {
            return InputDisposition::PassThrough;
        }
        if self.virtual_scroll <= 0.0 && delta_y < 0.0 {
            return InputDisposition::PassThrough;
        }

        let previous = self.virtual_scroll;
        self.accumulate(delta_y * self.config.wheel_multiplier);
        self.reversing = self.virtual_scroll < previous;
        self.dirty = true;
        InputDisposition::Consumed
    }

    /// Record the starting row of a drag gesture.
    pub fn on_drag_start(&mut self, row: f64) {
        if self.delegated && !self.reversing_from_content {
            return;
        }
        self.drag_origin = Some(finite_or_zero(row));
    }

    /// Feed a drag movement to the given row. Drags always suppress the
    /// default handling while the controller owns input.
    pub fn on_drag_move(&mut self, row: f64) -> InputDisposition {
        if self.delegated && !self.reversing_from_content {
            return InputDisposition::PassThrough;
        }
        let row = finite_or_zero(row);
        let origin = match self.drag_origin.replace(row) {
            Some(origin) => origin,
            None => return InputDisposition::Consumed,
        };

        // Dragging upward (toward row 0) scrolls the experience forward.
        let delta = (origin - row) * self.config.row_unit;
        let previous = self.virtual_scroll;
        self.accumulate(delta * self.config.drag_multiplier);
        self.reversing = self.virtual_scroll < previous;
        self.dirty = true;
        InputDisposition::Consumed
    }

    /// Viewport height changed. Recomputes the threshold; an in-flight
    /// animation is discarded rather than rescaled against the new
    /// threshold.
    pub fn on_resize(&mut self, viewport_rows: u16) {
        self.viewport_units = viewport_rows as f64 * self.config.row_unit;
        self.threshold = self.viewport_units * self.config.threshold_factor;
        debug!(threshold = self.threshold, "viewport resized");

        if !self.delegated && self.virtual_scroll > 0.0 {
            self.snap_closed();
            self.dirty = false;
        }
    }

    /// Reclaim scroll authority from the content pane and run the reverse
    /// animation back to fully closed. No-op unless delegated.
    pub fn reclaim_from_content(&mut self) {
        if !self.delegated {
            return;
        }
        debug!("reclaiming scroll authority from content");
        self.delegated = false;
        self.reversing = true;
        self.reversing_from_content = true;
        self.lock.engage();
        self.virtual_scroll = self.threshold * self.progress;
        self.dirty = true;
    }

    /// Advance one frame: step any active reclaim run-down, then apply the
    /// pending recompute. Returns the current progress.
    pub fn update(&mut self) -> f64 {
        if self.reversing_from_content {
            self.virtual_scroll = (self.virtual_scroll - self.config.reverse_step).max(0.0);
            self.dirty = true;
        }
        if self.dirty {
            self.dirty = false;
            self.recompute();
        }
        self.progress
    }

    fn accumulate(&mut self, delta: f64) {
        let max = self.viewport_units * self.config.overshoot_factor;
        self.virtual_scroll = (self.virtual_scroll + delta).clamp(self.config.min_overshoot, max);
    }

    fn recompute(&mut self) {
        if self.virtual_scroll <= 0.0 {
            self.snap_closed();
        } else if self.virtual_scroll >= self.threshold {
            self.snap_open();
        } else {
            let raw = self.virtual_scroll / self.threshold;
            self.progress = self.config.easing.apply(raw);
            self.lock.engage();
            self.delegated = false;
        }
    }

    fn snap_closed(&mut self) {
        if self.progress > 0.0 || self.delegated {
            debug!("split fully closed");
        }
        self.virtual_scroll = 0.0;
        self.progress = 0.0;
        self.delegated = false;
        self.reversing = false;
        self.reversing_from_content = false;
        self.lock.engage();
    }

    fn snap_open(&mut self) {
        if !self.delegated {
            debug!("split complete, delegating scroll authority");
        }
        self.virtual_scroll = self.threshold;
        self.progress = 1.0;
        self.delegated = true;
        self.reversing = false;
        self.reversing_from_content = false;
        self.lock.release();
    }
}

#[inline]
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 40 rows * 25.0 units/row = 1000 virtual pixels, threshold 800.
    const ROWS: u16 = 40;

    fn transition() -> SplitTransition {
        SplitTransition::new(TransitionConfig::default(), ROWS)
    }

    #[test]
    fn starts_closed_and_locked() {
        let t = transition();
        assert_eq!(t.progress(), 0.0);
        assert_eq!(t.phase(), Phase::Idle);
        assert!(t.lock().is_engaged());
        assert!(!t.is_delegated());
        assert_eq!(t.threshold(), 800.0);
    }

    #[test]
    fn one_wheel_notch_matches_worked_example() {
        let mut t = transition();
        assert_eq!(t.on_wheel(100.0), InputDisposition::Consumed);
        assert_eq!(t.virtual_scroll(), 30.0);
        let progress = t.update();
        assert!((progress - 0.1083).abs() < 0.0005, "progress = {progress}");
        assert_eq!(t.phase(), Phase::Animating);
        assert!(t.lock().is_engaged());
    }

    #[test]
    fn upward_wheel_at_rest_passes_through() {
        let mut t = transition();
        assert_eq!(t.on_wheel(-50.0), InputDisposition::PassThrough);
        assert_eq!(t.virtual_scroll(), 0.0);
        assert_eq!(t.update(), 0.0);
    }

    #[test]
    fn rapid_input_coalesces_into_one_recompute() {
        let mut t = transition();
        t.on_wheel(100.0);
        t.on_wheel(100.0);
        t.on_wheel(100.0);
        assert!(t.needs_update());
        assert_eq!(t.virtual_scroll(), 90.0);
        // Progress only moves when the frame tick consumes the pending flag.
        assert_eq!(t.progress(), 0.0);
        t.update();
        assert!(t.progress() > 0.0);
        assert!(!t.needs_update());
    }

    #[test]
    fn progress_is_monotonic_in_cumulative_scroll() {
        let mut t = transition();
        let mut prev = 0.0;
        for _ in 0..60 {
            t.on_wheel(60.0);
            let p = t.update();
            assert!(p >= prev, "progress regressed: {p} < {prev}");
            assert!((0.0..=1.0).contains(&p));
            prev = p;
        }
        assert_eq!(prev, 1.0);
    }

    #[test]
    fn reaching_threshold_delegates_and_unlocks() {
        let mut t = transition();
        // 27 notches * 30 units = 810 >= 800
        for _ in 0..27 {
            t.on_wheel(100.0);
        }
        t.update();
        assert_eq!(t.progress(), 1.0);
        assert_eq!(t.phase(), Phase::SplitComplete);
        assert!(t.is_delegated());
        assert!(!t.lock().is_engaged());
        // Accumulator snaps to the threshold, not past it.
        assert_eq!(t.virtual_scroll(), 800.0);
    }

    #[test]
    fn wheel_ignored_while_delegated() {
        let mut t = transition();
        for _ in 0..27 {
            t.on_wheel(100.0);
        }
        t.update();
        assert_eq!(t.on_wheel(100.0), InputDisposition::PassThrough);
        assert_eq!(t.on_wheel(-100.0), InputDisposition::PassThrough);
        assert_eq!(t.virtual_scroll(), 800.0);
    }

    #[test]
    fn accumulator_clamps_at_both_bounds() {
        let mut t = transition();
        t.on_wheel(1.0e9);
        assert_eq!(t.virtual_scroll(), 1200.0); // 1000 * 1.2
        t.update();
        t.reclaim_from_content();
        // Run the reverse down, then push far negative.
        while t.needs_update() {
            t.update();
        }
        t.on_wheel(40.0);
        t.update();
        t.on_wheel(-1.0e9);
        assert_eq!(t.virtual_scroll(), -100.0);
        t.update();
        assert_eq!(t.progress(), 0.0);
    }

    #[test]
    fn non_finite_deltas_have_no_effect() {
        let mut t = transition();
        t.on_wheel(100.0);
        t.update();
        let before = t.virtual_scroll();
        t.on_wheel(f64::NAN);
        t.on_wheel(f64::INFINITY);
        t.update();
        assert_eq!(t.virtual_scroll(), before);
    }

    #[test]
    fn reclaim_runs_monotonically_back_to_closed() {
        let mut t = transition();
        for _ in 0..27 {
            t.on_wheel(100.0);
        }
        t.update();
        assert!(t.is_delegated());

        t.reclaim_from_content();
        assert!(!t.is_delegated());
        assert!(t.lock().is_engaged());
        assert_eq!(t.virtual_scroll(), 800.0);

        let mut prev = 1.0;
        let mut frames = 0;
        while t.needs_update() {
            let p = t.update();
            assert!(p <= prev, "reverse progress increased: {p} > {prev}");
            assert!(p >= 0.0, "progress overshot below zero");
            prev = p;
            frames += 1;
            assert!(frames < 200, "reverse run-down did not terminate");
        }
        assert_eq!(t.progress(), 0.0);
        assert_eq!(t.phase(), Phase::Idle);
        assert!(t.lock().is_engaged());
        // 800 / 15 per frame, plus the final settling frame.
        assert!(frames >= 54);
    }

    #[test]
    fn reclaim_is_a_noop_unless_delegated() {
        let mut t = transition();
        t.on_wheel(100.0);
        t.update();
        let before = t.virtual_scroll();
        t.reclaim_from_content();
        assert!(!t.needs_update() || t.virtual_scroll() == before);
        assert_eq!(t.virtual_scroll(), before);
    }

    #[test]
    fn resize_mid_animation_discards_progress() {
        let mut t = transition();
        for _ in 0..10 {
            t.on_wheel(100.0);
        }
        t.update();
        assert!(t.progress() > 0.0);

        t.on_resize(50);
        assert_eq!(t.virtual_scroll(), 0.0);
        assert_eq!(t.progress(), 0.0);
        assert_eq!(t.phase(), Phase::Idle);
        assert_eq!(t.threshold(), 50.0 * 25.0 * 0.8);
    }

    #[test]
    fn resize_when_complete_keeps_delegation() {
        let mut t = transition();
        for _ in 0..27 {
            t.on_wheel(100.0);
        }
        t.update();
        t.on_resize(50);
        assert!(t.is_delegated());
        assert_eq!(t.progress(), 1.0);
    }

    #[test]
    fn drag_uses_gentler_multiplier() {
        let mut t = transition();
        t.on_drag_start(30.0);
        // 6 rows upward: 6 * 25.0 units * 0.2 = 30 virtual pixels.
        assert_eq!(t.on_drag_move(24.0), InputDisposition::Consumed);
        assert_eq!(t.virtual_scroll(), 30.0);
        let p = t.update();
        assert!((p - 0.1083).abs() < 0.0005);
    }

    #[test]
    fn drag_ignored_while_delegated() {
        let mut t = transition();
        for _ in 0..27 {
            t.on_wheel(100.0);
        }
        t.update();
        t.on_drag_start(10.0);
        assert_eq!(t.on_drag_move(5.0), InputDisposition::PassThrough);
        assert_eq!(t.virtual_scroll(), 800.0);
    }

    #[test]
    fn forward_input_during_content_reverse_is_consumed() {
        let mut t = transition();
        for _ in 0..27 {
            t.on_wheel(100.0);
        }
        t.update();
        t.reclaim_from_content();
        t.update();
        // The user can push back down mid-reverse.
        assert_eq!(t.on_wheel(100.0), InputDisposition::Consumed);
    }
}
