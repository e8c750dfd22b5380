//! Time-based tween animator for slide transitions
//!
//! The animator is driven by host frame timestamps rather than an
//! internal clock, so a widget animates at whatever cadence the host's
//! frame scheduler delivers and tests can replay exact timelines.

use std::time::{Duration, Instant};

/// Tweens the track offset toward a target slide.
///
/// At most one transition is in flight per widget: `start_at` on an
/// active animator replaces the previous tween outright. There is no
/// queueing and no blending.
#[derive(Debug, Clone)]
pub struct SlideAnimator {
    active: bool,
    start: f32,
    target: f32,
    target_index: usize,
    started_at: Option<Instant>,
    duration: Duration,
    easing_kind: u8, // 0=Linear,1=EaseIn,2=EaseOut,3=EaseInOut
}

impl Default for SlideAnimator {
    fn default() -> Self {
        Self {
            active: false,
            start: 0.0,
            target: 0.0,
            target_index: 0,
            started_at: None,
            duration: Duration::from_millis(200),
            easing_kind: 2,
        }
    }
}

impl SlideAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Slide index committed when the tween finishes.
    pub fn target_index(&self) -> usize {
        self.target_index
    }

    pub fn start_at(
        &mut self,
        now: Instant,
        start: f32,
        target_index: usize,
        target: f32,
        duration_ms: u64,
        easing_kind: u8,
    ) {
        self.active = true;
        self.start = start;
        self.target = target;
        self.target_index = target_index;
        self.started_at = Some(now);
        self.duration = Duration::from_millis(duration_ms);
        self.easing_kind = easing_kind;
    }

    /// Returns the eased offset for this frame, or None when inactive.
    /// Once elapsed time reaches the duration the animator deactivates
    /// and returns the exact target offset.
    pub fn tick_at(&mut self, now: Instant) -> Option<f32> {
        if !self.active {
            return None;
        }
        let started = self.started_at?;
        let elapsed = now.saturating_duration_since(started);
        if elapsed >= self.duration {
            self.active = false;
            return Some(self.target);
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32())
            .clamp(0.0, 1.0);
        let te = apply_easing(t, self.easing_kind);
        Some(self.start + (self.target - self.start) * te)
    }

    /// Cancel the current animation immediately.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}

fn apply_easing(t: f32, kind: u8) -> f32 {
    let u = 1.0 - t;
    match kind {
        1 => t * t * t,           // EaseIn (cubic)
        2 => 1.0 - u * u * u,     // EaseOut (cubic)
        3 => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                1.0 - 4.0 * u * u * u
            }
        } // EaseInOut (cubic)
        _ => t,                   // Linear
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::SlideAnimator;

    #[test]
    fn tween_reaches_the_exact_target_and_deactivates() {
        let t0 = Instant::now();
        let mut anim = SlideAnimator::new();
        anim.start_at(t0, 0.0, 1, -100.0, 200, 2);

        let mid = anim
            .tick_at(t0 + Duration::from_millis(100))
            .expect("active mid-flight");
        assert!(mid < 0.0 && mid > -100.0, "mid offset {mid}");

        let done = anim
            .tick_at(t0 + Duration::from_millis(200))
            .expect("final frame");
        assert_eq!(done, -100.0);
        assert!(!anim.is_active());
        assert_eq!(anim.tick_at(t0 + Duration::from_millis(300)), None);
    }

    #[test]
    fn ease_out_front_loads_the_motion() {
        let t0 = Instant::now();
        let mut anim = SlideAnimator::new();
        anim.start_at(t0, 0.0, 1, -100.0, 200, 2);

        // Cubic ease-out covers 87.5% of the distance at half time.
        let mid = anim
            .tick_at(t0 + Duration::from_millis(100))
            .expect("active mid-flight");
        assert!((mid - (-87.5)).abs() < 0.5, "mid offset {mid}");
    }

    #[test]
    fn offsets_progress_monotonically_toward_the_target() {
        let t0 = Instant::now();
        let mut anim = SlideAnimator::new();
        anim.start_at(t0, -100.0, 0, 0.0, 200, 2);

        let mut prev = -100.0;
        for ms in (0..=200).step_by(20) {
            let offset = anim
                .tick_at(t0 + Duration::from_millis(ms))
                .expect("active until the final frame");
            assert!(offset >= prev, "regressed from {prev} to {offset}");
            prev = offset;
        }
        assert_eq!(prev, 0.0);
    }

    #[test]
    fn restart_replaces_the_previous_tween() {
        let t0 = Instant::now();
        let mut anim = SlideAnimator::new();
        anim.start_at(t0, 0.0, 1, -100.0, 200, 2);
        anim.tick_at(t0 + Duration::from_millis(50));

        // Retarget mid-flight; the old tween is gone.
        anim.start_at(t0 + Duration::from_millis(50), -50.0, 2, -200.0, 200, 2);
        assert_eq!(anim.target_index(), 2);
        let done = anim
            .tick_at(t0 + Duration::from_millis(250))
            .expect("replacement runs to completion");
        assert_eq!(done, -200.0);
    }

    #[test]
    fn snap_back_to_the_same_offset_still_runs() {
        let t0 = Instant::now();
        let mut anim = SlideAnimator::new();
        anim.start_at(t0, -30.0, 0, 0.0, 200, 2);
        assert!(anim.is_active());
        let mid = anim
            .tick_at(t0 + Duration::from_millis(100))
            .expect("snap-back animates");
        assert!(mid > -30.0 && mid < 0.0);
    }

    #[test]
    fn cancel_stops_ticking() {
        let t0 = Instant::now();
        let mut anim = SlideAnimator::new();
        anim.start_at(t0, 0.0, 1, -100.0, 200, 2);
        anim.cancel();
        assert_eq!(anim.tick_at(t0 + Duration::from_millis(100)), None);
    }
}
