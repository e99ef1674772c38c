use arloom_core::{Duration, Easing, Timestamp};
use arloom_scene::AnimationSpec;

/// One clock reading: speed-scaled elapsed seconds plus the normalized and
/// eased cycle progress derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleSample {
    /// Speed-scaled seconds since the animation started.
    pub elapsed: f64,
    /// Fractional position in the current cycle, in [0, 1].
    pub progress: f64,
    /// `progress` through the quadratic in/out curve.
    pub eased: f64,
}

/// Per-layer timing state: converts wall-clock samples into cycle progress.
///
/// The start timestamp is captured once, when playback begins; everything
/// else is derived per sample, so two clocks with equal fields always agree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClock {
    started_at: Timestamp,
    speed: f64,
    duration: Duration,
    looped: bool,
}

impl AnimationClock {
    /// Create a clock from explicit timing parameters.
    ///
    /// `speed` and `duration` must be strictly positive — the commit-time
    /// validator guarantees this for any committed spec; the clock does not
    /// re-check.
    pub fn new(started_at: Timestamp, speed: f64, duration: Duration, looped: bool) -> Self {
        Self {
            started_at,
            speed,
            duration,
            looped,
        }
    }

    /// Create a clock for a layer's animation configuration.
    pub fn for_spec(spec: &AnimationSpec, started_at: Timestamp) -> Self {
        Self::new(started_at, spec.speed, spec.duration, spec.looped)
    }

    /// The timestamp playback started at.
    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    /// Read the clock at `now`.
    ///
    /// Looping clocks wrap exactly at each cycle boundary; non-looping
    /// clocks pin progress to 1.0 once a full cycle has elapsed, holding the
    /// end pose.
    pub fn sample(&self, now: Timestamp) -> CycleSample {
        let duration = self.duration.as_seconds();
        let elapsed = now.since(self.started_at).as_seconds() * self.speed;
        let mut progress = (elapsed % duration) / duration;

        if !self.looped && elapsed >= duration {
            progress = 1.0;
        }

        CycleSample {
            elapsed,
            progress,
            eased: Easing::EaseInOut.apply(progress),
        }
    }

    /// True once a non-looping clock has reached its end and holds there.
    pub fn is_held(&self, now: Timestamp) -> bool {
        !self.looped
            && now.since(self.started_at).as_seconds() * self.speed >= self.duration.as_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(speed: f64, duration: f64, looped: bool) -> AnimationClock {
        AnimationClock::new(
            Timestamp::zero(),
            speed,
            Duration::from_seconds(duration),
            looped,
        )
    }

    #[test]
    fn test_progress_scales_with_speed() {
        let c = clock(2.0, 2.0, true);
        let s = c.sample(Timestamp::from_millis(500.0));
        // 0.5s wall clock at 2x speed = 1s elapsed = half the cycle.
        assert!((s.elapsed - 1.0).abs() < 1e-9);
        assert!((s.progress - 0.5).abs() < 1e-9);
        assert!((s.eased - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_looping_wraps_exactly() {
        let c = clock(1.0, 2.0, true);
        for eps in [0.0, 0.1, 0.5, 1.9] {
            let within = c.sample(Timestamp::from_seconds(eps)).progress;
            let wrapped = c.sample(Timestamp::from_seconds(2.0 + eps)).progress;
            assert!(
                (within - wrapped).abs() < 1e-9,
                "progress at {}s and {}s should match",
                eps,
                2.0 + eps
            );
        }
    }

    #[test]
    fn test_non_looping_holds_at_end() {
        let c = clock(1.0, 2.0, false);
        let at_end = c.sample(Timestamp::from_seconds(2.0));
        let past_end = c.sample(Timestamp::from_seconds(4.0));
        assert_eq!(at_end.progress, 1.0);
        assert_eq!(past_end.progress, 1.0);
        assert_eq!(past_end.eased, 1.0);
        assert!(c.is_held(Timestamp::from_seconds(4.0)));
        assert!(!c.is_held(Timestamp::from_seconds(1.0)));
    }

    #[test]
    fn test_eased_progress_concrete_value() {
        // duration=2s, speed=1: at 0.25s progress is 0.125, eased 0.03125.
        let c = clock(1.0, 2.0, true);
        let s = c.sample(Timestamp::from_seconds(0.25));
        assert!((s.progress - 0.125).abs() < 1e-9);
        assert!((s.eased - 0.03125).abs() < 1e-9);
    }

    #[test]
    fn test_sample_at_start() {
        let c = clock(1.0, 2.0, false);
        let s = c.sample(Timestamp::zero());
        assert_eq!(s.elapsed, 0.0);
        assert_eq!(s.progress, 0.0);
        assert_eq!(s.eased, 0.0);
    }
}
