//! Interpolation primitives: a one-shot [`Tween`] and an endless [`GlowLoop`].
//!
//! Both are pure functions of elapsed time since mount. Nothing here holds a
//! clock.

use std::time::Duration;

use super::easing::Easing;

/// Animates one value from `from` to `to`, starting `start` after mount and
/// lasting `duration`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub start: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            start: Duration::ZERO,
            duration,
            easing,
        }
    }

    /// Delay the start by `offset` from mount.
    pub fn starting_at(mut self, offset: Duration) -> Self {
        self.start = offset;
        self
    }

    /// Elapsed time at which the value reaches `to`.
    pub fn end(&self) -> Duration {
        self.start + self.duration
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if elapsed <= self.start {
            return 0.0;
        }
        if elapsed >= self.end() {
            return 1.0;
        }
        let run = (elapsed - self.start).as_secs_f64() / self.duration.as_secs_f64();
        run.clamp(0.0, 1.0) as f32
    }

    pub fn value_at(&self, elapsed: Duration) -> f32 {
        let p = self.progress(elapsed);
        // Terminal value is exact, not an interpolation result
        if p >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(p)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.end()
    }
}

/// Oscillates between `min` and `max` forever: up over one leg, down over the
/// next. Starts at `min` on mount.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowLoop {
    pub min: f32,
    pub max: f32,
    pub leg: Duration,
    pub easing: Easing,
}

impl GlowLoop {
    pub fn new(min: f32, max: f32, leg: Duration, easing: Easing) -> Self {
        Self {
            min,
            max,
            leg,
            easing,
        }
    }

    /// One full up-and-down cycle.
    pub fn cycle(&self) -> Duration {
        self.leg * 2
    }

    pub fn value_at(&self, elapsed: Duration) -> f32 {
        let leg = self.leg.as_nanos();
        if leg == 0 {
            return self.min;
        }
        let phase = elapsed.as_nanos() % (leg * 2);
        let span = self.max - self.min;

        let value = if phase < leg {
            let t = phase as f64 / leg as f64;
            self.min + span * self.easing.apply(t as f32)
        } else {
            let t = (phase - leg) as f64 / leg as f64;
            self.max - span * self.easing.apply(t as f32)
        };
        value.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn tween_holds_start_value_until_offset() {
        let tween = Tween::new(0.0, 1.0, ms(500), Easing::Linear).starting_at(ms(900));
        assert_eq!(tween.value_at(Duration::ZERO), 0.0);
        assert_eq!(tween.value_at(ms(900)), 0.0);
        assert!(tween.value_at(ms(901)) > 0.0);
        assert_eq!(tween.end(), ms(1400));
    }

    #[test]
    fn tween_lands_exactly_on_target() {
        let tween = Tween::new(40.0, 0.0, ms(900), Easing::EaseInOut);
        assert_eq!(tween.value_at(ms(900)), 0.0);
        assert_eq!(tween.value_at(ms(5000)), 0.0);
        assert!(tween.is_finished(ms(900)));
        assert!(!tween.is_finished(ms(899)));
    }

    #[test]
    fn linear_tween_midpoint() {
        let tween = Tween::new(0.0, 10.0, ms(1000), Easing::Linear);
        assert!((tween.value_at(ms(500)) - 5.0).abs() < 1e-4);
        assert!((tween.progress(ms(250)) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn glow_starts_at_min_and_peaks_after_one_leg() {
        let glow = GlowLoop::new(0.4, 1.0, ms(1800), Easing::EaseInOut);
        assert_eq!(glow.value_at(Duration::ZERO), 0.4);
        assert!((glow.value_at(ms(1800)) - 1.0).abs() < 1e-5);
        assert!((glow.value_at(ms(3600)) - 0.4).abs() < 1e-5);
        assert_eq!(glow.cycle(), ms(3600));
    }

    #[test]
    fn glow_repeats_every_cycle() {
        let glow = GlowLoop::new(0.4, 1.0, ms(1800), Easing::EaseInOut);
        for offset in [0, 450, 1200, 2700, 3599] {
            let a = glow.value_at(ms(offset));
            let b = glow.value_at(ms(offset) + glow.cycle() * 3);
            assert!((a - b).abs() < 1e-5, "drift at {offset}ms");
        }
    }

    #[test]
    fn zero_leg_glow_rests_at_min() {
        let glow = GlowLoop::new(0.4, 1.0, Duration::ZERO, Easing::Linear);
        assert_eq!(glow.value_at(ms(123)), 0.4);
    }
}
