//! Easing curves.
//!
//! Every curve maps progress `t` in `[0, 1]` to `[0, 1]`, fixes both
//! endpoints, and is monotonic.

use serde::{Deserialize, Serialize};

/// Control points of the standard "ease" curve.
const EASE: CubicBezier = CubicBezier::new(0.42, 0.0, 1.0, 1.0);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Slow start, full speed at the end.
    Ease,
    /// "ease" mirrored around the midpoint: slow start and slow finish.
    #[default]
    EaseInOut,
}

impl Easing {
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let eased = match self {
            Easing::Linear => t,
            Easing::Ease => EASE.solve(t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    EASE.solve(t * 2.0) / 2.0
                } else {
                    1.0 - EASE.solve((1.0 - t) * 2.0) / 2.0
                }
            }
        };
        eased.clamp(0.0, 1.0)
    }
}

/// Cubic bezier from (0, 0) to (1, 1) with two control points.
#[derive(Clone, Copy, Debug, PartialEq)]
struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn component(s: f32, p1: f32, p2: f32) -> f32 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    }

    fn x_derivative(&self, s: f32) -> f32 {
        let inv = 1.0 - s;
        3.0 * inv * inv * self.x1 + 6.0 * inv * s * (self.x2 - self.x1) + 3.0 * s * s * (1.0 - self.x2)
    }

    /// y for a given x. Newton first, bisection when the slope is too flat.
    fn solve(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }

        let mut s = x;
        for _ in 0..8 {
            let err = Self::component(s, self.x1, self.x2) - x;
            if err.abs() < 1e-6 {
                return Self::component(s, self.y1, self.y2);
            }
            let d = self.x_derivative(s);
            if d.abs() < 1e-6 {
                break;
            }
            s = (s - err / d).clamp(0.0, 1.0);
        }

        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        s = x;
        for _ in 0..32 {
            let value = Self::component(s, self.x1, self.x2);
            if (value - x).abs() < 1e-6 {
                break;
            }
            if value < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        Self::component(s, self.y1, self.y2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 3] = [Easing::Linear, Easing::Ease, Easing::EaseInOut];

    #[test]
    fn endpoints_are_fixed() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        for easing in ALL {
            assert_eq!(easing.apply(-0.5), 0.0);
            assert_eq!(easing.apply(1.5), 1.0);
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in ALL {
            let mut last = 0.0;
            for step in 0..=200 {
                let v = easing.apply(step as f32 / 200.0);
                assert!(v + 1e-5 >= last, "{easing:?} dipped at step {step}");
                last = v;
            }
        }
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let mid = Easing::EaseInOut.apply(0.5);
        assert!((mid - 0.5).abs() < 1e-3);
        for step in 1..50 {
            let t = step as f32 / 100.0;
            let a = Easing::EaseInOut.apply(t);
            let b = Easing::EaseInOut.apply(1.0 - t);
            assert!((a + b - 1.0).abs() < 1e-3, "asymmetric at {t}");
        }
    }

    #[test]
    fn ease_starts_slow() {
        assert!(Easing::Ease.apply(0.2) < 0.2);
        assert!(Easing::EaseInOut.apply(0.2) < 0.2);
        assert!(Easing::EaseInOut.apply(0.8) > 0.8);
    }
}
