//! The onboarding entrance timeline.
//!
//! Three groups with fixed start offsets from mount:
//!
//! ```text
//! t=0                  reveal end            cta end
//! |---- reveal --------|                      (opacity 0->1, offset 40->0)
//!                      |---- call-to-action --|
//! |---- glow up ----|---- glow down ----|---- glow up ... (until teardown)
//! ```

use std::time::Duration;

use crate::config::AnimationTimings;

use super::tween::{GlowLoop, Tween};

/// One sampled set of animation values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OnboardingFrame {
    /// Shared by header, hero block and text block.
    pub reveal_opacity: f32,
    /// Vertical translation in px for hero and text blocks.
    pub reveal_offset: f32,
    /// Opacity of the navigation button.
    pub cta_opacity: f32,
    /// Opacity of the ring behind the hero image.
    pub glow_intensity: f32,
}

impl OnboardingFrame {
    /// The call-to-action only starts fading in after the reveal, so any
    /// visible opacity means the reveal is over.
    pub fn cta_interactive(&self) -> bool {
        self.cta_opacity > 0.0
    }
}

/// Which finite groups are still running. The glow runs in every phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelinePhase {
    Revealing,
    CallToAction,
    Idle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OnboardingTimeline {
    reveal_opacity: Tween,
    reveal_offset: Tween,
    cta_opacity: Tween,
    glow: GlowLoop,
}

impl OnboardingTimeline {
    pub fn new(timings: &AnimationTimings) -> Self {
        let reveal = timings.reveal_duration();
        let easing = timings.easing;

        Self {
            reveal_opacity: Tween::new(0.0, 1.0, reveal, easing),
            reveal_offset: Tween::new(timings.reveal_offset_px, 0.0, reveal, easing),
            cta_opacity: Tween::new(0.0, 1.0, timings.cta_duration(), easing).starting_at(reveal),
            glow: GlowLoop::new(timings.glow_min, timings.glow_max, timings.glow_leg(), easing),
        }
    }

    pub fn sample(&self, elapsed: Duration) -> OnboardingFrame {
        OnboardingFrame {
            reveal_opacity: self.reveal_opacity.value_at(elapsed),
            reveal_offset: self.reveal_offset.value_at(elapsed),
            cta_opacity: self.cta_opacity.value_at(elapsed),
            glow_intensity: self.glow.value_at(elapsed),
        }
    }

    /// Values at mount, before any time has passed.
    pub fn initial_frame(&self) -> OnboardingFrame {
        self.sample(Duration::ZERO)
    }

    /// Instant at which both reveal values reach their terminal values.
    pub fn reveal_complete_at(&self) -> Duration {
        self.reveal_opacity.end().max(self.reveal_offset.end())
    }

    pub fn cta_complete_at(&self) -> Duration {
        self.cta_opacity.end()
    }

    /// The button accepts taps only once the reveal is over.
    pub fn cta_interactive(&self, elapsed: Duration) -> bool {
        elapsed > self.reveal_complete_at()
    }

    pub fn phase(&self, elapsed: Duration) -> TimelinePhase {
        if elapsed < self.reveal_complete_at() {
            TimelinePhase::Revealing
        } else if elapsed < self.cta_complete_at() {
            TimelinePhase::CallToAction
        } else {
            TimelinePhase::Idle
        }
    }

    pub fn glow(&self) -> &GlowLoop {
        &self.glow
    }
}
