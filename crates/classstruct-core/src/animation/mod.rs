//! Onboarding animation model.
//!
//! Values are explicit functions of elapsed time since the screen mounted.
//! [`OnboardingTimeline`] owns the three animation groups; the
//! [`crate::driver::FrameDriver`] samples it once per frame.

mod easing;
mod timeline;
mod tween;

pub use easing::Easing;
pub use timeline::{OnboardingFrame, OnboardingTimeline, TimelinePhase};
pub use tween::{GlowLoop, Tween};
