//! Reusable onboarding components
//!
//! Animated components take their current value as a prop and render it as
//! inline style. They hold no timers of their own.

mod button;
mod glow_ring;
mod hero_image;
mod page_indicator;

pub use button::*;
pub use glow_ring::*;
pub use hero_image::*;
pub use page_indicator::*;
