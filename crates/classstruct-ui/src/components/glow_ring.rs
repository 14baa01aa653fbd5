//! Glow Ring Component
//!
//! Amber rounded ring drawn behind the hero image. Its opacity follows the
//! glow intensity sampled by the screen's frame driver.

use dioxus::prelude::*;

/// Inline style for a given intensity, clamped to `[0, 1]`.
pub fn glow_style(intensity: f32) -> String {
    format!("opacity: {:.3};", intensity.clamp(0.0, 1.0))
}

/// Properties for the GlowRing component
#[derive(Clone, PartialEq, Props)]
pub struct GlowRingProps {
    /// Current glow intensity
    pub intensity: f32,
}

#[component]
pub fn GlowRing(props: GlowRingProps) -> Element {
    let style = glow_style(props.intensity);

    rsx! {
        div {
            class: "glow-ring",
            style: "{style}",
            "aria-hidden": "true",
        }
    }
}
