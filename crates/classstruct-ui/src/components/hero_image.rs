//! Hero Image Component
//!
//! Square image with rounded corners and a dark tint overlay. The `src` may
//! be a URL or a data URI. Load failures are left to the webview.

use dioxus::prelude::*;

/// Properties for the HeroImage component
#[derive(Clone, PartialEq, Props)]
pub struct HeroImageProps {
    /// Image URL or data URI
    pub src: String,
    /// Alt text for accessibility
    #[props(default = String::new())]
    pub alt: String,
}

#[component]
pub fn HeroImage(props: HeroImageProps) -> Element {
    rsx! {
        div { class: "hero-image",
            img {
                class: "hero-image__img",
                src: "{props.src}",
                alt: "{props.alt}",
                onerror: move |_| tracing::warn!("Hero image failed to load"),
            }
            div { class: "hero-image__overlay" }
        }
    }
}
