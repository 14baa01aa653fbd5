//! Page Indicator Component
//!
//! Row of dots showing the position within the onboarding pages. The active
//! dot is wider and teal; the rest are small grey circles.

use dioxus::prelude::*;

/// Pages in the onboarding sequence.
pub const ONBOARDING_PAGES: usize = 3;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DotState {
    Active,
    Inactive,
}

impl DotState {
    pub fn class(&self) -> &'static str {
        match self {
            DotState::Active => "dot dot-active",
            DotState::Inactive => "dot",
        }
    }
}

/// State of each dot. An `active` index past the end marks nothing active.
pub fn dot_states(count: usize, active: usize) -> Vec<DotState> {
    (0..count)
        .map(|i| if i == active { DotState::Active } else { DotState::Inactive })
        .collect()
}

/// Properties for the PageIndicator component
#[derive(Clone, PartialEq, Props)]
pub struct PageIndicatorProps {
    #[props(default = ONBOARDING_PAGES)]
    pub count: usize,
    /// Zero-based index of the highlighted dot
    #[props(default = 0)]
    pub active: usize,
}

/// Static dot row
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     PageIndicator { count: 3, active: 0 }
/// }
/// ```
#[component]
pub fn PageIndicator(props: PageIndicatorProps) -> Element {
    let dots = dot_states(props.count, props.active);
    let label = format!("Page {} of {}", props.active + 1, props.count);

    rsx! {
        div {
            class: "dots",
            role: "img",
            "aria-label": "{label}",
            for (i, dot) in dots.into_iter().enumerate() {
                span { key: "{i}", class: dot.class() }
            }
        }
    }
}
