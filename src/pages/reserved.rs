//! Placeholder for screens that are in the route table but not built yet.

use classstruct_core::ScreenId;
use classstruct_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

/// Login route. Reserved.
#[component]
pub fn Login() -> Element {
    rsx! {
        ReservedScreen { screen: ScreenId::Login }
    }
}

/// Register route. Reserved.
#[component]
pub fn Register() -> Element {
    rsx! {
        ReservedScreen { screen: ScreenId::Register }
    }
}

/// Shows only the screen identifier, with a way back.
#[component]
pub fn ReservedScreen(screen: ScreenId) -> Element {
    let navigator = use_navigator();
    use_hook(move || tracing::warn!(screen = %screen, "mounted a reserved screen"));

    rsx! {
        main { class: "reserved-screen",
            p { class: "reserved-screen__id", "{screen}" }
            p { class: "reserved-screen__note", "This screen is not available yet." }
            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| navigator.go_back(),
                "← back"
            }
        }
    }
}
