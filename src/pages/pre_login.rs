//! PreLogin - the onboarding screen.
//!
//! "Get started" - first of three onboarding pages.
//!
//! On mount a [`FrameDriver`] starts playing the entrance timeline into a
//! signal; unmount cancels it. The "next" button asks the shell for the
//! Login screen on every tap.

use classstruct_core::{
    CancellationToken, FrameDriver, NavigationHandle, OnboardingFrame, OnboardingTimeline, ScreenId,
};
use classstruct_ui::{Button, ButtonVariant, GlowRing, HeroImage, PageIndicator, ONBOARDING_PAGES};
use dioxus::prelude::*;

use crate::app::RouterNavigator;
use crate::context::use_shell_context;

/// Route component: wires the router into a navigation handle.
#[component]
pub fn PreLogin() -> Element {
    let navigator = use_navigator();
    let navigation = use_hook(|| NavigationHandle::new(RouterNavigator::new(navigator)));

    rsx! {
        OnboardingScreen { navigation }
    }
}

/// Opacity only. The header does not slide.
fn fade_style(frame: &OnboardingFrame) -> String {
    format!("opacity: {:.3};", frame.reveal_opacity)
}

/// Opacity plus the vertical slide, for the hero and text blocks.
fn reveal_style(frame: &OnboardingFrame) -> String {
    format!(
        "opacity: {:.3}; transform: translateY({:.2}px);",
        frame.reveal_opacity, frame.reveal_offset
    )
}

/// Call-to-action opacity; taps pass through until it starts to appear.
fn cta_style(frame: &OnboardingFrame) -> String {
    let pointer = if frame.cta_interactive() { "auto" } else { "none" };
    format!("opacity: {:.3}; pointer-events: {};", frame.cta_opacity, pointer)
}

/// Onboarding layout plus its entrance animation.
#[component]
pub fn OnboardingScreen(navigation: NavigationHandle) -> Element {
    let shell = use_shell_context();
    let timings = shell.config.timings.clone();

    let timeline = use_hook(|| OnboardingTimeline::new(&timings));
    let mut frame = use_signal(|| timeline.initial_frame());
    let token = use_hook(CancellationToken::new);

    // Start the driver exactly once per mount
    use_hook({
        let token = token.clone();
        let interval = timings.frame_interval();
        move || {
            tracing::info!("PreLogin mounted");
            spawn(async move {
                FrameDriver::new(timeline, interval)
                    .run(token, move |next| frame.set(next))
                    .await;
            });
        }
    });

    use_drop(move || {
        token.cancel();
        tracing::info!("PreLogin unmounted");
    });

    let current = frame();
    let header_style = fade_style(&current);
    let block_style = reveal_style(&current);
    let button_style = cta_style(&current);

    rsx! {
        main { class: "pre-login",
            header { class: "pre-login__header", style: "{header_style}",
                span { class: "app-name", "ClassStruct" }
            }

            section { class: "pre-login__hero", style: "{block_style}",
                GlowRing { intensity: current.glow_intensity }
                HeroImage { src: shell.hero_src.clone(), alt: "Students on campus".to_string() }
            }

            section { class: "pre-login__text", style: "{block_style}",
                p { class: "tagline", "Get started" }
                p { class: "description",
                    "Wanna know what's happening on"
                    br {}
                    "campus? "
                    span { class: "highlight", "Join aboard" }
                    " and get to"
                    br {}
                    "know everything about your"
                    br {}
                    "classmates and faculty."
                }
            }

            div { class: "pre-login__cta", style: "{button_style}",
                Button {
                    variant: ButtonVariant::Next,
                    disabled: !current.cta_interactive(),
                    onclick: move |_| navigation.request_navigation(ScreenId::Login),
                    "next →"
                }
            }

            PageIndicator { count: ONBOARDING_PAGES, active: 0 }
        }
    }
}
