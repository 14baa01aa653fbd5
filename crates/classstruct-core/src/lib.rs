//! ClassStruct Core Library
//!
//! Framework-free pieces of the ClassStruct onboarding shell.
//!
//! ## Overview
//!
//! - **Route table**: [`ScreenId`] is the closed set of screens the shell
//!   knows. Screens navigate through a [`NavigationHandle`], never the router.
//! - **Animation**: the onboarding entrance is an [`OnboardingTimeline`] of
//!   tweens with explicit start offsets, sampled as a function of elapsed
//!   time.
//! - **Driver**: [`FrameDriver`] samples the timeline every frame until a
//!   cancellation token fires on unmount.
//! - **Ambient**: JSON [`AppConfig`], hero asset resolution, tracing setup.
//!
//! ## Quick Start
//!
//! ```ignore
//! use classstruct_core::{AnimationTimings, FrameDriver};
//! use tokio_util::sync::CancellationToken;
//!
//! let token = CancellationToken::new();
//! let driver = FrameDriver::from_timings(&AnimationTimings::default());
//! tokio::spawn(driver.run(token.clone(), |frame| println!("{frame:?}")));
//!
//! // On teardown
//! token.cancel();
//! ```

pub mod animation;
pub mod asset;
pub mod config;
pub mod driver;
pub mod error;
pub mod logging;
pub mod navigation;

// Re-exports
pub use animation::{Easing, GlowLoop, OnboardingFrame, OnboardingTimeline, TimelinePhase, Tween};
pub use asset::{resolve_hero_image, resolve_hero_image_or_placeholder};
pub use config::{AnimationTimings, AppConfig, HeroImageSource, WindowConfig, PLACEHOLDER_HERO_URL};
pub use driver::{DriverReport, FrameDriver};
pub use error::{ShellError, ShellResult};
pub use navigation::{Navigate, NavigationHandle, NavigationLog, NavigationRequest, ScreenId};

// Screens create their own tokens; re-exported so callers need no direct
// tokio-util dependency.
pub use tokio_util::sync::CancellationToken;
