//! Shell settings provider for ClassStruct.
//!
//! Provides the loaded configuration and the resolved hero image to all
//! screens via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(crate::get_shell_context);
//!
//! // In screens
//! let shell = use_shell_context();
//! let timings = &shell.config.timings;
//! ```

use classstruct_core::{resolve_hero_image_or_placeholder, AppConfig};
use dioxus::prelude::*;

/// Settings every screen can read.
#[derive(Clone, Debug, PartialEq)]
pub struct ShellContext {
    pub config: AppConfig,
    /// `img` src for the hero image: a URL or an embedded data URI
    pub hero_src: String,
}

impl ShellContext {
    /// Resolve the hero image once, up front, so screens only read strings.
    pub fn from_config(config: AppConfig) -> Self {
        let hero_src = resolve_hero_image_or_placeholder(&config.hero_image);
        Self { config, hero_src }
    }
}

/// Hook to access the shell settings from context.
pub fn use_shell_context() -> ShellContext {
    use_context::<ShellContext>()
}
