//! ClassStruct UI Components
//!
//! Dioxus components for the onboarding shell. Styling lives in the app's
//! global stylesheet; components only pick class names and inline the
//! animated values they are handed.
//!
//! ## Palette
//!
//! - **Paper (#f5f3ee)**: screen background
//! - **Ink (#1a1a2e)**: headings and body copy
//! - **Teal (#5ba8a0)**: highlights, the call-to-action, the active dot
//! - **Amber (#f0a500)**: glow ring behind the hero image

pub mod components;

pub use components::*;
