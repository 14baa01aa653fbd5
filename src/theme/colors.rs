//! Color constants for the ClassStruct palette.
//!
//! Warm paper background, ink text, teal accents, amber glow. The same
//! values appear as CSS custom properties in `styles.rs`.

#![allow(dead_code)]

// === SURFACES ===
pub const PAPER: &str = "#f5f3ee";
/// PAPER as RGBA, for the native window background.
pub const PAPER_RGBA: (u8, u8, u8, u8) = (0xf5, 0xf3, 0xee, 0xff);

// === TEXT ===
pub const INK: &str = "#1a1a2e";
pub const TEXT_MUTED: &str = "#888888";
pub const TEXT_ON_ACCENT: &str = "#ffffff";

// === ACCENTS ===
pub const TEAL: &str = "#5ba8a0";
pub const AMBER: &str = "#f0a500";

// === DECORATION ===
pub const DOT_INACTIVE: &str = "#cccccc";
pub const HERO_TINT: &str = "rgba(10, 5, 20, 0.15)";
