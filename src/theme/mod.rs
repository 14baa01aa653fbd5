//! Visual theme for ClassStruct.

mod colors;
mod styles;

pub use colors::*;
pub use styles::GLOBAL_STYLES;
