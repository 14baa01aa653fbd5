//! Page components for ClassStruct.

mod pre_login;
mod reserved;

pub use pre_login::{OnboardingScreen, PreLogin};
pub use reserved::{Login, Register, ReservedScreen};
