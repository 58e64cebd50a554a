//! Error handling using `thiserror` and `anyhow`.
//!
//! Domain errors describe what went wrong in the UI layer, operational
//! helpers attach context and report errors through `tracing`.

pub mod domain;
pub mod operational;

pub use {
    domain::UiError,
    operational::{ErrorReporter, ResultExt},
};
