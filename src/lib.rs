//! Pixlume - Image Viewer Preferences
//!
//! The preferences of the Pixlume image viewer: a persisted settings model,
//! declarative bindings between controls and settings keys, and a Libadwaita
//! preference widget with General, Display and Advanced tabs.

pub mod config;
pub mod error;
pub mod state;
pub mod ui;

// Re-export key types for convenience
pub use {
    config::{LanguageCatalog, SettingsManager, ViewerSettings},
    error::{ErrorReporter, UiError},
    state::{Notice, TabNavigator},
    ui::{PixlumeApplication, PreferenceWidget},
};
