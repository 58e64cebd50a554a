//! Viewer settings, their control bindings and the available languages.
//!
//! This module provides the shared settings structure with XDG compliant
//! persistence, the declarative binding table used by the preference panels,
//! and the language catalog behind the language selector.

pub mod binding;
pub mod languages;
pub mod reset;
pub mod settings;

pub use {
    binding::{Binding, ColorBinding, WriteOutcome},
    languages::{Language, LanguageCatalog, translation_dirs},
    reset::ConfirmResponse,
    settings::{
        AppMode, KeepZoom, ModifierKey, Rgba, SettingsError, SettingsManager, ViewerSettings,
        get_config_path, get_data_dir,
    },
};
