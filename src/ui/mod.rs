//! Libadwaita user interface of the Pixlume preferences.
//!
//! This module provides the application window and the tabbed preference
//! widget with its General, Display and Advanced panels.

pub mod application;
pub mod preferences;

pub use {application::PixlumeApplication, preferences::PreferenceWidget};
