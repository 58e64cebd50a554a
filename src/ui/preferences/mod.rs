//! Preference widget with tabbed settings panels.
//!
//! This module provides the tab container, the tab page wrapper and the
//! General, Display and Advanced panels.

#[cfg(test)]
mod tests;

pub mod advanced_page;
pub mod color_row;
pub mod container;
pub mod display_page;
pub mod general_page;
pub mod tab_page;
pub mod utils;

pub use {
    advanced_page::AdvancedPreferencesPage, color_row::ColorRow, container::PreferenceWidget,
    display_page::DisplayPreferencesPage, general_page::GeneralPreferencesPage,
    tab_page::PreferenceTab,
};
