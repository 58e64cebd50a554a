//! Tests for the preference widget and its panels.
//!
//! Widget tests need a display and are ignored by default; run them with
//! `cargo test -- --ignored` inside a graphical session.

use std::{rc::Rc, sync::Arc};

use {
    libadwaita::prelude::{CheckButtonExt, PreferencesPageExt},
    tempfile::TempDir,
};

use crate::{
    config::{ConfirmResponse, KeepZoom, LanguageCatalog, SettingsManager, ViewerSettings},
    state::{Notice, notice_channel},
    ui::preferences::{
        AdvancedPreferencesPage, DisplayPreferencesPage, GeneralPreferencesPage, PreferenceTab,
        PreferenceWidget,
    },
};

fn settings_manager(temp_dir: &TempDir) -> Arc<SettingsManager> {
    let settings_path = temp_dir.path().join("settings.json");
    Arc::new(SettingsManager::with_config_path(settings_path).unwrap())
}

#[test]
#[ignore = "Requires GTK display for UI testing"]
fn test_general_preferences_page_creation() {
    libadwaita::init().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let (sender, _receiver) = notice_channel();

    let page = GeneralPreferencesPage::new(
        settings_manager(&temp_dir),
        LanguageCatalog::default(),
        sender,
    );

    assert_eq!(page.widget.title(), "General");
}

#[test]
#[ignore = "Requires GTK display for UI testing"]
fn test_display_preferences_page_creation() {
    libadwaita::init().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let (sender, _receiver) = notice_channel();

    let page = DisplayPreferencesPage::new(settings_manager(&temp_dir), sender);

    assert_eq!(page.widget.title(), "Display");
}

#[test]
#[ignore = "Requires GTK display for UI testing"]
fn test_advanced_preferences_page_creation() {
    libadwaita::init().unwrap();
    let temp_dir = TempDir::new().unwrap();

    let page = AdvancedPreferencesPage::new(settings_manager(&temp_dir));

    assert_eq!(page.widget.title(), "Advanced");
}

#[test]
#[ignore = "Requires GTK display for UI testing"]
fn test_preference_widget_navigation() {
    libadwaita::init().unwrap();
    let temp_dir = TempDir::new().unwrap();

    let preferences =
        PreferenceWidget::with_default_tabs(settings_manager(&temp_dir), LanguageCatalog::default());
    assert_eq!(preferences.current_index(), Some(0));

    assert!(!preferences.set_current_index(0));
    assert!(preferences.previous_tab());
    assert_eq!(preferences.current_index(), Some(2));
    assert!(preferences.next_tab());
    assert_eq!(preferences.current_index(), Some(0));
    assert!(!preferences.set_current_index(7));
}

#[test]
#[ignore = "Requires GTK display for UI testing"]
fn test_empty_preference_widget() {
    libadwaita::init().unwrap();

    let preferences = PreferenceWidget::new();
    assert_eq!(preferences.current_index(), None);
    assert!(!preferences.next_tab());
    assert!(!preferences.previous_tab());
    assert_eq!(preferences.info_message(0), None);
}

#[test]
#[ignore = "Requires GTK display for UI testing"]
fn test_tab_page_shows_notices() {
    libadwaita::init().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let (sender, receiver) = notice_channel();
    let page = DisplayPreferencesPage::new(settings_manager(&temp_dir), sender.clone());

    let tab = PreferenceTab::new("Display", "video-display-symbolic", &page.widget, receiver);
    assert_eq!(tab.info_message(), "");

    sender.notify(Some(Notice::RestartRequired));
    let context = libadwaita::glib::MainContext::default();
    while context.iteration(false) {}

    assert_eq!(tab.info_message(), Notice::RestartRequired.message());
}

#[test]
#[ignore = "Requires GTK display for UI testing"]
fn test_confirmed_reset_refreshes_display_page() {
    libadwaita::init().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let settings_manager = settings_manager(&temp_dir);
    let (general_tx, _general_rx) = notice_channel();
    let (display_tx, _display_rx) = notice_channel();

    let general =
        GeneralPreferencesPage::new(settings_manager.clone(), LanguageCatalog::default(), general_tx);
    let display = Rc::new(DisplayPreferencesPage::new(settings_manager.clone(), display_tx));
    general.connect_settings_reset({
        let display = display.clone();
        move || display.refresh()
    });

    display.invert_zoom_row.set_active(true);
    display.icon_size_row.set_value(96.0);
    display.keep_zoom_buttons[KeepZoom::Never.button_id()].set_active(true);
    assert_eq!(settings_manager.get_settings().display.keep_zoom, KeepZoom::Never);

    general.respond_to_reset(ConfirmResponse::Decline);
    assert_eq!(settings_manager.get_settings().display.icon_size, 96);
    assert!(display.invert_zoom_row.is_active());

    general.respond_to_reset(ConfirmResponse::Confirm);
    let defaults = ViewerSettings::default().display;
    assert!(!display.invert_zoom_row.is_active());
    assert_eq!(display.icon_size_row.value(), f64::from(defaults.icon_size));
    assert!(display.keep_zoom_buttons[defaults.keep_zoom.button_id()].is_active());
    assert!(!display.keep_zoom_buttons[KeepZoom::Never.button_id()].is_active());

    // The refreshed rows wrote nothing back.
    assert_eq!(*settings_manager.get_settings(), ViewerSettings::default());

    display.icon_size_row.set_value(f64::from(defaults.icon_size + 1));
    assert_eq!(
        settings_manager.get_settings().display.icon_size,
        defaults.icon_size + 1
    );
}
