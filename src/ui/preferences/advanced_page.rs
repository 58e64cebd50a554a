//! Advanced preferences page implementation.

use std::sync::Arc;

use {
    libadwaita::{
        ActionRow, PreferencesGroup, PreferencesPage,
        gtk::AccessibleRole::Group,
        prelude::{ActionRowExt, PreferencesGroupExt, PreferencesPageExt},
    },
    tracing::debug,
};

use crate::config::SettingsManager;

/// Advanced preferences page showing where settings are stored.
pub struct AdvancedPreferencesPage {
    /// The underlying Libadwaita preferences page widget.
    pub widget: PreferencesPage,
}

impl AdvancedPreferencesPage {
    /// Creates a new advanced preferences page instance.
    pub fn new(settings_manager: Arc<SettingsManager>) -> Self {
        let widget = PreferencesPage::builder()
            .title("Advanced")
            .icon_name("applications-engineering-symbolic")
            .accessible_role(Group)
            .build();

        let group = PreferencesGroup::builder()
            .title("Storage")
            .description("Settings are written when Pixlume quits")
            .build();

        let path_row = ActionRow::builder()
            .title("Settings File")
            .subtitle_selectable(true)
            .build();
        path_row.set_subtitle(&settings_manager.get_config_path().display().to_string());
        group.add(&path_row);

        widget.add(&group);

        debug!("AdvancedPreferencesPage: Created");

        Self { widget }
    }
}
