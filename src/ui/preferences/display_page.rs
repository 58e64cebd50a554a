//! Display preferences page implementation.
//!
//! Zoom behavior, the zoom policy for newly displayed images and the
//! toolbar icon size.

use std::sync::Arc;

use {
    libadwaita::{
        PreferencesGroup, PreferencesPage, SpinRow, SwitchRow,
        gtk::{AccessibleRole::Group, CheckButton},
        prelude::{CheckButtonExt, PreferencesGroupExt, PreferencesPageExt},
    },
    tracing::debug,
};

use crate::{
    config::{
        SettingsManager,
        binding::{ICON_SIZE, INTERPOLATE_ZOOM_LEVEL, INVERT_ZOOM, KEEP_ZOOM},
    },
    state::NoticeSender,
    ui::preferences::utils::{create_keep_zoom_rows, create_spin_row, create_switch_row},
};

/// Bounds of the interpolation threshold in percent.
pub const INTERPOLATION_RANGE: (i32, i32) = (0, 10_000);

/// Bounds of the toolbar icon size in pixels.
pub const ICON_SIZE_RANGE: (i32, i32) = (16, 1024);

/// Display preferences page with zoom and icon settings.
pub struct DisplayPreferencesPage {
    /// The underlying Libadwaita preferences page widget.
    pub widget: PreferencesPage,
    /// Invert zoom wheel switch.
    pub invert_zoom_row: SwitchRow,
    /// Interpolation threshold spin row.
    pub interpolation_row: SpinRow,
    /// Keep-zoom radio buttons in `KeepZoom::ALL` order.
    pub keep_zoom_buttons: Vec<CheckButton>,
    /// Toolbar icon size spin row.
    pub icon_size_row: SpinRow,
    /// Settings manager reference.
    settings_manager: Arc<SettingsManager>,
}

impl DisplayPreferencesPage {
    /// Creates a new display preferences page instance.
    ///
    /// # Arguments
    ///
    /// * `settings_manager` - Settings manager reference
    /// * `notices` - Channel to the hosting tab page
    ///
    /// # Returns
    ///
    /// A new `DisplayPreferencesPage` instance.
    pub fn new(settings_manager: Arc<SettingsManager>, notices: NoticeSender) -> Self {
        let widget = PreferencesPage::builder()
            .title("Display")
            .icon_name("video-display-symbolic")
            .accessible_role(Group)
            .build();

        let zoom_group = PreferencesGroup::builder().title("Zoom").build();
        let invert_zoom_row = create_switch_row(
            "Invert Zoom Wheel Behaviour",
            "Scroll up to zoom out and down to zoom in",
            &INVERT_ZOOM,
            settings_manager.clone(),
            notices.clone(),
        );
        zoom_group.add(&invert_zoom_row);
        let interpolation_row = create_spin_row(
            "Show Pixels Above (%)",
            "Images are not interpolated if the zoom level is larger",
            INTERPOLATION_RANGE,
            &INTERPOLATE_ZOOM_LEVEL,
            settings_manager.clone(),
            notices.clone(),
        );
        zoom_group.add(&interpolation_row);
        widget.add(&zoom_group);

        let keep_zoom_group = PreferencesGroup::builder()
            .title("When Displaying New Images")
            .build();
        let keep_zoom_rows = create_keep_zoom_rows(
            [
                ("Always keep zoom", None),
                (
                    "Keep zoom if the size is the same",
                    Some("The zoom level is only kept if the new image has the same size"),
                ),
                ("Never keep zoom", None),
            ],
            &KEEP_ZOOM,
            settings_manager.clone(),
            notices.clone(),
        );
        let keep_zoom_buttons = keep_zoom_rows
            .into_iter()
            .map(|(row, button)| {
                keep_zoom_group.add(&row);
                button
            })
            .collect();
        widget.add(&keep_zoom_group);

        let icon_group = PreferencesGroup::builder().title("Icon Size").build();
        let icon_size_row = create_spin_row(
            "Icon Size (px)",
            "Size of the toolbar icons in pixels",
            ICON_SIZE_RANGE,
            &ICON_SIZE,
            settings_manager.clone(),
            notices,
        );
        icon_group.add(&icon_size_row);
        widget.add(&icon_group);

        debug!("DisplayPreferencesPage: Created");

        Self {
            widget,
            invert_zoom_row,
            interpolation_row,
            keep_zoom_buttons,
            icon_size_row,
            settings_manager,
        }
    }

    /// Re-reads every row from the stored settings.
    ///
    /// Rows that already show the stored value write nothing back.
    pub fn refresh(&self) {
        let settings = self.settings_manager.get_settings().clone();

        self.invert_zoom_row.set_active(INVERT_ZOOM.read(&settings));
        self.interpolation_row
            .set_value(f64::from(INTERPOLATE_ZOOM_LEVEL.read(&settings)));
        self.icon_size_row
            .set_value(f64::from(ICON_SIZE.read(&settings)));
        if let Some(button) = self
            .keep_zoom_buttons
            .get(KEEP_ZOOM.read(&settings).button_id())
        {
            button.set_active(true);
        }

        debug!("DisplayPreferencesPage: refreshed");
    }
}
