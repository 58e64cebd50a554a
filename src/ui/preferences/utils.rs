//! Row builders that wire Libadwaita rows to settings bindings.
//!
//! Each builder reads the initial value through the binding, connects the
//! row's change signal to `SettingsManager::apply` and forwards any notice
//! the write raises to the panel's notice channel.

use std::sync::Arc;

use {
    libadwaita::{
        ActionRow, SpinRow, SwitchRow,
        gtk::{Adjustment, CheckButton},
        prelude::{ActionRowExt, CheckButtonExt},
    },
    tracing::debug,
};

use crate::{
    config::{Binding, KeepZoom, SettingsManager},
    state::NoticeSender,
};

/// Creates a switch row bound to a boolean setting.
///
/// # Arguments
///
/// * `title` - The title for the row
/// * `subtitle` - Explanation shown below the title
/// * `binding` - Settings field the switch controls
/// * `settings_manager` - Settings manager reference
/// * `notices` - Channel for notices raised by the write
///
/// # Returns
///
/// A configured `SwitchRow` ready to be added to a preferences group.
pub fn create_switch_row(
    title: &str,
    subtitle: &str,
    binding: &'static Binding<bool>,
    settings_manager: Arc<SettingsManager>,
    notices: NoticeSender,
) -> SwitchRow {
    let switch_row = SwitchRow::builder()
        .title(title)
        .subtitle(subtitle)
        .active(binding.read(&settings_manager.get_settings()))
        .build();

    switch_row.connect_active_notify(move |row| {
        let outcome = settings_manager.apply(binding, row.is_active());
        notices.notify(outcome.notice());
    });

    switch_row
}

/// Creates a spin row bound to an integer setting.
///
/// Values equal to the stored one are not written.
///
/// # Arguments
///
/// * `title` - The title for the row
/// * `subtitle` - Explanation shown below the title
/// * `range` - Inclusive bounds of the value
/// * `binding` - Settings field the spin row controls
/// * `settings_manager` - Settings manager reference
/// * `notices` - Channel for notices raised by the write
pub fn create_spin_row(
    title: &str,
    subtitle: &str,
    range: (i32, i32),
    binding: &'static Binding<i32>,
    settings_manager: Arc<SettingsManager>,
    notices: NoticeSender,
) -> SpinRow {
    let (lower, upper) = range;
    let current = binding.read(&settings_manager.get_settings());

    let adjustment = Adjustment::new(
        f64::from(current.clamp(lower, upper)),
        f64::from(lower),
        f64::from(upper),
        1.0,  // step
        10.0, // page increment
        0.0,  // page size
    );

    let spin_row = SpinRow::builder()
        .title(title)
        .subtitle(subtitle)
        .adjustment(&adjustment)
        .numeric(true)
        .build();

    spin_row.connect_value_notify(move |row| {
        let new_value = (row.value().round() as i32).clamp(lower, upper);
        let outcome = settings_manager.apply(binding, new_value);
        notices.notify(outcome.notice());
    });

    spin_row
}

/// Creates one row per zoom policy, sharing a radio group.
///
/// The button of the stored policy starts checked; activating another one
/// writes its id to the setting. Rows and buttons are returned in
/// `KeepZoom::ALL` order.
pub fn create_keep_zoom_rows(
    labels: [(&str, Option<&str>); 3],
    binding: &'static Binding<KeepZoom>,
    settings_manager: Arc<SettingsManager>,
    notices: NoticeSender,
) -> Vec<(ActionRow, CheckButton)> {
    let current = binding.read(&settings_manager.get_settings());
    let mut group_leader: Option<CheckButton> = None;
    let mut rows = Vec::with_capacity(labels.len());

    for (policy, (title, subtitle)) in KeepZoom::ALL.into_iter().zip(labels) {
        let button = CheckButton::builder().active(policy == current).build();
        if let Some(leader) = &group_leader {
            button.set_group(Some(leader));
        } else {
            group_leader = Some(button.clone());
        }

        let settings_manager = settings_manager.clone();
        let notices = notices.clone();
        button.connect_toggled(move |button| {
            if !button.is_active() {
                return;
            }
            debug!("KeepZoom: button {} selected", policy.button_id());
            let outcome = settings_manager.apply(binding, policy);
            notices.notify(outcome.notice());
        });

        let row = ActionRow::builder()
            .title(title)
            .activatable_widget(&button)
            .build();
        if let Some(subtitle) = subtitle {
            row.set_subtitle(subtitle);
        }
        row.add_prefix(&button);
        rows.push((row, button));
    }

    rows
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use {
        libadwaita::prelude::{ActionRowExt, PreferencesRowExt},
        tempfile::TempDir,
    };

    use crate::{
        config::{SettingsManager, binding::ICON_SIZE, binding::LOOP_IMAGES},
        state::notice_channel,
        ui::preferences::utils::{create_spin_row, create_switch_row},
    };

    #[test]
    #[ignore = "Requires GTK display for UI testing"]
    fn test_switch_row_writes_setting() {
        libadwaita::init().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let settings_manager = Arc::new(
            SettingsManager::with_config_path(temp_dir.path().join("settings.json")).unwrap(),
        );
        let (sender, _receiver) = notice_channel();

        let row = create_switch_row(
            "Loop Images",
            "Test Subtitle",
            &LOOP_IMAGES,
            settings_manager.clone(),
            sender,
        );
        assert_eq!(row.title(), "Loop Images");
        assert_eq!(row.subtitle().as_deref(), Some("Test Subtitle"));
        assert!(row.is_active());

        row.set_active(false);
        assert!(!settings_manager.get_settings().global.loop_images);
    }

    #[test]
    #[ignore = "Requires GTK display for UI testing"]
    fn test_spin_row_notifies_on_change_only() {
        libadwaita::init().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let settings_manager = Arc::new(
            SettingsManager::with_config_path(temp_dir.path().join("settings.json")).unwrap(),
        );
        let (sender, receiver) = notice_channel();

        let row = create_spin_row(
            "Icon Size",
            "Pixels",
            (16, 1024),
            &ICON_SIZE,
            settings_manager.clone(),
            sender,
        );

        row.set_value(24.0);
        assert!(receiver.try_recv().is_err());

        row.set_value(48.0);
        assert_eq!(settings_manager.get_settings().display.icon_size, 48);
        assert!(receiver.try_recv().is_ok());
    }
}
