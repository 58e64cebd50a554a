//! General preferences page implementation.
//!
//! This module implements the General preferences tab: interface colors,
//! the "reset all settings" action, general behavior switches and the
//! interface language.

use std::{cell::RefCell, rc::Rc, sync::Arc};

use {
    libadwaita::{
        ActionRow, AlertDialog, ComboRow, PreferencesGroup, PreferencesPage,
        ResponseAppearance::Destructive,
        SwitchRow,
        gtk::{
            AccessibleRole::Group, Align::Center, Button, INVALID_LIST_POSITION, LinkButton,
            StringList,
        },
        prelude::{
            ActionRowExt, AdwDialogExt, AlertDialogExt, AlertDialogExtManual, ButtonExt,
            ComboRowExt, PreferencesGroupExt, PreferencesPageExt,
        },
    },
    tracing::{debug, info},
};

use crate::{
    config::{
        Binding, ColorBinding, ConfirmResponse, LanguageCatalog, SettingsManager,
        binding::{
            BACKGROUND_COLOR, CHECK_FOR_UPDATES, CLOSE_ON_ESC, FULLSCREEN_COLOR,
            HIGHLIGHT_COLOR, HUD_BACKGROUND_COLOR, HUD_FOREGROUND_COLOR, ICON_COLOR, LANGUAGE,
            LOOP_IMAGES, NETWORK_SYNC, SHOW_RECENT_FILES, SWITCH_MODIFIER, ZOOM_ON_WHEEL,
        },
    },
    state::NoticeSender,
    ui::preferences::{color_row::ColorRow, utils::create_switch_row},
};

const TRANSLATE_URL: &str = "https://pixlume.org/how-to-translate/";

const COLORS: [(&str, &ColorBinding); 6] = [
    ("Highlight Color", &HIGHLIGHT_COLOR),
    ("Icon Color", &ICON_COLOR),
    ("Background Color", &BACKGROUND_COLOR),
    ("Fullscreen Color", &FULLSCREEN_COLOR),
    ("HUD Foreground Color", &HUD_FOREGROUND_COLOR),
    ("HUD Background Color", &HUD_BACKGROUND_COLOR),
];

const SWITCHES: [(&str, &str, &Binding<bool>); 7] = [
    (
        "Show Recent Files on Start-Up",
        "Show the history panel on start-up",
        &SHOW_RECENT_FILES,
    ),
    (
        "Loop Images",
        "Start with the first image in a folder after showing the last",
        &LOOP_IMAGES,
    ),
    (
        "Mouse Wheel Zooms",
        "If enabled the mouse wheel zooms, otherwise it switches between images",
        &ZOOM_ON_WHEEL,
    ),
    (
        "Switch CTRL with ALT",
        "If enabled, CTRL + mouse is switched with ALT + mouse",
        &SWITCH_MODIFIER,
    ),
    (
        "Enable LAN Sync",
        "Allow synchronizing with instances in your local network",
        &NETWORK_SYNC,
    ),
    ("Close on ESC", "Quit Pixlume when ESC is pressed", &CLOSE_ON_ESC),
    (
        "Check For Updates",
        "Check for a new release on start-up",
        &CHECK_FOR_UPDATES,
    ),
];

/// Rows resynchronized after a confirmed "reset all settings".
struct ResetTargets {
    settings_manager: Arc<SettingsManager>,
    notices: NoticeSender,
    color_rows: Vec<ColorRow>,
    switch_rows: Vec<(SwitchRow, &'static Binding<bool>)>,
    language_row: ComboRow,
    languages: LanguageCatalog,
    /// Refresh hooks of other panels showing the same settings.
    on_reset: RefCell<Vec<Box<dyn Fn()>>>,
}

impl ResetTargets {
    /// Applies the answer of the reset prompt.
    fn on_response(&self, response: ConfirmResponse) {
        let Some(notice) = self.settings_manager.reset_all(response) else {
            return;
        };
        info!("GeneralPreferencesPage: settings reset to defaults");

        // Stored values already match the defaults, so resyncing writes nothing.
        let settings = self.settings_manager.get_settings().clone();
        for (row, binding) in &self.switch_rows {
            row.set_active(binding.read(&settings));
        }
        for row in &self.color_rows {
            row.refresh();
        }
        if let Some(index) = self.languages.index_of(&settings.global.language) {
            self.language_row.set_selected(index as u32);
        }
        for refresh in self.on_reset.borrow().iter() {
            refresh();
        }

        self.notices.notify(Some(notice));
    }
}

/// General preferences page with colors, behavior and language settings.
pub struct GeneralPreferencesPage {
    /// The underlying Libadwaita preferences page widget.
    pub widget: PreferencesPage,
    /// Rows resynchronized after a confirmed reset.
    reset_targets: Rc<ResetTargets>,
}

impl GeneralPreferencesPage {
    /// Creates a new general preferences page instance.
    ///
    /// # Arguments
    ///
    /// * `settings_manager` - Settings manager reference
    /// * `languages` - Languages offered in the language selector
    /// * `notices` - Channel to the hosting tab page
    ///
    /// # Returns
    ///
    /// A new `GeneralPreferencesPage` instance.
    pub fn new(
        settings_manager: Arc<SettingsManager>,
        languages: LanguageCatalog,
        notices: NoticeSender,
    ) -> Self {
        let widget = PreferencesPage::builder()
            .title("General")
            .icon_name("preferences-system-symbolic")
            .accessible_role(Group)
            .build();

        let color_rows = Self::setup_color_group(&widget, &settings_manager, &notices);
        let switch_rows = Self::setup_general_group(&widget, &settings_manager, &notices);
        let language_row =
            Self::setup_language_group(&widget, &settings_manager, &notices, languages.clone());

        let reset_targets = Rc::new(ResetTargets {
            settings_manager,
            notices,
            color_rows,
            switch_rows,
            language_row,
            languages,
            on_reset: RefCell::new(Vec::new()),
        });
        Self::setup_default_settings_group(&widget, reset_targets.clone());

        debug!("GeneralPreferencesPage: Created");

        Self { widget, reset_targets }
    }

    /// Registers `refresh` to run after the settings were reset to defaults.
    pub fn connect_settings_reset(&self, refresh: impl Fn() + 'static) {
        self.reset_targets.on_reset.borrow_mut().push(Box::new(refresh));
    }

    /// Applies an answer to the "reset all settings" prompt.
    pub fn respond_to_reset(&self, response: ConfirmResponse) {
        self.reset_targets.on_response(response);
    }

    /// Sets up the color choosers.
    fn setup_color_group(
        widget: &PreferencesPage,
        settings_manager: &Arc<SettingsManager>,
        notices: &NoticeSender,
    ) -> Vec<ColorRow> {
        let group = PreferencesGroup::builder().title("Color Settings").build();

        let rows = COLORS
            .into_iter()
            .map(|(title, binding)| {
                let row = ColorRow::new(
                    title,
                    binding,
                    settings_manager.clone(),
                    notices.clone(),
                );
                group.add(&row.widget);
                row
            })
            .collect();

        widget.add(&group);
        rows
    }

    /// Sets up the general behavior switches.
    fn setup_general_group(
        widget: &PreferencesPage,
        settings_manager: &Arc<SettingsManager>,
        notices: &NoticeSender,
    ) -> Vec<(SwitchRow, &'static Binding<bool>)> {
        let group = PreferencesGroup::builder().title("General").build();

        let rows = SWITCHES
            .into_iter()
            .map(|(title, subtitle, binding)| {
                let row = create_switch_row(
                    title,
                    subtitle,
                    binding,
                    settings_manager.clone(),
                    notices.clone(),
                );
                group.add(&row);
                (row, binding)
            })
            .collect();

        widget.add(&group);
        rows
    }

    /// Sets up the language selector.
    fn setup_language_group(
        widget: &PreferencesPage,
        settings_manager: &Arc<SettingsManager>,
        notices: &NoticeSender,
        languages: LanguageCatalog,
    ) -> ComboRow {
        let group = PreferencesGroup::builder().title("Language").build();

        let combo_row = ComboRow::builder()
            .title("Language")
            .subtitle("Choose your preferred language")
            .build();
        combo_row.set_model(Some(&StringList::new(&languages.display_names())));

        let current = settings_manager.get_settings().global.language.clone();
        let current_index = languages
            .index_of(&current)
            .map_or(INVALID_LIST_POSITION, |index| index as u32);
        combo_row.set_selected(current_index);

        let settings_manager = settings_manager.clone();
        let notices = notices.clone();
        combo_row.connect_selected_notify(move |row| {
            let Some(language) = languages.id_at(row.selected() as usize) else {
                return;
            };
            let outcome = settings_manager.apply(&LANGUAGE, language.to_string());
            notices.notify(outcome.notice());
        });
        group.add(&combo_row);

        let translate_row = ActionRow::builder()
            .title("How-to translate Pixlume")
            .subtitle("Info on how to translate Pixlume")
            .build();
        let link = LinkButton::builder()
            .uri(TRANSLATE_URL)
            .label("Open")
            .valign(Center)
            .build();
        translate_row.add_suffix(&link);
        group.add(&translate_row);

        widget.add(&group);
        combo_row
    }

    /// Sets up the "reset all settings" button.
    fn setup_default_settings_group(widget: &PreferencesPage, targets: Rc<ResetTargets>) {
        let group = PreferencesGroup::builder().title("Default Settings").build();

        let button = Button::builder()
            .label("Reset All Settings")
            .valign(Center)
            .css_classes(["destructive-action"])
            .build();

        let row = ActionRow::builder()
            .title("Reset All Settings")
            .subtitle("Restore every preference to its default value")
            .build();
        row.add_suffix(&button);
        group.add(&row);

        button.connect_clicked(move |button| {
            let dialog = AlertDialog::new(
                Some("Reset All Settings"),
                Some("This will reset all personal settings!"),
            );
            dialog.add_responses(&[
                (ConfirmResponse::CANCEL_ID, "_Cancel"),
                (ConfirmResponse::DECLINE_ID, "_No"),
                (ConfirmResponse::CONFIRM_ID, "_Yes"),
            ]);
            dialog.set_response_appearance(ConfirmResponse::CONFIRM_ID, Destructive);
            dialog.set_default_response(Some(ConfirmResponse::CANCEL_ID));
            dialog.set_close_response(ConfirmResponse::CANCEL_ID);

            let targets = targets.clone();
            dialog.connect_response(None, move |_, response| {
                targets.on_response(ConfirmResponse::from_response_id(response));
            });
            dialog.present(Some(button));
        });

        widget.add(&group);
    }
}
