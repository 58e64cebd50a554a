//! Main application window hosting the preference widget.
//!
//! This module implements the `PixlumeApplication` which loads the settings,
//! shows them in a `PreferenceWidget` and writes them back on shutdown.

use std::sync::Arc;

use {
    libadwaita::{
        Application, ApplicationWindow, HeaderBar,
        glib::Propagation,
        gtk::{Box as GtkBox, Orientation::Vertical},
        prelude::{
            AdwApplicationWindowExt, ApplicationExt, ApplicationExtManual, BoxExt, GtkWindowExt,
        },
    },
    tracing::{debug, info},
};

use crate::{
    config::{LanguageCatalog, SettingsManager, translation_dirs},
    error::{ErrorReporter, ResultExt, UiError},
    ui::preferences::PreferenceWidget,
};

/// Application identifier registered with the session bus.
pub const APPLICATION_ID: &str = "org.pixlume.Pixlume";

/// Main application class with window management.
pub struct PixlumeApplication {
    /// The main application instance.
    pub app: Application,
    /// User settings manager.
    pub settings: Arc<SettingsManager>,
    /// Languages with an installed translation.
    pub languages: LanguageCatalog,
}

impl PixlumeApplication {
    /// Creates a new Pixlume application instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file exists but cannot be read.
    pub fn new() -> Result<Self, UiError> {
        let settings = Arc::new(SettingsManager::new()?);
        let languages = LanguageCatalog::discover(&translation_dirs());

        info!(
            config_path = %settings.get_config_path().display(),
            languages = languages.len(),
            "Settings loaded"
        );

        let app = Application::builder()
            .application_id(APPLICATION_ID)
            .build();

        Ok(Self {
            app,
            settings,
            languages,
        })
    }

    /// Runs the application until its last window closes.
    pub fn run(&self) {
        self.app.connect_activate({
            let settings = self.settings.clone();
            let languages = self.languages.clone();

            move |app| build_ui(app, settings.clone(), languages.clone())
        });

        self.app.connect_shutdown({
            let settings = self.settings.clone();

            move |_| {
                let saved = settings.save().add_contextf(format!(
                    "Failed to save settings to {}",
                    settings.get_config_path().display()
                ));
                if let Err(error) = saved {
                    ErrorReporter::error(&error, "shutdown");
                } else {
                    debug!("Settings saved");
                }
            }
        });

        self.app.run();
    }
}

/// Builds the preferences window.
fn build_ui(app: &Application, settings: Arc<SettingsManager>, languages: LanguageCatalog) {
    let window = ApplicationWindow::builder()
        .application(app)
        .title("Pixlume Preferences")
        .default_width(820)
        .default_height(640)
        .build();

    let preferences = PreferenceWidget::with_default_tabs(settings, languages);

    let main_box = GtkBox::builder().orientation(Vertical).build();
    main_box.append(&HeaderBar::new());
    main_box.append(&preferences.widget);

    window.set_content(Some(&main_box));

    // The handler owns the widget state for as long as the window lives.
    window.connect_close_request(move |_| {
        debug!(tab = ?preferences.current_index(), "Preferences closed");
        Propagation::Proceed
    });

    window.present();
}
