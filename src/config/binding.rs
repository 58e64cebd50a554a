//! Declarative bindings between preference controls and settings fields.
//!
//! Every control in a preference panel is wired to exactly one entry of the
//! table below. A binding knows how to read and write its field and whether a
//! change needs a restart; the panels only translate widget signals into
//! `SettingsManager::apply` calls.

use crate::{
    config::settings::{AppMode, KeepZoom, Rgba, ViewerSettings},
    state::Notice,
};

/// Result of writing a value through a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The stored value already matched; nothing was written.
    Unchanged,
    /// The value was written.
    Written {
        /// Notice to show the user, if the change needs one.
        notice: Option<Notice>,
    },
}

impl WriteOutcome {
    /// Returns `true` if the settings were modified.
    #[must_use]
    pub fn is_written(self) -> bool {
        matches!(self, WriteOutcome::Written { .. })
    }

    /// Returns the notice raised by the write, if any.
    #[must_use]
    pub fn notice(self) -> Option<Notice> {
        match self {
            WriteOutcome::Unchanged => None,
            WriteOutcome::Written { notice } => notice,
        }
    }
}

/// Getter/setter pair for one settings field.
pub struct Binding<T> {
    /// Dotted field name, used for logging.
    pub key: &'static str,
    /// Reads the field.
    pub get: fn(&ViewerSettings) -> T,
    /// Writes the field, including any dependent fields.
    pub set: fn(&mut ViewerSettings, T),
    /// Notice raised whenever the field changes.
    pub notice: Option<Notice>,
}

impl<T: PartialEq> Binding<T> {
    /// Reads the current value.
    pub fn read(&self, settings: &ViewerSettings) -> T {
        (self.get)(settings)
    }

    /// Writes `value` unless it equals the stored value.
    pub fn apply(&self, settings: &mut ViewerSettings, value: T) -> WriteOutcome {
        if (self.get)(settings) == value {
            return WriteOutcome::Unchanged;
        }

        (self.set)(settings, value);
        WriteOutcome::Written {
            notice: self.notice,
        }
    }
}

/// Binding for a color chooser.
pub struct ColorBinding {
    /// The color field.
    pub color: Binding<Rgba>,
    /// Companion "use the theme default" flag, if the field has one.
    pub use_default: Option<Binding<bool>>,
}

impl ColorBinding {
    /// Dotted field name of the color.
    #[must_use]
    pub fn key(&self) -> &'static str {
        self.color.key
    }

    /// Stores an accepted color and clears the "use default" flag.
    pub fn accept(&self, settings: &mut ViewerSettings, color: Rgba) -> WriteOutcome {
        self.write(settings, color, false)
    }

    /// Built-in default of the field the binding currently targets.
    ///
    /// Read from `ViewerSettings::default()` under the current app mode.
    #[must_use]
    pub fn default_color(&self, settings: &ViewerSettings) -> Rgba {
        let mut defaults = ViewerSettings::default();
        defaults.app.app_mode = settings.app.app_mode;
        self.color.read(&defaults)
    }

    /// Restores the default color and sets the "use default" flag.
    pub fn reset(&self, settings: &mut ViewerSettings) -> WriteOutcome {
        let color = self.default_color(settings);
        self.write(settings, color, true)
    }

    fn write(&self, settings: &mut ViewerSettings, color: Rgba, use_default: bool) -> WriteOutcome {
        let color_written = self.color.apply(settings, color).is_written();
        let flag_written = self
            .use_default
            .as_ref()
            .is_some_and(|flag| flag.apply(settings, use_default).is_written());

        if color_written || flag_written {
            WriteOutcome::Written {
                notice: self.color.notice,
            }
        } else {
            WriteOutcome::Unchanged
        }
    }
}

pub const SHOW_RECENT_FILES: Binding<bool> = Binding {
    key: "app.show_recent_files",
    get: |s| s.app.show_recent_files,
    set: |s, v| s.app.show_recent_files = v,
    notice: None,
};

pub const CLOSE_ON_ESC: Binding<bool> = Binding {
    key: "app.close_on_esc",
    get: |s| s.app.close_on_esc,
    set: |s, v| s.app.close_on_esc = v,
    notice: None,
};

pub const LOOP_IMAGES: Binding<bool> = Binding {
    key: "global.loop_images",
    get: |s| s.global.loop_images,
    set: |s, v| s.global.loop_images = v,
    notice: None,
};

pub const ZOOM_ON_WHEEL: Binding<bool> = Binding {
    key: "global.zoom_on_wheel",
    get: |s| s.global.zoom_on_wheel,
    set: |s, v| s.global.zoom_on_wheel = v,
    notice: None,
};

/// Also swaps the alt/control modifier pair.
pub const SWITCH_MODIFIER: Binding<bool> = Binding {
    key: "sync.switch_modifier",
    get: |s| s.sync.switch_modifier,
    set: ViewerSettings::set_switch_modifier,
    notice: None,
};

pub const NETWORK_SYNC: Binding<bool> = Binding {
    key: "sync.enable_network_sync",
    get: |s| s.sync.enable_network_sync,
    set: |s, v| s.sync.enable_network_sync = v,
    notice: None,
};

pub const CHECK_FOR_UPDATES: Binding<bool> = Binding {
    key: "sync.check_for_updates",
    get: |s| s.sync.check_for_updates,
    set: |s, v| s.sync.check_for_updates = v,
    notice: None,
};

pub const LANGUAGE: Binding<String> = Binding {
    key: "global.language",
    get: |s| s.global.language.clone(),
    set: |s, v| s.global.language = v,
    notice: Some(Notice::RestartRequired),
};

pub const INVERT_ZOOM: Binding<bool> = Binding {
    key: "display.invert_zoom",
    get: |s| s.display.invert_zoom,
    set: |s, v| s.display.invert_zoom = v,
    notice: None,
};

pub const INTERPOLATE_ZOOM_LEVEL: Binding<i32> = Binding {
    key: "display.interpolate_zoom_level",
    get: |s| s.display.interpolate_zoom_level,
    set: |s, v| s.display.interpolate_zoom_level = v,
    notice: None,
};

pub const ICON_SIZE: Binding<i32> = Binding {
    key: "display.icon_size",
    get: |s| s.display.icon_size,
    set: |s, v| s.display.icon_size = v,
    notice: Some(Notice::RestartRequired),
};

pub const KEEP_ZOOM: Binding<KeepZoom> = Binding {
    key: "display.keep_zoom",
    get: |s| s.display.keep_zoom,
    set: |s, v| s.display.keep_zoom = v,
    notice: None,
};

pub const HIGHLIGHT_COLOR: ColorBinding = ColorBinding {
    color: Binding {
        key: "display.highlight_color",
        get: |s| s.display.highlight_color,
        set: |s, v| s.display.highlight_color = v,
        notice: Some(Notice::RestartRequired),
    },
    use_default: None,
};

pub const ICON_COLOR: ColorBinding = ColorBinding {
    color: Binding {
        key: "display.icon_color",
        get: |s| s.display.icon_color,
        set: |s, v| s.display.icon_color = v,
        notice: Some(Notice::RestartRequired),
    },
    use_default: Some(Binding {
        key: "display.default_icon_color",
        get: |s| s.display.default_icon_color,
        set: |s, v| s.display.default_icon_color = v,
        notice: None,
    }),
};

pub const BACKGROUND_COLOR: ColorBinding = ColorBinding {
    color: Binding {
        key: "display.background_color",
        get: |s| s.display.background_color,
        set: |s, v| s.display.background_color = v,
        notice: Some(Notice::RestartRequired),
    },
    use_default: Some(Binding {
        key: "display.default_background_color",
        get: |s| s.display.default_background_color,
        set: |s, v| s.display.default_background_color = v,
        notice: None,
    }),
};

pub const FULLSCREEN_COLOR: ColorBinding = ColorBinding {
    color: Binding {
        key: "slideshow.background_color",
        get: |s| s.slideshow.background_color,
        set: |s, v| s.slideshow.background_color = v,
        notice: Some(Notice::RestartRequired),
    },
    use_default: None,
};

pub const HUD_FOREGROUND_COLOR: ColorBinding = ColorBinding {
    color: Binding {
        key: "display.hud_foreground_color",
        get: |s| s.display.hud_foreground_color,
        set: |s, v| s.display.hud_foreground_color = v,
        notice: Some(Notice::RestartRequired),
    },
    use_default: None,
};

/// Targets the frameless overlay color while the viewer runs frameless.
pub const HUD_BACKGROUND_COLOR: ColorBinding = ColorBinding {
    color: Binding {
        key: "display.hud_background_color",
        get: |s| {
            if s.app.app_mode == AppMode::Frameless {
                s.display.frameless_background_color
            } else {
                s.display.hud_background_color
            }
        },
        set: |s, v| {
            if s.app.app_mode == AppMode::Frameless {
                s.display.frameless_background_color = v;
            } else {
                s.display.hud_background_color = v;
            }
        },
        notice: Some(Notice::RestartRequired),
    },
    use_default: None,
};

#[cfg(test)]
mod tests {
    use crate::{
        config::{
            binding::{
                BACKGROUND_COLOR, FULLSCREEN_COLOR, HIGHLIGHT_COLOR, HUD_BACKGROUND_COLOR,
                HUD_FOREGROUND_COLOR, ICON_COLOR, ICON_SIZE, INTERPOLATE_ZOOM_LEVEL, KEEP_ZOOM,
                LANGUAGE, LOOP_IMAGES, SWITCH_MODIFIER, WriteOutcome,
            },
            settings::{AppMode, KeepZoom, ModifierKey, Rgba, ViewerSettings},
        },
        state::Notice,
    };

    #[test]
    fn test_bool_binding_writes_only_changes() {
        let mut settings = ViewerSettings::default();
        assert!(settings.global.loop_images);

        assert_eq!(LOOP_IMAGES.apply(&mut settings, true), WriteOutcome::Unchanged);
        assert_eq!(
            LOOP_IMAGES.apply(&mut settings, false),
            WriteOutcome::Written { notice: None }
        );
        assert!(!settings.global.loop_images);
    }

    #[test]
    fn test_switch_modifier_binding_swaps_modifiers() {
        let mut settings = ViewerSettings::default();

        assert!(SWITCH_MODIFIER.apply(&mut settings, true).is_written());
        assert_eq!(settings.global.alt_mod, ModifierKey::Control);
        assert_eq!(settings.global.ctrl_mod, ModifierKey::Alt);

        assert!(SWITCH_MODIFIER.apply(&mut settings, false).is_written());
        assert_eq!(settings.global.alt_mod, ModifierKey::Alt);
        assert_eq!(settings.global.ctrl_mod, ModifierKey::Control);
    }

    #[test]
    fn test_spin_binding_same_value_is_noop() {
        let mut settings = ViewerSettings::default();
        let before = settings.clone();

        let outcome = ICON_SIZE.apply(&mut settings, before.display.icon_size);
        assert_eq!(outcome, WriteOutcome::Unchanged);
        assert_eq!(outcome.notice(), None);
        assert_eq!(settings, before);

        let outcome = ICON_SIZE.apply(&mut settings, 48);
        assert_eq!(outcome.notice(), Some(Notice::RestartRequired));
        assert_eq!(settings.display.icon_size, 48);

        let outcome = INTERPOLATE_ZOOM_LEVEL.apply(&mut settings, 400);
        assert_eq!(outcome, WriteOutcome::Written { notice: None });
    }

    #[test]
    fn test_keep_zoom_binding() {
        let mut settings = ViewerSettings::default();
        assert_eq!(KEEP_ZOOM.read(&settings), KeepZoom::SameSize);

        assert!(KEEP_ZOOM.apply(&mut settings, KeepZoom::Never).is_written());
        assert_eq!(settings.display.keep_zoom, KeepZoom::Never);
    }

    #[test]
    fn test_language_binding_raises_restart_notice() {
        let mut settings = ViewerSettings::default();

        assert_eq!(
            LANGUAGE.apply(&mut settings, "en".to_string()),
            WriteOutcome::Unchanged
        );
        assert_eq!(
            LANGUAGE.apply(&mut settings, "de".to_string()).notice(),
            Some(Notice::RestartRequired)
        );
        assert_eq!(settings.global.language, "de");
    }

    #[test]
    fn test_color_accept_clears_default_flag() {
        let mut settings = ViewerSettings::default();
        let red = Rgba::opaque(255, 0, 0);

        let outcome = BACKGROUND_COLOR.accept(&mut settings, red);
        assert_eq!(outcome.notice(), Some(Notice::RestartRequired));
        assert_eq!(settings.display.background_color, red);
        assert!(!settings.display.default_background_color);

        assert_eq!(
            BACKGROUND_COLOR.accept(&mut settings, red),
            WriteOutcome::Unchanged
        );
    }

    #[test]
    fn test_color_accept_of_default_color_still_clears_flag() {
        let mut settings = ViewerSettings::default();

        let default_color = BACKGROUND_COLOR.default_color(&settings);
        let outcome = BACKGROUND_COLOR.accept(&mut settings, default_color);
        assert!(outcome.is_written());
        assert!(!settings.display.default_background_color);
    }

    #[test]
    fn test_color_reset_sets_default_flag() {
        let mut settings = ViewerSettings::default();
        BACKGROUND_COLOR.accept(&mut settings, Rgba::opaque(1, 2, 3));

        assert!(BACKGROUND_COLOR.reset(&mut settings).is_written());
        assert_eq!(
            settings.display.background_color,
            ViewerSettings::default().display.background_color
        );
        assert!(settings.display.default_background_color);
    }

    #[test]
    fn test_color_without_flag() {
        let mut settings = ViewerSettings::default();
        assert_eq!(HIGHLIGHT_COLOR.reset(&mut settings), WriteOutcome::Unchanged);
        assert!(
            HIGHLIGHT_COLOR
                .accept(&mut settings, Rgba::opaque(10, 10, 10))
                .is_written()
        );
    }

    #[test]
    fn test_hud_background_follows_app_mode() {
        let mut settings = ViewerSettings::default();
        let blue = Rgba::opaque(0, 0, 255);

        settings.app.app_mode = AppMode::Frameless;
        HUD_BACKGROUND_COLOR.accept(&mut settings, blue);
        assert_eq!(settings.display.frameless_background_color, blue);
        assert_eq!(
            settings.display.hud_background_color,
            ViewerSettings::default().display.hud_background_color
        );

        settings.app.app_mode = AppMode::Default;
        HUD_BACKGROUND_COLOR.accept(&mut settings, blue);
        assert_eq!(settings.display.hud_background_color, blue);
    }

    #[test]
    fn test_color_reset_uses_built_in_defaults() {
        let defaults = ViewerSettings::default();
        let mut settings = ViewerSettings::default();
        let green = Rgba::opaque(0, 255, 0);

        for binding in [
            &HIGHLIGHT_COLOR,
            &ICON_COLOR,
            &BACKGROUND_COLOR,
            &FULLSCREEN_COLOR,
            &HUD_FOREGROUND_COLOR,
            &HUD_BACKGROUND_COLOR,
        ] {
            binding.accept(&mut settings, green);
            binding.reset(&mut settings);
            assert_eq!(binding.color.read(&settings), binding.color.read(&defaults));
        }
        assert_eq!(settings, defaults);
    }

    #[test]
    fn test_frameless_hud_background_resets_to_frameless_default() {
        let mut settings = ViewerSettings::default();
        settings.app.app_mode = AppMode::Frameless;

        HUD_BACKGROUND_COLOR.accept(&mut settings, Rgba::opaque(0, 0, 255));
        HUD_BACKGROUND_COLOR.reset(&mut settings);

        assert_eq!(
            settings.display.frameless_background_color,
            Rgba::new(0, 0, 0, 180)
        );
        assert_eq!(
            HUD_BACKGROUND_COLOR.default_color(&settings),
            ViewerSettings::default().display.frameless_background_color
        );
    }
}
