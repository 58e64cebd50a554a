//! Viewer settings with XDG Base Directory compliant persistence.
//!
//! This module defines the `ViewerSettings` structure shared by every
//! preference panel, grouped by category, and the `SettingsManager` that
//! owns it for the lifetime of the application.

use std::{
    env::var,
    fmt::{Display, Formatter, Result as FmtResult},
    fs::{create_dir_all, read_to_string, write},
    io::Error as StdError,
    path::PathBuf,
};

use {
    parking_lot::{RwLock, RwLockReadGuard},
    serde::{Deserialize, Serialize},
    serde_json::{Error as SerdeJsonError, from_str, to_string_pretty},
    thiserror::Error,
    tracing::{debug, info},
};

use crate::{
    config::binding::{Binding, ColorBinding, WriteOutcome},
    state::Notice,
};

/// Error type for settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to read or write settings file.
    #[error("IO error: {0}")]
    IoError(#[from] StdError),
    /// Failed to serialize or deserialize settings.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] SerdeJsonError),
    /// Invalid settings value.
    #[error("Invalid settings value: {reason}")]
    InvalidValue { reason: String },
}

/// 8-bit RGBA color, stored on disk as `#rrggbbaa`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Creates a color from its four channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color.
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

impl Display for Rgba {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl TryFrom<String> for Rgba {
    type Error = SettingsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let invalid = || SettingsError::InvalidValue {
            reason: format!("'{value}' is not a #rrggbb or #rrggbbaa color"),
        };

        let hex = value.strip_prefix('#').ok_or_else(invalid)?;
        if !matches!(hex.len(), 6 | 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let alpha = if hex.len() == 8 { channel(6)? } else { 255 };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}

/// Zoom policy applied when a new image is displayed.
///
/// The discriminants double as the radio button ids in the display panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeepZoom {
    /// Always keep the current zoom level.
    Always = 0,
    /// Keep the zoom level only if the new image has the same size.
    #[default]
    SameSize = 1,
    /// Always reset the zoom level.
    Never = 2,
}

impl KeepZoom {
    /// All policies in button-id order.
    pub const ALL: [KeepZoom; 3] = [KeepZoom::Always, KeepZoom::SameSize, KeepZoom::Never];

    /// Returns the radio button id of this policy.
    #[must_use]
    pub fn button_id(self) -> usize {
        self as usize
    }

    /// Maps a radio button id back to its policy.
    #[must_use]
    pub fn from_button_id(id: usize) -> Option<Self> {
        Self::ALL.get(id).copied()
    }
}

/// Keyboard modifier used for mouse gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierKey {
    Alt,
    Control,
}

/// Window mode the viewer starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppMode {
    #[default]
    Default,
    Frameless,
    Contrast,
}

/// Display related settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Accent color for selections and highlights.
    pub highlight_color: Rgba,
    /// Color used to tint toolbar icons.
    pub icon_color: Rgba,
    /// Whether the theme's icon color is used instead of `icon_color`.
    pub default_icon_color: bool,
    /// Viewport background color.
    pub background_color: Rgba,
    /// Whether the theme's background is used instead of `background_color`.
    pub default_background_color: bool,
    /// Text color of on-screen overlays.
    pub hud_foreground_color: Rgba,
    /// Background color of on-screen overlays.
    pub hud_background_color: Rgba,
    /// Overlay background used in frameless mode.
    pub frameless_background_color: Rgba,
    /// Invert the zoom direction of the mouse wheel.
    pub invert_zoom: bool,
    /// Zoom level in percent above which pixels are no longer interpolated.
    pub interpolate_zoom_level: i32,
    /// Zoom policy when a new image is loaded.
    pub keep_zoom: KeepZoom,
    /// Toolbar icon size in pixels.
    pub icon_size: i32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            highlight_color: Rgba::opaque(0, 204, 255),
            icon_color: Rgba::opaque(219, 89, 2),
            default_icon_color: true,
            background_color: Rgba::opaque(100, 100, 100),
            default_background_color: true,
            hud_foreground_color: Rgba::opaque(255, 255, 255),
            hud_background_color: Rgba::new(0, 0, 0, 100),
            frameless_background_color: Rgba::new(0, 0, 0, 180),
            invert_zoom: false,
            interpolate_zoom_level: 200,
            keep_zoom: KeepZoom::SameSize,
            icon_size: 24,
        }
    }
}

/// Application wide behavior settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalSettings {
    /// Start over with the first image after the last one of a folder.
    pub loop_images: bool,
    /// The mouse wheel zooms instead of switching images.
    pub zoom_on_wheel: bool,
    /// Interface language identifier, e.g. `en` or `pt_BR`.
    pub language: String,
    /// Modifier that acts as "alt" for mouse gestures.
    pub alt_mod: ModifierKey,
    /// Modifier that acts as "control" for mouse gestures.
    pub ctrl_mod: ModifierKey,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            loop_images: true,
            zoom_on_wheel: true,
            language: "en".to_string(),
            alt_mod: ModifierKey::Alt,
            ctrl_mod: ModifierKey::Control,
        }
    }
}

/// Settings of the instance synchronization features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncSettings {
    /// Swap CTRL + mouse with ALT + mouse.
    pub switch_modifier: bool,
    /// Allow synchronizing with instances in the local network.
    pub enable_network_sync: bool,
    /// Look for a newer release on start-up.
    pub check_for_updates: bool,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            switch_modifier: false,
            enable_network_sync: false,
            check_for_updates: true,
        }
    }
}

/// Start-up and window behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Show the recent files panel on start-up.
    pub show_recent_files: bool,
    /// Quit when ESC is pressed.
    pub close_on_esc: bool,
    /// Window mode.
    pub app_mode: AppMode,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            show_recent_files: true,
            close_on_esc: false,
            app_mode: AppMode::Default,
        }
    }
}

/// Slideshow and fullscreen settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideshowSettings {
    /// Background color in fullscreen.
    pub background_color: Rgba,
}

impl Default for SlideshowSettings {
    fn default() -> Self {
        Self {
            background_color: Rgba::opaque(86, 86, 90),
        }
    }
}

/// Serializable viewer settings, grouped by category.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    pub display: DisplaySettings,
    pub global: GlobalSettings,
    pub sync: SyncSettings,
    pub app: AppSettings,
    pub slideshow: SlideshowSettings,
}

impl ViewerSettings {
    /// Sets the "switch modifiers" flag together with the modifier pair it controls.
    pub fn set_switch_modifier(&mut self, switched: bool) {
        self.sync.switch_modifier = switched;

        let (alt_mod, ctrl_mod) = if switched {
            (ModifierKey::Control, ModifierKey::Alt)
        } else {
            (ModifierKey::Alt, ModifierKey::Control)
        };
        self.global.alt_mod = alt_mod;
        self.global.ctrl_mod = ctrl_mod;
    }
}

/// Owns the viewer settings for the lifetime of the application.
///
/// Panels receive an `Arc<SettingsManager>` at construction and write through
/// it from GTK signal handlers. All writes happen on the GTK main thread; the
/// lock only makes that access sound, it does not make concurrent editing from
/// several threads meaningful.
#[derive(Debug)]
pub struct SettingsManager {
    /// Shared settings storage.
    settings: RwLock<ViewerSettings>,
    /// Path to the configuration file on disk.
    config_path: PathBuf,
}

impl SettingsManager {
    /// Creates a new settings manager with the default config path.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if settings cannot be loaded from disk.
    pub fn new() -> Result<Self, SettingsError> {
        Self::with_config_path(get_config_path())
    }

    /// Creates a new settings manager with a custom config path.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Custom path for the settings file
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the directory cannot be created or an
    /// existing file cannot be read or parsed.
    pub fn with_config_path(config_path: PathBuf) -> Result<Self, SettingsError> {
        if let Some(parent) = config_path.parent() {
            create_dir_all(parent)?;
        }

        let settings = if config_path.exists() {
            debug!("Loading settings from existing file: {:?}", config_path);
            let contents = read_to_string(&config_path)?;
            from_str(&contents)?
        } else {
            debug!("No settings file at {:?}, using defaults", config_path);
            ViewerSettings::default()
        };

        Ok(Self::from_settings(settings, config_path))
    }

    /// Wraps already loaded settings without touching the disk.
    #[must_use]
    pub fn from_settings(settings: ViewerSettings, config_path: PathBuf) -> Self {
        Self {
            settings: RwLock::new(settings),
            config_path,
        }
    }

    /// Gets the current settings.
    pub fn get_settings(&self) -> RwLockReadGuard<'_, ViewerSettings> {
        self.settings.read()
    }

    /// Gets the configuration file path.
    pub fn get_config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Mutates the settings in memory and returns the closure's result.
    pub fn update<R>(&self, f: impl FnOnce(&mut ViewerSettings) -> R) -> R {
        f(&mut self.settings.write())
    }

    /// Writes `value` through `binding` if it differs from the stored value.
    pub fn apply<T: PartialEq>(&self, binding: &Binding<T>, value: T) -> WriteOutcome {
        let outcome = binding.apply(&mut self.settings.write(), value);
        if outcome.is_written() {
            debug!("SettingsManager: {} updated", binding.key);
        }
        outcome
    }

    /// Stores a color accepted in a color chooser.
    pub fn apply_color_accepted(&self, binding: &ColorBinding, color: Rgba) -> WriteOutcome {
        let outcome = binding.accept(&mut self.settings.write(), color);
        if outcome.is_written() {
            debug!("SettingsManager: {} set to {}", binding.key(), color);
        }
        outcome
    }

    /// Restores a color chooser's default color.
    pub fn apply_color_reset(&self, binding: &ColorBinding) -> WriteOutcome {
        let outcome = binding.reset(&mut self.settings.write());
        if outcome.is_written() {
            debug!("SettingsManager: {} reset to default", binding.key());
        }
        outcome
    }

    /// Replaces every setting with its built-in default.
    pub fn reset_to_defaults(&self) -> Notice {
        *self.settings.write() = ViewerSettings::default();
        info!("SettingsManager: all settings reset to defaults");
        Notice::RestartRequired
    }

    /// Saves the current settings to disk.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if settings cannot be serialized or written.
    pub fn save(&self) -> Result<(), SettingsError> {
        debug!("Saving settings to file: {:?}", self.config_path);
        let contents = to_string_pretty(&*self.settings.read())?;
        write(&self.config_path, contents)?;
        Ok(())
    }
}

/// Returns the settings file path inside the XDG config home.
#[must_use]
pub fn get_config_path() -> PathBuf {
    let mut config_dir = get_xdg_home("XDG_CONFIG_HOME", ".config");
    config_dir.push("pixlume");
    config_dir.push("settings.json");
    config_dir
}

/// Returns the per-user data directory of the application.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    let mut data_dir = get_xdg_home("XDG_DATA_HOME", ".local/share");
    data_dir.push("pixlume");
    data_dir
}

/// Resolves an XDG base directory from `env_key`, falling back to `$HOME/<fallback>`.
fn get_xdg_home(env_key: &str, fallback: &str) -> PathBuf {
    if let Ok(dir) = var(env_key)
        && !dir.is_empty()
    {
        return PathBuf::from(dir);
    }

    if let Ok(home) = var("HOME") {
        let mut path = PathBuf::from(home);
        path.push(fallback);
        return path;
    }

    PathBuf::from(".")
}
