//! Domain-specific error types using `thiserror`.

use thiserror::Error;

use crate::config::SettingsError;

/// UI-related errors.
#[derive(Error, Debug)]
pub enum UiError {
    /// GTK/Libadwaita initialization error.
    #[error("UI initialization error: {0}")]
    InitializationError(String),
    /// Settings could not be loaded or stored.
    #[error("Settings error: {0}")]
    SettingsError(#[from] SettingsError),
}

#[cfg(test)]
mod tests {
    use crate::{config::SettingsError, error::domain::UiError};

    #[test]
    fn test_ui_error_display() {
        let init_error = UiError::InitializationError("Failed to init GTK".to_string());
        assert_eq!(
            init_error.to_string(),
            "UI initialization error: Failed to init GTK"
        );
    }

    #[test]
    fn test_settings_error_conversion() {
        let error: UiError = SettingsError::InvalidValue {
            reason: "bad color".to_string(),
        }
        .into();
        assert_eq!(
            error.to_string(),
            "Settings error: Invalid settings value: bad color"
        );
    }
}
