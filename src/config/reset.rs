//! Confirmation gate in front of "reset all settings".

use tracing::{debug, info};

use crate::{config::settings::SettingsManager, state::Notice};

/// Answer given to the destructive reset prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmResponse {
    /// The user wants to reset everything.
    Confirm,
    /// The user declined the reset.
    Decline,
    /// The prompt was cancelled or dismissed.
    Cancel,
}

impl ConfirmResponse {
    /// Response ids used by the alert dialog.
    pub const CONFIRM_ID: &'static str = "yes";
    pub const DECLINE_ID: &'static str = "no";
    pub const CANCEL_ID: &'static str = "cancel";

    /// Maps an alert dialog response id. Unknown ids count as a cancel.
    #[must_use]
    pub fn from_response_id(id: &str) -> Self {
        match id {
            Self::CONFIRM_ID => ConfirmResponse::Confirm,
            Self::DECLINE_ID => ConfirmResponse::Decline,
            _ => ConfirmResponse::Cancel,
        }
    }
}

impl SettingsManager {
    /// Resets every setting to its default, but only on `Confirm`.
    ///
    /// # Returns
    ///
    /// The restart notice if the settings were reset, `None` otherwise.
    pub fn reset_all(&self, response: ConfirmResponse) -> Option<Notice> {
        if response != ConfirmResponse::Confirm {
            debug!("SettingsManager: reset abandoned ({:?})", response);
            return None;
        }

        info!("SettingsManager: resetting all settings");
        Some(self.reset_to_defaults())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use crate::{
        config::{
            reset::ConfirmResponse,
            settings::{SettingsManager, ViewerSettings},
        },
        state::Notice,
    };

    fn modified_manager(temp_dir: &TempDir) -> SettingsManager {
        let manager =
            SettingsManager::with_config_path(temp_dir.path().join("settings.json")).unwrap();
        manager.update(|settings| {
            settings.display.icon_size = 96;
            settings.set_switch_modifier(true);
        });
        manager
    }

    #[test]
    fn test_response_ids() {
        assert_eq!(
            ConfirmResponse::from_response_id("yes"),
            ConfirmResponse::Confirm
        );
        assert_eq!(
            ConfirmResponse::from_response_id("no"),
            ConfirmResponse::Decline
        );
        assert_eq!(
            ConfirmResponse::from_response_id("cancel"),
            ConfirmResponse::Cancel
        );
        assert_eq!(
            ConfirmResponse::from_response_id("close"),
            ConfirmResponse::Cancel
        );
    }

    #[test]
    fn test_reset_requires_confirmation() {
        let temp_dir = TempDir::new().unwrap();
        let manager = modified_manager(&temp_dir);
        let before = manager.get_settings().clone();

        assert_eq!(manager.reset_all(ConfirmResponse::Decline), None);
        assert_eq!(*manager.get_settings(), before);

        assert_eq!(manager.reset_all(ConfirmResponse::Cancel), None);
        assert_eq!(*manager.get_settings(), before);
    }

    #[test]
    fn test_confirmed_reset_restores_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let manager = modified_manager(&temp_dir);

        assert_eq!(
            manager.reset_all(ConfirmResponse::Confirm),
            Some(Notice::RestartRequired)
        );
        assert_eq!(*manager.get_settings(), ViewerSettings::default());
    }
}
