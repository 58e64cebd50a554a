//! UI state that lives outside of the widgets.
//!
//! This module provides the tab navigation model behind the preference
//! widget and the notice channel panels use to talk to their host.

pub mod notices;
pub mod tab_navigator;

pub use {
    notices::{Notice, NoticeSender, notice_channel},
    tab_navigator::{TabEntry, TabNavigator},
};
