//! Informational notices raised by preference panels.
//!
//! A panel owns a `NoticeSender`; the tab page hosting it drains the
//! receiving end on the GTK main loop and shows each notice in its info label.

use std::fmt::{Display, Formatter, Result as FmtResult};

use {
    async_channel::{Receiver, Sender, unbounded},
    tracing::{debug, warn},
};

/// Message for the user about an applied change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The change only takes effect after a restart.
    RestartRequired,
}

impl Notice {
    /// Text shown in the info label.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Notice::RestartRequired => "Please restart Pixlume to apply changes",
        }
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.message())
    }
}

/// Sending half of a panel's notice channel.
#[derive(Debug, Clone)]
pub struct NoticeSender {
    tx: Sender<Notice>,
}

impl NoticeSender {
    /// Sends `notice` if there is one.
    ///
    /// A closed channel only means the hosting page is gone, so the notice is dropped.
    pub fn notify(&self, notice: Option<Notice>) {
        let Some(notice) = notice else {
            return;
        };

        match self.tx.try_send(notice) {
            Ok(()) => debug!("NoticeSender: sent {:?}", notice),
            Err(e) => warn!("NoticeSender: dropping {:?}: {}", notice, e),
        }
    }
}

/// Creates a notice channel for one panel.
#[must_use]
pub fn notice_channel() -> (NoticeSender, Receiver<Notice>) {
    let (tx, rx) = unbounded();
    (NoticeSender { tx }, rx)
}
