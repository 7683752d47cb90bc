use thiserror::Error;

use crate::domain::entities::status::StatusUpdate;

#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("failed to send notification: {0}")]
    SendFailed(String),
    #[error("notification channel unavailable: {0}")]
    ChannelUnavailable(String),
}

pub trait Notifier: Send + Sync {
    /// Publish a status update.
    ///
    /// # Errors
    ///
    /// Returns `NotificationError` if the notification fails to send
    /// or the channel is unavailable.
    fn notify(&self, update: &StatusUpdate) -> Result<(), NotificationError>;
}
