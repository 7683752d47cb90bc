use std::sync::Mutex;

use crate::domain::entities::status::StatusUpdate;
use crate::domain::ports::notifier::{NotificationError, Notifier};
use crate::domain::value_objects::severity::Severity;

/// Forwards an update only when its severity differs from the last one
/// forwarded.
///
/// The first update is always forwarded. A failed delivery does not record
/// the severity, so the next update retries.
pub struct SeverityChangeNotifier {
    inner: Box<dyn Notifier>,
    last: Mutex<Option<Severity>>,
}

impl SeverityChangeNotifier {
    #[must_use]
    pub fn new(inner: Box<dyn Notifier>) -> Self {
        Self {
            inner,
            last: Mutex::new(None),
        }
    }
}

impl Notifier for SeverityChangeNotifier {
    fn notify(&self, update: &StatusUpdate) -> Result<(), NotificationError> {
        let mut last = self
            .last
            .lock()
            .map_err(|_| NotificationError::SendFailed("notifier state poisoned".to_string()))?;
        if *last == Some(update.severity) {
            return Ok(());
        }
        tracing::info!(from = ?*last, to = %update.severity, "severity changed");
        self.inner.notify(update)?;
        *last = Some(update.severity);
        Ok(())
    }
}
