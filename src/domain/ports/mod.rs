pub mod collector;
pub mod notifier;
pub mod process;
pub mod service;

pub use collector::SystemCollector;
pub use notifier::{NotificationError, Notifier};
pub use process::{ProcessError, TaskRunner};
pub use service::ServiceInspector;
