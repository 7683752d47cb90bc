pub mod desktop;
pub mod severity_change;

pub use desktop::DesktopNotifier;
pub use severity_change::SeverityChangeNotifier;
