pub mod monitor;
pub mod report;

pub use monitor::StatusMonitor;
pub use report::compose;
