pub mod command;
pub mod systemd;
pub mod tasks;

pub use systemd::SystemdInspector;
pub use tasks::NohangTaskRunner;
