pub mod status;
pub mod tasks;
pub mod watch;
