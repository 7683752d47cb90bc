pub mod config;
pub mod daemon_config;
pub mod services;
