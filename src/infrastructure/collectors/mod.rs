pub mod procfs;

pub use procfs::ProcfsCollector;
