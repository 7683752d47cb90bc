pub mod snapshot;
pub mod status;

pub use snapshot::{MemoryInfo, PsiInfo, SystemSnapshot, ZramInfo};
pub use status::StatusUpdate;
