use crate::domain::entities::snapshot::SystemSnapshot;

pub trait SystemCollector: Send + Sync {
    /// Collect a full system snapshot.
    ///
    /// Never fails: a source that cannot be read leaves its grouping at the
    /// zero default, the other groupings are still collected.
    fn collect(&self) -> SystemSnapshot;
}
