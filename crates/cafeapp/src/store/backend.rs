use super::Tables;
use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while ShopStore handles the "what" (rules, references, transactions).
pub trait StorageBackend {
    /// Load every table. A store that was never written loads as empty tables.
    fn load_tables(&self) -> Result<Tables>;

    /// Persist every table.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save_tables(&self, tables: &Tables) -> Result<()>;

    /// Where the data lives. For FsBackend, the real file path. For MemBackend, a virtual path.
    fn location(&self) -> PathBuf;
}
