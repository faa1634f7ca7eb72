use super::backend::StorageBackend;
use super::Tables;
use crate::error::{CafeError, Result};
use std::cell::{Cell, RefCell};
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the shop is single-threaded.
/// This avoids the overhead of `RwLock` while still allowing the
/// `StorageBackend` trait to use `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    tables: RefCell<Tables>,
    saves: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful saves, to observe transaction batching.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl StorageBackend for MemBackend {
    fn load_tables(&self) -> Result<Tables> {
        Ok(self.tables.borrow().clone())
    }

    fn save_tables(&self, tables: &Tables) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(CafeError::Store("Simulated write error".to_string()));
        }
        *self.tables.borrow_mut() = tables.clone();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://shop")
    }
}
