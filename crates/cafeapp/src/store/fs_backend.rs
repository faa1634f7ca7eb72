use super::backend::StorageBackend;
use super::Tables;
use crate::error::{CafeError, Result};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

pub const DATA_FILE: &str = "shop.json";

pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILE)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(CafeError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load_tables(&self) -> Result<Tables> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(Tables::default());
        }
        let content = fs::read_to_string(data_file).map_err(CafeError::Io)?;
        let tables: Tables = serde_json::from_str(&content).map_err(CafeError::Serialization)?;
        Ok(tables)
    }

    fn save_tables(&self, tables: &Tables) -> Result<()> {
        self.ensure_dir()?;

        let content = serde_json::to_string_pretty(tables).map_err(CafeError::Serialization)?;

        let tmp_file = self.root.join(format!(".shop-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(CafeError::Io)?;
        fs::rename(&tmp_file, self.data_file()).map_err(CafeError::Io)?;

        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.data_file()
    }
}
