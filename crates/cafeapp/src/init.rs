//! # Data Directory Resolution
//!
//! The shop keeps everything in one directory: the `shop.json` store and an optional
//! `cafe.toml`. [`initialize`] picks it in priority order:
//!
//! 1. An explicit override (the CLI's `--data-dir`).
//! 2. The `CAFE_DATA_DIR` environment variable.
//! 3. The OS data directory for the app (via the `directories` crate).
//!
//! It then loads the configuration, opens the store and seeds the catalog.

use crate::api::CafeApi;
use crate::config::CafeConfig;
use crate::error::{CafeError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

pub const DATA_DIR_ENV: &str = "CAFE_DATA_DIR";

pub struct CafeContext {
    pub api: CafeApi<FileStore>,
    pub config: CafeConfig,
    pub data_dir: PathBuf,
}

pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = data_override {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "cafe", "cafe")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| CafeError::Store("Could not determine data directory".to_string()))
}

pub fn initialize(data_override: Option<PathBuf>) -> Result<CafeContext> {
    let data_dir = resolve_data_dir(data_override)?;
    debug!(data_dir = %data_dir.display(), "using data directory");

    let config = CafeConfig::load(&data_dir);
    let mut api = CafeApi::new(FileStore::new_fs(data_dir.clone()));
    api.seed()?;

    Ok(CafeContext {
        api,
        config,
        data_dir,
    })
}
