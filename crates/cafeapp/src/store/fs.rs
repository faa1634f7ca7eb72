use super::fs_backend::FsBackend;
use super::shop_store::ShopStore;
use std::path::PathBuf;

pub type FileStore = ShopStore<FsBackend>;

impl FileStore {
    /// A store persisting to `<root>/shop.json`.
    pub fn new_fs(root: PathBuf) -> Self {
        ShopStore::with_backend(FsBackend::new(root))
    }
}
