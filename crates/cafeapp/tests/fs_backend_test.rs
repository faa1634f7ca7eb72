use cafeapp::model::{Drink, Ingredient, Order, RecipeItem, User};
use cafeapp::store::backend::StorageBackend;
use cafeapp::store::fs::FileStore;
use cafeapp::store::fs_backend::{FsBackend, DATA_FILE};
use cafeapp::store::{DataStore, Tables};
use std::fs;
use tempfile::TempDir;

fn assert_no_tmp_files(dir: &std::path::Path) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_missing_file_loads_empty() {
    let temp = TempDir::new().unwrap();
    let backend = FsBackend::new(temp.path().join("not-yet"));

    assert_eq!(backend.load_tables().unwrap(), Tables::default());
}

#[test]
fn test_fs_backend_round_trip() {
    let temp = TempDir::new().unwrap();
    let backend = FsBackend::new(temp.path().to_path_buf());

    let drink = Drink::menu_item("Latte", 4);
    let milk = Ingredient::new("Milk", "Milk");
    let user = User::new("alex", "hash");
    let tables = Tables {
        users: vec![user.clone()],
        drinks: vec![drink.clone()],
        ingredients: vec![milk.clone()],
        recipe_items: vec![RecipeItem::new(drink.id, milk.id)],
        orders: vec![Order::for_drink(&drink, Some(user.id))],
    };

    backend.save_tables(&tables).unwrap();
    assert_eq!(backend.load_tables().unwrap(), tables);
    assert_eq!(backend.location(), temp.path().join(DATA_FILE));
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let temp = TempDir::new().unwrap();
    let backend = FsBackend::new(temp.path().to_path_buf());

    backend.save_tables(&Tables::default()).unwrap();
    backend.save_tables(&Tables::default()).unwrap();

    assert!(temp.path().join(DATA_FILE).exists());
    assert_no_tmp_files(temp.path());
}

#[test]
fn test_fs_backend_corrupt_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(DATA_FILE), "{ not json").unwrap();
    let backend = FsBackend::new(temp.path().to_path_buf());

    assert!(backend.load_tables().is_err());
}

#[test]
fn test_file_store_persists_across_instances() {
    let temp = TempDir::new().unwrap();

    let user = User::new("alex", "hash");
    let drink = Drink::custom("Custom #1", 2);
    {
        let mut store = FileStore::new_fs(temp.path().to_path_buf());
        store.create_user(&user).unwrap();
        store.create_drink(&drink).unwrap();
        store
            .create_order(&Order::for_drink(&drink, Some(user.id)))
            .unwrap();
    }

    let store = FileStore::new_fs(temp.path().to_path_buf());
    assert_eq!(
        store.find_user_by_username("alex").unwrap().map(|u| u.id),
        Some(user.id)
    );
    let orders = store.orders_for_user(&user.id).unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].price, 2);
    assert_no_tmp_files(temp.path());
}

#[test]
fn test_file_store_failed_transaction_leaves_file_untouched() {
    let temp = TempDir::new().unwrap();
    let mut store = FileStore::new_fs(temp.path().to_path_buf());
    store.create_user(&User::new("alex", "hash")).unwrap();
    let before = fs::read_to_string(temp.path().join(DATA_FILE)).unwrap();

    let result: cafeapp::error::Result<()> = store.transaction(|s| {
        s.create_user(&User::new("sam", "hash"))?;
        s.create_user(&User::new("alex", "again"))?;
        Ok(())
    });

    assert!(result.is_err());
    let after = fs::read_to_string(temp.path().join(DATA_FILE)).unwrap();
    assert_eq!(before, after);
}
