use super::mem_backend::MemBackend;
use super::shop_store::ShopStore;

pub type InMemoryStore = ShopStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        ShopStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Drink, Ingredient, RecipeItem, User};
    use crate::password::hash_password;
    use crate::store::DataStore;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_ingredient(mut self, name: &str, kind: &str) -> Self {
            self.store
                .create_ingredient(&Ingredient::new(name, kind))
                .unwrap();
            self
        }

        /// Adds a menu drink, creating any missing ingredient under the "Other" kind.
        pub fn with_menu_drink(mut self, name: &str, price: u32, ingredients: &[&str]) -> Self {
            let drink = Drink::menu_item(name, price);
            self.store.create_drink(&drink).unwrap();
            for ingredient_name in ingredients {
                let ingredient = match self.store.find_ingredient_by_name(ingredient_name).unwrap()
                {
                    Some(found) => found,
                    None => {
                        let created = Ingredient::new(*ingredient_name, "Other");
                        self.store.create_ingredient(&created).unwrap();
                        created
                    }
                };
                self.store
                    .create_recipe_item(&RecipeItem::new(drink.id, ingredient.id))
                    .unwrap();
            }
            self
        }

        pub fn with_user(mut self, username: &str, password: &str) -> Self {
            let user = User::new(username, hash_password(password).unwrap());
            self.store.create_user(&user).unwrap();
            self
        }

        pub fn user(&self, username: &str) -> User {
            self.store
                .find_user_by_username(username)
                .unwrap()
                .expect("fixture user")
        }

        pub fn drink(&self, name: &str) -> Drink {
            self.store
                .find_drink_by_name(name)
                .unwrap()
                .expect("fixture drink")
        }
    }
}
