use super::backend::StorageBackend;
use super::{DataStore, Tables};
use crate::error::{CafeError, Result};
use crate::model::{Drink, Ingredient, Order, RecipeItem, User};
use uuid::Uuid;

pub struct ShopStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    /// Tables staged by an open transaction. `None` outside transactions.
    staged: Option<Tables>,
}

impl<B: StorageBackend> ShopStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            staged: None,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn read<T>(&self, f: impl FnOnce(&Tables) -> T) -> Result<T> {
        match &self.staged {
            Some(tables) => Ok(f(tables)),
            None => Ok(f(&self.backend.load_tables()?)),
        }
    }

    fn write<T>(&mut self, f: impl FnOnce(&mut Tables) -> Result<T>) -> Result<T> {
        if let Some(tables) = self.staged.as_mut() {
            return f(tables);
        }
        let mut tables = self.backend.load_tables()?;
        let out = f(&mut tables)?;
        self.backend.save_tables(&tables)?;
        Ok(out)
    }
}

fn replace<T: Clone>(
    rows: &mut [T],
    row: &T,
    id: Uuid,
    id_of: impl Fn(&T) -> Uuid,
    entity: &'static str,
) -> Result<()> {
    let slot = rows
        .iter_mut()
        .find(|r| id_of(r) == id)
        .ok_or_else(|| CafeError::not_found(entity, id))?;
    *slot = row.clone();
    Ok(())
}

impl<B: StorageBackend> DataStore for ShopStore<B> {
    fn create_user(&mut self, user: &User) -> Result<()> {
        self.write(|t| t.insert_user(user))
    }

    fn find_user(&self, id: &Uuid) -> Result<Option<User>> {
        self.read(|t| t.users.iter().find(|u| u.id == *id).cloned())
    }

    fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.read(|t| t.users.iter().find(|u| u.username == username).cloned())
    }

    fn update_user(&mut self, user: &User) -> Result<()> {
        self.write(|t| {
            if t
                .users
                .iter()
                .any(|u| u.username == user.username && u.id != user.id)
            {
                return Err(CafeError::duplicate("User", &user.username));
            }
            replace(&mut t.users, user, user.id, |u| u.id, "User")
        })
    }

    fn destroy_user(&mut self, id: &Uuid) -> Result<()> {
        self.write(|t| {
            if t.orders.iter().any(|o| o.user_id == Some(*id)) {
                return Err(CafeError::Store(format!(
                    "User {} still has orders; destroy them first",
                    id
                )));
            }
            let before = t.users.len();
            t.users.retain(|u| u.id != *id);
            if t.users.len() == before {
                return Err(CafeError::not_found("User", id));
            }
            Ok(())
        })
    }

    fn list_users(&self) -> Result<Vec<User>> {
        self.read(|t| t.users.clone())
    }

    fn create_drink(&mut self, drink: &Drink) -> Result<()> {
        self.write(|t| t.insert_drink(drink))
    }

    fn find_drink(&self, id: &Uuid) -> Result<Option<Drink>> {
        self.read(|t| t.drinks.iter().find(|d| d.id == *id).cloned())
    }

    fn find_drink_by_name(&self, name: &str) -> Result<Option<Drink>> {
        self.read(|t| t.drinks.iter().find(|d| d.name == name).cloned())
    }

    fn update_drink(&mut self, drink: &Drink) -> Result<()> {
        self.write(|t| replace(&mut t.drinks, drink, drink.id, |d| d.id, "Drink"))
    }

    fn list_drinks(&self) -> Result<Vec<Drink>> {
        self.read(|t| t.drinks.clone())
    }

    fn create_ingredient(&mut self, ingredient: &Ingredient) -> Result<()> {
        self.write(|t| t.insert_ingredient(ingredient))
    }

    fn find_ingredient_by_name(&self, name: &str) -> Result<Option<Ingredient>> {
        self.read(|t| t.ingredients.iter().find(|i| i.name == name).cloned())
    }

    fn list_ingredients(&self) -> Result<Vec<Ingredient>> {
        self.read(|t| t.ingredients.clone())
    }

    fn create_recipe_item(&mut self, item: &RecipeItem) -> Result<()> {
        self.write(|t| t.insert_recipe_item(item))
    }

    fn recipe_items_for(&self, drink_id: &Uuid) -> Result<Vec<RecipeItem>> {
        self.read(|t| {
            t.recipe_items
                .iter()
                .filter(|r| r.drink_id == *drink_id)
                .cloned()
                .collect()
        })
    }

    fn ingredients_for(&self, drink_id: &Uuid) -> Result<Vec<Ingredient>> {
        self.read(|t| {
            t.recipe_items
                .iter()
                .filter(|r| r.drink_id == *drink_id)
                .filter_map(|r| t.ingredients.iter().find(|i| i.id == r.ingredient_id))
                .cloned()
                .collect()
        })
    }

    fn create_order(&mut self, order: &Order) -> Result<()> {
        self.write(|t| t.insert_order(order))
    }

    fn find_order(&self, id: &Uuid) -> Result<Option<Order>> {
        self.read(|t| t.orders.iter().find(|o| o.id == *id).cloned())
    }

    fn update_order(&mut self, order: &Order) -> Result<()> {
        self.write(|t| replace(&mut t.orders, order, order.id, |o| o.id, "Order"))
    }

    fn orders_for_user(&self, user_id: &Uuid) -> Result<Vec<Order>> {
        self.read(|t| {
            t.orders
                .iter()
                .filter(|o| o.user_id == Some(*user_id))
                .cloned()
                .collect()
        })
    }

    fn destroy_orders_for_user(&mut self, user_id: &Uuid) -> Result<usize> {
        self.write(|t| {
            let before = t.orders.len();
            t.orders.retain(|o| o.user_id != Some(*user_id));
            Ok(before - t.orders.len())
        })
    }

    fn list_orders(&self) -> Result<Vec<Order>> {
        self.read(|t| t.orders.clone())
    }

    fn transaction<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        // Nested transactions join the outer one.
        if self.staged.is_some() {
            return f(self);
        }

        self.staged = Some(self.backend.load_tables()?);
        let outcome = f(self);
        let staged = self.staged.take();
        let value = outcome?;

        if let Some(tables) = staged {
            self.backend.save_tables(&tables)?;
        }
        Ok(value)
    }
}
