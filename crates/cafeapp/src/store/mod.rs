//! # Storage Layer
//!
//! This module defines the storage abstraction for the shop. The [`DataStore`] trait is the
//! whole persistence contract the rest of the crate relies on: create, find-by-field, update,
//! destroy, destroy-all and association traversal for users, drinks, ingredients, recipe
//! items and orders.
//!
//! ## Layers
//!
//! - [`StorageBackend`](backend::StorageBackend): raw I/O. Loads and saves the full
//!   [`Tables`] snapshot. Knows nothing about the rules.
//! - [`ShopStore`](shop_store::ShopStore): implements [`DataStore`] on top of any backend.
//!   Owns referential checks (an order must point at an existing drink, and so on) and
//!   transactions.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production store, a single `shop.json` in the data directory,
//!   written atomically (temp file + rename).
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.
//!
//! ## Transactions
//!
//! Every single operation is load → mutate → save. [`DataStore::transaction`] stages the
//! tables in memory, runs the closure, and saves once on success. If the closure fails
//! nothing is written, so multi-step mutations (a custom drink plus its recipe items, an
//! account plus its orders) never land half done.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── shop.json     # All tables
//! └── cafe.toml     # Optional configuration
//! ```

use crate::error::{CafeError, Result};
use crate::model::{Drink, Ingredient, Order, RecipeItem, User};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod shop_store;

/// Every persisted row. Vectors keep insertion order, which is creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tables {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub drinks: Vec<Drink>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub recipe_items: Vec<RecipeItem>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Tables {
    fn has_user(&self, id: &Uuid) -> bool {
        self.users.iter().any(|u| u.id == *id)
    }

    fn has_drink(&self, id: &Uuid) -> bool {
        self.drinks.iter().any(|d| d.id == *id)
    }

    fn has_ingredient(&self, id: &Uuid) -> bool {
        self.ingredients.iter().any(|i| i.id == *id)
    }

    pub(crate) fn insert_user(&mut self, user: &User) -> Result<()> {
        if self.users.iter().any(|u| u.username == user.username) {
            return Err(CafeError::duplicate("User", &user.username));
        }
        self.users.push(user.clone());
        Ok(())
    }

    pub(crate) fn insert_drink(&mut self, drink: &Drink) -> Result<()> {
        if self.has_drink(&drink.id) {
            return Err(CafeError::duplicate("Drink", drink.id));
        }
        self.drinks.push(drink.clone());
        Ok(())
    }

    pub(crate) fn insert_ingredient(&mut self, ingredient: &Ingredient) -> Result<()> {
        if self.ingredients.iter().any(|i| i.name == ingredient.name) {
            return Err(CafeError::duplicate("Ingredient", &ingredient.name));
        }
        self.ingredients.push(ingredient.clone());
        Ok(())
    }

    pub(crate) fn insert_recipe_item(&mut self, item: &RecipeItem) -> Result<()> {
        if !self.has_drink(&item.drink_id) {
            return Err(CafeError::not_found("Drink", item.drink_id));
        }
        if !self.has_ingredient(&item.ingredient_id) {
            return Err(CafeError::not_found("Ingredient", item.ingredient_id));
        }
        if self
            .recipe_items
            .iter()
            .any(|r| r.drink_id == item.drink_id && r.ingredient_id == item.ingredient_id)
        {
            return Err(CafeError::duplicate(
                "RecipeItem",
                format!("{}/{}", item.drink_id, item.ingredient_id),
            ));
        }
        self.recipe_items.push(item.clone());
        Ok(())
    }

    pub(crate) fn insert_order(&mut self, order: &Order) -> Result<()> {
        if !self.has_drink(&order.drink_id) {
            return Err(CafeError::not_found("Drink", order.drink_id));
        }
        if let Some(user_id) = order.user_id {
            if !self.has_user(&user_id) {
                return Err(CafeError::not_found("User", user_id));
            }
        }
        self.orders.push(order.clone());
        Ok(())
    }
}

/// Abstract interface for shop persistence.
///
/// `find_*` methods return `Ok(None)` when nothing matches; `update_*` and `destroy_*`
/// return [`CafeError::NotFound`] for unknown ids.
pub trait DataStore {
    // --- Users ---

    /// Create a user. Fails with `Duplicate` if the username is taken.
    fn create_user(&mut self, user: &User) -> Result<()>;

    fn find_user(&self, id: &Uuid) -> Result<Option<User>>;

    fn find_user_by_username(&self, username: &str) -> Result<Option<User>>;

    fn update_user(&mut self, user: &User) -> Result<()>;

    /// Remove a user. Orders must be destroyed first.
    fn destroy_user(&mut self, id: &Uuid) -> Result<()>;

    fn list_users(&self) -> Result<Vec<User>>;

    // --- Drinks ---

    fn create_drink(&mut self, drink: &Drink) -> Result<()>;

    fn find_drink(&self, id: &Uuid) -> Result<Option<Drink>>;

    fn find_drink_by_name(&self, name: &str) -> Result<Option<Drink>>;

    fn update_drink(&mut self, drink: &Drink) -> Result<()>;

    fn list_drinks(&self) -> Result<Vec<Drink>>;

    // --- Ingredients ---

    /// Create an ingredient. Fails with `Duplicate` if the name is taken.
    fn create_ingredient(&mut self, ingredient: &Ingredient) -> Result<()>;

    fn find_ingredient_by_name(&self, name: &str) -> Result<Option<Ingredient>>;

    fn list_ingredients(&self) -> Result<Vec<Ingredient>>;

    // --- Recipe items ---

    /// Link a drink to an ingredient. Both must exist and the link must be new.
    fn create_recipe_item(&mut self, item: &RecipeItem) -> Result<()>;

    fn recipe_items_for(&self, drink_id: &Uuid) -> Result<Vec<RecipeItem>>;

    /// Ingredients of a drink, in the order they were linked.
    fn ingredients_for(&self, drink_id: &Uuid) -> Result<Vec<Ingredient>>;

    // --- Orders ---

    /// Create an order. The drink (and user, when set) must exist.
    fn create_order(&mut self, order: &Order) -> Result<()>;

    fn find_order(&self, id: &Uuid) -> Result<Option<Order>>;

    fn update_order(&mut self, order: &Order) -> Result<()>;

    /// Orders placed by a user, oldest first.
    fn orders_for_user(&self, user_id: &Uuid) -> Result<Vec<Order>>;

    /// Destroy every order of a user, returning how many were removed.
    fn destroy_orders_for_user(&mut self, user_id: &Uuid) -> Result<usize>;

    fn list_orders(&self) -> Result<Vec<Order>>;

    // --- Transactions ---

    /// Run `f` against staged tables and persist once if it succeeds.
    fn transaction<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
        Self: Sized;
}
