//! # Domain Model
//!
//! This module defines the records the shop persists: [`User`], [`Drink`], [`Ingredient`],
//! [`RecipeItem`] and [`Order`], plus the pairings the UI consumes ([`DrinkDetail`],
//! [`OrderDetail`]).
//!
//! ## Menu Items vs Custom Drinks
//!
//! A [`Drink`] is either part of the fixed menu (`is_menu_item = true`, created only by
//! seeding) or a custom drink assembled from ingredients (`is_menu_item = false`). Custom
//! drinks are priced at one unit per ingredient.
//!
//! ## Prices
//!
//! Prices are whole price units (`u32`) and render as `$N`. An [`Order`] copies the drink
//! price when it is created, so later changes to a drink never rewrite order history.
//!
//! ## Relationships
//!
//! ```text
//! User 1 ── * Order * ── 1 Drink 1 ── * RecipeItem * ── 1 Ingredient
//! ```
//!
//! `Order::user_id` is optional: anonymous customers can order too.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    /// Unique and case-sensitive.
    pub username: String,
    /// Argon2 PHC string, never the plaintext password.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            password_hash: password_hash.into(),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drink {
    pub id: Uuid,
    pub name: String,
    pub price: u32,
    pub is_menu_item: bool,
    pub created_at: DateTime<Utc>,
}

impl Drink {
    pub fn menu_item(name: impl Into<String>, price: u32) -> Self {
        Self::build(name.into(), price, true)
    }

    pub fn custom(name: impl Into<String>, price: u32) -> Self {
        Self::build(name.into(), price, false)
    }

    fn build(name: String, price: u32, is_menu_item: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            price,
            is_menu_item,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    /// Grouping key for the ingredient picker (e.g. "Coffee", "Milk", "Syrup").
    pub kind: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind: kind.into(),
        }
    }
}

/// Join record linking a drink to one of its ingredients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeItem {
    pub id: Uuid,
    pub drink_id: Uuid,
    pub ingredient_id: Uuid,
}

impl RecipeItem {
    pub fn new(drink_id: Uuid, ingredient_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            drink_id,
            ingredient_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub drink_id: Uuid,
    /// Price at the time of ordering.
    pub price: u32,
    #[serde(default)]
    pub favorite: bool,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn for_drink(drink: &Drink, user_id: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            drink_id: drink.id,
            price: drink.price,
            favorite: false,
            created_at: Utc::now(),
        }
    }
}

/// A drink together with its resolved ingredients, in recipe order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrinkDetail {
    pub drink: Drink,
    pub ingredients: Vec<Ingredient>,
}

impl DrinkDetail {
    pub fn ingredient_names(&self) -> Vec<&str> {
        self.ingredients.iter().map(|i| i.name.as_str()).collect()
    }
}

/// An order together with the drink it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetail {
    pub order: Order,
    pub drink: Drink,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_captures_drink_price() {
        let mut drink = Drink::menu_item("Latte", 400);
        let order = Order::for_drink(&drink, None);
        drink.price = 500;

        assert_eq!(order.price, 400);
        assert_eq!(order.drink_id, drink.id);
        assert!(order.user_id.is_none());
        assert!(!order.favorite);
    }

    #[test]
    fn custom_drinks_are_not_menu_items() {
        assert!(Drink::menu_item("Mocha", 5).is_menu_item);
        assert!(!Drink::custom("Custom #1", 2).is_menu_item);
    }

    #[test]
    fn legacy_order_without_favorite_flag_deserializes() {
        let json = format!(
            r#"{{"id":"{}","user_id":null,"drink_id":"{}","price":3,"created_at":"2024-01-15T10:00:00Z"}}"#,
            Uuid::new_v4(),
            Uuid::new_v4()
        );
        let order: Order = serde_json::from_str(&json).unwrap();
        assert!(!order.favorite);
    }
}
