//! Favorites.
//!
//! A favorite is an order flag, not a separate record: the favorites list is derived from
//! the user's orders flagged `favorite`, deduplicated by drink name in first-seen order.
//!
//! Marking rule: every order a signed-in user places for a drink that is not a standard menu
//! item becomes a favorite. Menu items are already one selection away on the menu.

use crate::commands::helpers::{drink_detail, require_user};
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Drink, Order};
use crate::session::Session;
use crate::store::DataStore;
use uuid::Uuid;

pub fn should_mark_favorite(drink: &Drink) -> bool {
    !drink.is_menu_item
}

/// Applies the marking rule to a freshly created order, persisting the flag when it applies.
pub fn apply_marking_rule<S: DataStore>(
    store: &mut S,
    order: &mut Order,
    drink: &Drink,
) -> Result<bool> {
    if !should_mark_favorite(drink) {
        return Ok(false);
    }
    order.favorite = true;
    store.update_order(order)?;
    Ok(true)
}

/// The drinks behind a user's favorite orders, one per drink name, in first-seen order.
pub fn unique_favorite_drinks<S: DataStore>(store: &S, user_id: &Uuid) -> Result<Vec<Drink>> {
    let mut drinks: Vec<Drink> = Vec::new();
    for order in store.orders_for_user(user_id)? {
        if !order.favorite {
            continue;
        }
        let Some(drink) = store.find_drink(&order.drink_id)? else {
            continue;
        };
        if drinks.iter().all(|d| d.name != drink.name) {
            drinks.push(drink);
        }
    }
    Ok(drinks)
}

pub fn unique_favorite_names<S: DataStore>(store: &S, user_id: &Uuid) -> Result<Vec<String>> {
    Ok(unique_favorite_drinks(store, user_id)?
        .into_iter()
        .map(|d| d.name)
        .collect())
}

/// The signed-in user's favorites with price and ingredients.
pub fn run<S: DataStore>(store: &S, session: &Session) -> Result<CmdResult> {
    let user = require_user(store, session)?;
    let favorites = unique_favorite_drinks(store, &user.id)?
        .into_iter()
        .map(|d| drink_detail(store, d))
        .collect::<Result<Vec<_>>>()?;

    Ok(CmdResult::default()
        .with_favorite_drinks(favorites)
        .with_user(user))
}
