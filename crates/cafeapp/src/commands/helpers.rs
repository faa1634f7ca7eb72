use crate::error::{CafeError, Result};
use crate::model::{Drink, DrinkDetail, User};
use crate::session::Session;
use crate::store::DataStore;
use uuid::Uuid;

/// The user the session points at. A session pointing at a deleted user resolves to `None`.
pub fn current_user<S: DataStore>(store: &S, session: &Session) -> Result<Option<User>> {
    match session.user_id() {
        Some(id) => store.find_user(&id),
        None => Ok(None),
    }
}

pub fn is_signed_in<S: DataStore>(store: &S, session: &Session) -> Result<bool> {
    Ok(current_user(store, session)?.is_some())
}

/// Like [`current_user`], but nobody signed in is an error.
pub fn require_user<S: DataStore>(store: &S, session: &Session) -> Result<User> {
    current_user(store, session)?.ok_or_else(|| CafeError::not_found("User", "signed-in user"))
}

pub fn require_drink<S: DataStore>(store: &S, drink_id: &Uuid) -> Result<Drink> {
    store
        .find_drink(drink_id)?
        .ok_or_else(|| CafeError::not_found("Drink", drink_id))
}

pub fn drink_detail<S: DataStore>(store: &S, drink: Drink) -> Result<DrinkDetail> {
    let ingredients = store.ingredients_for(&drink.id)?;
    Ok(DrinkDetail { drink, ingredients })
}
