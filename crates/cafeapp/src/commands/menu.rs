use crate::commands::favorites;
use crate::commands::helpers::{current_user, drink_detail};
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Drink, Ingredient};
use crate::session::Session;
use crate::store::DataStore;

/// Standard menu drinks, in the order they were seeded.
pub fn menu_items<S: DataStore>(store: &S) -> Result<Vec<Drink>> {
    Ok(store
        .list_drinks()?
        .into_iter()
        .filter(|d| d.is_menu_item)
        .collect())
}

/// Ingredients ordered for the picker: grouped by kind, then by name.
pub fn ingredients_grouped<S: DataStore>(store: &S) -> Result<Vec<Ingredient>> {
    let mut ingredients = store.list_ingredients()?;
    ingredients.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.name.cmp(&b.name)));
    Ok(ingredients)
}

/// The order menu: every menu item, plus the signed-in user's custom favorites.
pub fn run<S: DataStore>(store: &S, session: &Session) -> Result<CmdResult> {
    let listed = menu_items(store)?
        .into_iter()
        .map(|d| drink_detail(store, d))
        .collect::<Result<Vec<_>>>()?;

    let favorites = match current_user(store, session)? {
        Some(user) => favorites::unique_favorite_drinks(store, &user.id)?
            .into_iter()
            .filter(|d| !d.is_menu_item)
            .map(|d| drink_detail(store, d))
            .collect::<Result<Vec<_>>>()?,
        None => Vec::new(),
    };

    Ok(CmdResult::default()
        .with_listed_drinks(listed)
        .with_favorite_drinks(favorites))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{customize, order};
    use crate::store::memory::fixtures::StoreFixture;

    fn shop() -> StoreFixture {
        StoreFixture::new()
            .with_ingredient("Vanilla", "Syrup")
            .with_ingredient("Caramel", "Syrup")
            .with_ingredient("Oat Milk", "Milk")
            .with_menu_drink("Latte", 4, &["Espresso", "Milk"])
            .with_menu_drink("Americano", 3, &["Espresso"])
            .with_user("alex", "pw")
    }

    #[test]
    fn menu_items_exclude_custom_drinks() {
        let mut fixture = shop();
        customize::run(&mut fixture.store, &["Vanilla".to_string()]).unwrap();

        let names: Vec<String> = menu_items(&fixture.store)
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["Latte", "Americano"]);
    }

    #[test]
    fn ingredients_group_by_kind_then_name() {
        let fixture = shop();
        let ordered: Vec<(String, String)> = ingredients_grouped(&fixture.store)
            .unwrap()
            .into_iter()
            .map(|i| (i.kind, i.name))
            .collect();
        assert_eq!(
            ordered,
            vec![
                ("Milk".to_string(), "Oat Milk".to_string()),
                ("Other".to_string(), "Espresso".to_string()),
                ("Other".to_string(), "Milk".to_string()),
                ("Syrup".to_string(), "Caramel".to_string()),
                ("Syrup".to_string(), "Vanilla".to_string()),
            ]
        );
    }

    #[test]
    fn anonymous_menu_has_no_favorites() {
        let fixture = shop();
        let result = run(&fixture.store, &Session::new()).unwrap();
        assert_eq!(result.listed_drinks.len(), 2);
        assert!(result.favorite_drinks.is_empty());
    }

    #[test]
    fn signed_in_menu_lists_unique_custom_favorites() {
        let mut fixture = shop();
        let alex = fixture.user("alex");
        let mut session = Session::new();
        session.sign_in(alex.id);

        let custom = customize::run(
            &mut fixture.store,
            &["Vanilla".to_string(), "Oat Milk".to_string()],
        )
        .unwrap()
        .affected_drinks
        .remove(0);
        order::confirm(&mut fixture.store, &session, &custom.drink.id).unwrap();
        order::confirm(&mut fixture.store, &session, &custom.drink.id).unwrap();
        let latte = fixture.drink("Latte");
        order::confirm(&mut fixture.store, &session, &latte.id).unwrap();

        let result = run(&fixture.store, &session).unwrap();
        assert_eq!(result.listed_drinks.len(), 2);
        assert_eq!(result.favorite_drinks.len(), 1);
        assert_eq!(result.favorite_drinks[0].drink.id, custom.drink.id);
        assert_eq!(
            result.favorite_drinks[0].ingredient_names(),
            vec!["Vanilla", "Oat Milk"]
        );
    }
}
