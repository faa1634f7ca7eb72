use crate::commands::CmdResult;
use crate::error::{CafeError, Result};
use crate::model::{Drink, DrinkDetail, Ingredient, RecipeItem};
use crate::store::DataStore;
use tracing::info;

/// Builds a custom drink from the selected ingredient names.
///
/// Repeated names collapse to one recipe item. The drink costs one price unit per distinct
/// ingredient and is named `Custom #N`. The drink and its recipe items are written in one
/// transaction.
pub fn run<S: DataStore>(store: &mut S, ingredient_names: &[String]) -> Result<CmdResult> {
    let mut ingredients: Vec<Ingredient> = Vec::new();
    for name in ingredient_names {
        if ingredients.iter().any(|i| &i.name == name) {
            continue;
        }
        let ingredient = store
            .find_ingredient_by_name(name)?
            .ok_or_else(|| CafeError::not_found("Ingredient", name))?;
        ingredients.push(ingredient);
    }

    let price = u32::try_from(ingredients.len())
        .map_err(|_| CafeError::Validation("Too many ingredients".to_string()))?;

    let drink = store.transaction(|s| {
        let existing_custom = s.list_drinks()?.iter().filter(|d| !d.is_menu_item).count();
        let drink = Drink::custom(format!("Custom #{}", existing_custom + 1), price);
        s.create_drink(&drink)?;
        for ingredient in &ingredients {
            s.create_recipe_item(&RecipeItem::new(drink.id, ingredient.id))?;
        }
        Ok(drink)
    })?;

    info!(drink = %drink.name, price, "custom drink created");

    Ok(CmdResult {
        affected_drinks: vec![DrinkDetail { drink, ingredients }],
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn pantry() -> StoreFixture {
        StoreFixture::new()
            .with_ingredient("Espresso", "Coffee")
            .with_ingredient("Milk", "Milk")
            .with_ingredient("Vanilla", "Syrup")
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn price_equals_ingredient_count() {
        let mut fixture = pantry();
        let result = run(&mut fixture.store, &names(&["Espresso", "Milk", "Vanilla"])).unwrap();

        let detail = &result.affected_drinks[0];
        assert_eq!(detail.drink.price, 3);
        assert!(!detail.drink.is_menu_item);

        let items = fixture.store.recipe_items_for(&detail.drink.id).unwrap();
        assert_eq!(items.len(), 3);
        let stored = fixture.store.find_drink(&detail.drink.id).unwrap().unwrap();
        assert_eq!(stored.price, 3);
    }

    #[test]
    fn repeated_selection_links_once() {
        let mut fixture = pantry();
        let result = run(&mut fixture.store, &names(&["Milk", "Milk", "Espresso"])).unwrap();

        let detail = &result.affected_drinks[0];
        assert_eq!(detail.drink.price, 2);
        assert_eq!(detail.ingredient_names(), vec!["Milk", "Espresso"]);
        assert_eq!(
            fixture
                .store
                .recipe_items_for(&detail.drink.id)
                .unwrap()
                .len(),
            2
        );
    }

    #[test]
    fn empty_selection_makes_free_drink() {
        let mut fixture = pantry();
        let result = run(&mut fixture.store, &[]).unwrap();
        let detail = &result.affected_drinks[0];
        assert_eq!(detail.drink.price, 0);
        assert!(detail.ingredients.is_empty());
    }

    #[test]
    fn custom_drinks_are_numbered() {
        let mut fixture = pantry();
        let first = run(&mut fixture.store, &names(&["Milk"])).unwrap();
        let second = run(&mut fixture.store, &names(&["Vanilla"])).unwrap();
        assert_eq!(first.affected_drinks[0].drink.name, "Custom #1");
        assert_eq!(second.affected_drinks[0].drink.name, "Custom #2");
    }

    #[test]
    fn unknown_ingredient_creates_nothing() {
        let mut fixture = pantry();
        let result = run(&mut fixture.store, &names(&["Milk", "Motor Oil"]));

        assert!(matches!(
            result,
            Err(CafeError::NotFound {
                entity: "Ingredient",
                ..
            })
        ));
        assert!(fixture.store.list_drinks().unwrap().is_empty());
    }
}
