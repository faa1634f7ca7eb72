//! The fixed shop catalog: ingredients and standard menu drinks.
//!
//! [`ensure_seeded`] only adds what is missing, matched by name, so it runs on every start.

use crate::error::Result;
use crate::model::{Drink, Ingredient, RecipeItem};
use crate::store::DataStore;
use tracing::{debug, info};

/// `(kind, names)` in picker order.
pub const INGREDIENTS: &[(&str, &[&str])] = &[
    ("Coffee", &["Espresso", "Decaf Espresso", "Cold Brew"]),
    ("Milk", &["Milk", "Oat Milk", "Almond Milk", "Foam"]),
    ("Syrup", &["Vanilla", "Caramel", "Hazelnut", "Chocolate"]),
    ("Tea", &["Black Tea", "Matcha"]),
    ("Topping", &["Whipped Cream", "Cinnamon"]),
    ("Base", &["Hot Water"]),
];

pub struct MenuEntry {
    pub name: &'static str,
    pub price: u32,
    pub ingredients: &'static [&'static str],
}

pub const MENU: &[MenuEntry] = &[
    MenuEntry {
        name: "Latte",
        price: 4,
        ingredients: &["Espresso", "Milk"],
    },
    MenuEntry {
        name: "Cappuccino",
        price: 4,
        ingredients: &["Espresso", "Milk", "Foam"],
    },
    MenuEntry {
        name: "Americano",
        price: 3,
        ingredients: &["Espresso", "Hot Water"],
    },
    MenuEntry {
        name: "Mocha",
        price: 5,
        ingredients: &["Espresso", "Milk", "Chocolate", "Whipped Cream"],
    },
    MenuEntry {
        name: "Caramel Macchiato",
        price: 5,
        ingredients: &["Espresso", "Milk", "Vanilla", "Caramel"],
    },
    MenuEntry {
        name: "Matcha Latte",
        price: 5,
        ingredients: &["Matcha", "Milk"],
    },
];

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub ingredients_created: usize,
    pub drinks_created: usize,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        self.ingredients_created == 0 && self.drinks_created == 0
    }
}

/// Creates any missing catalog ingredient or menu drink in a single transaction.
///
/// Existing rows are left alone, including menu drinks whose recipe has since changed.
pub fn ensure_seeded<S: DataStore>(store: &mut S) -> Result<SeedReport> {
    let report = store.transaction(|s| {
        let mut report = SeedReport::default();

        for (kind, names) in INGREDIENTS {
            for name in *names {
                if s.find_ingredient_by_name(name)?.is_none() {
                    s.create_ingredient(&Ingredient::new(*name, *kind))?;
                    report.ingredients_created += 1;
                }
            }
        }

        for entry in MENU {
            if s.find_drink_by_name(entry.name)?.is_some() {
                continue;
            }
            let drink = Drink::menu_item(entry.name, entry.price);
            s.create_drink(&drink)?;
            for name in entry.ingredients {
                let ingredient = match s.find_ingredient_by_name(name)? {
                    Some(found) => found,
                    None => {
                        let created = Ingredient::new(*name, "Other");
                        s.create_ingredient(&created)?;
                        report.ingredients_created += 1;
                        created
                    }
                };
                s.create_recipe_item(&RecipeItem::new(drink.id, ingredient.id))?;
            }
            report.drinks_created += 1;
        }

        Ok(report)
    })?;

    if report.is_empty() {
        debug!("catalog already seeded");
    } else {
        info!(
            ingredients = report.ingredients_created,
            drinks = report.drinks_created,
            "catalog seeded"
        );
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::menu::menu_items;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn seeds_full_catalog() {
        let mut store = InMemoryStore::new();
        let report = ensure_seeded(&mut store).unwrap();

        let ingredient_count: usize = INGREDIENTS.iter().map(|(_, names)| names.len()).sum();
        assert_eq!(report.ingredients_created, ingredient_count);
        assert_eq!(report.drinks_created, MENU.len());

        let names: Vec<String> = menu_items(&store)
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names[0], "Latte");
        assert_eq!(names.len(), MENU.len());

        let latte = store.find_drink_by_name("Latte").unwrap().unwrap();
        let recipe: Vec<String> = store
            .ingredients_for(&latte.id)
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(recipe, vec!["Espresso", "Milk"]);
    }

    #[test]
    fn seeding_twice_adds_nothing() {
        let mut store = InMemoryStore::new();
        ensure_seeded(&mut store).unwrap();
        let drinks = store.list_drinks().unwrap().len();
        let ingredients = store.list_ingredients().unwrap().len();

        let report = ensure_seeded(&mut store).unwrap();

        assert!(report.is_empty());
        assert_eq!(store.list_drinks().unwrap().len(), drinks);
        assert_eq!(store.list_ingredients().unwrap().len(), ingredients);
    }

    #[test]
    fn seeding_saves_once() {
        let mut store = InMemoryStore::new();
        ensure_seeded(&mut store).unwrap();
        assert_eq!(store.backend().save_count(), 1);
    }

    #[test]
    fn menu_recipes_only_use_catalog_ingredients() {
        for entry in MENU {
            for name in entry.ingredients {
                assert!(
                    INGREDIENTS.iter().any(|(_, names)| names.contains(name)),
                    "{} uses unknown ingredient {}",
                    entry.name,
                    name
                );
            }
        }
    }
}
