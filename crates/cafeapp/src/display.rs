//! Plain-text formatting of drinks and orders.
//!
//! Everything here is pure string building; the CLI decides where the strings go and how
//! they are colored.

use crate::model::{DrinkDetail, Ingredient, OrderDetail};

pub const ORDER_SEPARATOR: &str = "\t*********";

pub fn format_price(price: u32) -> String {
    format!("${}", price)
}

/// Ingredient names joined with `", "`. Empty for a drink without ingredients.
pub fn ingredient_list(ingredients: &[Ingredient]) -> String {
    ingredients
        .iter()
        .map(|i| i.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `name | $price | ingredient, ingredient`
pub fn drink_line(detail: &DrinkDetail) -> String {
    format!(
        "{} | {} | {}",
        detail.drink.name,
        format_price(detail.drink.price),
        ingredient_list(&detail.ingredients)
    )
}

pub fn favorite_line(detail: &DrinkDetail) -> String {
    format!("~ {}", drink_line(detail))
}

/// Lines shown before an order is confirmed. Only menu items show their name.
pub fn review_lines(detail: &DrinkDetail) -> Vec<String> {
    let mut lines = Vec::with_capacity(3);
    if detail.drink.is_menu_item {
        lines.push(format!("Drink name: {}", detail.drink.name));
    }
    lines.push(format!(
        "Ingredients: {}",
        ingredient_list(&detail.ingredients)
    ));
    lines.push(format!(
        "This drink costs {}.",
        format_price(detail.drink.price)
    ));
    lines
}

/// One order history entry. The date is truncated to `YYYY-MM-DD`.
pub fn order_block(detail: &OrderDetail) -> String {
    format!(
        "~ {}\n  Price: {}\n  Created: {}\n\n{}\n",
        detail.drink.name,
        format_price(detail.order.price),
        detail.order.created_at.format("%Y-%m-%d"),
        ORDER_SEPARATOR
    )
}

pub fn confirmation_message(detail: &DrinkDetail) -> String {
    if detail.drink.is_menu_item {
        format!(
            "You have successfully ordered a {}. Thanks for coming!",
            detail.drink.name
        )
    } else {
        "You have successfully ordered a customized drink. Thanks for coming!".to_string()
    }
}
