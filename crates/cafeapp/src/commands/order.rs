use crate::commands::favorites::apply_marking_rule;
use crate::commands::helpers::{current_user, drink_detail, require_drink};
use crate::commands::{CmdMessage, CmdResult};
use crate::display::confirmation_message;
use crate::error::Result;
use crate::model::Order;
use crate::session::Session;
use crate::store::DataStore;
use tracing::info;
use uuid::Uuid;

/// The drink as shown before confirming: name, ingredients and price.
pub fn review<S: DataStore>(store: &S, drink_id: &Uuid) -> Result<CmdResult> {
    let drink = require_drink(store, drink_id)?;
    let detail = drink_detail(store, drink)?;
    Ok(CmdResult::default().with_listed_drinks(vec![detail]))
}

/// Places an order for the drink.
///
/// Signed-in orders carry the user id and go through the favorite marking rule; anonymous
/// orders carry no user. The price is copied from the drink.
pub fn confirm<S: DataStore>(store: &mut S, session: &Session, drink_id: &Uuid) -> Result<CmdResult> {
    let drink = require_drink(store, drink_id)?;
    let user = current_user(store, session)?;
    let user_id = user.as_ref().map(|u| u.id);

    let order = store.transaction(|s| {
        let mut order = Order::for_drink(&drink, user_id);
        s.create_order(&order)?;
        if user_id.is_some() {
            apply_marking_rule(s, &mut order, &drink)?;
        }
        Ok(order)
    })?;

    info!(
        drink = %drink.name,
        price = order.price,
        signed_in = user_id.is_some(),
        favorite = order.favorite,
        "order placed"
    );

    let detail = drink_detail(store, drink)?;
    let mut result = CmdResult {
        affected_orders: vec![order],
        ..Default::default()
    };
    result.add_message(CmdMessage::success(confirmation_message(&detail)));
    result.listed_drinks.push(detail);
    result.user = user;
    Ok(result)
}
