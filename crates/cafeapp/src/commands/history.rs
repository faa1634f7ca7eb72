use crate::commands::helpers::{require_drink, require_user};
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::OrderDetail;
use crate::session::Session;
use crate::store::DataStore;

/// Every order of the signed-in user, oldest first, each with its drink.
pub fn run<S: DataStore>(store: &S, session: &Session) -> Result<CmdResult> {
    let user = require_user(store, session)?;
    let orders = store
        .orders_for_user(&user.id)?
        .into_iter()
        .map(|order| {
            let drink = require_drink(store, &order.drink_id)?;
            Ok(OrderDetail { order, drink })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CmdResult::default()
        .with_listed_orders(orders)
        .with_user(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::order;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_only_own_orders_in_order() {
        let mut fixture = StoreFixture::new()
            .with_menu_drink("Latte", 4, &[])
            .with_menu_drink("Mocha", 5, &[])
            .with_user("alex", "pw")
            .with_user("sam", "pw");
        let alex = fixture.user("alex");
        let sam = fixture.user("sam");
        let latte = fixture.drink("Latte");
        let mocha = fixture.drink("Mocha");

        let mut alex_session = Session::new();
        alex_session.sign_in(alex.id);
        let mut sam_session = Session::new();
        sam_session.sign_in(sam.id);

        order::confirm(&mut fixture.store, &alex_session, &mocha.id).unwrap();
        order::confirm(&mut fixture.store, &sam_session, &latte.id).unwrap();
        order::confirm(&mut fixture.store, &alex_session, &latte.id).unwrap();
        order::confirm(&mut fixture.store, &Session::new(), &latte.id).unwrap();

        let result = run(&fixture.store, &alex_session).unwrap();
        let names: Vec<&str> = result
            .listed_orders
            .iter()
            .map(|o| o.drink.name.as_str())
            .collect();
        assert_eq!(names, vec!["Mocha", "Latte"]);
        assert_eq!(result.user.unwrap().username, "alex");
    }

    #[test]
    fn empty_history() {
        let fixture = StoreFixture::new().with_user("alex", "pw");
        let mut session = Session::new();
        session.sign_in(fixture.user("alex").id);

        assert!(run(&fixture.store, &session)
            .unwrap()
            .listed_orders
            .is_empty());
    }
}
