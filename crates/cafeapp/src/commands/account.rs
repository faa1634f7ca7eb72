//! Accounts: creation, sign in/out and deletion.
//!
//! Usernames are unique and case-sensitive. `exit` is reserved because the CLI uses it as
//! the way out of the username prompts.

use crate::commands::helpers::require_user;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CafeError, Result};
use crate::model::User;
use crate::password::{hash_password, verify_password};
use crate::session::Session;
use crate::store::DataStore;
use tracing::{info, warn};

pub const EXIT_SENTINEL: &str = "exit";

pub fn username_taken<S: DataStore>(store: &S, username: &str) -> Result<bool> {
    Ok(store.find_user_by_username(username)?.is_some())
}

pub fn validate_username(username: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(CafeError::Validation("Username cannot be empty.".to_string()));
    }
    if username == EXIT_SENTINEL {
        return Err(CafeError::Validation(format!(
            "\"{}\" cannot be used as a username.",
            EXIT_SENTINEL
        )));
    }
    Ok(())
}

/// Creates an account and signs it in.
///
/// Fails with `Validation` for a bad username or mismatched passwords and with `Duplicate`
/// when the username is taken. Nothing is written on failure.
pub fn create<S: DataStore>(
    store: &mut S,
    session: &mut Session,
    username: &str,
    password: &str,
    confirmation: &str,
) -> Result<CmdResult> {
    validate_username(username)?;
    if username_taken(store, username)? {
        return Err(CafeError::duplicate("User", username));
    }
    if password != confirmation {
        return Err(CafeError::Validation(
            "Passwords did not match, please try again.".to_string(),
        ));
    }

    let user = User::new(username, hash_password(password)?);
    store.create_user(&user)?;
    session.sign_in(user.id);
    info!(username = %user.username, "account created");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Account username: \"{}\" created! You are now signed in!",
        user.username
    )));
    Ok(result.with_user(user))
}

/// Signs in with a username and password.
///
/// Unknown usernames fail with `NotFound`, wrong passwords with `Validation`.
pub fn sign_in<S: DataStore>(
    store: &S,
    session: &mut Session,
    username: &str,
    password: &str,
) -> Result<CmdResult> {
    let user = store
        .find_user_by_username(username)?
        .ok_or_else(|| CafeError::not_found("User", username))?;

    if !verify_password(password, &user.password_hash)? {
        warn!(username = %user.username, "failed sign-in attempt");
        return Err(CafeError::Validation("Incorrect password.".to_string()));
    }

    session.sign_in(user.id);
    info!(username = %user.username, "signed in");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Welcome back, {}!",
        user.username
    )));
    Ok(result.with_user(user))
}

/// Signs the current session's user out. Other accounts are untouched.
pub fn sign_out(session: &mut Session) -> CmdResult {
    let mut result = CmdResult::default();
    if let Some(id) = session.sign_out() {
        info!(user_id = %id, "signed out");
        result.add_message(CmdMessage::info("You have been signed out."));
    }
    result
}

/// Deletes the signed-in user's orders, then the user, in one transaction.
pub fn delete<S: DataStore>(store: &mut S, session: &mut Session) -> Result<CmdResult> {
    let user = require_user(store, session)?;

    let removed_orders = store.transaction(|s| {
        let removed = s.destroy_orders_for_user(&user.id)?;
        s.destroy_user(&user.id)?;
        Ok(removed)
    })?;
    session.sign_out();
    info!(username = %user.username, removed_orders, "account deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Your account has been deleted."));
    Ok(result.with_user(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::order;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn create_signs_in_and_hashes_password() {
        let mut store = InMemoryStore::new();
        let mut session = Session::new();

        let result = create(&mut store, &mut session, "alex", "pass1", "pass1").unwrap();

        let users = store.list_users().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "alex");
        assert_ne!(users[0].password_hash, "pass1");
        assert_eq!(session.user_id(), Some(users[0].id));
        assert_eq!(
            result.messages[0].content,
            "Account username: \"alex\" created! You are now signed in!"
        );
    }

    #[test]
    fn create_with_mismatched_passwords_writes_nothing() {
        let mut store = InMemoryStore::new();
        let mut session = Session::new();

        let result = create(&mut store, &mut session, "alex", "pass1", "pass2");

        assert!(matches!(result, Err(CafeError::Validation(_))));
        assert!(store.list_users().unwrap().is_empty());
        assert!(!session.is_signed_in());
    }

    #[test]
    fn create_always_blocks_duplicates() {
        let mut fixture = StoreFixture::new().with_user("alex", "pw");
        let mut session = Session::new();

        let result = create(&mut fixture.store, &mut session, "alex", "x", "x");

        assert!(matches!(result, Err(CafeError::Duplicate { .. })));
        assert_eq!(fixture.store.list_users().unwrap().len(), 1);
    }

    #[test]
    fn usernames_are_case_sensitive() {
        let mut fixture = StoreFixture::new().with_user("alex", "pw");
        let mut session = Session::new();

        create(&mut fixture.store, &mut session, "Alex", "x", "x").unwrap();
        assert_eq!(fixture.store.list_users().unwrap().len(), 2);
    }

    #[test]
    fn reserved_and_blank_usernames_rejected() {
        assert!(validate_username("  ").is_err());
        assert!(validate_username("exit").is_err());
        assert!(validate_username("alex").is_ok());
    }

    #[test]
    fn sign_in_checks_password() {
        let fixture = StoreFixture::new().with_user("alex", "pass1");
        let mut session = Session::new();

        let wrong = sign_in(&fixture.store, &mut session, "alex", "nope");
        assert!(matches!(wrong, Err(CafeError::Validation(_))));
        assert!(!session.is_signed_in());

        let result = sign_in(&fixture.store, &mut session, "alex", "pass1").unwrap();
        assert_eq!(session.user_id(), Some(fixture.user("alex").id));
        assert_eq!(result.messages[0].content, "Welcome back, alex!");
    }

    #[test]
    fn sign_in_unknown_user() {
        let store = InMemoryStore::new();
        let mut session = Session::new();
        assert!(matches!(
            sign_in(&store, &mut session, "ghost", "pw"),
            Err(CafeError::NotFound { entity: "User", .. })
        ));
    }

    #[test]
    fn sign_out_only_affects_session_user() {
        let fixture = StoreFixture::new()
            .with_user("alex", "pw")
            .with_user("sam", "pw");
        let mut session = Session::new();
        session.sign_in(fixture.user("alex").id);

        let result = sign_out(&mut session);

        assert!(!session.is_signed_in());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(fixture.store.list_users().unwrap().len(), 2);
        assert!(sign_out(&mut session).messages.is_empty());
    }

    #[test]
    fn delete_removes_orders_then_user() {
        let mut fixture = StoreFixture::new()
            .with_menu_drink("Latte", 4, &[])
            .with_user("alex", "pw")
            .with_user("sam", "pw");
        let alex = fixture.user("alex");
        let sam = fixture.user("sam");
        let latte = fixture.drink("Latte");

        let mut session = Session::new();
        session.sign_in(sam.id);
        order::confirm(&mut fixture.store, &session, &latte.id).unwrap();
        session.sign_in(alex.id);
        order::confirm(&mut fixture.store, &session, &latte.id).unwrap();
        order::confirm(&mut fixture.store, &session, &latte.id).unwrap();

        let result = delete(&mut fixture.store, &mut session).unwrap();

        assert_eq!(result.messages[0].content, "Your account has been deleted.");
        assert!(!session.is_signed_in());
        assert!(fixture.store.find_user(&alex.id).unwrap().is_none());
        let orders = fixture.store.list_orders().unwrap();
        assert_eq!(orders.len(), 1);
        assert!(orders.iter().all(|o| o.user_id != Some(alex.id)));
        assert_eq!(fixture.store.list_drinks().unwrap().len(), 1);
    }

    #[test]
    fn delete_without_session_fails() {
        let mut store = InMemoryStore::new();
        let mut session = Session::new();
        assert!(delete(&mut store, &mut session).is_err());
    }
}
