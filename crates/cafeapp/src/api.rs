//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point for
//! every shop operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the store and the current [`Session`]
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No prompts, no stdout, no pauses
//! - **Presentation concerns**: Returns data, not strings
//!
//! ## Generic Over DataStore
//!
//! `CafeApi<S: DataStore>` is generic over the storage backend:
//! - Production: `CafeApi<FileStore>`
//! - Testing: `CafeApi<InMemoryStore>`
//!
//! ## Testing Strategy
//!
//! API tests check that each method reaches the right command and that the session is
//! threaded through. Command logic is tested in the command modules.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::model::{Drink, Ingredient, User};
use crate::seed::{self, SeedReport};
use crate::session::Session;
use crate::store::DataStore;
use uuid::Uuid;

pub use crate::commands::{CmdMessage, MessageLevel};

/// The main API facade for shop operations.
pub struct CafeApi<S: DataStore> {
    store: S,
    session: Session,
}

impl<S: DataStore> CafeApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            session: Session::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn seed(&mut self) -> Result<SeedReport> {
        seed::ensure_seeded(&mut self.store)
    }

    // --- Session ---

    pub fn current_user(&self) -> Result<Option<User>> {
        commands::helpers::current_user(&self.store, &self.session)
    }

    pub fn is_signed_in(&self) -> Result<bool> {
        commands::helpers::is_signed_in(&self.store, &self.session)
    }

    /// Ends the session without touching any account.
    pub fn end_session(&mut self) {
        self.session.sign_out();
    }

    // --- Accounts ---

    pub fn username_taken(&self, username: &str) -> Result<bool> {
        commands::account::username_taken(&self.store, username)
    }

    pub fn create_account(
        &mut self,
        username: &str,
        password: &str,
        confirmation: &str,
    ) -> Result<CmdResult> {
        commands::account::create(
            &mut self.store,
            &mut self.session,
            username,
            password,
            confirmation,
        )
    }

    pub fn sign_in(&mut self, username: &str, password: &str) -> Result<CmdResult> {
        commands::account::sign_in(&self.store, &mut self.session, username, password)
    }

    pub fn sign_out(&mut self) -> CmdResult {
        commands::account::sign_out(&mut self.session)
    }

    pub fn delete_account(&mut self) -> Result<CmdResult> {
        commands::account::delete(&mut self.store, &mut self.session)
    }

    // --- Ordering ---

    pub fn order_menu(&self) -> Result<CmdResult> {
        commands::menu::run(&self.store, &self.session)
    }

    pub fn menu_items(&self) -> Result<Vec<Drink>> {
        commands::menu::menu_items(&self.store)
    }

    pub fn ingredients(&self) -> Result<Vec<Ingredient>> {
        commands::menu::ingredients_grouped(&self.store)
    }

    pub fn customize<I: AsRef<str>>(&mut self, ingredient_names: &[I]) -> Result<CmdResult> {
        let names: Vec<String> = ingredient_names
            .iter()
            .map(|n| n.as_ref().to_string())
            .collect();
        commands::customize::run(&mut self.store, &names)
    }

    pub fn review_order(&self, drink_id: &Uuid) -> Result<CmdResult> {
        commands::order::review(&self.store, drink_id)
    }

    pub fn confirm_order(&mut self, drink_id: &Uuid) -> Result<CmdResult> {
        commands::order::confirm(&mut self.store, &self.session, drink_id)
    }

    // --- Account views ---

    pub fn order_history(&self) -> Result<CmdResult> {
        commands::history::run(&self.store, &self.session)
    }

    pub fn favorites(&self) -> Result<CmdResult> {
        commands::favorites::run(&self.store, &self.session)
    }

    pub fn unique_favorite_names(&self) -> Result<Vec<String>> {
        match self.current_user()? {
            Some(user) => commands::favorites::unique_favorite_names(&self.store, &user.id),
            None => Ok(Vec::new()),
        }
    }
}
