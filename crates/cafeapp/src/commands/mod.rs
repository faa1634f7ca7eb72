//! # Command Layer
//!
//! This module contains the **core business logic** of the shop. Each command lives in its
//! own submodule and implements pure Rust functions over a [`DataStore`](crate::store::DataStore)
//! and, where it matters, the current [`Session`](crate::session::Session).
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: No stdout, stderr, prompts, pauses or screen clearing
//! - **Flow control**: Which menu comes next is the CLI's state machine's job
//! - **Exit codes**: Return `Result`, let the caller decide
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings. It carries the drinks, orders and user the
//! operation touched or listed, plus leveled [`CmdMessage`]s for the UI to show.
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests use
//! `InMemoryStore` and the store fixtures to avoid filesystem dependencies.
//!
//! ## Command Modules
//!
//! - [`account`]: Create accounts, sign in and out, delete accounts
//! - [`menu`]: Menu items, the signed-in order menu, ingredient grouping
//! - [`customize`]: Build a custom drink from ingredients
//! - [`order`]: Review and confirm orders
//! - [`favorites`]: Favorite marking and the unique favorites list
//! - [`history`]: A user's order history
//! - [`helpers`]: Shared lookups (current user, drink details)

use crate::model::{DrinkDetail, Order, OrderDetail, User};
use serde::Serialize;

pub mod account;
pub mod customize;
pub mod favorites;
pub mod helpers;
pub mod history;
pub mod menu;
pub mod order;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Drinks created or changed by the command.
    pub affected_drinks: Vec<DrinkDetail>,
    /// Drinks to display (menu items, the drink under review).
    pub listed_drinks: Vec<DrinkDetail>,
    /// The signed-in user's unique favorite drinks.
    pub favorite_drinks: Vec<DrinkDetail>,
    /// Orders created or changed by the command.
    pub affected_orders: Vec<Order>,
    /// Orders to display, with their drinks.
    pub listed_orders: Vec<OrderDetail>,
    pub user: Option<User>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_drinks(mut self, drinks: Vec<DrinkDetail>) -> Self {
        self.listed_drinks = drinks;
        self
    }

    pub fn with_favorite_drinks(mut self, drinks: Vec<DrinkDetail>) -> Self {
        self.favorite_drinks = drinks;
        self
    }

    pub fn with_listed_orders(mut self, orders: Vec<OrderDetail>) -> Self {
        self.listed_orders = orders;
        self
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }
}
