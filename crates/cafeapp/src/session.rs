//! # Session
//!
//! The signed-in user is transient state of one running shop, not a property of the account.
//! [`Session`] holds it in memory for the life of the process; nothing about it is persisted,
//! so a crash or exit can never leave an account "stuck" signed in.
//!
//! One process serves one customer at a time. Serving concurrent customers would need one
//! `Session` per connection.

use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user_id: Option<Uuid>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_id(&self) -> Option<Uuid> {
        self.user_id
    }

    pub fn is_signed_in(&self) -> bool {
        self.user_id.is_some()
    }

    /// Signs `user_id` in, replacing whoever was signed in before.
    pub fn sign_in(&mut self, user_id: Uuid) {
        self.user_id = Some(user_id);
    }

    /// Signs out, returning the user that was signed in.
    pub fn sign_out(&mut self) -> Option<Uuid> {
        self.user_id.take()
    }
}
