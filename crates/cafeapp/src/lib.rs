//! # Cafe Architecture
//!
//! Cafe is a **UI-agnostic beverage shop library**: menu browsing, custom drinks, accounts,
//! order history and favorites. The interactive terminal shop in the `cafe` crate is one
//! client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cafe crate)                                           │
//! │  - Menu state machine, prompts, pauses, colors              │
//! │  - The ONLY place that knows about the terminal             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the session              │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Ordering, customizing, accounts, favorites, history      │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments and returns `Result<CmdResult>`.
//! It never prints, never sleeps and never calls `std::process::exit`.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: thorough unit tests over `InMemoryStore`.
//! 2. **API**: dispatch and session threading.
//! 3. **Store**: `InMemoryStore` unit tests, `FileStore` integration tests on a temp dir.
//! 4. **CLI**: state machine tests with a scripted terminal, plus end-to-end binary runs.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Users, drinks, ingredients, recipe items, orders
//! - [`session`]: The signed-in user of the running shop
//! - [`display`]: Plain-text formatting of drinks and orders
//! - [`password`]: Password hashing
//! - [`seed`]: The fixed catalog
//! - [`config`]: Configuration
//! - [`init`]: Data directory resolution and context setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod init;
pub mod model;
pub mod password;
pub mod seed;
pub mod session;
pub mod store;
