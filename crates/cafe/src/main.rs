//! # Cafe CLI
//!
//! An interactive beverage shop in the terminal: order from the menu, build your own drink,
//! create an account to keep an order history and favorites.
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/cafeapp/`: Core library with UI-agnostic business logic and storage
//! - `crates/cafe/`: This CLI, depends on `cafeapp`
//!
//! ## Testing Approach
//!
//! - **Commands layer (`cafeapp::commands`)**: unit tests over an in-memory store.
//! - **State machine (`src/cli/states.rs`)**: handlers driven by a scripted terminal.
//! - **End to end (`tests/`)**: the real binary fed through stdin against a temp data dir.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
