//! # CLI Behavior
//!
//! The interactive shop: numbered menus on stdout, answers on stdin.
//!
//! For the overall architecture, see the `cafeapp` crate documentation.
//!
//! ## Input
//!
//! - **Menus** list numbered choices and take the number. Anything else re-prompts.
//! - **Ingredient selection** takes several numbers separated by spaces or commas.
//! - **Usernames** accept `exit` to go back to the main menu.
//! - **Passwords** are masked on a real terminal.
//!
//! When stdin is not a terminal the shop reads plain lines, so a whole session can be
//! scripted: `printf '1\n1\n1\n4\n' | cafe --no-pause` orders a Latte and leaves.
//! Running out of input ends the program with an error.
//!
//! ## Module Structure
//!
//! - `commands`: Context wiring, logging setup and the entry point
//! - `states`: The menu state machine
//! - `terminal`: The terminal abstraction and its console implementation
//! - `render`: Colored messages, lists and the farewell banner
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;
mod states;
mod terminal;

pub use commands::run;
