//! # Shop State Machine
//!
//! The interactive shop is a finite-state machine. [`State`] names every screen; each
//! handler shows its screen, reads the customer's answer and returns the next state.
//! [`Shop::run`] drives the loop from `Welcome` until `Exit`, so a session of any length
//! runs in constant stack.
//!
//! ```text
//! Welcome ─┬─ NewOrder ─┬─ ReviewOrder(drink) ─┬─ ConfirmOrder(drink) ─→ Welcome
//!          │            └─ Customize ──────────┘
//!          ├─ SignIn ─────────→ Welcome
//!          ├─ CreateAccount ──→ Welcome
//!          ├─ AccountMenu ─┬─ ViewOrderHistory ─→ AccountMenu
//!          │               ├─ ViewFavorites ────→ AccountMenu
//!          │               └─ DeleteAccount ────→ Welcome
//!          ├─ SignOut ────────→ Welcome
//!          └─ Exit
//! ```
//!
//! Handlers get everything through the [`Shop`]: the terminal, the API (which owns the
//! session) and the runtime [`Settings`]. Input that cannot be read ends the loop with an
//! error.

use super::render;
use super::terminal::Terminal;
use cafeapp::api::CafeApi;
use cafeapp::commands::account::EXIT_SENTINEL;
use cafeapp::config::CafeConfig;
use cafeapp::display;
use cafeapp::error::{CafeError, Result};
use cafeapp::store::DataStore;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Welcome,
    NewOrder,
    Customize,
    ReviewOrder(Uuid),
    ConfirmOrder(Uuid),
    SignIn,
    CreateAccount,
    AccountMenu,
    ViewOrderHistory,
    ViewFavorites,
    DeleteAccount,
    SignOut,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub password_attempts: u32,
    pub confirm_pause: Duration,
    pub notice_pause: Duration,
    pub farewell_pause: Duration,
}

impl Settings {
    /// `no_pause` zeroes every pause.
    pub fn new(config: &CafeConfig, no_pause: bool) -> Self {
        let pause = |d: Duration| if no_pause { Duration::ZERO } else { d };
        Self {
            password_attempts: config.password_attempts(),
            confirm_pause: pause(config.confirm_pause()),
            notice_pause: pause(config.notice_pause()),
            farewell_pause: pause(config.farewell_pause()),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(&CafeConfig::default(), false)
    }
}

pub struct Shop<'a, T: Terminal, S: DataStore> {
    term: &'a mut T,
    api: &'a mut CafeApi<S>,
    settings: Settings,
}

impl<'a, T: Terminal, S: DataStore> Shop<'a, T, S> {
    pub fn new(term: &'a mut T, api: &'a mut CafeApi<S>, settings: Settings) -> Self {
        Self {
            term,
            api,
            settings,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut state = State::Welcome;
        while state != State::Exit {
            debug!(?state, "entering state");
            state = self.step(state)?;
        }
        self.exit()
    }

    /// Runs one state's handler and returns the state it leads to.
    pub fn step(&mut self, state: State) -> Result<State> {
        match state {
            State::Welcome => self.welcome(),
            State::NewOrder => self.new_order(),
            State::Customize => self.customize(),
            State::ReviewOrder(drink_id) => self.review_order(drink_id),
            State::ConfirmOrder(drink_id) => self.confirm_order(drink_id),
            State::SignIn => self.sign_in(),
            State::CreateAccount => self.create_account(),
            State::AccountMenu => self.account_menu(),
            State::ViewOrderHistory => self.view_order_history(),
            State::ViewFavorites => self.view_favorites(),
            State::DeleteAccount => self.delete_account(),
            State::SignOut => self.sign_out(),
            State::Exit => Ok(State::Exit),
        }
    }

    fn choose(&mut self, question: &str, choices: &[&str]) -> Result<usize> {
        let choices: Vec<String> = choices.iter().map(|c| c.to_string()).collect();
        Ok(self.term.select(question, &choices)?)
    }

    fn welcome(&mut self) -> Result<State> {
        self.term.clear()?;
        let question = "Please choose from one of the following options:";
        if self.api.is_signed_in()? {
            let choice = self.choose(
                question,
                &["Order", "Account Information", "Sign Out", "Exit"],
            )?;
            Ok(match choice {
                0 => State::NewOrder,
                1 => State::AccountMenu,
                2 => State::SignOut,
                _ => State::Exit,
            })
        } else {
            let choice = self.choose(question, &["Order", "Sign In", "Create Account", "Exit"])?;
            Ok(match choice {
                0 => State::NewOrder,
                1 => State::SignIn,
                2 => State::CreateAccount,
                _ => State::Exit,
            })
        }
    }

    fn new_order(&mut self) -> Result<State> {
        self.term.clear()?;
        let menu = self.api.order_menu()?;

        let drinks: Vec<_> = menu
            .listed_drinks
            .iter()
            .chain(menu.favorite_drinks.iter())
            .collect();
        let mut choices: Vec<String> = drinks.iter().map(|d| display::drink_line(d)).collect();
        choices.push("Create your own".to_string());
        choices.push("Go Back".to_string());

        let choice = self
            .term
            .select("Please choose from one of the following drink options:", &choices)?;
        Ok(match drinks.get(choice) {
            Some(detail) => State::ReviewOrder(detail.drink.id),
            None if choice == drinks.len() => State::Customize,
            None => State::Welcome,
        })
    }

    fn customize(&mut self) -> Result<State> {
        let ingredients = self.api.ingredients()?;
        let choices: Vec<String> = ingredients
            .iter()
            .map(|i| format!("{} ({})", i.name, i.kind))
            .collect();

        let picked = self
            .term
            .multi_select("Please select ingredients", &choices)?;
        let names: Vec<&str> = picked
            .iter()
            .filter_map(|&i| ingredients.get(i))
            .map(|i| i.name.as_str())
            .collect();

        let result = self.api.customize(&names)?;
        let drink_id = result
            .affected_drinks
            .first()
            .map(|d| d.drink.id)
            .ok_or_else(|| CafeError::Store("No drink was created".to_string()))?;
        Ok(State::ReviewOrder(drink_id))
    }

    fn review_order(&mut self, drink_id: Uuid) -> Result<State> {
        self.term.clear()?;
        let review = self.api.review_order(&drink_id)?;
        if let Some(detail) = review.listed_drinks.first() {
            render::print_review(self.term, detail)?;
        }

        let choice = self.choose(
            "Would you like to CONFIRM ORDER or go back?:",
            &["Confirm", "Go back"],
        )?;
        Ok(match choice {
            0 => State::ConfirmOrder(drink_id),
            _ => State::NewOrder,
        })
    }

    fn confirm_order(&mut self, drink_id: Uuid) -> Result<State> {
        self.term.clear()?;
        let result = self.api.confirm_order(&drink_id)?;
        render::print_messages(self.term, &result.messages)?;
        self.term.pause(self.settings.confirm_pause);
        Ok(State::Welcome)
    }

    fn sign_in(&mut self) -> Result<State> {
        let username = self
            .term
            .prompt("Please enter username or type 'exit' to exit")?;
        if username == EXIT_SENTINEL {
            return Ok(State::Welcome);
        }
        if !self.api.username_taken(&username)? {
            render::print_error(self.term, "User does not exist")?;
            self.term.pause(self.settings.notice_pause);
            return Ok(State::Welcome);
        }

        let attempts = self.settings.password_attempts;
        for attempt in 1..=attempts {
            let password = self.term.masked("Please enter your password:")?;
            match self.api.sign_in(&username, &password) {
                Ok(result) => {
                    render::print_messages(self.term, &result.messages)?;
                    self.term.pause(self.settings.notice_pause);
                    return Ok(State::Welcome);
                }
                Err(CafeError::Validation(message)) => {
                    let left = attempts - attempt;
                    if left > 0 {
                        render::print_error(
                            self.term,
                            &format!("{} {} attempt(s) left.", message, left),
                        )?;
                    } else {
                        render::print_error(self.term, &message)?;
                    }
                }
                Err(e) => return Err(e),
            }
        }

        render::print_error(self.term, "Too many failed attempts.")?;
        self.term.pause(self.settings.notice_pause);
        Ok(State::SignIn)
    }

    fn create_account(&mut self) -> Result<State> {
        let username = self
            .term
            .prompt("Please enter a username or type 'exit' to return to the main menu:")?;
        if username == EXIT_SENTINEL {
            return Ok(State::Welcome);
        }
        if username.trim().is_empty() {
            render::print_error(self.term, "Username cannot be empty.")?;
            return Ok(State::CreateAccount);
        }
        if self.api.username_taken(&username)? {
            render::print_error(self.term, "Username already exists.")?;
            return Ok(State::CreateAccount);
        }

        let password = self.term.masked("Please create a password:")?;
        let confirmation = self.term.masked("Please re-enter password:")?;
        match self.api.create_account(&username, &password, &confirmation) {
            Ok(result) => {
                render::print_messages(self.term, &result.messages)?;
                self.term.pause(self.settings.notice_pause);
                Ok(State::Welcome)
            }
            Err(CafeError::Validation(message)) => {
                render::print_error(self.term, &message)?;
                self.term.pause(self.settings.notice_pause);
                Ok(State::CreateAccount)
            }
            Err(CafeError::Duplicate { .. }) => {
                render::print_error(self.term, "Username already exists.")?;
                Ok(State::CreateAccount)
            }
            Err(e) => Err(e),
        }
    }

    fn account_menu(&mut self) -> Result<State> {
        if !self.api.is_signed_in()? {
            return Ok(State::Welcome);
        }
        self.term.clear()?;
        let choice = self.choose(
            "Find the following account options:",
            &[
                "View my Order History",
                "View my Favorites",
                "Delete my Account",
                "Go Back",
            ],
        )?;
        Ok(match choice {
            0 => State::ViewOrderHistory,
            1 => State::ViewFavorites,
            2 => State::DeleteAccount,
            _ => State::Welcome,
        })
    }

    fn view_order_history(&mut self) -> Result<State> {
        if !self.api.is_signed_in()? {
            return Ok(State::Welcome);
        }
        self.term.clear()?;
        let result = self.api.order_history()?;
        render::print_order_history(self.term, &result.listed_orders)?;
        self.term
            .wait_for_enter("Press 'enter' to return to the previous menu.")?;
        Ok(State::AccountMenu)
    }

    fn view_favorites(&mut self) -> Result<State> {
        if !self.api.is_signed_in()? {
            return Ok(State::Welcome);
        }
        self.term.clear()?;
        let result = self.api.favorites()?;
        render::print_favorites(self.term, &result.favorite_drinks)?;
        self.term
            .wait_for_enter("Press 'enter' to return to the previous menu.")?;
        Ok(State::AccountMenu)
    }

    fn delete_account(&mut self) -> Result<State> {
        if !self.api.is_signed_in()? {
            return Ok(State::Welcome);
        }
        self.term.clear()?;
        let choice = self.choose(
            "Would you like to DELETE your account?",
            &["Delete", "Go back"],
        )?;
        if choice != 0 {
            return Ok(State::AccountMenu);
        }

        let result = self.api.delete_account()?;
        render::print_messages(self.term, &result.messages)?;
        self.term.pause(self.settings.notice_pause);
        Ok(State::Welcome)
    }

    fn sign_out(&mut self) -> Result<State> {
        let choice = self.choose("Are you sure that you want to sign out?", &["Yes", "No"])?;
        if choice == 0 {
            self.api.sign_out();
        }
        Ok(State::Welcome)
    }

    fn exit(&mut self) -> Result<()> {
        render::print_farewell(self.term)?;
        self.api.end_session();
        self.term.pause(self.settings.farewell_pause);
        Ok(())
    }
}
