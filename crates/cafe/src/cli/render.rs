use super::terminal::Terminal;
use cafeapp::api::{CmdMessage, MessageLevel};
use cafeapp::display;
use cafeapp::model::{DrinkDetail, OrderDetail};
use colored::Colorize;
use std::io;

pub const FAREWELL: &str = "

Have a Great Day!

 ██████╗  ██████╗  ██████╗ ██████╗ ██████╗ ██╗   ██╗███████╗██╗
 ██╔════╝ ██╔═══██╗██╔═══██╗██╔══██╗██╔══██╗╚██╗ ██╔╝██╔════╝██║
 ██║  ███╗██║   ██║██║   ██║██║  ██║██████╔╝ ╚████╔╝ █████╗  ██║
 ██║   ██║██║   ██║██║   ██║██║  ██║██╔══██╗  ╚██╔╝  ██╔══╝  ╚═╝
 ╚██████╔╝╚██████╔╝╚██████╔╝██████╔╝██████╔╝   ██║   ███████╗██╗
  ╚═════╝  ╚═════╝  ╚═════╝ ╚═════╝ ╚═════╝    ╚═╝   ╚══════╝╚═╝
";

pub fn render_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.dimmed().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
        MessageLevel::Error => message.content.red().to_string(),
    }
}

pub fn print_messages<T: Terminal>(term: &mut T, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        term.write_line(&render_message(message))?;
    }
    Ok(())
}

pub fn print_error<T: Terminal>(term: &mut T, message: &str) -> io::Result<()> {
    term.write_line(&message.red().to_string())
}

pub fn print_review<T: Terminal>(term: &mut T, detail: &DrinkDetail) -> io::Result<()> {
    for line in display::review_lines(detail) {
        term.write_line(&line)?;
    }
    Ok(())
}

pub fn print_order_history<T: Terminal>(term: &mut T, orders: &[OrderDetail]) -> io::Result<()> {
    if orders.is_empty() {
        return term.write_line("No orders yet.");
    }
    term.write_line("Here is a list of your Orders:")?;
    for order in orders {
        term.write_line(&display::order_block(order))?;
    }
    Ok(())
}

pub fn print_favorites<T: Terminal>(term: &mut T, favorites: &[DrinkDetail]) -> io::Result<()> {
    if favorites.is_empty() {
        return term.write_line("No favorites yet.");
    }
    term.write_line("Here is a list of your Favorites:")?;
    for detail in favorites {
        term.write_line(&display::favorite_line(detail))?;
    }
    Ok(())
}

pub fn print_farewell<T: Terminal>(term: &mut T) -> io::Result<()> {
    term.write_line(&FAREWELL.bold().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::terminal::ScriptedTerminal;
    use cafeapp::model::{Drink, Ingredient};

    #[test]
    fn messages_keep_their_text() {
        colored::control::set_override(false);
        let rendered = render_message(&CmdMessage::success("Welcome back, alex!"));
        assert_eq!(rendered, "Welcome back, alex!");
    }

    #[test]
    fn empty_lists_have_placeholders() {
        let mut term = ScriptedTerminal::default();
        print_order_history(&mut term, &[]).unwrap();
        print_favorites(&mut term, &[]).unwrap();
        assert_eq!(term.output, vec!["No orders yet.", "No favorites yet."]);
    }

    #[test]
    fn favorites_use_tilde_lines() {
        let mut term = ScriptedTerminal::default();
        let detail = DrinkDetail {
            drink: Drink::custom("Custom #1", 2),
            ingredients: vec![
                Ingredient::new("Oat Milk", "Milk"),
                Ingredient::new("Vanilla", "Syrup"),
            ],
        };
        print_favorites(&mut term, &[detail]).unwrap();
        assert_eq!(term.output[1], "~ Custom #1 | $2 | Oat Milk, Vanilla");
    }

    #[test]
    fn farewell_banner() {
        assert!(FAREWELL.contains("Have a Great Day!"));
    }
}
