//! # Terminal
//!
//! Every state handler talks to the customer through a [`Terminal`] handed to it, never
//! through process-wide handles. Implementations provide five primitives; the numbered
//! menus, multi-selection and masked prompts are built on top of them as default methods so
//! every implementation behaves the same way.
//!
//! [`ConsoleTerminal`] is the real one. When stdin is not a terminal (a scripted session) it
//! reads plain lines, never masks, and never clears the screen.

use console::Term;
use std::io::{self, BufRead, IsTerminal};
use std::thread;
use std::time::Duration;

pub trait Terminal {
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// One line without its line ending. End of input is `UnexpectedEof`.
    fn read_line(&mut self) -> io::Result<String>;

    /// Like [`read_line`](Terminal::read_line) but not echoed.
    fn read_secret(&mut self) -> io::Result<String>;

    fn clear(&mut self) -> io::Result<()>;

    fn pause(&mut self, duration: Duration);

    fn prompt(&mut self, question: &str) -> io::Result<String> {
        self.write_line(question)?;
        self.read_line()
    }

    fn masked(&mut self, question: &str) -> io::Result<String> {
        self.write_line(question)?;
        self.read_secret()
    }

    /// A numbered single-choice menu. Returns the zero-based index of the choice.
    fn select(&mut self, question: &str, choices: &[String]) -> io::Result<usize> {
        if choices.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "menu without choices",
            ));
        }
        self.write_line(question)?;
        for (i, choice) in choices.iter().enumerate() {
            self.write_line(&format!("  {}. {}", i + 1, choice))?;
        }
        loop {
            let answer = self.read_line()?;
            match parse_choice(&answer, choices.len()) {
                Some(index) => return Ok(index),
                None => self.write_line(&range_hint(choices.len()))?,
            }
        }
    }

    /// A numbered multi-choice menu. Answers are choice numbers separated by spaces or
    /// commas; a blank answer selects nothing. Indexes come back in the order given.
    fn multi_select(&mut self, question: &str, choices: &[String]) -> io::Result<Vec<usize>> {
        self.write_line(question)?;
        for (i, choice) in choices.iter().enumerate() {
            self.write_line(&format!("  {}. {}", i + 1, choice))?;
        }
        self.write_line("Enter the numbers of your choices separated by spaces, or leave blank for none:")?;
        loop {
            let answer = self.read_line()?;
            match parse_choices(&answer, choices.len()) {
                Some(indexes) => return Ok(indexes),
                None => self.write_line(&range_hint(choices.len()))?,
            }
        }
    }

    /// Waits for any line.
    fn wait_for_enter(&mut self, message: &str) -> io::Result<()> {
        self.write_line(message)?;
        self.read_line().map(|_| ())
    }
}

fn range_hint(count: usize) -> String {
    format!("Please enter a number between 1 and {}.", count)
}

pub fn parse_choice(answer: &str, count: usize) -> Option<usize> {
    match answer.trim().parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Some(n - 1),
        _ => None,
    }
}

pub fn parse_choices(answer: &str, count: usize) -> Option<Vec<usize>> {
    answer
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| parse_choice(token, count))
        .collect()
}

fn eof() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "input closed")
}

pub struct ConsoleTerminal {
    term: Term,
    interactive: bool,
    clear_screen: bool,
}

impl ConsoleTerminal {
    pub fn new(clear_screen: bool) -> Self {
        let term = Term::stdout();
        let interactive = io::stdin().is_terminal() && term.is_term();
        Self {
            term,
            interactive,
            clear_screen,
        }
    }

    fn read_plain_line(&self) -> io::Result<String> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(eof());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Terminal for ConsoleTerminal {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.term.write_line(line)
    }

    fn read_line(&mut self) -> io::Result<String> {
        if self.interactive {
            self.term.read_line()
        } else {
            self.read_plain_line()
        }
    }

    fn read_secret(&mut self) -> io::Result<String> {
        if self.interactive {
            self.term.read_secure_line()
        } else {
            self.read_plain_line()
        }
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.interactive && self.clear_screen {
            self.term.clear_screen()?;
        }
        Ok(())
    }

    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

/// A terminal fed from a fixed script, recording everything written.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    input: std::collections::VecDeque<String>,
    pub output: Vec<String>,
    pub pauses: Vec<Duration>,
    pub clears: usize,
}

#[cfg(test)]
impl ScriptedTerminal {
    pub fn new<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

#[cfg(test)]
impl Terminal for ScriptedTerminal {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<String> {
        self.input.pop_front().ok_or_else(eof)
    }

    fn read_secret(&mut self) -> io::Result<String> {
        self.read_line()
    }

    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn select_reprompts_until_valid() {
        let mut term = ScriptedTerminal::new(["0", "abc", "4", "2"]);
        let index = term
            .select("Pick one:", &choices(&["A", "B", "C"]))
            .unwrap();

        assert_eq!(index, 1);
        assert!(term.printed("  1. A"));
        let hints = term
            .output
            .iter()
            .filter(|l| *l == "Please enter a number between 1 and 3.")
            .count();
        assert_eq!(hints, 3);
    }

    #[test]
    fn select_on_closed_input_fails() {
        let mut term = ScriptedTerminal::new(Vec::<String>::new());
        let err = term.select("Pick one:", &choices(&["A"])).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn multi_select_parses_lists() {
        let mut term = ScriptedTerminal::new(["1, 3 3", "", "9", "2"]);
        let list = choices(&["A", "B", "C"]);

        assert_eq!(term.multi_select("Pick:", &list).unwrap(), vec![0, 2, 2]);
        assert!(term.multi_select("Pick:", &list).unwrap().is_empty());
        assert_eq!(term.multi_select("Pick:", &list).unwrap(), vec![1]);
        assert!(term.printed("Please enter a number between 1 and 3."));
    }

    #[test]
    fn parse_choice_bounds() {
        assert_eq!(parse_choice(" 1 ", 2), Some(0));
        assert_eq!(parse_choice("2", 2), Some(1));
        assert_eq!(parse_choice("3", 2), None);
        assert_eq!(parse_choice("-1", 2), None);
        assert_eq!(parse_choices("1,,2", 2), Some(vec![0, 1]));
        assert_eq!(parse_choices("1 x", 2), None);
    }
}
