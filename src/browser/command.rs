use std::str::FromStr;

use crate::error::BrowseError;
use crate::route::Route;

/// One line of input in the interactive browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    /// Jump to a list page
    Page(u32),
    /// Open the card at a 1-based position on the current list page
    Open(usize),
    /// Navigate to any client URL
    Go(Route),
    Back,
    Reload,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  n, next          next page
  p, prev          previous page
  N, page N        go to page N
  o K, open K      open card K on this page
  g URL, go URL    open a URL such as /?page=3 or /recipe/7
  b, back          go back
  r, reload        fetch the current page again
  h, help          show this list
  q, quit          leave";

impl FromStr for Command {
    type Err = BrowseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let (word, arg) = match input.split_once(char::is_whitespace) {
            Some((word, arg)) => (word, Some(arg.trim())),
            None => (input, None),
        };
        let invalid = || BrowseError::InvalidCommand(input.to_string());

        let command = match (word.to_ascii_lowercase().as_str(), arg) {
            ("n" | "next", None) => Command::Next,
            ("p" | "prev" | "previous", None) => Command::Previous,
            ("page", Some(n)) => Command::Page(n.parse().map_err(|_| invalid())?),
            ("o" | "open", Some(k)) => Command::Open(k.parse().map_err(|_| invalid())?),
            ("g" | "go", Some(url)) => Command::Go(Route::parse(url)?),
            ("b" | "back", None) => Command::Back,
            ("r" | "reload", None) => Command::Reload,
            ("h" | "help" | "?", None) => Command::Help,
            ("q" | "quit" | "exit", None) => Command::Quit,
            (number, None) if number.chars().all(|c| c.is_ascii_digit()) && !number.is_empty() => {
                Command::Page(number.parse().map_err(|_| invalid())?)
            }
            _ => return Err(invalid()),
        };
        Ok(command)
    }
}
