//! The line-oriented command interpreter.
//!
//! [`parse_input`] splits a raw line into a command word and its arguments;
//! [`dispatch`] routes the command to its handler and turns the outcome into
//! printable text. The REPL in `main.rs` owns stdin/stdout and nothing else.

pub mod handlers;

use crate::book::AddressBook;
use crate::error::CommandResult;
use chrono::NaiveDate;
use tracing::debug;

/// Result of dispatching one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Text to print before reading the next line.
    Reply(String),
    /// Text to print before terminating the loop.
    Exit(String),
}

/// Split a raw input line into a lowercased command word and its arguments.
///
/// Returns `None` for blank lines. Arguments keep their original case;
/// contact names are case-sensitive.
pub fn parse_input(input: &str) -> Option<(String, Vec<&str>)> {
    let mut parts = input.split_whitespace();
    let command = parts.next()?.to_lowercase();
    Some((command, parts.collect()))
}

/// Route one input line to its handler.
///
/// `today` and `horizon_days` parameterize the upcoming-birthday query; the
/// REPL passes the current date and the configured horizon. Every handler
/// error is rendered here and returned as an ordinary reply, so no input
/// line can take down the loop.
pub fn dispatch(
    line: &str,
    book: &mut AddressBook,
    today: NaiveDate,
    horizon_days: i64,
) -> Dispatch {
    let Some((command, args)) = parse_input(line) else {
        return Dispatch::Reply(String::new());
    };

    debug!(command, args = args.len(), "dispatching");

    match command.as_str() {
        "close" | "exit" => Dispatch::Exit("Good bye!".to_string()),
        "hello" => Dispatch::Reply("How can I help you?".to_string()),
        "add" => reply(handlers::add_contact(&args, book)),
        "change" => reply(handlers::change_contact(&args, book)),
        "phone" => reply(handlers::show_phone(&args, book)),
        "all" => reply(handlers::show_all(book)),
        "add-birthday" => reply(handlers::add_birthday(&args, book)),
        "show-birthday" => reply(handlers::show_birthday(&args, book)),
        "birthdays" => reply(handlers::birthdays(book, today, horizon_days)),
        _ => Dispatch::Reply("Invalid command.".to_string()),
    }
}

/// The error-translation boundary: render a handler error as reply text.
fn reply(result: CommandResult<String>) -> Dispatch {
    match result {
        Ok(text) => Dispatch::Reply(text),
        Err(err) => Dispatch::Reply(err.to_string()),
    }
}
