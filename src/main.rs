//! Contact Book - Main entry point
//!
//! Runs the read-eval-print loop of the assistant bot: reads one command
//! per line from stdin, dispatches it against the in-memory address book,
//! and prints the reply.

use anyhow::Result;
use chrono::Local;
use contact_book::commands::{dispatch, Dispatch};
use contact_book::{AddressBook, Config};
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only; stdout belongs to the REPL)
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(horizon_days = config.horizon_days, "configuration loaded");

    let mut book = AddressBook::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Welcome to the assistant bot!");

    loop {
        print!("Enter a command: ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF behaves like an explicit exit
            println!("Good bye!");
            break;
        }

        let today = Local::now().date_naive();
        match dispatch(&line, &mut book, today, config.horizon_days) {
            Dispatch::Reply(text) => {
                if !text.is_empty() {
                    println!("{}", text);
                }
            }
            Dispatch::Exit(text) => {
                println!("{}", text);
                break;
            }
        }
    }

    info!(contacts = book.len(), "assistant bot shutdown complete");
    Ok(())
}
