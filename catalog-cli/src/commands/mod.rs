//! Console commands
//!
//! Each command opens a view, runs one handler, and prints the outcome.
//! Handlers never fail with an error; the console turns rejected and failed
//! outcomes into a non-zero exit.

pub mod categories;
pub mod open;
pub mod products;

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::bail;
use catalog_client::store::ViewStatus;
use catalog_client::{CommandOutcome, HttpClient};

pub use categories::CategoryAction;
pub use products::ProductAction;

/// Shared command context
pub struct Console<H> {
    client: Arc<H>,
    assume_yes: bool,
}

impl<H: HttpClient> Console<H> {
    pub fn new(client: Arc<H>, assume_yes: bool) -> Self {
        Self { client, assume_yes }
    }

    pub fn client(&self) -> Arc<H> {
        Arc::clone(&self.client)
    }

    /// Ask on stdin unless `--yes` was given
    pub fn confirm(&self, prompt: &str) -> anyhow::Result<bool> {
        if self.assume_yes {
            return Ok(true);
        }
        print!("{} [y/N] ", prompt);
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(is_affirmative(&answer))
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Fail the command when the initial load did not succeed
pub fn ensure_loaded(loaded: bool, status: &ViewStatus) -> anyhow::Result<()> {
    if !loaded {
        bail!(
            "{}",
            status.error_message().unwrap_or("Failed to load catalog data")
        );
    }
    Ok(())
}

/// Print a command outcome; rejected and failed commands become errors
pub fn report(outcome: CommandOutcome, status: &ViewStatus) -> anyhow::Result<()> {
    match outcome {
        CommandOutcome::Completed | CommandOutcome::NavigateTo(_) => {
            if let Some(notice) = status.notice() {
                println!("{}", notice);
            }
            // Write confirmed but the follow-up refresh failed
            if let Some(error) = status.error_message() {
                eprintln!("warning: {}", error);
            }
            Ok(())
        }
        CommandOutcome::Cancelled => {
            println!("Cancelled");
            Ok(())
        }
        CommandOutcome::Rejected(message) => bail!("Invalid input: {}", message),
        CommandOutcome::Failed(message) => bail!("{}", message),
    }
}

/// Left-align `text` in a column of `width` characters
pub fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}
