//! Helper functions that are common to CLI apps

use crate::cli::constants::*;
use crate::errors::TX_ID_NOT_VALID_MSG;
use crate::validation;
use std::io::{self, BufRead, Write};

/// Every command by its full name, in the order `help` lists them
fn help_contents_full() -> String {
    format!("{HELP} {DEPOSIT} {WITHDRAW} {REVERSE} {BALANCE} {TX_LOG} {DESCRIBE} {EXPORT} {QUIT}")
}

/// The short aliases, position for position with [`help_contents_full`]
fn help_contents_short() -> String {
    "h d w r b t ds e q".to_string()
}

/// **Writes the command list, full names first, then the aliases.**
pub fn help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", help_contents_full())?;
    writeln!(out, "{}", help_contents_short())
}

/// One read from the user
#[derive(Debug, PartialEq)]
pub enum Input {
    Line(String),
    /// A line with nothing but whitespace; the main loop just prompts again.
    Blank,
    /// The input is exhausted (Ctrl-D, end of a pipe) or can't be read any more.
    Eof,
}

/// **Prompts with `label` and reads one line from `reader`.**
///
/// Reading zero bytes means end of input, which is reported as [`Input::Eof`]
/// rather than as a blank line, so callers can stop.
/// A failure to write the prompt or to read is reported and treated as the end of input too.
pub fn read_line<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    label: &str,
) -> Input {
    if let Err(err) = write!(writer, "\n{label}").and_then(|_| writer.flush()) {
        log::error!("Failed to write the prompt: {}", err);
        return Input::Eof;
    }

    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Input::Eof,
        Ok(_) if line.trim().is_empty() => Input::Blank,
        Ok(_) => Input::Line(line),
        Err(err) => {
            eprintln!("[ERROR] Failed to read line: {}", err);
            Input::Eof
        }
    }
}

/// **Input validation for a transaction ID typed by a user**
///
/// Strips surrounding quotes first.
/// Checks for:
/// - An empty string.
///
/// # Errors
/// Returns a message ready to be shown to the user.
pub fn parse_tx_id(word: &str) -> Result<String, String> {
    let id = word.trim_matches(|c| c == '\'' || c == '\"').trim();

    match validation::is_valid_tx_id(id) {
        Some(msg) => Err(format!("{}: \"{}\". {}", TX_ID_NOT_VALID_MSG, word, msg)),
        None => Ok(id.to_string()),
    }
}

/// Builds an error message about not being able to parse
/// a string into an integer, so that our users can get a
/// more informative message than the provided generic message
/// that comes from the standard library, and which is:
/// "invalid digit found in string".
pub fn cannot_parse_number(word: &str) -> String {
    format!("[ERROR] Only integer numbers are allowed as the amount; you provided '{word}'.")
}
