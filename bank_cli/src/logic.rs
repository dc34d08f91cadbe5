use crate::config::Config;
use bank_common::cli::constants::*;
use bank_common::cli::helpers::{cannot_parse_number, help, parse_tx_id, read_line, Input};
use bank_common::errors::AccountingError;
use bank_common::teller::Teller;
use bank_common::tx::{Transaction, Tx};
use chrono::Utc;
use std::io::{self, stdin, stdout, BufRead, Write};

/// A parsed line of user input
#[derive(Debug, PartialEq)]
pub enum Command {
    Help,
    Deposit(i64),
    Withdraw(i64),
    Reverse(String),
    Balance,
    TxLog,
    Describe(String),
    Export,
    Quit,
}

pub fn main_loop(config: Config) {
    let mut teller = Teller::new(config.opening_balance);
    log::info!("Opening balance: {}", teller.balance());

    if let Err(err) = run_session(&mut teller, &mut stdin().lock(), &mut stdout().lock()) {
        log::error!("Session ended early: {}", err);
    }
}

/// **Reads and runs commands until `quit` or the end of the input**
///
/// Command output goes to `output`, rejected input to stderr.
///
/// # Errors
/// Fails only if `output` can't be written.
pub fn run_session<R: BufRead, W: Write>(
    teller: &mut Teller,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    loop {
        match read_line(input, output, PROMPT) {
            Input::Line(line) => match parse_command(&line) {
                Ok(Command::Help) => help(output)?,
                Ok(Command::Quit) => break,
                Ok(command) => writeln!(output, "{}", execute(command, teller))?,
                Err(msg) => eprintln!("{}", msg),
            },
            Input::Blank => continue,
            Input::Eof => break,
        }
    }

    Ok(())
}

/// **Turns a line of input into a [`Command`]**
///
/// Commands are case-insensitive and have short variants.
/// Amounts must be integers. Negative amounts are let through on purpose,
/// so that deposits can reject them themselves.
///
/// # Errors
/// Returns a message for the user: a command's usage,
/// or the reason its argument was rejected.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let words = line.split_whitespace().collect::<Vec<_>>();
    let Some(first) = words.first() else {
        return Err("Empty command; try `help`.".to_string());
    };
    let cmd = first.to_lowercase();

    match cmd.as_str() {
        HELP | "h" => Ok(Command::Help),
        DEPOSIT | "d" => parse_amount(&words, DEPOSIT).map(Command::Deposit),
        WITHDRAW | "w" => parse_amount(&words, WITHDRAW).map(Command::Withdraw),
        REVERSE | "r" => parse_id(&words, REVERSE).map(Command::Reverse),
        BALANCE | "b" => Ok(Command::Balance),
        TX_LOG | "t" => Ok(Command::TxLog),
        DESCRIBE | "ds" => parse_id(&words, DESCRIBE).map(Command::Describe),
        EXPORT | "e" => Ok(Command::Export),
        QUIT | "q" => Ok(Command::Quit),
        _ => Err("Unrecognized command; try `help`.".to_string()),
    }
}

fn parse_amount(words: &[&str], cmd: &str) -> Result<i64, String> {
    match words {
        [_, amount] => amount
            .parse::<i64>()
            .map_err(|_err| cannot_parse_number(amount)),
        _ => Err(format!("The {cmd} command: {cmd} <amount>")),
    }
}

fn parse_id(words: &[&str], cmd: &str) -> Result<String, String> {
    match words {
        [_, id] => parse_tx_id(id),
        _ => Err(format!("The {cmd} command: {cmd} <transaction id>")),
    }
}

/// **Runs a command against the `teller`**
///
/// Returns the text to show to the user; errors are part of that text,
/// they never stop the session.
///
/// `Help` and `Quit` are handled by [`run_session`] and produce no text here.
pub fn execute(command: Command, teller: &mut Teller) -> String {
    match command {
        Command::Deposit(amount) => report_tx(teller.deposit(amount, Utc::now()), teller),
        Command::Withdraw(amount) => report_tx(teller.withdraw(amount, Utc::now()), teller),
        Command::Reverse(id) => match teller.reverse(&id) {
            Ok(balance) => format!("Reversed {id}. Balance: {balance}"),
            Err(err) => report_error(err),
        },
        Command::Balance => format!("Balance: {}", teller.balance()),
        Command::TxLog => tx_log(teller),
        Command::Describe(id) => match teller.find(&id) {
            Some(tx) => tx.describe(),
            None => report_error(AccountingError::TxNotFound(id)),
        },
        Command::Export => serde_json::to_string_pretty(&teller.statement())
            .unwrap_or_else(|err| format!("[ERROR] Failed to export the statement: {err}")),
        Command::Help | Command::Quit => String::new(),
    }
}

fn report_tx(result: Result<Tx, AccountingError>, teller: &Teller) -> String {
    match result {
        Ok(tx) => format!("Applied {}. Balance: {}", tx.id(), teller.balance()),
        Err(err) => report_error(err),
    }
}

fn report_error(err: AccountingError) -> String {
    format!("[ERROR] {err}")
}

/// **Describes every transaction ever applied, oldest first**
fn tx_log(teller: &Teller) -> String {
    if teller.tx_log().is_empty() {
        return "The transaction log is empty.".to_string();
    }

    teller
        .tx_log()
        .iter()
        .map(|tx| {
            if teller.is_reversed(tx.id().as_str()) {
                format!("{}\n(reversed)", tx.describe())
            } else {
                tx.describe()
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
