/// CLI Commands

pub const HELP: &str = "help";
pub const DEPOSIT: &str = "deposit";
pub const WITHDRAW: &str = "withdraw";
pub const REVERSE: &str = "reverse";
pub const BALANCE: &str = "balance";
pub const TX_LOG: &str = "txlog";
pub const DESCRIBE: &str = "describe";
pub const EXPORT: &str = "export";
pub const QUIT: &str = "quit";

/// Various CLI constants

pub const PROMPT: &str = "> ";
