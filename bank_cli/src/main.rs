//! The "Bank CLI" app's entry point.

use bank_cli::config::{Config, DEFAULT_LOG_FILTER};
use bank_cli::logic::main_loop;
use std::env;

/// The "Bank CLI" app's entry point.
fn main() {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", DEFAULT_LOG_FILTER);
    }
    pretty_env_logger::init();

    main_loop(Config::from_env());
}
