pub mod config;
pub mod logic;
