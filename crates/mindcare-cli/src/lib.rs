//! mindcare-cli
//!
//! Command-line front end over the DSM-5 matcher and the practice record
//! store. `main.rs` only wires up logging and hands off to [`commands::run`].

pub mod cli;
pub mod commands;
pub mod config;
