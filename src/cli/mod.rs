//! CLI module
//!
//! Command-line interface over the Qonto client.
//!
//! # Commands
//!
//! - `organization` - Show the organization and its bank accounts
//! - `bank-account` - Show the main bank account
//! - `transactions` - List transactions (one page or `--all`)
//! - `labels` / `memberships` - List labels and memberships
//! - `attachment` - Show an attachment and download its file

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
