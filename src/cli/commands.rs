//! CLI commands and argument parsing

use crate::auth::{SECRET_KEY_ENV, SLUG_ENV};
use crate::config::BASE_URL_ENV;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Qonto API command-line client
#[derive(Parser, Debug)]
#[command(name = "qonto")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Organization slug (login)
    #[arg(long, global = true, env = SLUG_ENV)]
    pub slug: Option<String>,

    /// API secret key
    #[arg(long, global = true, env = SECRET_KEY_ENV, hide_env_values = true)]
    pub secret_key: Option<String>,

    /// Credentials file (YAML or JSON with `slug` and `secret_key`)
    #[arg(short, long, global = true)]
    pub credentials: Option<PathBuf>,

    /// API base URL
    #[arg(long, global = true, env = BASE_URL_ENV)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the organization and its bank accounts
    Organization,

    /// Show the main bank account
    BankAccount,

    /// List transactions of a bank account
    Transactions {
        /// Account slug (defaults to the main bank account)
        #[arg(long)]
        account: Option<String>,

        /// Account IBAN (defaults to the main bank account)
        #[arg(long)]
        iban: Option<String>,

        /// Fetch every page
        #[arg(long)]
        all: bool,

        /// Status filter (repeatable)
        #[arg(long)]
        status: Vec<String>,

        /// Sort order, e.g. `settled_at:desc`
        #[arg(long)]
        sort_by: Option<String>,

        /// Page to fetch (0 = server default)
        #[arg(long, default_value = "0")]
        page: u32,

        /// Items per page (0 = server default)
        #[arg(long, default_value = "0")]
        per_page: u32,
    },

    /// List transaction labels
    Labels {
        /// Fetch every page
        #[arg(long)]
        all: bool,

        /// Page to fetch (0 = server default)
        #[arg(long, default_value = "0")]
        page: u32,

        /// Items per page (0 = server default)
        #[arg(long, default_value = "0")]
        per_page: u32,
    },

    /// List organization memberships
    Memberships {
        /// Fetch every page
        #[arg(long)]
        all: bool,

        /// Page to fetch (0 = server default)
        #[arg(long, default_value = "0")]
        page: u32,

        /// Items per page (0 = server default)
        #[arg(long, default_value = "0")]
        per_page: u32,
    },

    /// Show an attachment, optionally saving its file
    Attachment {
        /// Attachment id
        id: String,

        /// Write the file to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON (one document per line)
    Json,
    /// Indented JSON
    Pretty,
}
