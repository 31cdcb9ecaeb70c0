// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Qonto API client
//!
//! Typed, async client for the Qonto v2 banking API: organization and bank
//! accounts, transactions, labels, memberships and attachments.
//!
//! ## Features
//!
//! - **Per-call credentials**: a [`CallContext`] carries the slug/secret key
//!   pair, with a process-wide fallback
//! - **Numbered pagination**: single page, page-by-page iterator, or
//!   drain-all over every list endpoint
//! - **Error mapping**: structured API errors kept apart from transport and
//!   decoding failures
//! - **Cancellation**: in-flight calls abort when their context is cancelled
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use qonto_client::{CallContext, Credentials, QontoClient, Result, TransactionQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = QontoClient::new()?;
//!     let ctx = CallContext::new().with_credentials(Credentials::from_env()?);
//!
//!     let account = client.get_bank_account(&ctx).await?;
//!     let transactions = client
//!         .get_all_transactions_for_account(&ctx, Some(&account), &TransactionQuery::new())
//!         .await?;
//!     println!("{} transactions", transactions.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         QontoClient                             │
//! │  organization · transactions · labels · memberships · files     │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┴───────┬──────────────┬──────────┐
//! │     Auth     │        HTTP           │  Pagination  │  Model   │
//! ├──────────────┼───────────────────────┼──────────────┼──────────┤
//! │ CallContext  │ authenticated GET     │ PageSource   │ serde    │
//! │ Credentials  │ error mapping         │ PageIterator │ records  │
//! │ default slot │ unauthenticated fetch │ drain_all    │          │
//! └──────────────┴───────────────────────┴──────────────┴──────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Credentials and per-call context
pub mod auth;

/// Client configuration and base URL resolution
pub mod config;

/// HTTP transport with authentication and error mapping
pub mod http;

/// Resource records
pub mod model;

/// Numbered-page pagination
pub mod pagination;

/// Typed API operations
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{ApiError, Error, Result};

pub use auth::{set_default_credentials, CallContext, CancelToken, Credentials};
pub use client::{AccountSelector, QontoClient, TransactionQuery};
pub use config::{set_default_base_url, ClientConfig, DEFAULT_BASE_URL};
pub use model::{
    Attachment, BankAccount, Label, Membership, Organization, PageMeta, Transaction,
    TransactionStatus,
};
pub use pagination::{drain_all, Page, PageIterator, PageOptions, PageSource};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
