//! Qonto API client
//!
//! Typed operations over the transport and pagination layers. Every call
//! takes a [`CallContext`](crate::auth::CallContext) carrying its
//! credentials, so one client can serve several organizations at once.
//!
//! | Resource      | Single page / item          | All pages                  |
//! |---------------|-----------------------------|----------------------------|
//! | organization  | `get_organization`          |                            |
//! | bank account  | `get_bank_account`          |                            |
//! | transactions  | `get_transactions`          | `get_all_transactions`     |
//! | labels        | `get_labels`                | `get_all_labels`           |
//! | memberships   | `get_memberships`           | `get_all_memberships`      |
//! | attachments   | `get_attachment`            |                            |

mod attachments;
mod lists;
mod organization;
mod transactions;

pub use lists::ListPages;
pub use transactions::{AccountSelector, TransactionPages, TransactionQuery};

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::HttpClient;

/// Client for the Qonto v2 API
#[derive(Debug, Clone)]
pub struct QontoClient {
    http: HttpClient,
}

impl QontoClient {
    /// Client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            http: HttpClient::with_config(config)?,
        })
    }

    /// Client around an existing transport
    pub fn with_http_client(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }
}

#[cfg(test)]
mod tests;
