//! HTTP transport module
//!
//! Provides the authenticated GET used by every endpoint and the plain
//! byte download used for attachments.
//!
//! # Features
//!
//! - **Authentication**: `Authorization: slug:secret_key` on every API call
//! - **Error Mapping**: structured API errors vs. generic status errors
//! - **Cancellation**: in-flight calls abort when their context is cancelled

mod client;

pub use client::{HttpClient, QueryParams};
