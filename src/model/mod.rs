//! Resource model
//!
//! Plain records mirroring the JSON documents served by the Qonto API.
//!
//! # Decoding rules
//!
//! - Optional fields decode to `None` when absent (or `null`), never to a
//!   zero value, and are skipped again on re-encode.
//! - Unknown extra fields are ignored, so schema additions on the server
//!   side do not break decoding.
//! - Monetary amounts come as a decimal plus a minor-unit twin. Both are
//!   taken as sent; the client never recomputes one from the other.
//! - Enumerated tags (side, operation type, status) decode unknown values
//!   into an `Other` variant instead of failing.

mod account;
mod envelope;
mod resources;
mod transaction;

pub use account::{BankAccount, Organization};
pub use envelope::{
    AttachmentResponse, LabelsPage, MembershipsPage, OrganizationResponse, TransactionsPage,
};
pub use resources::{Attachment, Label, Membership, PageMeta};
pub use transaction::{OperationType, Transaction, TransactionSide, TransactionStatus};
