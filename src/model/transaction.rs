//! Transaction record and its enumerated tags

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares a string-tagged enum that keeps unknown wire values in `Other`.
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value this client does not model yet
            Other(String),
        }

        impl $name {
            /// Wire representation of the value
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Other(s) => s.as_str(),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                match s.as_str() {
                    $( $wire => Self::$variant, )+
                    _ => Self::Other(s),
                }
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::from(s.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(s) => s,
                    other => other.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

open_enum! {
    /// Direction of a transaction
    pub enum TransactionSide {
        /// Outgoing
        Debit => "debit",
        /// Incoming
        Credit => "credit",
    }
}

open_enum! {
    /// Kind of operation behind a transaction
    pub enum OperationType {
        Transfer => "transfer",
        Card => "card",
        DirectDebit => "direct_debit",
        Income => "income",
        /// Bank fee
        QontoFee => "qonto_fee",
    }
}

open_enum! {
    /// Processing status of a transaction
    pub enum TransactionStatus {
        /// Still being processed
        Pending => "pending",
        Reversed => "reversed",
        Declined => "declined",
        /// Settled and reflected on the balance
        Completed => "completed",
    }
}

/// A single movement on a bank account.
///
/// Immutable once decoded. `amount`/`amount_cents` (and their local
/// twins) are kept exactly as sent by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "transaction_id")]
    pub id: String,
    pub amount: f64,
    pub amount_cents: i64,
    pub local_amount: f64,
    pub local_amount_cents: i64,
    pub side: TransactionSide,
    pub operation_type: OperationType,
    pub currency: String,
    pub local_currency: String,
    /// Absent while the transaction is pending
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settled_at: Option<DateTime<Utc>>,
    pub emitted_at: DateTime<Utc>,
    pub status: TransactionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_amount_cents: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initiator_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_lost: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_required: Option<bool>,
}

impl Transaction {
    /// True once the transaction has hit the balance
    pub fn is_settled(&self) -> bool {
        self.settled_at.is_some()
    }

    /// Attachment ids, empty when the field was absent
    pub fn attachments(&self) -> &[String] {
        self.attachment_ids.as_deref().unwrap_or_default()
    }

    /// Label ids, empty when the field was absent
    pub fn labels(&self) -> &[String] {
        self.label_ids.as_deref().unwrap_or_default()
    }

    pub fn has_attachments(&self) -> bool {
        !self.attachments().is_empty()
    }
}
