//! Organization and bank account records

use serde::{Deserialize, Serialize};

/// The holder of a Qonto account.
///
/// An organization owns one or more bank accounts. Each fetch returns fresh
/// instances; no identity is kept across responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Identifies the organization (equal to the authentication slug)
    pub slug: String,
    /// Every bank account attached to the organization, in API order
    #[serde(default)]
    pub bank_accounts: Vec<BankAccount>,
}

impl Organization {
    /// First bank account of the organization, if any
    pub fn main_bank_account(&self) -> Option<&BankAccount> {
        self.bank_accounts.first()
    }
}

/// Identification and balance of a single bank account.
///
/// `slug` and `iban` together select the account on the transaction list
/// endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub slug: String,
    pub iban: String,
    #[serde(rename = "bic", alias = "BIC")]
    pub bic: String,
    /// ISO 4217 code, usually "EUR"
    pub currency: String,
    pub balance: f64,
    pub balance_cents: i64,
    pub authorized_balance: f64,
    pub authorized_balance_cents: i64,
}
