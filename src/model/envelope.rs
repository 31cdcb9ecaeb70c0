//! Response envelopes
//!
//! Every payload is wrapped under a resource-named key. List responses add
//! a sibling `meta` object.

use super::{Attachment, Label, Membership, Organization, PageMeta, Transaction};
use crate::pagination::{Page, PageEnvelope};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationResponse {
    pub organization: Organization,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentResponse {
    pub attachment: Attachment,
}

/// One page of `GET /transactions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionsPage {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    pub meta: PageMeta,
}

/// One page of `GET /labels`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelsPage {
    #[serde(default)]
    pub labels: Vec<Label>,
    pub meta: PageMeta,
}

/// One page of `GET /memberships`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipsPage {
    #[serde(default)]
    pub memberships: Vec<Membership>,
    pub meta: PageMeta,
}

impl PageEnvelope for TransactionsPage {
    type Item = Transaction;

    fn into_page(self) -> Page<Transaction> {
        Page::new(self.transactions, self.meta)
    }
}

impl PageEnvelope for LabelsPage {
    type Item = Label;

    fn into_page(self) -> Page<Label> {
        Page::new(self.labels, self.meta)
    }
}

impl PageEnvelope for MembershipsPage {
    type Item = Membership;

    fn into_page(self) -> Page<Membership> {
        Page::new(self.memberships, self.meta)
    }
}
