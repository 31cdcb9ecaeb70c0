//! Transaction listing
//!
//! `GET /transactions?slug=..&iban=..` plus optional filters. The account
//! selector is validated before anything goes on the wire.

use super::QontoClient;
use crate::auth::CallContext;
use crate::error::{Error, Result};
use crate::http::QueryParams;
use crate::model::{BankAccount, Transaction, TransactionStatus, TransactionsPage};
use crate::pagination::{drain_all, Page, PageEnvelope, PageIterator, PageOptions, PageSource};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};

/// The (slug, IBAN) pair identifying a bank account on the list endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSelector {
    pub slug: String,
    pub iban: String,
}

impl AccountSelector {
    pub fn new(slug: impl Into<String>, iban: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            iban: iban.into(),
        }
    }

    /// Fail with a distinct error for each missing field
    pub fn validate(&self) -> Result<()> {
        if self.slug.is_empty() {
            return Err(Error::MissingBankAccountSlug);
        }
        if self.iban.is_empty() {
            return Err(Error::MissingBankAccountIban);
        }
        Ok(())
    }
}

impl From<&BankAccount> for AccountSelector {
    fn from(account: &BankAccount) -> Self {
        Self::new(account.slug.clone(), account.iban.clone())
    }
}

/// Optional filters of the transaction list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionQuery {
    /// Sent as one repeated `status` parameter per entry
    pub statuses: Vec<TransactionStatus>,
    pub updated_at_from: Option<DateTime<Utc>>,
    pub updated_at_to: Option<DateTime<Utc>>,
    pub settled_at_from: Option<DateTime<Utc>>,
    pub settled_at_to: Option<DateTime<Utc>>,
    /// e.g. `settled_at:desc`
    pub sort_by: Option<String>,
    pub page: PageOptions,
}

impl TransactionQuery {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(mut self, status: TransactionStatus) -> Self {
        self.statuses.push(status);
        self
    }

    #[must_use]
    pub fn updated_between(
        mut self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Self {
        self.updated_at_from = from;
        self.updated_at_to = to;
        self
    }

    #[must_use]
    pub fn settled_between(
        mut self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Self {
        self.settled_at_from = from;
        self.settled_at_to = to;
        self
    }

    #[must_use]
    pub fn sort_by(mut self, sort: impl Into<String>) -> Self {
        self.sort_by = Some(sort.into());
        self
    }

    #[must_use]
    pub fn page(mut self, current_page: u32, per_page: u32) -> Self {
        self.page = PageOptions::new(current_page, per_page);
        self
    }

    /// Same filters with other paging options
    #[must_use]
    pub fn with_page(&self, page: PageOptions) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// Full query string for `selector`
    pub fn query_params(&self, selector: &AccountSelector) -> QueryParams {
        let mut params: QueryParams = vec![
            ("slug", selector.slug.clone()),
            ("iban", selector.iban.clone()),
        ];
        for status in &self.statuses {
            params.push(("status", status.as_str().to_string()));
        }

        let dates = [
            ("updated_at_from", self.updated_at_from),
            ("updated_at_to", self.updated_at_to),
            ("settled_at_from", self.settled_at_from),
            ("settled_at_to", self.settled_at_to),
        ];
        for (key, date) in dates {
            if let Some(date) = date {
                params.push((key, date.to_rfc3339_opts(SecondsFormat::Secs, true)));
            }
        }

        if let Some(sort) = &self.sort_by {
            params.push(("sort_by", sort.clone()));
        }
        params.extend(self.page.query_params());
        params
    }
}

/// Page source over the transactions of one bank account
#[derive(Debug, Clone)]
pub struct TransactionPages<'a> {
    client: &'a QontoClient,
    selector: AccountSelector,
    query: TransactionQuery,
}

impl<'a> TransactionPages<'a> {
    pub fn new(client: &'a QontoClient, selector: AccountSelector, query: TransactionQuery) -> Self {
        Self {
            client,
            selector,
            query,
        }
    }

    pub fn selector(&self) -> &AccountSelector {
        &self.selector
    }
}

#[async_trait]
impl PageSource for TransactionPages<'_> {
    type Item = Transaction;

    async fn fetch_page(&self, ctx: &CallContext, options: PageOptions) -> Result<Page<Transaction>> {
        self.client
            .fetch_transactions(ctx, &self.selector, &self.query.with_page(options))
            .await
    }
}

impl QontoClient {
    /// Fetch one page of transactions of the account `slug`/`iban`
    pub async fn get_transactions(
        &self,
        ctx: &CallContext,
        slug: &str,
        iban: &str,
        query: &TransactionQuery,
    ) -> Result<Page<Transaction>> {
        self.fetch_transactions(ctx, &AccountSelector::new(slug, iban), query)
            .await
    }

    /// Fetch one page of transactions of `account`
    pub async fn get_transactions_for_account(
        &self,
        ctx: &CallContext,
        account: Option<&BankAccount>,
        query: &TransactionQuery,
    ) -> Result<Page<Transaction>> {
        let account = account.ok_or(Error::BankAccountNeeded)?;
        self.fetch_transactions(ctx, &account.into(), query).await
    }

    /// Fetch every transaction of the account, starting at
    /// `query.page.current_page` (page 1 when unset)
    pub async fn get_all_transactions(
        &self,
        ctx: &CallContext,
        slug: &str,
        iban: &str,
        query: &TransactionQuery,
    ) -> Result<Vec<Transaction>> {
        let source = TransactionPages::new(self, AccountSelector::new(slug, iban), query.clone());
        drain_all(&source, ctx, query.page).await
    }

    /// Fetch every transaction of `account`
    pub async fn get_all_transactions_for_account(
        &self,
        ctx: &CallContext,
        account: Option<&BankAccount>,
        query: &TransactionQuery,
    ) -> Result<Vec<Transaction>> {
        let account = account.ok_or(Error::BankAccountNeeded)?;
        self.get_all_transactions(ctx, &account.slug, &account.iban, query)
            .await
    }

    /// Page-by-page iterator over the transactions of `slug`/`iban`
    pub fn iter_transaction_pages(
        &self,
        slug: &str,
        iban: &str,
        per_page: u32,
    ) -> PageIterator<TransactionPages<'_>> {
        self.iter_transaction_pages_with(AccountSelector::new(slug, iban), TransactionQuery::new(), per_page)
    }

    /// Page-by-page iterator with filters
    pub fn iter_transaction_pages_with(
        &self,
        selector: AccountSelector,
        query: TransactionQuery,
        per_page: u32,
    ) -> PageIterator<TransactionPages<'_>> {
        PageIterator::new(TransactionPages::new(self, selector, query), per_page)
    }

    async fn fetch_transactions(
        &self,
        ctx: &CallContext,
        selector: &AccountSelector,
        query: &TransactionQuery,
    ) -> Result<Page<Transaction>> {
        selector.validate()?;
        let envelope: TransactionsPage = self
            .http
            .authenticated_get(ctx, &["transactions"], &query.query_params(selector))
            .await?;
        Ok(envelope.into_page())
    }
}
