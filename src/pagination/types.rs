//! Pagination types and traits
//!
//! Defines the core pagination abstractions used by every list endpoint.

use crate::auth::CallContext;
use crate::error::Result;
use crate::model::PageMeta;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// Paging options of a list request.
///
/// A zero value means "let the server decide": the matching query
/// parameter is not sent at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageOptions {
    /// 1-based page to request
    pub current_page: u32,
    /// Items per page
    pub per_page: u32,
}

impl PageOptions {
    pub fn new(current_page: u32, per_page: u32) -> Self {
        Self {
            current_page,
            per_page,
        }
    }

    /// Same options, pointed at `page`
    #[must_use]
    pub fn at_page(self, page: u32) -> Self {
        Self {
            current_page: page,
            ..self
        }
    }

    /// Query parameters for these options (only the positive ones)
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if self.current_page > 0 {
            params.push(("current_page", self.current_page.to_string()));
        }
        if self.per_page > 0 {
            params.push(("per_page", self.per_page.to_string()));
        }
        params
    }
}

/// One page of a list endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, meta: PageMeta) -> Self {
        Self { items, meta }
    }

    /// True when the server reports no next page
    pub fn is_last(&self) -> bool {
        self.meta.is_last_page()
    }
}

/// A list response envelope (`{"<resource>": [...], "meta": {...}}`)
pub trait PageEnvelope: DeserializeOwned {
    type Item;

    fn into_page(self) -> Page<Self::Item>;
}

/// Fetches single pages of one list endpoint.
///
/// Implementations hold the fixed selector of the listing (for example a
/// bank account) and must not keep any paging state of their own.
#[async_trait]
pub trait PageSource: Send + Sync {
    type Item: Send;

    async fn fetch_page(&self, ctx: &CallContext, options: PageOptions)
        -> Result<Page<Self::Item>>;
}

/// Position of a [`PageIterator`](super::PageIterator)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorState {
    /// Page requested by the next advance; `None` lets the server pick
    pub next_page: Option<u32>,
    /// Set once a page without `next_page` has been seen
    pub exhausted: bool,
}

impl CursorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the metadata of the page just received
    pub fn record(&mut self, meta: &PageMeta) {
        match meta.next_page {
            Some(page) => self.next_page = Some(page),
            None => self.exhausted = true,
        }
    }
}
