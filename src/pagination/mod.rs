//! Pagination module
//!
//! List endpoints are numbered-page based: the request carries
//! `current_page`/`per_page` and the response carries a `meta` object whose
//! `next_page` is `null` on the last page.
//!
//! # Overview
//!
//! - [`PageSource`] fetches a single page of one list endpoint (pure
//!   function of its inputs)
//! - [`PageIterator`] walks a source one page at a time and remembers where
//!   it stopped
//! - [`drain_all`] walks every remaining page and concatenates the items

mod iterator;
mod types;

pub use iterator::{drain_all, PageIterator};
pub use types::{CursorState, Page, PageEnvelope, PageOptions, PageSource};
