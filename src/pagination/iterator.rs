//! Cursor iterator and drain-all helper

use super::types::{CursorState, Page, PageOptions, PageSource};
use crate::auth::CallContext;
use crate::error::{Error, Result};
use futures::Stream;
use tracing::{debug, trace};

/// Stateful walk over the pages of one [`PageSource`].
///
/// Each call to [`advance`](Self::advance) fetches one page. Once a page
/// without `next_page` has been returned the iterator is exhausted for
/// good; there is no rewind. `advance` takes `&mut self`, so sharing one
/// iterator between tasks requires external synchronization.
#[derive(Debug)]
pub struct PageIterator<S> {
    source: S,
    per_page: u32,
    state: CursorState,
}

impl<S: PageSource> PageIterator<S> {
    /// Iterator starting at the server's default page
    pub fn new(source: S, per_page: u32) -> Self {
        Self {
            source,
            per_page,
            state: CursorState::new(),
        }
    }

    /// Fetch the next page.
    ///
    /// Returns the page items and whether it was the last page. After the
    /// last page this fails with [`Error::Done`] without any network call.
    pub async fn advance(&mut self, ctx: &CallContext) -> Result<(Vec<S::Item>, bool)> {
        if self.state.exhausted {
            return Err(Error::Done);
        }

        let options = PageOptions::new(self.state.next_page.unwrap_or(0), self.per_page);
        let Page { items, meta } = self.source.fetch_page(ctx, options).await?;
        self.state.record(&meta);

        debug!(
            page = meta.current_page,
            items = items.len(),
            next_page = ?meta.next_page,
            "fetched page"
        );
        Ok((items, self.state.exhausted))
    }

    /// Page requested by the next advance, `None` for the server default
    pub fn next_page(&self) -> Option<u32> {
        self.state.next_page
    }

    pub fn is_exhausted(&self) -> bool {
        self.state.exhausted
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Turn the iterator into a stream of pages, ending after the last one
    pub fn into_stream(self, ctx: CallContext) -> impl Stream<Item = Result<Vec<S::Item>>> {
        futures::stream::try_unfold((self, ctx), |(mut iter, ctx)| async move {
            if iter.is_exhausted() {
                return Ok(None);
            }
            let (items, _) = iter.advance(&ctx).await?;
            Ok::<_, Error>(Some((items, (iter, ctx))))
        })
    }
}

/// Fetch every page from `options.current_page` (page 1 when zero) on and
/// concatenate the items in arrival order.
///
/// Stops after the first page without `next_page`. On error the items
/// collected so far are dropped and only the error is returned.
pub async fn drain_all<S: PageSource + ?Sized>(
    source: &S,
    ctx: &CallContext,
    options: PageOptions,
) -> Result<Vec<S::Item>> {
    let mut page = options.current_page.max(1);
    let mut items = Vec::new();

    loop {
        let fetched = source.fetch_page(ctx, options.at_page(page)).await?;
        items.extend(fetched.items);

        match fetched.meta.next_page {
            Some(next) => page = next,
            None => {
                trace!(pages = page, total = items.len(), "drained all pages");
                return Ok(items);
            }
        }
    }
}
