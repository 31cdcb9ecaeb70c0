//! Labels and memberships
//!
//! Both are plain paginated lists of the organization with no selector.

use super::QontoClient;
use crate::auth::CallContext;
use crate::error::Result;
use crate::model::{Label, LabelsPage, Membership, MembershipsPage};
use crate::pagination::{drain_all, Page, PageEnvelope, PageIterator, PageOptions, PageSource};
use async_trait::async_trait;
use std::marker::PhantomData;

/// Page source over a selector-less list endpoint decoded as `E`
pub struct ListPages<'a, E> {
    client: &'a QontoClient,
    resource: &'static str,
    _envelope: PhantomData<fn() -> E>,
}

impl<'a, E> ListPages<'a, E> {
    pub fn new(client: &'a QontoClient, resource: &'static str) -> Self {
        Self {
            client,
            resource,
            _envelope: PhantomData,
        }
    }
}

impl<E> std::fmt::Debug for ListPages<'_, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListPages")
            .field("resource", &self.resource)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<E> PageSource for ListPages<'_, E>
where
    E: PageEnvelope + Send,
    E::Item: Send,
{
    type Item = E::Item;

    async fn fetch_page(&self, ctx: &CallContext, options: PageOptions) -> Result<Page<E::Item>> {
        let envelope: E = self
            .client
            .http
            .authenticated_get(ctx, &[self.resource], &options.query_params())
            .await?;
        Ok(envelope.into_page())
    }
}

impl QontoClient {
    /// Page source over `GET /labels`
    pub fn labels(&self) -> ListPages<'_, LabelsPage> {
        ListPages::new(self, "labels")
    }

    /// Page source over `GET /memberships`
    pub fn memberships(&self) -> ListPages<'_, MembershipsPage> {
        ListPages::new(self, "memberships")
    }

    /// Fetch one page of labels
    pub async fn get_labels(&self, ctx: &CallContext, options: PageOptions) -> Result<Page<Label>> {
        self.labels().fetch_page(ctx, options).await
    }

    /// Fetch every label from `options.current_page` (page 1 when unset) on
    pub async fn get_all_labels(&self, ctx: &CallContext, options: PageOptions) -> Result<Vec<Label>> {
        drain_all(&self.labels(), ctx, options).await
    }

    pub fn iter_label_pages(&self, per_page: u32) -> PageIterator<ListPages<'_, LabelsPage>> {
        PageIterator::new(self.labels(), per_page)
    }

    /// Fetch one page of memberships
    pub async fn get_memberships(
        &self,
        ctx: &CallContext,
        options: PageOptions,
    ) -> Result<Page<Membership>> {
        self.memberships().fetch_page(ctx, options).await
    }

    /// Fetch every membership from `options.current_page` (page 1 when unset) on
    pub async fn get_all_memberships(
        &self,
        ctx: &CallContext,
        options: PageOptions,
    ) -> Result<Vec<Membership>> {
        drain_all(&self.memberships(), ctx, options).await
    }

    pub fn iter_membership_pages(
        &self,
        per_page: u32,
    ) -> PageIterator<ListPages<'_, MembershipsPage>> {
        PageIterator::new(self.memberships(), per_page)
    }
}
