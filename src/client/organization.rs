//! Organization and bank account lookups

use super::QontoClient;
use crate::auth::CallContext;
use crate::error::{Error, Result};
use crate::model::{BankAccount, Organization, OrganizationResponse};

impl QontoClient {
    /// Fetch the organization owning the credentials of `ctx`.
    ///
    /// The organization id is the authentication slug.
    pub async fn get_organization(&self, ctx: &CallContext) -> Result<Organization> {
        let credentials = ctx.credentials()?;
        let response: OrganizationResponse = self
            .http
            .authenticated_get(ctx, &["organizations", credentials.slug()], &[])
            .await?;
        Ok(response.organization)
    }

    /// The first bank account of the organization
    pub async fn get_bank_account(&self, ctx: &CallContext) -> Result<BankAccount> {
        let organization = self.get_organization(ctx).await?;
        organization
            .bank_accounts
            .into_iter()
            .next()
            .ok_or(Error::NoBankAccount {
                organization: organization.slug,
            })
    }
}
