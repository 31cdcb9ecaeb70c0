//! Authenticator implementation
//!
//! Resolves the credentials of a call and applies them to the outgoing
//! request.

use super::context::CallContext;
use super::types::Credentials;
use crate::error::Result;
use reqwest::RequestBuilder;

/// Header carrying `slug:secret_key`
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Applies Qonto authentication to HTTP requests
#[derive(Debug, Clone, Copy, Default)]
pub struct Authenticator;

impl Authenticator {
    pub fn new() -> Self {
        Self
    }

    /// Resolve the credentials of `ctx` and apply them to `req`
    pub fn apply(&self, ctx: &CallContext, req: RequestBuilder) -> Result<RequestBuilder> {
        let credentials = ctx.credentials()?;
        Ok(self.apply_credentials(&credentials, req))
    }

    /// Apply explicit credentials to `req`
    pub fn apply_credentials(&self, credentials: &Credentials, req: RequestBuilder) -> RequestBuilder {
        req.header(AUTHORIZATION_HEADER, credentials.authorization())
    }
}
