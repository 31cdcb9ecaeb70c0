//! Per-call context: credentials, cancellation and timeout
//!
//! A [`CallContext`] is cheap to clone and immutable; deriving a new one
//! never affects the context it was derived from, so independent call
//! chains can carry different credentials without interfering.

use super::types::Credentials;
use crate::error::{Error, Result};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;
use tokio::sync::watch;

/// Process-wide fallback credentials. Set once before concurrent use.
static DEFAULT_CREDENTIALS: RwLock<Option<Arc<Credentials>>> = RwLock::new(None);

/// Install the process-wide default credentials
pub fn set_default_credentials(slug: impl Into<String>, secret_key: impl Into<String>) {
    let credentials = Arc::new(Credentials::new(slug, secret_key));
    *DEFAULT_CREDENTIALS
        .write()
        .unwrap_or_else(PoisonError::into_inner) = Some(credentials);
}

/// Remove the process-wide default credentials
pub fn clear_default_credentials() {
    *DEFAULT_CREDENTIALS
        .write()
        .unwrap_or_else(PoisonError::into_inner) = None;
}

/// Current process-wide default credentials, if any
pub fn default_credentials() -> Option<Credentials> {
    DEFAULT_CREDENTIALS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .as_deref()
        .cloned()
}

/// Derive a context carrying `slug`/`secret_key` from `ctx`
pub fn with_credentials(
    ctx: &CallContext,
    slug: impl Into<String>,
    secret_key: impl Into<String>,
) -> CallContext {
    ctx.with_credentials(Credentials::new(slug, secret_key))
}

/// Resolve the credentials for a call: the context's own first, then the
/// process-wide default
pub fn credentials_of(ctx: &CallContext) -> Result<Credentials> {
    ctx.credentials()
}

/// Cooperative cancellation handle.
///
/// Clones share the same state: cancelling one cancels all of them.
#[derive(Debug, Clone)]
pub struct CancelToken {
    tx: Arc<watch::Sender<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Cancel every call running under this token
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    /// Resolves once [`cancel`](Self::cancel) has been called
    pub async fn cancelled(&self) {
        let mut rx = self.tx.subscribe();
        // the sender lives as long as `self`, so this only returns on cancel
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Context threaded through every API call
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    credentials: Option<Arc<Credentials>>,
    cancel: Option<CancelToken>,
    timeout: Option<Duration>,
}

impl CallContext {
    /// Empty context: default credentials, no cancellation, no timeout
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a context carrying `credentials`
    #[must_use]
    pub fn with_credentials(&self, credentials: Credentials) -> Self {
        Self {
            credentials: Some(Arc::new(credentials)),
            ..self.clone()
        }
    }

    /// Derive a context cancelled through `token`
    #[must_use]
    pub fn with_cancel_token(&self, token: CancelToken) -> Self {
        Self {
            cancel: Some(token),
            ..self.clone()
        }
    }

    /// Derive a context whose requests time out after `timeout`
    #[must_use]
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..self.clone()
        }
    }

    /// Credentials for this call, falling back to the process-wide default
    pub fn credentials(&self) -> Result<Credentials> {
        if let Some(credentials) = &self.credentials {
            return Ok(credentials.as_ref().clone());
        }
        default_credentials().ok_or(Error::MissingCredentials)
    }

    pub fn cancel_token(&self) -> Option<&CancelToken> {
        self.cancel.as_ref()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}
