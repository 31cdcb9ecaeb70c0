//! Authentication module
//!
//! Credentials (organization slug + secret key) travel with each call inside
//! a [`CallContext`]. When a context carries none, the process-wide default
//! set by [`set_default_credentials`] is used instead.
//!
//! Every request is authenticated with the header
//! `Authorization: <slug>:<secret_key>`.

mod authenticator;
mod context;
mod types;

pub use authenticator::{Authenticator, AUTHORIZATION_HEADER};
pub use context::{
    clear_default_credentials, credentials_of, default_credentials, set_default_credentials,
    with_credentials, CallContext, CancelToken,
};
pub use types::{Credentials, SECRET_KEY_ENV, SLUG_ENV};

#[cfg(test)]
mod tests;
