//! Credential types

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Environment variable holding the organization slug
pub const SLUG_ENV: &str = "QONTO_SLUG";

/// Environment variable holding the secret key
pub const SECRET_KEY_ENV: &str = "QONTO_SECRET_KEY";

/// Organization slug and secret key pair.
///
/// Never serialized; the `Debug` output redacts the secret.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    /// Unique slug of the organization
    #[serde(alias = "Slug")]
    pub slug: String,
    #[serde(alias = "SecretKey", alias = "secret")]
    secret_key: String,
}

impl Credentials {
    /// Create credentials from a slug and a secret key
    pub fn new(slug: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Read `QONTO_SLUG` and `QONTO_SECRET_KEY`
    pub fn from_env() -> Result<Self> {
        match (std::env::var(SLUG_ENV), std::env::var(SECRET_KEY_ENV)) {
            (Ok(slug), Ok(secret)) if !slug.is_empty() && !secret.is_empty() => {
                Ok(Self::new(slug, secret))
            }
            _ => Err(Error::MissingCredentials),
        }
    }

    /// Load credentials from a YAML or JSON file with `slug` and
    /// `secret_key` keys
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse credentials from a YAML or JSON document
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let credentials: Self = serde_yaml::from_str(content)?;
        if credentials.slug.is_empty() || credentials.secret_key.is_empty() {
            return Err(Error::MissingCredentials);
        }
        Ok(credentials)
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Value of the `Authorization` header: `slug:secret_key`
    pub fn authorization(&self) -> String {
        format!("{}:{}", self.slug, self.secret_key)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("slug", &self.slug)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}
