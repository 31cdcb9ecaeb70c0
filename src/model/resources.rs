//! Flat records: labels, memberships, attachments and page metadata

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A label defined in the organization dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// A member of the organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

/// Metadata of a file attached to a transaction.
///
/// The file itself is not embedded: `url` points at the remote content and
/// is fetched by a separate call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub file_name: String,
    /// Size in bytes; the API sends it as a string
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de_file_size",
        serialize_with = "ser_file_size"
    )]
    pub file_size: Option<u64>,
    pub file_content_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Attachment {
    /// Download URL, `None` when absent or empty
    pub fn download_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }
}

fn de_file_size<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Size {
        Number(u64),
        Text(String),
    }

    match Option::<Size>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Size::Number(n)) => Ok(Some(n)),
        Some(Size::Text(s)) if s.is_empty() => Ok(None),
        Some(Size::Text(s)) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[allow(clippy::ref_option)]
fn ser_file_size<S>(size: &Option<u64>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match size {
        Some(n) => serializer.serialize_str(&n.to_string()),
        None => serializer.serialize_none(),
    }
}

/// Paging information sent alongside every list response.
///
/// `next_page` is `None` exactly on the last page and `prev_page` is
/// `None` exactly on the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageMeta {
    pub current_page: u32,
    pub next_page: Option<u32>,
    pub prev_page: Option<u32>,
    pub total_pages: u32,
    pub total_count: u64,
    pub per_page: u32,
}

impl PageMeta {
    pub fn is_last_page(&self) -> bool {
        self.next_page.is_none()
    }

    pub fn is_first_page(&self) -> bool {
        self.prev_page.is_none()
    }
}
