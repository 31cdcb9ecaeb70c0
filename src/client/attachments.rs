//! Attachment metadata and file downloads

use super::QontoClient;
use crate::auth::CallContext;
use crate::error::{Error, Result};
use crate::model::{Attachment, AttachmentResponse};
use bytes::Bytes;
use std::path::Path;
use tracing::info;

impl QontoClient {
    /// Fetch the metadata of attachment `id`
    pub async fn get_attachment(&self, ctx: &CallContext, id: &str) -> Result<Attachment> {
        if id.is_empty() {
            return Err(Error::AttachmentNeeded);
        }
        let response: AttachmentResponse = self
            .http
            .authenticated_get(ctx, &["attachments", id], &[])
            .await?;
        Ok(response.attachment)
    }

    /// Download the file behind `attachment`.
    ///
    /// The download URL is pre-signed, so the request carries no credentials.
    pub async fn download_attachment(
        &self,
        ctx: &CallContext,
        attachment: Option<&Attachment>,
    ) -> Result<Bytes> {
        let attachment = attachment.ok_or(Error::AttachmentNeeded)?;
        let url = attachment
            .download_url()
            .ok_or_else(|| Error::MissingAttachmentUrl {
                id: attachment.id.clone(),
            })?;
        self.http.download(ctx, url).await
    }

    /// Fetch attachment `id` and write its file to `path`
    pub async fn download_attachment_to_file(
        &self,
        ctx: &CallContext,
        id: &str,
        path: impl AsRef<Path>,
    ) -> Result<Attachment> {
        let attachment = self.get_attachment(ctx, id).await?;
        let content = self.download_attachment(ctx, Some(&attachment)).await?;
        tokio::fs::write(path.as_ref(), &content).await?;
        info!(
            "Saved attachment {} ({} bytes) to {}",
            attachment.id,
            content.len(),
            path.as_ref().display()
        );
        Ok(attachment)
    }
}
