// src/render/pdf.rs
//! PDF generation through the external `typst` binary.
//!
//! Each request gets its own scratch workspace under the configured root:
//! the generated source (and the photo, when one resolves) is written there,
//! `typst compile` runs in it, and the directory is removed afterwards.
//! Photo failures are soft; a missing or failing `typst` binary is fatal for
//! the request and surfaces as a diagnostic error.

use super::{typst, RenderOptions};
use crate::resume::ResumeRecord;
use anyhow::{Context, Result};
use base64::Engine as _;
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;
use tracing::{info, warn};
use uuid::Uuid;

const SOURCE_FILE: &str = "resume.typ";
const OUTPUT_FILE: &str = "resume.pdf";
const PHOTO_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

pub struct PdfEngine {
    workspace_root: PathBuf,
    client: Client,
}

impl PdfEngine {
    pub fn new(workspace_root: PathBuf) -> Result<Self> {
        let client = Client::builder()
            .timeout(PHOTO_FETCH_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            workspace_root,
            client,
        })
    }

    /// Render the record to PDF bytes inside a throwaway workspace.
    pub async fn render(&self, record: &ResumeRecord, options: &RenderOptions) -> Result<Vec<u8>> {
        let workspace = self
            .workspace_root
            .join(format!("render_{}", Uuid::new_v4()));
        tokio::fs::create_dir_all(&workspace)
            .await
            .with_context(|| format!("Failed to create workspace: {}", workspace.display()))?;

        let result = self.render_in(&workspace, record, options).await;

        if let Err(e) = tokio::fs::remove_dir_all(&workspace).await {
            warn!(
                "Failed to clean up workspace {}: {}",
                workspace.display(),
                e
            );
        }

        result
    }

    async fn render_in(
        &self,
        workspace: &Path,
        record: &ResumeRecord,
        options: &RenderOptions,
    ) -> Result<Vec<u8>> {
        let photo_file = self.resolve_photo(&record.photo_url, workspace).await;
        let source = typst::render_source(record, options, photo_file.as_deref());

        tokio::fs::write(workspace.join(SOURCE_FILE), source)
            .await
            .context("Failed to write Typst source")?;

        let status = Command::new("typst")
            .arg("compile")
            .arg(SOURCE_FILE)
            .arg(OUTPUT_FILE)
            .current_dir(workspace)
            .status()
            .context(
                "Failed to run the typst binary. Install typst and make sure it is on PATH.",
            )?;

        if !status.success() {
            anyhow::bail!("Typst compilation failed with {}", status);
        }

        info!("Compiled PDF with style '{}'", options.style.id());

        tokio::fs::read(workspace.join(OUTPUT_FILE))
            .await
            .context("Failed to read generated PDF")
    }

    /// Materialize the photo into the workspace. Returns the file name to
    /// reference from the Typst source, or `None` when there is no usable
    /// photo — fetch and decode failures only drop the image.
    async fn resolve_photo(&self, photo_url: &str, workspace: &Path) -> Option<String> {
        if photo_url.is_empty() {
            return None;
        }

        match self.try_resolve_photo(photo_url, workspace).await {
            Ok(file) => Some(file),
            Err(e) => {
                warn!("Photo could not be embedded, continuing without it: {:#}", e);
                None
            }
        }
    }

    async fn try_resolve_photo(&self, photo_url: &str, workspace: &Path) -> Result<String> {
        let (bytes, mime) = if photo_url.starts_with("data:") {
            decode_data_url(photo_url)?
        } else {
            let response = self
                .client
                .get(photo_url)
                .send()
                .await
                .context("Failed to fetch photo")?;

            if !response.status().is_success() {
                anyhow::bail!("Photo fetch returned HTTP {}", response.status());
            }

            let mime = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("image/jpeg")
                .to_string();
            let bytes = response
                .bytes()
                .await
                .context("Failed to read photo body")?
                .to_vec();
            (bytes, mime)
        };

        // Typst picks the decoder from the file extension.
        let file = if mime.contains("png") {
            "profile.png"
        } else {
            "profile.jpg"
        };
        tokio::fs::write(workspace.join(file), &bytes)
            .await
            .context("Failed to write photo file")?;
        Ok(file.to_string())
    }
}

/// Split a `data:<mime>;base64,<payload>` URL into bytes and MIME type.
fn decode_data_url(url: &str) -> Result<(Vec<u8>, String)> {
    let rest = url.strip_prefix("data:").context("Not a data URL")?;
    let (meta, payload) = rest.split_once(',').context("Malformed data URL")?;
    if !meta.ends_with(";base64") {
        anyhow::bail!("Only base64 data URLs are supported");
    }

    let mime = meta.trim_end_matches(";base64");
    let mime = if mime.is_empty() { "image/jpeg" } else { mime };
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .context("Invalid base64 payload in data URL")?;
    Ok((bytes, mime.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_data_url() {
        let (bytes, mime) = decode_data_url("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(bytes, b"hello");
        assert_eq!(mime, "image/png");
    }

    #[test]
    fn test_decode_data_url_defaults_mime() {
        let (_, mime) = decode_data_url("data:;base64,aGVsbG8=").unwrap();
        assert_eq!(mime, "image/jpeg");
    }

    #[test]
    fn test_decode_data_url_rejects_plain_payloads() {
        assert!(decode_data_url("data:image/png,rawbytes").is_err());
        assert!(decode_data_url("http://example.com/a.png").is_err());
        assert!(decode_data_url("data:image/png;base64,!!!").is_err());
    }
}
