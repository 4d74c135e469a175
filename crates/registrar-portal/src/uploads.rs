//! Turn a picked file into an inline `data:` URL.
//!
//! Photos, certificate scans, logos and gallery media are stored inside the
//! records themselves, so every upload is read once and base64-encoded.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;
use tokio::fs;
use tracing::debug;

use crate::state::Portal;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("File too large: {size} bytes (max {max})")]
    TooLarge { size: u64, max: usize },

    #[error("Failed to read upload: {0}")]
    Io(#[from] std::io::Error),
}

/// Read `path` and return `data:<mime>;base64,<payload>`.
pub async fn read_data_url(
    path: impl AsRef<Path>,
    max_bytes: usize,
) -> Result<String, UploadError> {
    let path = path.as_ref();

    let size = fs::metadata(path).await?.len();
    if size > max_bytes as u64 {
        return Err(UploadError::TooLarge {
            size,
            max: max_bytes,
        });
    }

    let bytes = fs::read(path).await?;
    if bytes.len() > max_bytes {
        return Err(UploadError::TooLarge {
            size: bytes.len() as u64,
            max: max_bytes,
        });
    }

    let mime = mime_for(path);
    debug!(path = %path.display(), bytes = bytes.len(), mime, "Encoded upload");
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(&bytes)))
}

/// Guess the mime type from the file extension.
fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

impl Portal {
    /// [`read_data_url`] with the configured upload limit.
    pub async fn read_upload(&self, path: impl AsRef<Path>) -> Result<String, UploadError> {
        read_data_url(path, self.config().max_upload).await
    }
}
