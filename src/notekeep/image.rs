//! Image capture helpers.
//!
//! Notes embed at most one image, stored inline as a `data:` URL so the whole
//! collection stays a single JSON document.

use crate::error::{NotekeepError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fs;
use std::path::Path;

/// Guesses the mime type from the file extension.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "ico" => "image/x-icon",
        _ => "application/octet-stream",
    }
}

pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Reads an image file and encodes it as a `data:` URL.
pub fn data_url_from_path(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(NotekeepError::Io)?;
    if bytes.is_empty() {
        return Err(NotekeepError::Api(format!(
            "Image file is empty: {}",
            path.display()
        )));
    }
    Ok(data_url(mime_for_path(path), &bytes))
}

/// Shape check for base64 `data:` URLs: `data:<mime>;base64,<payload>`.
pub fn is_data_url(s: &str) -> bool {
    let Some(rest) = s.strip_prefix("data:") else {
        return false;
    };
    let Some((mime, payload)) = rest.split_once(";base64,") else {
        return false;
    };
    mime.contains('/') && !payload.is_empty() && STANDARD.decode(payload).is_ok()
}
