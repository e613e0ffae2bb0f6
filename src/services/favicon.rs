// Custom icons uploaded for shortcuts are stored inline in the `favicon`
// field as `data:` URLs.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::types::errors::{DashboardError, Result};

/// Largest custom icon accepted, in decoded bytes.
pub const MAX_EMBEDDED_ICON_BYTES: usize = 256 * 1024;

/// Builds a `data:` URL carrying the image bytes.
pub fn embed_image(mime: &str, bytes: &[u8]) -> Result<String> {
    if !mime.starts_with("image/") {
        return Err(DashboardError::Validation(format!(
            "Unsupported icon type: {}",
            mime
        )));
    }
    if bytes.is_empty() || bytes.len() > MAX_EMBEDDED_ICON_BYTES {
        return Err(DashboardError::Validation(format!(
            "Icon must be between 1 and {} bytes, got {}",
            MAX_EMBEDDED_ICON_BYTES,
            bytes.len()
        )));
    }
    Ok(format!("data:{};base64,{}", mime, BASE64.encode(bytes)))
}

/// Decodes a base64 image payload as sent by a client.
pub fn decode_image(encoded: &str) -> Result<Vec<u8>> {
    BASE64
        .decode(encoded.trim())
        .map_err(|e| DashboardError::Validation(format!("Invalid base64 icon: {}", e)))
}

/// Whether a stored favicon is an inline image rather than a remote URL.
pub fn is_embedded(favicon: &str) -> bool {
    favicon.starts_with("data:")
}
