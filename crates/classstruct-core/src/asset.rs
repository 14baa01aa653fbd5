//! Hero image resolution.
//!
//! Turns a [`HeroImageSource`] into something an `img` tag can use. Remote
//! sources pass through; bundled files are embedded as base64 data URIs.

use std::path::Path;

use base64::Engine;

use crate::config::{HeroImageSource, PLACEHOLDER_HERO_URL};
use crate::error::{ShellError, ShellResult};

/// Resolve `source` to an `img` src value.
pub fn resolve_hero_image(source: &HeroImageSource) -> ShellResult<String> {
    match source {
        HeroImageSource::Remote(url) => Ok(url.clone()),
        HeroImageSource::Bundled(path) => load_data_uri(path),
    }
}

/// Like [`resolve_hero_image`], but falls back to the placeholder URL when a
/// bundled file cannot be used.
pub fn resolve_hero_image_or_placeholder(source: &HeroImageSource) -> String {
    resolve_hero_image(source).unwrap_or_else(|e| {
        tracing::warn!("Hero image unavailable, using placeholder: {}", e);
        PLACEHOLDER_HERO_URL.to_string()
    })
}

pub fn load_data_uri(path: &Path) -> ShellResult<String> {
    let bytes = std::fs::read(path).map_err(ShellError::AssetIo)?;
    let uri = data_uri(&bytes)
        .map_err(|_| ShellError::UnrecognizedImage(path.display().to_string()))?;
    tracing::debug!(?path, size = bytes.len(), "embedded bundled hero image");
    Ok(uri)
}

/// Encode image bytes as a data URI, sniffing the format from the bytes.
pub fn data_uri(bytes: &[u8]) -> ShellResult<String> {
    let format = image::guess_format(bytes)
        .map_err(|e| ShellError::UnrecognizedImage(e.to_string()))?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    Ok(format!("data:{};base64,{}", format.to_mime_type(), encoded))
}
