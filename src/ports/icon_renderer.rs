//! IconRenderer port - turns an icon identifier into an embeddable image.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::domain::report::IconId;

/// Rendered image bytes with an integrity checksum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedIcon {
    pub icon: IconId,
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
    /// Lowercase hex SHA-256 of `bytes`.
    pub checksum: String,
}

impl RenderedIcon {
    /// Wraps PNG bytes, computing the checksum.
    pub fn png(icon: IconId, bytes: Vec<u8>) -> Self {
        let checksum = compute_checksum(&bytes);
        Self {
            icon,
            media_type: "image/png",
            bytes,
            checksum,
        }
    }
}

/// Lowercase hex SHA-256.
pub fn compute_checksum(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("no artwork for icon {icon}: {detail}")]
    NotFound { icon: IconId, detail: String },

    #[error("artwork for icon {0} is empty")]
    Empty(IconId),

    #[error("failed to render icon: {0}")]
    Io(String),
}

/// Renders icons. The engine only supplies identifiers and never interprets
/// a failure; callers decide what a missing image means for the output.
#[async_trait]
pub trait IconRenderer: Send + Sync {
    async fn render(&self, icon: IconId) -> Result<RenderedIcon, RenderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_is_sha256_hex() {
        assert_eq!(
            compute_checksum(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn png_constructor_fills_checksum() {
        let icon = RenderedIcon::png(IconId::LevelShield, vec![1, 2, 3]);
        assert_eq!(icon.media_type, "image/png");
        assert_eq!(icon.checksum, compute_checksum(&[1, 2, 3]));
    }
}
