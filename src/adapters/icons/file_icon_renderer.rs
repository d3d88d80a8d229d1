//! File-based Icon Renderer
//!
//! Serves pre-rendered artwork from a directory laid out as
//! `<icon_dir>/<KEY>.png`, e.g. `icons/PR_CA.png`.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::report::IconId;
use crate::ports::{IconRenderer, RenderError, RenderedIcon};

/// Reads PNG artwork from disk.
#[derive(Debug, Clone)]
pub struct FileIconRenderer {
    icon_dir: PathBuf,
}

impl FileIconRenderer {
    pub fn new<P: AsRef<Path>>(icon_dir: P) -> Self {
        Self {
            icon_dir: icon_dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the artwork for an icon.
    pub fn icon_path(&self, icon: IconId) -> PathBuf {
        self.icon_dir.join(format!("{}.png", icon.key()))
    }
}

#[async_trait]
impl IconRenderer for FileIconRenderer {
    async fn render(&self, icon: IconId) -> Result<RenderedIcon, RenderError> {
        let path = self.icon_path(icon);

        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(RenderError::NotFound {
                    icon,
                    detail: path.display().to_string(),
                })
            }
            Err(e) => return Err(RenderError::Io(e.to_string())),
        };

        if bytes.is_empty() {
            return Err(RenderError::Empty(icon));
        }

        tracing::debug!(icon = %icon, bytes = bytes.len(), "Rendered icon");
        Ok(RenderedIcon::png(icon, bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Dimension;
    use crate::ports::compute_checksum;
    use tempfile::TempDir;

    fn create_renderer() -> (FileIconRenderer, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let renderer = FileIconRenderer::new(temp_dir.path());
        (renderer, temp_dir)
    }

    #[tokio::test]
    async fn renders_png_with_checksum() {
        let (renderer, temp_dir) = create_renderer();
        let bytes = vec![0x89, b'P', b'N', b'G'];
        std::fs::write(temp_dir.path().join("PR_CA.png"), &bytes).unwrap();

        let icon = IconId::Priority(Dimension::CulturalAdaptability);
        let rendered = renderer.render(icon).await.unwrap();

        assert_eq!(rendered.icon, icon);
        assert_eq!(rendered.bytes, bytes);
        assert_eq!(rendered.checksum, compute_checksum(&bytes));
    }

    #[tokio::test]
    async fn missing_artwork_is_not_found() {
        let (renderer, _temp_dir) = create_renderer();
        let result = renderer.render(IconId::LevelShield).await;
        match result {
            Err(RenderError::NotFound { icon, detail }) => {
                assert_eq!(icon, IconId::LevelShield);
                assert!(detail.ends_with("LEVEL_SHIELD.png"));
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn empty_artwork_is_rejected() {
        let (renderer, temp_dir) = create_renderer();
        std::fs::write(temp_dir.path().join("LEVEL_TOOLS.png"), b"").unwrap();
        assert_eq!(
            renderer.render(IconId::LevelTools).await,
            Err(RenderError::Empty(IconId::LevelTools))
        );
    }
}
