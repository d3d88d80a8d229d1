//! In-Memory Icon Renderer

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::report::IconId;
use crate::ports::{IconRenderer, RenderError, RenderedIcon};

/// Serves artwork registered up front. Unregistered icons are not found.
#[derive(Debug, Clone)]
pub struct InMemoryIconRenderer {
    artwork: Arc<RwLock<HashMap<IconId, Vec<u8>>>>,
    renders: Arc<RwLock<Vec<IconId>>>,
}

impl InMemoryIconRenderer {
    pub fn new() -> Self {
        Self {
            artwork: Arc::new(RwLock::new(HashMap::new())),
            renders: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Every icon registered with its key as artwork bytes.
    pub fn with_placeholder_artwork() -> Self {
        let artwork = IconId::ALL
            .iter()
            .map(|icon| (*icon, icon.key().as_bytes().to_vec()))
            .collect();
        Self {
            artwork: Arc::new(RwLock::new(artwork)),
            renders: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn insert(&self, icon: IconId, bytes: Vec<u8>) {
        self.artwork.write().await.insert(icon, bytes);
    }

    pub async fn remove(&self, icon: IconId) {
        self.artwork.write().await.remove(&icon);
    }

    /// Icons requested so far, in call order (useful for tests)
    pub async fn renders(&self) -> Vec<IconId> {
        self.renders.read().await.clone()
    }
}

impl Default for InMemoryIconRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IconRenderer for InMemoryIconRenderer {
    async fn render(&self, icon: IconId) -> Result<RenderedIcon, RenderError> {
        self.renders.write().await.push(icon);
        let artwork = self.artwork.read().await;
        match artwork.get(&icon) {
            Some(bytes) if bytes.is_empty() => Err(RenderError::Empty(icon)),
            Some(bytes) => Ok(RenderedIcon::png(icon, bytes.clone())),
            None => Err(RenderError::NotFound {
                icon,
                detail: "not registered".to_string(),
            }),
        }
    }
}
