//! JSON Report Writer
//!
//! Writes the batch as one JSON document:
//!
//! ```text
//! {
//!   "columns": ["Date", "ID", ...],
//!   "rows": [["01/02/2025", "P-1", ...], ...],
//!   "icons": {"PR_CA": {"path": "report_icons/PR_CA.png", "sha256": "...", "media_type": "image/png"}}
//! }
//! ```
//!
//! Icon artwork is copied next to the report under `<stem>_icons/`. The
//! report itself is written to a temporary file and renamed into place, so
//! readers never observe a partial document.

use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::ports::{validate_batch, ReportBatch, ReportWriter, WriteError, WriteReceipt};

#[derive(Debug, Serialize)]
struct ReportDocument<'a> {
    columns: &'a [String],
    rows: Vec<Vec<String>>,
    icons: BTreeMap<&'static str, IconEntry>,
}

#[derive(Debug, Serialize)]
struct IconEntry {
    path: String,
    sha256: String,
    media_type: &'static str,
}

/// Writes reports as JSON files on disk.
#[derive(Debug, Clone)]
pub struct JsonReportWriter {
    output_path: PathBuf,
}

impl JsonReportWriter {
    pub fn new<P: AsRef<Path>>(output_path: P) -> Self {
        Self {
            output_path: output_path.as_ref().to_path_buf(),
        }
    }

    /// Directory receiving icon artwork, e.g. `out/report_icons` for
    /// `out/report.json`.
    pub fn icon_dir(&self) -> PathBuf {
        let stem = self
            .output_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "report".to_string());
        self.parent_dir().join(format!("{}_icons", stem))
    }

    fn parent_dir(&self) -> PathBuf {
        self.output_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.output_path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    async fn write_icons(
        &self,
        batch: &ReportBatch,
    ) -> Result<BTreeMap<&'static str, IconEntry>, WriteError> {
        let mut entries = BTreeMap::new();
        if batch.icons.is_empty() {
            return Ok(entries);
        }

        let dir = self.icon_dir();
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| WriteError::Io(e.to_string()))?;

        for icon in &batch.icons {
            let key = icon.icon.key();
            let file_name = format!("{}.png", key);
            fs::write(dir.join(&file_name), &icon.bytes)
                .await
                .map_err(|e| WriteError::Io(e.to_string()))?;

            let relative = match dir.file_name() {
                Some(dir_name) => Path::new(dir_name).join(&file_name),
                None => PathBuf::from(&file_name),
            };
            entries.insert(
                key,
                IconEntry {
                    path: relative.to_string_lossy().into_owned(),
                    sha256: icon.checksum.clone(),
                    media_type: icon.media_type,
                },
            );
        }
        Ok(entries)
    }

    async fn write_atomic(&self, content: &[u8]) -> Result<(), WriteError> {
        let temp_path = self.temp_path();

        let result = async {
            let mut file = fs::File::create(&temp_path).await?;
            file.write_all(content).await?;
            file.sync_all().await?;
            drop(file);
            fs::rename(&temp_path, &self.output_path).await
        }
        .await;

        if let Err(e) = result {
            // The temp file may not exist if creation itself failed.
            let _ = fs::remove_file(&temp_path).await;
            return Err(WriteError::Io(e.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ReportWriter for JsonReportWriter {
    async fn write(&self, batch: &ReportBatch) -> Result<WriteReceipt, WriteError> {
        validate_batch(batch)?;

        let parent = self.parent_dir();
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(&parent)
                .await
                .map_err(|e| WriteError::Io(e.to_string()))?;
        }

        let icons = self.write_icons(batch).await?;
        let icon_count = icons.len();
        let document = ReportDocument {
            columns: &batch.columns,
            rows: batch.records.iter().map(|r| r.cells()).collect(),
            icons,
        };
        let content = serde_json::to_vec_pretty(&document)
            .map_err(|e| WriteError::Serialization(e.to_string()))?;

        self.write_atomic(&content).await?;

        tracing::info!(
            path = %self.output_path.display(),
            rows = batch.records.len(),
            icons = icon_count,
            "Report written"
        );

        Ok(WriteReceipt {
            location: self.output_path.display().to_string(),
            rows: batch.records.len(),
            icons: icon_count,
        })
    }
}
