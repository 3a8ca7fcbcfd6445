//! Implements ReportSink on the local filesystem.

use crate::domain::DomainError;
use crate::ports::ReportSink;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Writes reports into a directory, creating it on first use.
pub struct FsReportWriter {
    dir: PathBuf,
}

impl FsReportWriter {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl ReportSink for FsReportWriter {
    /// Write-replace: temp file, sync, rename. A crash mid-write leaves any
    /// previous report intact.
    async fn write_report(&self, file_name: &str, body: &str) -> Result<PathBuf, DomainError> {
        let target = self.dir.join(file_name);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::Report(format!("create dir: {}", e)))?;
        }

        let mut temp_name = target.as_os_str().to_owned();
        temp_name.push(".tmp");
        let temp_path = PathBuf::from(temp_name);

        let mut f = fs::File::create(&temp_path)
            .await
            .map_err(|e| DomainError::Report(format!("create temp file: {}", e)))?;
        f.write_all(body.as_bytes())
            .await
            .map_err(|e| DomainError::Report(format!("write temp file: {}", e)))?;
        f.sync_all()
            .await
            .map_err(|e| DomainError::Report(format!("sync temp file: {}", e)))?;
        drop(f);

        fs::rename(&temp_path, &target)
            .await
            .map_err(|e| DomainError::Report(format!("rename failed: {}", e)))?;

        debug!(path = %target.display(), bytes = body.len(), "report written");
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_and_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FsReportWriter::new(dir.path());

        let path = writer.write_report("spez_persona.txt", "first").await.unwrap();
        assert_eq!(path, dir.path().join("spez_persona.txt"));
        assert_eq!(fs::read_to_string(&path).await.unwrap(), "first");

        writer.write_report("spez_persona.txt", "second").await.unwrap();
        assert_eq!(fs::read_to_string(&path).await.unwrap(), "second");
        assert!(!dir.path().join("spez_persona.txt.tmp").exists());
    }

    #[tokio::test]
    async fn test_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FsReportWriter::new(dir.path().join("reports"));
        let path = writer.write_report("nested/out.txt", "x").await.unwrap();
        assert!(path.ends_with("reports/nested/out.txt"));
        assert!(path.exists());
    }
}
