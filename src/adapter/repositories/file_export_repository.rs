//! File Export Repository Implementation
//!
//! ExportRepositoryのファイルシステム実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;
use std::fs;
use std::path::PathBuf;

use crate::domain::repositories::export_repository::{ExportArtifact, ExportRepository};

/// ファイルシステムベースのエクスポートリポジトリ
pub struct FileExportRepository;

impl FileExportRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// 成果物をファイルに書き込む（同期処理）
    fn save_sync(dir: &str, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let expanded = shellexpand::tilde(dir);
        let dir = PathBuf::from(expanded.as_ref());

        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create export directory: {}", dir.display()))?;

        let path = dir.join(file_name);
        fs::write(&path, bytes)
            .with_context(|| format!("Failed to write export file: {}", path.display()))?;

        info!("Wrote {} bytes to {}", bytes.len(), path.display());

        Ok(path)
    }
}

#[async_trait]
impl ExportRepository for FileExportRepository {
    async fn save(&self, dir: &str, artifact: &ExportArtifact) -> Result<PathBuf> {
        let dir = dir.to_string();
        let file_name = artifact.file_name.clone();
        let bytes = artifact.bytes.clone();

        tokio::task::spawn_blocking(move || Self::save_sync(&dir, &file_name, &bytes))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

impl Default for FileExportRepository {
    fn default() -> Self {
        Self::new()
    }
}
