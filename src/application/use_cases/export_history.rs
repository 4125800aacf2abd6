//! # Export History Use Case
//!
//! 履歴エクスポートユースケース

use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;

use crate::application::dto::export_summary::ExportSummary;
use crate::domain::entities::session::ConversionSession;
use crate::domain::repositories::export_repository::{ExportArtifact, ExportRepository};

/// 履歴エクスポートユースケース
///
/// セッションの履歴をCSVにしてリポジトリに保存する
pub struct ExportHistoryUseCase<R: ExportRepository> {
    export_repository: Arc<R>,
}

impl<R: ExportRepository> ExportHistoryUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `export_repository` - エクスポートリポジトリ
    pub fn new(export_repository: Arc<R>) -> Self {
        Self { export_repository }
    }

    /// 成果物を作成する（保存はしない）
    pub fn build_artifact(session: &ConversionSession) -> ExportArtifact {
        ExportArtifact::csv(session.history().export_table())
    }

    /// 履歴をエクスポートする
    ///
    /// # Arguments
    ///
    /// * `session` - エクスポート対象のセッション
    /// * `dir` - 保存先ディレクトリ
    ///
    /// # Returns
    ///
    /// エクスポート結果のサマリー
    ///
    /// # Errors
    ///
    /// 保存に失敗した場合にエラーを返す
    pub async fn execute(&self, session: &ConversionSession, dir: &str) -> Result<ExportSummary> {
        let artifact = Self::build_artifact(session);
        let byte_count = artifact.bytes.len();

        let path = self
            .export_repository
            .save(dir, &artifact)
            .await
            .context("Failed to export conversion history")?;

        info!(
            "Session {}: exported {} entries to {}",
            session.id(),
            session.history().len(),
            path.display()
        );

        Ok(ExportSummary {
            path,
            entry_count: session.history().len(),
            byte_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::export_repository::MockExportRepository;
    use mockall::predicate::eq;
    use std::path::PathBuf;

    #[test]
    fn test_build_artifact() {
        let mut session = ConversionSession::new();
        session.history_mut().append("1 Meter = 1.0000 Feet");

        let artifact = ExportHistoryUseCase::<MockExportRepository>::build_artifact(&session);

        assert_eq!(artifact.file_name, "conversion_history.csv");
        assert_eq!(artifact.mime_type, "text/csv");
        assert_eq!(
            String::from_utf8(artifact.bytes).unwrap(),
            "Conversions\n1 Meter = 1.0000 Feet\n"
        );
    }

    #[tokio::test]
    async fn test_export_success() {
        let mut session = ConversionSession::new();
        session.history_mut().append("a");
        session.history_mut().append("b");

        let mut mock_repo = MockExportRepository::new();
        mock_repo
            .expect_save()
            .with(eq("/tmp/out"), mockall::predicate::always())
            .times(1)
            .returning(|dir, artifact| Ok(PathBuf::from(dir).join(&artifact.file_name)));

        let use_case = ExportHistoryUseCase::new(Arc::new(mock_repo));
        let summary = use_case.execute(&session, "/tmp/out").await.unwrap();

        assert_eq!(summary.path, PathBuf::from("/tmp/out/conversion_history.csv"));
        assert_eq!(summary.entry_count, 2);
        assert_eq!(summary.byte_count, "Conversions\na\nb\n".len());
    }

    #[tokio::test]
    async fn test_export_failure_is_propagated() {
        let session = ConversionSession::new();

        let mut mock_repo = MockExportRepository::new();
        mock_repo
            .expect_save()
            .returning(|_, _| Err(anyhow::anyhow!("disk full")));

        let use_case = ExportHistoryUseCase::new(Arc::new(mock_repo));
        let err = use_case.execute(&session, ".").await.unwrap_err();

        assert!(err.to_string().contains("Failed to export conversion history"));
    }
}
