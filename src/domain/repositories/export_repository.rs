//! # Export Repository Trait
//!
//! 履歴エクスポートの書き出しを抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;

#[cfg(test)]
use mockall::automock;

/// エクスポート成果物のファイル名
pub const EXPORT_FILE_NAME: &str = "conversion_history.csv";

/// エクスポート成果物のMIMEタイプ
pub const EXPORT_MIME_TYPE: &str = "text/csv";

/// エクスポート成果物
///
/// ダウンロード可能なファイル1つ分のデータ
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    /// ファイル名
    pub file_name: String,
    /// MIMEタイプ
    pub mime_type: String,
    /// 内容（UTF-8）
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// 履歴CSVの成果物を作成
    ///
    /// ```
    /// use unitconv::domain::repositories::export_repository::ExportArtifact;
    ///
    /// let artifact = ExportArtifact::csv(b"Conversions\n".to_vec());
    /// assert_eq!(artifact.file_name, "conversion_history.csv");
    /// assert_eq!(artifact.mime_type, "text/csv");
    /// ```
    pub fn csv(bytes: Vec<u8>) -> Self {
        Self {
            file_name: EXPORT_FILE_NAME.to_string(),
            mime_type: EXPORT_MIME_TYPE.to_string(),
            bytes,
        }
    }
}

/// エクスポートリポジトリ
///
/// エクスポート成果物の保存を担当するリポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ExportRepository: Send + Sync {
    /// 成果物を保存する
    ///
    /// # Arguments
    ///
    /// * `dir` - 保存先ディレクトリ
    /// * `artifact` - 保存する成果物
    ///
    /// # Returns
    ///
    /// 書き込んだファイルのパス
    ///
    /// # Errors
    ///
    /// ディレクトリの作成やファイルの書き込みに失敗した場合にエラーを返す
    async fn save(&self, dir: &str, artifact: &ExportArtifact) -> Result<PathBuf>;
}
