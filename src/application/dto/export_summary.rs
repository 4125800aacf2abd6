//! # Export Summary DTO
//!
//! エクスポート結果のData Transfer Object

use std::path::PathBuf;

/// エクスポート結果のサマリー
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    /// 書き込んだファイルのパス
    pub path: PathBuf,
    /// エクスポートしたエントリ数
    pub entry_count: usize,
    /// 書き込んだバイト数
    pub byte_count: usize,
}
