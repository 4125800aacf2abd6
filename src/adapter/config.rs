//! Configuration
//!
//! JSON設定ファイルの読み込み

use anyhow::{bail, Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::application::use_cases::view_history::DEFAULT_HISTORY_DISPLAY_LIMIT;
use crate::domain::entities::category::Category;

/// デフォルトの設定ファイルパス
pub const DEFAULT_CONFIG_PATH: &str = "./.unitconv/config.json";

/// アプリケーション設定
///
/// 全フィールドが省略可能で、省略時はデフォルト値を使う
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// セッション開始時に選択されているカテゴリ
    pub default_category: Category,
    /// 履歴の最大表示件数
    pub history_display_limit: usize,
    /// エクスポート先ディレクトリ
    pub export_dir: String,
    /// セッション開始時に履歴を表示するかどうか
    pub show_history: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_category: Category::Length,
            history_display_limit: DEFAULT_HISTORY_DISPLAY_LIMIT,
            export_dir: ".".to_string(),
            show_history: false,
        }
    }
}

impl Config {
    /// 設定ファイルを読み込む
    ///
    /// # Errors
    ///
    /// ファイルの読み込みまたはJSONのパースに失敗した場合、
    /// または設定値が不正な場合にエラーを返す
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let content = fs::read_to_string(expanded.as_ref())
            .with_context(|| format!("Failed to read config file: {}", expanded))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", expanded))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", expanded))?;
        Ok(config)
    }

    /// 設定値を検証する
    ///
    /// # Errors
    ///
    /// `history_display_limit` が0の場合にエラーを返す
    pub fn validate(&self) -> Result<()> {
        if self.history_display_limit == 0 {
            bail!("history_display_limit must be at least 1");
        }
        Ok(())
    }

    /// 設定ファイルを読み込む（存在しない場合はデフォルト）
    ///
    /// # Errors
    ///
    /// ファイルが存在するが読み込めない、またはパースできない場合にエラーを返す
    pub fn load_or_default(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        if !Path::new(expanded.as_ref()).exists() {
            info!("No config file at {}, using defaults", expanded);
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_category, Category::Length);
        assert_eq!(config.history_display_limit, 5);
        assert_eq!(config.export_dir, ".");
        assert!(!config.show_history);
    }

    #[test]
    fn test_load_full_config() {
        let mut file = NamedTempFile::new().unwrap();
        let json = r#"{
            "default_category": "Weight",
            "history_display_limit": 3,
            "export_dir": "/tmp/exports",
            "show_history": true
        }"#;
        file.write_all(json.as_bytes()).unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.default_category, Category::Weight);
        assert_eq!(config.history_display_limit, 3);
        assert_eq!(config.export_dir, "/tmp/exports");
        assert!(config.show_history);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{ "history_display_limit": 10 }"#).unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.history_display_limit, 10);
        assert_eq!(config.default_category, Category::Length);
    }

    #[test]
    fn test_load_zero_display_limit_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{ "history_display_limit": 0 }"#).unwrap();

        let err = Config::load(file.path().to_str().unwrap()).unwrap_err();

        assert!(format!("{:#}", err).contains("history_display_limit must be at least 1"));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();

        let result = Config::load(file.path().to_str().unwrap());

        assert!(result.is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = Config::load_or_default("/nonexistent/path/config.json").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_or_default_invalid_file_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ \"default_category\": \"Energy\" }").unwrap();

        let result = Config::load_or_default(file.path().to_str().unwrap());

        assert!(result.is_err());
    }
}
