//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **ConvertUnitsUseCase**: 単位変換と履歴への追記
//! - **ViewHistoryUseCase**: 直近の履歴の表示
//! - **ClearHistoryUseCase**: 履歴のクリア
//! - **ExportHistoryUseCase**: 履歴のCSVエクスポート

pub mod clear_history;
pub mod convert_units;
pub mod export_history;
pub mod view_history;
