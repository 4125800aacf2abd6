//! # Domain Services
//!
//! エンティティに属さないドメインロジック
//!
//! - **temperature**: 温度のアフィン変換
//! - **formatting**: 変換結果の表示形式

pub mod formatting;
pub mod temperature;
