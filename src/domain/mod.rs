//! # Domain Layer
//!
//! このモジュールは単位変換の核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - 外部依存を持たない（Rust標準ライブラリと最小限の依存のみ）
//! - フレームワークに依存しない
//! - ファイルシステムや端末について何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（Category, ConversionTable, ConversionHistoryなど）
//! - **errors**: ドメインエラー
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（変換ロジック、温度変換、フォーマット）

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
