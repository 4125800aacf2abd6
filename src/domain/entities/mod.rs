//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **Category**: 変換カテゴリ（Length, Weightなど）
//! - **ConversionTable**: カテゴリごとの単位と係数の表
//! - **ConversionRequest**: 変換リクエストのバリューオブジェクト
//! - **ConversionHistory**: セッション内の変換履歴
//! - **ConversionSession**: セッションコンテキスト

pub mod category;
pub mod conversion_request;
pub mod conversion_table;
pub mod history;
pub mod session;
