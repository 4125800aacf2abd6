//! # unitconv
//!
//! カテゴリ内の単位間で値を変換し、セッション内の変換履歴を保持するツール
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: 変換テーブル、温度変換、履歴などの核心的なルール（外部依存なし）
//! - **Application層**: 変換・履歴表示・クリア・エクスポートのユースケース
//! - **Adapter層**: 設定ファイルとファイルシステムとの統合
//! - **Driver層**: CLI/対話セッション、依存性注入

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
