//! # Driver Layer (Presentation)
//!
//! CLIと対話セッションを提供
//!
//! ## 特徴
//!
//! - Use Caseを呼び出して変換・履歴操作を起動
//! - 依存性注入（DI）を行い、全てを組み立てる
//! - ユーザーとのインターフェース
//!
//! ## 構成要素
//!
//! - **cli**: CLI引数のパース
//! - **repl**: 対話モードのコマンドのパース
//! - **view_state**: 表示状態（選択中のカテゴリ、履歴表示の切り替え）
//! - **workflow**: ワークフロー全体のオーケストレーション

pub mod cli;
pub mod repl;
pub mod view_state;
pub mod workflow;

pub use cli::{Args, Command};
pub use workflow::ConverterWorkflow;
