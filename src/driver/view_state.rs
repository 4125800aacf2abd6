//! View State
//!
//! 表示のみに関わるセッション内の状態。変換・履歴のロジックからは参照しない

use crate::adapter::config::Config;
use crate::domain::entities::category::Category;

/// 表示状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    /// 選択中のカテゴリ
    pub category: Category,
    /// 履歴を表示するかどうか
    pub show_history: bool,
}

impl ViewState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            category: config.default_category,
            show_history: config.show_history,
        }
    }

    /// 履歴表示を切り替え、切り替え後の値を返す
    pub fn toggle_history(&mut self) -> bool {
        self.show_history = !self.show_history;
        self.show_history
    }
}
