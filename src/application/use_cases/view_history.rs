//! # View History Use Case
//!
//! 履歴表示ユースケース

use crate::domain::entities::session::ConversionSession;

/// デフォルトの表示件数
pub const DEFAULT_HISTORY_DISPLAY_LIMIT: usize = 5;

/// 履歴表示ユースケース
///
/// 直近の履歴を新しい順に、1始まりの番号付きで返す。
/// 番号は表示のたびに振り直す（1 = 最新）
pub struct ViewHistoryUseCase {
    limit: usize,
}

impl ViewHistoryUseCase {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `limit` - 表示する最大件数
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// 表示用の行を返す
    pub fn execute(&self, session: &ConversionSession) -> Vec<String> {
        session
            .history()
            .recent(self.limit)
            .enumerate()
            .map(|(i, entry)| format!("{}. {}", i + 1, entry))
            .collect()
    }
}

impl Default for ViewHistoryUseCase {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_DISPLAY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_empty_history() {
        let session = ConversionSession::new();
        assert!(ViewHistoryUseCase::default().execute(&session).is_empty());
    }

    #[test]
    fn test_view_numbers_most_recent_first() {
        let mut session = ConversionSession::new();
        session.history_mut().append("old");
        session.history_mut().append("new");

        let lines = ViewHistoryUseCase::default().execute(&session);

        assert_eq!(lines, vec!["1. new", "2. old"]);
    }

    #[test]
    fn test_view_limits_to_five() {
        let mut session = ConversionSession::new();
        for i in 1..=7 {
            session.history_mut().append(format!("entry-{}", i));
        }

        let lines = ViewHistoryUseCase::default().execute(&session);

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "1. entry-7");
        assert_eq!(lines[4], "5. entry-3");
    }

    #[test]
    fn test_view_custom_limit() {
        let mut session = ConversionSession::new();
        session.history_mut().append("a");
        session.history_mut().append("b");

        let lines = ViewHistoryUseCase::new(1).execute(&session);

        assert_eq!(lines, vec!["1. b"]);
    }
}
