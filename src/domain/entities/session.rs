//! # ConversionSession Entity
//!
//! 1回の対話セッションのコンテキスト

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::history::ConversionHistory;

/// 変換セッション
///
/// セッションごとに所有される状態（履歴）を保持する。
/// セッション間で共有される状態はない
#[derive(Debug, Clone)]
pub struct ConversionSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    history: ConversionHistory,
}

impl ConversionSession {
    /// 空の履歴で新しいセッションを開始
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            history: ConversionHistory::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn history(&self) -> &ConversionHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut ConversionHistory {
        &mut self.history
    }
}

impl Default for ConversionSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_has_empty_history() {
        let session = ConversionSession::new();
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_started_at_is_fixed_at_creation() {
        let before = Utc::now();
        let mut session = ConversionSession::new();
        let started = session.started_at();

        session.history_mut().append("later");

        assert!(started >= before);
        assert!(started <= Utc::now());
        assert_eq!(session.started_at(), started);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let mut a = ConversionSession::new();
        let b = ConversionSession::new();

        a.history_mut().append("only in a");

        assert_ne!(a.id(), b.id());
        assert_eq!(a.history().len(), 1);
        assert!(b.history().is_empty());
    }
}
