//! # Clear History Use Case
//!
//! 履歴クリアユースケース

use log::info;

use crate::domain::entities::session::ConversionSession;

/// 履歴クリアユースケース
pub struct ClearHistoryUseCase;

impl ClearHistoryUseCase {
    /// セッションの履歴を空にする
    ///
    /// # Returns
    ///
    /// 削除したエントリ数
    pub fn execute(session: &mut ConversionSession) -> usize {
        let removed = session.history().len();
        session.history_mut().clear();
        info!("Session {}: cleared {} history entries", session.id(), removed);
        removed
    }
}
