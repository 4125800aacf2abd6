//! # Convert Units Use Case
//!
//! 単位変換ユースケース

use anyhow::Result;
use log::{debug, info};
use std::sync::Arc;

use crate::application::dto::conversion_outcome::ConversionOutcome;
use crate::domain::entities::conversion_request::ConversionRequest;
use crate::domain::entities::conversion_table::ConversionTable;
use crate::domain::entities::session::ConversionSession;
use crate::domain::errors::ConversionError;
use crate::domain::services::formatting::format_conversion;

/// 単位変換ユースケース
///
/// リクエストを検証して変換し、結果をセッションの履歴に追加する
pub struct ConvertUnitsUseCase {
    table: Arc<ConversionTable>,
}

impl ConvertUnitsUseCase {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `table` - 変換テーブル
    pub fn new(table: Arc<ConversionTable>) -> Self {
        Self { table }
    }

    /// 変換を実行する
    ///
    /// # Arguments
    ///
    /// * `session` - 結果を記録するセッション
    /// * `request` - 変換リクエスト
    ///
    /// # Returns
    ///
    /// 変換結果（整形済み文字列を含む）
    ///
    /// # Errors
    ///
    /// 値が負・非有限の場合、単位がカテゴリに存在しない場合、
    /// または結果が有限の値にならない場合にエラーを返す。
    /// エラー時は履歴を変更しない
    pub fn execute(
        &self,
        session: &mut ConversionSession,
        request: &ConversionRequest,
    ) -> Result<ConversionOutcome> {
        request.validate()?;

        let category = request.category;
        let from_unit = self
            .table
            .resolve_unit(category, &request.from_unit)?
            .to_string();
        let to_unit = self.table.resolve_unit(category, &request.to_unit)?.to_string();

        let result = self
            .table
            .convert(category, request.value, &from_unit, &to_unit)?;
        if !result.is_finite() {
            return Err(ConversionError::ResultOutOfRange {
                value: request.value,
                from_unit,
                to_unit,
            }
            .into());
        }
        let text = format_conversion(request.value, &from_unit, result, &to_unit);

        debug!(
            "Converted {} {} -> {} {} ({})",
            request.value, from_unit, result, to_unit, category
        );

        session.history_mut().append(text.clone());
        info!(
            "Session {}: recorded conversion #{}",
            session.id(),
            session.history().len()
        );

        Ok(ConversionOutcome {
            category,
            value: request.value,
            from_unit,
            to_unit,
            result,
            text,
        })
    }
}
