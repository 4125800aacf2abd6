//! # ConversionRequest Value Object
//!
//! 変換リクエスト

use super::category::Category;
use crate::domain::errors::ConversionError;

/// 変換リクエスト
///
/// 1回の変換操作の入力（カテゴリ、値、変換元単位、変換先単位）
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub category: Category,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

impl ConversionRequest {
    /// 新しい変換リクエストを作成
    ///
    /// # Arguments
    ///
    /// * `category` - 変換カテゴリ
    /// * `value` - 変換する値
    /// * `from_unit` - 変換元の単位名
    /// * `to_unit` - 変換先の単位名
    ///
    /// `-0.0` は `0.0` として保持する
    pub fn new(
        category: Category,
        value: f64,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
    ) -> Self {
        Self {
            category,
            value: value + 0.0,
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
        }
    }

    /// 入力値を検証する
    ///
    /// # Errors
    ///
    /// 値が有限でない場合は `NonFiniteValue`、負の場合は `NegativeValue`
    pub fn validate(&self) -> Result<(), ConversionError> {
        if !self.value.is_finite() {
            return Err(ConversionError::NonFiniteValue);
        }
        if self.value < 0.0 {
            return Err(ConversionError::NegativeValue(self.value));
        }
        Ok(())
    }
}
