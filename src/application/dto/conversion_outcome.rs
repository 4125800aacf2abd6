//! # Conversion Outcome DTO
//!
//! 変換結果のData Transfer Object

use crate::domain::entities::category::Category;

/// 変換結果
///
/// 単位名は変換テーブルの正規表記
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOutcome {
    /// 変換カテゴリ
    pub category: Category,
    /// 入力値
    pub value: f64,
    /// 変換元の単位
    pub from_unit: String,
    /// 変換先の単位
    pub to_unit: String,
    /// 変換後の値（丸め前）
    pub result: f64,
    /// 履歴に追加された整形済み文字列
    pub text: String,
}
