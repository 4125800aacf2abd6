//! # Domain Errors
//!
//! ドメイン層のエラー定義

use thiserror::Error;

use super::entities::category::Category;

/// 変換エラー
///
/// 変換リクエストを処理できなかった理由を表す
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// カテゴリに存在しない単位が指定された
    #[error("unknown unit '{unit}' for category {category}")]
    UnknownUnit { category: Category, unit: String },

    /// 存在しないカテゴリ名が指定された
    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    /// 負の値が指定された
    #[error("value must not be negative (got {0})")]
    NegativeValue(f64),

    /// NaN または無限大が指定された
    #[error("value must be a finite number")]
    NonFiniteValue,

    /// 変換結果が表現できる範囲を超えた
    #[error("result of converting {value} {from_unit} to {to_unit} is out of range")]
    ResultOutOfRange {
        value: f64,
        from_unit: String,
        to_unit: String,
    },

    /// 係数を持たないカテゴリ（アフィン変換が必要）
    #[error("category {0} has no ratio factors; it requires an affine conversion")]
    AffineCategory(Category),
}

/// 変換テーブル構築エラー
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("category {0} is not defined")]
    MissingCategory(Category),

    #[error("category {0} is defined more than once")]
    DuplicateCategory(Category),

    #[error("category {0} has no units")]
    EmptyCategory(Category),

    #[error("unit '{unit}' is defined more than once in category {category}")]
    DuplicateUnit { category: Category, unit: String },

    #[error("category {0} uses the wrong conversion strategy")]
    StrategyMismatch(Category),

    #[error("unit '{unit}' in category {category} has invalid factor {factor}")]
    InvalidFactor {
        category: Category,
        unit: String,
        factor: f64,
    },
}
