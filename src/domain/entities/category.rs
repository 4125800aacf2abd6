//! # Category Value Object
//!
//! 変換カテゴリ（物理量の種類）

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::ConversionError;

/// 変換カテゴリ
///
/// 相互に変換可能な単位の閉じた集合を持つ物理量の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Speed,
    Time,
    Volume,
    Pressure,
}

impl Category {
    /// 全カテゴリ（表示順）
    pub const ALL: [Category; 7] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Speed,
        Category::Time,
        Category::Volume,
        Category::Pressure,
    ];

    /// カテゴリ名を返す
    pub fn name(&self) -> &'static str {
        match self {
            Self::Length => "Length",
            Self::Weight => "Weight",
            Self::Temperature => "Temperature",
            Self::Speed => "Speed",
            Self::Time => "Time",
            Self::Volume => "Volume",
            Self::Pressure => "Pressure",
        }
    }

    /// 比率（係数）ではなくオフセットを含む変換が必要かどうか
    #[inline]
    pub fn is_affine(&self) -> bool {
        matches!(self, Self::Temperature)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ConversionError;

    /// 大文字小文字を区別せずにカテゴリ名をパースする
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ConversionError::UnknownCategory(trimmed.to_string()))
    }
}
