//! # ConversionTable Entity
//!
//! カテゴリごとの単位と換算係数の表

use std::collections::{HashMap, HashSet};

use super::category::Category;
use crate::domain::errors::{ConversionError, TableError};
use crate::domain::services::temperature::TemperatureScale;

/// 比率単位
///
/// `factor` はこの単位1つがカテゴリの基準単位いくつ分かを表す（基準単位は 1.0）
#[derive(Debug, Clone, PartialEq)]
pub struct RatioUnit {
    pub name: String,
    pub factor: f64,
}

/// カテゴリが持つ単位の集合
#[derive(Debug, Clone, PartialEq)]
pub enum UnitSet {
    /// 係数の掛け算・割り算で変換できる単位
    Ratio(Vec<RatioUnit>),
    /// オフセットを含む変換が必要な単位（温度）
    Affine(Vec<TemperatureScale>),
}

impl UnitSet {
    fn names(&self) -> Vec<&str> {
        match self {
            Self::Ratio(units) => units.iter().map(|u| u.name.as_str()).collect(),
            Self::Affine(scales) => scales.iter().map(|s| s.name()).collect(),
        }
    }
}

/// 変換テーブル
///
/// 構築時に検証済み（全カテゴリが存在し、単位の重複や不正な係数がない）
#[derive(Debug, Clone)]
pub struct ConversionTable {
    categories: HashMap<Category, UnitSet>,
}

impl ConversionTable {
    /// ビルダーを作成
    pub fn builder() -> ConversionTableBuilder {
        ConversionTableBuilder::default()
    }

    /// 標準の変換テーブルを作成
    ///
    /// 係数は「1単位 = 基準単位いくつ」で保持する。
    /// 元の換算値（基準単位1つあたりの単位数）はその逆数として記述している。
    pub fn standard() -> Result<Self, TableError> {
        Self::builder()
            .ratio(
                Category::Length,
                &[
                    ("Meter", 1.0),
                    ("Kilometer", 1.0 / 0.001),
                    ("Centimeter", 1.0 / 100.0),
                    ("Millimeter", 1.0 / 1000.0),
                    ("Mile", 1.0 / 0.000621371),
                    ("Yard", 1.0 / 1.09361),
                    ("Feet", 1.0 / 3.28084),
                    ("Inches", 1.0 / 39.3701),
                ],
            )
            .ratio(
                Category::Weight,
                &[
                    ("Kilogram", 1.0),
                    ("Gram", 1.0 / 1000.0),
                    ("Milligram", 1.0 / 1e6),
                    ("Pound", 1.0 / 2.20462),
                    ("Ounce", 1.0 / 35.274),
                ],
            )
            .affine(
                Category::Temperature,
                &[
                    TemperatureScale::Celsius,
                    TemperatureScale::Fahrenheit,
                    TemperatureScale::Kelvin,
                ],
            )
            .ratio(
                Category::Speed,
                &[("km/h", 1.0), ("mph", 1.0 / 0.621371), ("m/s", 1.0 / 0.277778)],
            )
            .ratio(
                Category::Time,
                &[
                    ("Seconds", 1.0),
                    ("Minutes", 60.0),
                    ("Hours", 3600.0),
                    ("Days", 86400.0),
                ],
            )
            .ratio(
                Category::Volume,
                &[
                    ("Liters", 1.0),
                    ("Milliliters", 1.0 / 1000.0),
                    ("Cubic Meters", 1.0 / 0.001),
                    ("Gallons", 1.0 / 0.264172),
                ],
            )
            .ratio(
                Category::Pressure,
                &[
                    ("Pascal", 1.0),
                    ("Bar", 1.0 / 1e-5),
                    ("PSI", 1.0 / 0.000145038),
                    ("Atmosphere", 1.0 / 9.86923e-6),
                ],
            )
            .build()
    }

    /// カテゴリの単位名を表示順で返す
    pub fn units(&self, category: Category) -> Vec<&str> {
        self.categories
            .get(&category)
            .map(UnitSet::names)
            .unwrap_or_default()
    }

    /// 単位名を正規の表記に解決する（大文字小文字を区別しない）
    ///
    /// # Errors
    ///
    /// 単位がカテゴリに存在しない場合に `UnknownUnit` を返す
    pub fn resolve_unit(&self, category: Category, unit: &str) -> Result<&str, ConversionError> {
        let wanted = unit.trim();
        self.units(category)
            .into_iter()
            .find(|name| name.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConversionError::UnknownUnit {
                category,
                unit: wanted.to_string(),
            })
    }

    /// 単位の換算係数を返す
    ///
    /// # Errors
    ///
    /// - 単位がカテゴリに存在しない場合は `UnknownUnit`
    /// - 温度のように係数を持たないカテゴリの場合は `AffineCategory`
    pub fn factor(&self, category: Category, unit: &str) -> Result<f64, ConversionError> {
        let name = self.resolve_unit(category, unit)?;
        match self.categories.get(&category) {
            Some(UnitSet::Ratio(units)) => units
                .iter()
                .find(|u| u.name == name)
                .map(|u| u.factor)
                .ok_or_else(|| ConversionError::UnknownUnit {
                    category,
                    unit: name.to_string(),
                }),
            Some(UnitSet::Affine(_)) => Err(ConversionError::AffineCategory(category)),
            None => Err(ConversionError::UnknownUnit {
                category,
                unit: name.to_string(),
            }),
        }
    }

    /// 値を変換する
    ///
    /// 比率カテゴリは `value × factor(from) / factor(to)`、
    /// 温度はケルビンを経由したアフィン変換を行う。
    /// 同じ単位同士の変換は値をそのまま返す。
    /// 値の符号は検証しない（入力境界で検証する）。
    ///
    /// # Errors
    ///
    /// どちらかの単位がカテゴリに存在しない場合に `UnknownUnit` を返す
    pub fn convert(
        &self,
        category: Category,
        value: f64,
        from_unit: &str,
        to_unit: &str,
    ) -> Result<f64, ConversionError> {
        let from = self.resolve_unit(category, from_unit)?;
        let to = self.resolve_unit(category, to_unit)?;

        if from == to {
            return Ok(value);
        }

        if category.is_affine() {
            let from_scale: TemperatureScale = from.parse()?;
            let to_scale: TemperatureScale = to.parse()?;
            return Ok(from_scale.convert(value, to_scale));
        }

        let from_factor = self.factor(category, from)?;
        let to_factor = self.factor(category, to)?;
        Ok(value * from_factor / to_factor)
    }
}

/// 変換テーブルのビルダー
#[derive(Debug, Default)]
pub struct ConversionTableBuilder {
    entries: Vec<(Category, UnitSet)>,
}

impl ConversionTableBuilder {
    /// 比率カテゴリを追加
    pub fn ratio(mut self, category: Category, units: &[(&str, f64)]) -> Self {
        let units = units
            .iter()
            .map(|(name, factor)| RatioUnit {
                name: (*name).to_string(),
                factor: *factor,
            })
            .collect();
        self.entries.push((category, UnitSet::Ratio(units)));
        self
    }

    /// アフィン（温度）カテゴリを追加
    pub fn affine(mut self, category: Category, scales: &[TemperatureScale]) -> Self {
        self.entries.push((category, UnitSet::Affine(scales.to_vec())));
        self
    }

    /// テーブルを検証して構築する
    ///
    /// # Errors
    ///
    /// カテゴリの欠落・重複、空の単位集合、単位名の重複、
    /// 正の有限値でない係数がある場合に `TableError` を返す
    pub fn build(self) -> Result<ConversionTable, TableError> {
        let mut categories = HashMap::new();

        for (category, units) in self.entries {
            let names = units.names();
            if names.is_empty() {
                return Err(TableError::EmptyCategory(category));
            }

            let mut seen = HashSet::new();
            for name in &names {
                if !seen.insert(name.to_ascii_lowercase()) {
                    return Err(TableError::DuplicateUnit {
                        category,
                        unit: (*name).to_string(),
                    });
                }
            }

            if let UnitSet::Ratio(ratio_units) = &units {
                if let Some(bad) = ratio_units
                    .iter()
                    .find(|u| !u.factor.is_finite() || u.factor <= 0.0)
                {
                    return Err(TableError::InvalidFactor {
                        category,
                        unit: bad.name.clone(),
                        factor: bad.factor,
                    });
                }
            }

            let strategy_matches = matches!(
                (&units, category.is_affine()),
                (UnitSet::Affine(_), true) | (UnitSet::Ratio(_), false)
            );
            if !strategy_matches {
                return Err(TableError::StrategyMismatch(category));
            }

            if categories.insert(category, units).is_some() {
                return Err(TableError::DuplicateCategory(category));
            }
        }

        if let Some(missing) = Category::ALL
            .into_iter()
            .find(|c| !categories.contains_key(c))
        {
            return Err(TableError::MissingCategory(missing));
        }

        Ok(ConversionTable { categories })
    }
}
