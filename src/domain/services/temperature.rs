//! # Temperature Conversion Service
//!
//! 温度のアフィン変換（スケールとオフセット）
//!
//! 温度は係数の比だけでは変換できないため、ケルビンを経由して変換する。

use std::fmt;
use std::str::FromStr;

use crate::domain::entities::category::Category;
use crate::domain::errors::ConversionError;

/// 0°C のケルビン値
pub const CELSIUS_OFFSET: f64 = 273.15;

/// 温度スケール
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureScale {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Celsius => "Celsius",
            Self::Fahrenheit => "Fahrenheit",
            Self::Kelvin => "Kelvin",
        }
    }

    /// このスケールの値をケルビンに変換
    pub fn to_kelvin(&self, value: f64) -> f64 {
        match self {
            Self::Celsius => celsius_to_kelvin(value),
            Self::Fahrenheit => celsius_to_kelvin(fahrenheit_to_celsius(value)),
            Self::Kelvin => value,
        }
    }

    /// ケルビンの値をこのスケールに変換
    pub fn from_kelvin(&self, kelvin: f64) -> f64 {
        match self {
            Self::Celsius => kelvin_to_celsius(kelvin),
            Self::Fahrenheit => celsius_to_fahrenheit(kelvin_to_celsius(kelvin)),
            Self::Kelvin => kelvin,
        }
    }

    /// 別のスケールに変換
    pub fn convert(&self, value: f64, to: TemperatureScale) -> f64 {
        if *self == to {
            return value;
        }
        to.from_kelvin(self.to_kelvin(value))
    }
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TemperatureScale {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        [Self::Celsius, Self::Fahrenheit, Self::Kelvin]
            .into_iter()
            .find(|scale| scale.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ConversionError::UnknownUnit {
                category: Category::Temperature,
                unit: trimmed.to_string(),
            })
    }
}

pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + CELSIUS_OFFSET
}

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - CELSIUS_OFFSET
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}
