//! # Formatting Service
//!
//! 変換結果を履歴エントリ用の文字列に整形する

/// 結果の小数点以下の桁数
pub const RESULT_DECIMALS: usize = 4;

/// 入力値を整形する
///
/// 往復可能な最短表記で、整数値でも小数点以下を1桁以上出す（`1.0`, `2.5`）
pub fn format_value(value: f64) -> String {
    format!("{:?}", value)
}

/// 変換結果を `"<value> <from> = <result> <to>"` 形式に整形する
///
/// 結果は小数点以下4桁固定
///
/// ```
/// use unitconv::domain::services::formatting::format_conversion;
///
/// let text = format_conversion(1.0, "Kilometer", 1000.0, "Meter");
/// assert_eq!(text, "1.0 Kilometer = 1000.0000 Meter");
/// ```
pub fn format_conversion(value: f64, from_unit: &str, result: f64, to_unit: &str) -> String {
    format!(
        "{} {} = {:.prec$} {}",
        format_value(value),
        from_unit,
        result,
        to_unit,
        prec = RESULT_DECIMALS
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value_keeps_fraction_digit() {
        assert_eq!(format_value(1.0), "1.0");
        assert_eq!(format_value(2.5), "2.5");
        assert_eq!(format_value(0.1), "0.1");
    }

    #[test]
    fn test_format_conversion_rounds_to_four_places() {
        let text = format_conversion(2.0, "Kilogram", 4.409240816, "Pound");
        assert_eq!(text, "2.0 Kilogram = 4.4092 Pound");
    }

    #[test]
    fn test_format_conversion_pads_zeros() {
        let text = format_conversion(60.0, "Minutes", 1.0, "Hours");
        assert_eq!(text, "60.0 Minutes = 1.0000 Hours");
    }
}
