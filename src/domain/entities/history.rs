//! # ConversionHistory Entity
//!
//! セッション内の変換履歴

use chrono::{DateTime, Utc};
use std::fmt;

/// エクスポート時のヘッダー列名
pub const EXPORT_HEADER: &str = "Conversions";

/// 履歴エントリ
///
/// 完了した変換1件の整形済み文字列。作成後は変更されない
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    text: String,
    created_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// 現在時刻で新しいエントリを作成
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// 変換履歴
///
/// 追記のみの順序付きシーケンス。変更は `append` と `clear` のみ
#[derive(Debug, Clone, Default)]
pub struct ConversionHistory {
    entries: Vec<HistoryEntry>,
}

impl ConversionHistory {
    /// 空の履歴を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 履歴の末尾にエントリを追加
    pub fn append(&mut self, text: impl Into<String>) {
        self.entries.push(HistoryEntry::new(text));
    }

    /// 直近 `n` 件を新しい順に返す
    ///
    /// 返すイテレータは遅延評価で、`clone` すれば何度でも走査できる
    pub fn recent(
        &self,
        n: usize,
    ) -> impl ExactSizeIterator<Item = &HistoryEntry> + DoubleEndedIterator + Clone + '_ {
        let start = self.entries.len().saturating_sub(n);
        self.entries[start..].iter().rev()
    }

    /// 履歴を空にする
    pub fn clear(&mut self) {
        self.entries = Vec::new();
    }

    /// 挿入順のエントリ
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 1列のCSVとしてエクスポートする
    ///
    /// ヘッダー `Conversions` の後に挿入順で1行1エントリ（UTF-8、改行は `\n`）
    ///
    /// ```
    /// use unitconv::domain::entities::history::ConversionHistory;
    ///
    /// let mut history = ConversionHistory::new();
    /// history.append("1 Meter = 1.0000 Feet");
    ///
    /// let bytes = history.export_table();
    /// assert_eq!(bytes, b"Conversions\n1 Meter = 1.0000 Feet\n");
    /// ```
    pub fn export_table(&self) -> Vec<u8> {
        let mut out = String::with_capacity(EXPORT_HEADER.len() + 1 + self.entries.len() * 32);
        out.push_str(&csv_field(EXPORT_HEADER));
        out.push('\n');
        for entry in &self.entries {
            out.push_str(&csv_field(entry.text()));
            out.push('\n');
        }
        out.into_bytes()
    }
}

/// CSVのフィールドとしてエスケープする
///
/// 空文字列は `""` として書き出す（空行と区別するため）
fn csv_field(value: &str) -> String {
    if value.is_empty() || value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(entries: impl Iterator<Item = &'a HistoryEntry>) -> Vec<&'a str> {
        entries.map(HistoryEntry::text).collect()
    }

    #[test]
    fn test_new_history_is_empty() {
        let history = ConversionHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.recent(5).count(), 0);
    }

    #[test]
    fn test_append_then_recent_one() {
        let mut history = ConversionHistory::new();
        history.append("1.0 Meter = 3.2808 Feet");

        assert_eq!(texts(history.recent(1)), vec!["1.0 Meter = 3.2808 Feet"]);
    }

    #[test]
    fn test_recent_excludes_oldest() {
        let mut history = ConversionHistory::new();
        for i in 1..=6 {
            history.append(format!("entry-{}", i));
        }

        assert_eq!(
            texts(history.recent(5)),
            vec!["entry-6", "entry-5", "entry-4", "entry-3", "entry-2"]
        );
        assert_eq!(history.len(), 6);
    }

    #[test]
    fn test_recent_more_than_len() {
        let mut history = ConversionHistory::new();
        history.append("a");
        history.append("b");

        assert_eq!(texts(history.recent(10)), vec!["b", "a"]);
    }

    #[test]
    fn test_recent_is_restartable() {
        let mut history = ConversionHistory::new();
        history.append("a");
        history.append("b");

        let iter = history.recent(2);
        let first: Vec<_> = texts(iter.clone());
        let second: Vec<_> = texts(iter);
        assert_eq!(first, second);
    }

    #[test]
    fn test_clear() {
        let mut history = ConversionHistory::new();
        history.append("a");
        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.recent(5).count(), 0);
    }

    #[test]
    fn test_export_empty_history_has_header() {
        let history = ConversionHistory::new();
        assert_eq!(history.export_table(), b"Conversions\n");
    }

    #[test]
    fn test_export_keeps_insertion_order() {
        let mut history = ConversionHistory::new();
        history.append("first");
        history.append("second");

        let csv = String::from_utf8(history.export_table()).unwrap();
        assert_eq!(csv, "Conversions\nfirst\nsecond\n");
    }

    #[test]
    fn test_export_quotes_special_characters() {
        let mut history = ConversionHistory::new();
        history.append("1,000 \"big\" units");

        let csv = String::from_utf8(history.export_table()).unwrap();
        assert_eq!(csv, "Conversions\n\"1,000 \"\"big\"\" units\"\n");
    }

    #[test]
    fn test_export_quotes_empty_entry() {
        let mut history = ConversionHistory::new();
        history.append("");
        history.append("after");

        let csv = String::from_utf8(history.export_table()).unwrap();
        assert_eq!(csv, "Conversions\n\"\"\nafter\n");
    }

    #[test]
    fn test_entries_in_insertion_order() {
        let mut history = ConversionHistory::new();
        history.append("first");
        history.append("second");
        history.append("third");

        let texts: Vec<&str> = history.entries().iter().map(HistoryEntry::text).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_entry_display() {
        let entry = HistoryEntry::new("x");
        assert_eq!(entry.to_string(), "x");
        assert!(entry.created_at() <= Utc::now());
    }
}
