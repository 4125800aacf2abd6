//! Interactive Command Parsing
//!
//! 対話モードの入力行をコマンドに変換する

use anyhow::{anyhow, bail, Result};

/// 対話モードのコマンド
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    Help,
    Categories,
    SelectCategory(String),
    Units,
    Convert {
        value: f64,
        from_unit: String,
        to_unit: String,
    },
    ToggleHistory,
    ClearHistory,
    Export(Option<String>),
    Quit,
    Empty,
}

/// 対話モードのヘルプ
pub const HELP_TEXT: &str = "\
Commands:
  categories                      list categories
  category <name>                 select a category
  units                           list units of the selected category
  convert <value> <from> to <to>  convert a value (the word 'convert' is optional)
  history                         show/hide the conversion history
  clear                           clear the conversion history
  export [dir]                    write conversion_history.csv
  help                            show this help
  quit                            end the session";

/// 入力行をパースする
///
/// # Errors
///
/// 未知のコマンドや不正な変換式の場合にエラーを返す
pub fn parse_line(line: &str) -> Result<ReplCommand> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(ReplCommand::Empty);
    }

    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head.to_ascii_lowercase().as_str() {
        "help" | "?" => Ok(ReplCommand::Help),
        "categories" => Ok(ReplCommand::Categories),
        "category" => {
            if rest.is_empty() {
                bail!("usage: category <name>");
            }
            Ok(ReplCommand::SelectCategory(rest.to_string()))
        }
        "units" => Ok(ReplCommand::Units),
        "convert" => parse_conversion(rest),
        "history" => Ok(ReplCommand::ToggleHistory),
        "clear" => Ok(ReplCommand::ClearHistory),
        "export" => Ok(ReplCommand::Export(
            (!rest.is_empty()).then(|| rest.to_string()),
        )),
        "quit" | "exit" => Ok(ReplCommand::Quit),
        _ if head.parse::<f64>().is_ok() => parse_conversion(line),
        other => Err(anyhow!("unknown command '{}' (type 'help')", other)),
    }
}

/// `<value> <from> to <to>` をパースする
fn parse_conversion(expr: &str) -> Result<ReplCommand> {
    const USAGE: &str = "usage: convert <value> <from> to <to>";

    let (value, units) = expr
        .split_once(char::is_whitespace)
        .ok_or_else(|| anyhow!(USAGE))?;
    let value: f64 = value
        .parse()
        .map_err(|_| anyhow!("'{}' is not a number", value))?;

    let (from_unit, to_unit) = split_units(units.trim()).ok_or_else(|| anyhow!(USAGE))?;
    if from_unit.is_empty() || to_unit.is_empty() {
        bail!(USAGE);
    }

    Ok(ReplCommand::Convert {
        value,
        from_unit: from_unit.to_string(),
        to_unit: to_unit.to_string(),
    })
}

/// 単位部分を " to " で分割する（大文字小文字を区別しない）
fn split_units(units: &str) -> Option<(&str, &str)> {
    let lower = units.to_ascii_lowercase();
    let idx = lower.find(" to ")?;
    Some((units[..idx].trim(), units[idx + 4..].trim()))
}
