//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::{Parser, Subcommand};

use crate::adapter::config::DEFAULT_CONFIG_PATH;

/// 単位変換CLI
#[derive(Parser, Debug, Clone)]
#[command(name = "unitconv")]
#[command(about = "Convert values between units and keep a session history", long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// サブコマンド（省略時は対話モード）
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Start an interactive session (default)
    Repl,

    /// Convert a single value and print the result
    Convert {
        /// Category (Length, Weight, Temperature, Speed, Time, Volume, Pressure)
        category: String,
        /// Value to convert (must not be negative)
        value: f64,
        /// Unit to convert from
        from: String,
        /// Unit to convert to
        to: String,
    },

    /// List categories, or the units of one category
    Units {
        /// Category to list units for
        category: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default() {
        let args = Args::parse_from(["unitconv"]);
        assert_eq!(args.config, "./.unitconv/config.json");
        assert!(args.command.is_none());
    }

    #[test]
    fn test_args_custom_config() {
        let args = Args::parse_from(["unitconv", "-c", "/custom/config.json"]);
        assert_eq!(args.config, "/custom/config.json");
    }

    #[test]
    fn test_args_repl() {
        let args = Args::parse_from(["unitconv", "repl"]);
        assert_eq!(args.command, Some(Command::Repl));
    }

    #[test]
    fn test_args_convert() {
        let args = Args::parse_from(["unitconv", "convert", "Length", "1.5", "Kilometer", "Meter"]);
        assert_eq!(
            args.command,
            Some(Command::Convert {
                category: "Length".to_string(),
                value: 1.5,
                from: "Kilometer".to_string(),
                to: "Meter".to_string(),
            })
        );
    }

    #[test]
    fn test_args_convert_unit_with_space() {
        let args = Args::parse_from(["unitconv", "convert", "volume", "2", "Cubic Meters", "Liters"]);
        match args.command {
            Some(Command::Convert { from, .. }) => assert_eq!(from, "Cubic Meters"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_args_convert_invalid_value() {
        let result = Args::try_parse_from(["unitconv", "convert", "Length", "abc", "Meter", "Feet"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_args_units() {
        let args = Args::parse_from(["unitconv", "units", "speed"]);
        assert_eq!(
            args.command,
            Some(Command::Units {
                category: Some("speed".to_string())
            })
        );
    }
}
