//! unitconv - Unit Converter
//!
//! 単位変換の対話セッションとワンショット変換

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use unitconv::adapter::config::Config;
use unitconv::driver::{Args, ConverterWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration (defaults when the file does not exist)
    let config = Config::load_or_default(&args.config)?;

    // Create workflow with injected dependencies
    let workflow = ConverterWorkflow::new(config)?;

    workflow.execute(args).await
}
