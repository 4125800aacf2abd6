//! # Data Transfer Objects
//!
//! ユースケースの入出力

pub mod conversion_outcome;
pub mod export_summary;
