//! Adapter Layer
//!
//! 外部システム（設定ファイル、勤怠エクスポート）との統合

pub mod config;
pub mod repositories;
