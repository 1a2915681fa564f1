//! # Data Transfer Objects
//!
//! - **ReportConfig**: レポート設定
//! - **AttendanceReport**: 勤務時間レポート

pub mod attendance_report;
pub mod report_config;
