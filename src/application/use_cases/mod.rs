//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **DiscoverExportsUseCase**: エクスポートファイルの発見
//! - **LoadAttendanceUseCase**: 勤怠レコードの読み込みと正規化
//! - **SummarizeAttendanceUseCase**: 勤務時間の計算と集計

pub mod discover_exports;
pub mod load_attendance;
pub mod summarize_attendance;
