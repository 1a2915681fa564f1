//! # Domain Entities
//!
//! エンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **TimeOfDay**: 壁時計の時刻
//! - **ShiftInterval**: 出勤・退勤の組
//! - **ShiftDuration**: 勤務時間の計算結果
//! - **AttendanceRecord**: 勤怠レコード

pub mod attendance_record;
pub mod shift_duration;
pub mod shift_interval;
pub mod time_of_day;
