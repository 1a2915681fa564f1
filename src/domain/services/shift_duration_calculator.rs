//! # Shift Duration Calculator
//!
//! 勤務時間計算サービス（日付またぎ対応）

use crate::domain::entities::shift_duration::ShiftDuration;
use crate::domain::entities::shift_interval::ShiftInterval;
use crate::domain::entities::time_of_day::{TimeOfDay, MINUTES_PER_DAY};
use crate::domain::error::ShiftError;

/// 勤務時間計算サービス
///
/// 状態を持たない純粋関数の集まり。同じ入力には常に同じ結果を返す。
pub struct ShiftDurationCalculator;

impl ShiftDurationCalculator {
    /// 出勤・退勤時刻から勤務時間を計算
    ///
    /// 退勤時刻が出勤時刻より前の場合、勤務は午前0時をまたいだものとみなす。
    /// 同じ時刻の場合は 24 時間ではなく 0 時間（重複打刻を過大計上しない）。
    ///
    /// 2回以上日付をまたぐ勤務は表現できない。
    pub fn compute_duration(check_in: TimeOfDay, check_out: TimeOfDay) -> ShiftDuration {
        let start = check_in.minutes_since_midnight();
        let end = check_out.minutes_since_midnight();

        if end >= start {
            ShiftDuration::from_minutes(end - start, false)
        } else {
            ShiftDuration::from_minutes(MINUTES_PER_DAY - start + end, true)
        }
    }

    /// 時刻文字列から勤務時間を計算
    ///
    /// # Errors
    ///
    /// どちらかの時刻が不正な場合に `InvalidTimeFormat` を返す（部分的な結果は返さない）
    pub fn compute_from_str(check_in: &str, check_out: &str) -> Result<ShiftDuration, ShiftError> {
        let check_in = TimeOfDay::parse(check_in)?;
        let check_out = TimeOfDay::parse(check_out)?;
        Ok(Self::compute_duration(check_in, check_out))
    }

    /// 勤務の勤務時間
    ///
    /// 未退勤の勤務は `None`
    pub fn duration_of(shift: &ShiftInterval) -> Option<ShiftDuration> {
        shift
            .check_out
            .map(|check_out| Self::compute_duration(shift.check_in, check_out))
    }
}
