//! # ShiftDuration Value Object
//!
//! 勤務時間の計算結果

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::Serialize;

/// 勤務時間の計算結果
///
/// `hours` は分数から求めた浮動小数点の値。集計は `total_minutes` を使う。
/// 表示時は [`ShiftDuration::rounded_hours`] で小数第1位に丸める。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShiftDuration {
    /// 経過時間（時間単位）
    pub hours: f64,
    /// 退勤が翌日にまたがったかどうか
    pub crossed_midnight: bool,
    /// 経過分数
    pub total_minutes: u32,
}

impl ShiftDuration {
    pub fn from_minutes(total_minutes: u32, crossed_midnight: bool) -> Self {
        Self {
            hours: f64::from(total_minutes) / 60.0,
            crossed_midnight,
            total_minutes,
        }
    }

    /// 小数第1位に丸めた時間（0.05 は切り上げ）
    ///
    /// 分数から整数演算で求めるため、浮動小数点の誤差で切り捨てられることはない
    pub fn rounded_hours(&self) -> f64 {
        rounded_hours_from_minutes(self.total_minutes)
    }
}

impl fmt::Display for ShiftDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}h", self.rounded_hours())
    }
}

/// 分数を小数第1位の時間に丸める（0.05 は切り上げ）
pub fn rounded_hours_from_minutes(total_minutes: u32) -> f64 {
    let tenths = (total_minutes + 3) / 6;
    f64::from(tenths) / 10.0
}

/// 勤務時間の合計
///
/// 分単位で積み上げ、表示時に1回だけ丸める。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct HoursTotal {
    pub total_minutes: u32,
}

impl HoursTotal {
    pub fn from_minutes(total_minutes: u32) -> Self {
        Self { total_minutes }
    }

    /// 時間数から作成（分未満は四捨五入）
    pub fn from_hours(hours: f64) -> Self {
        Self::from_minutes((hours * 60.0).round().max(0.0) as u32)
    }

    pub fn hours(&self) -> f64 {
        f64::from(self.total_minutes) / 60.0
    }

    pub fn rounded_hours(&self) -> f64 {
        rounded_hours_from_minutes(self.total_minutes)
    }

    /// 0 未満にならない差
    pub fn saturating_sub(self, other: Self) -> Self {
        Self::from_minutes(self.total_minutes.saturating_sub(other.total_minutes))
    }
}

impl From<ShiftDuration> for HoursTotal {
    fn from(duration: ShiftDuration) -> Self {
        Self::from_minutes(duration.total_minutes)
    }
}

impl Add for HoursTotal {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::from_minutes(self.total_minutes + other.total_minutes)
    }
}

impl Sum for HoursTotal {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl fmt::Display for HoursTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}h", self.rounded_hours())
    }
}
