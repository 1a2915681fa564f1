//! # TimeOfDay Value Object
//!
//! 日付もタイムゾーンも持たない壁時計の時刻

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::domain::error::ShiftError;

/// 1日の分数
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// 壁時計の時刻（時・分・秒）
///
/// 勤怠システムが記録する出勤・退勤時刻を表す。
/// 構築時に範囲チェックを行うため、存在する値は常に有効。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    /// 時・分・秒から時刻を作成
    ///
    /// # Errors
    ///
    /// 時が 0..=23、分・秒が 0..=59 の範囲外の場合に `InvalidTimeFormat` を返す
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, ShiftError> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(ShiftError::InvalidTimeFormat(format!(
                "{:02}:{:02}:{:02}",
                hour, minute, second
            )));
        }

        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// 時・分のみから時刻を作成（秒は 0）
    pub fn hm(hour: u8, minute: u8) -> Result<Self, ShiftError> {
        Self::new(hour, minute, 0)
    }

    /// 時刻文字列をパース
    ///
    /// 受け付ける形式:
    ///
    /// * `HH:MM`
    /// * `HH:MM:SS`（バックエンドの形式）
    /// * `YYYY-MM-DDTHH:MM:SS`（時刻部分のみ使用）
    ///
    /// # Errors
    ///
    /// 上記のいずれにも当てはまらない場合に `InvalidTimeFormat` を返す
    pub fn parse(input: &str) -> Result<Self, ShiftError> {
        let trimmed = input.trim();
        let invalid = || ShiftError::InvalidTimeFormat(input.to_string());

        if trimmed.contains('T') {
            let datetime = trimmed
                .parse::<NaiveDateTime>()
                .map_err(|_| invalid())?;
            return Self::new(
                datetime.hour() as u8,
                datetime.minute() as u8,
                datetime.second() as u8,
            )
            .map_err(|_| invalid());
        }

        let parts: Vec<&str> = trimmed.split(':').collect();
        if parts.len() != 2 && parts.len() != 3 {
            return Err(invalid());
        }

        let mut components = [0u8; 3];
        for (slot, part) in components.iter_mut().zip(&parts) {
            *slot = parse_component(part).ok_or_else(invalid)?;
        }

        Self::new(components[0], components[1], components[2]).map_err(|_| invalid())
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    /// 午前0時からの経過分数（秒は含めない）
    #[inline]
    pub fn minutes_since_midnight(&self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }

    /// バックエンド形式 `HH:MM:SS` の文字列
    pub fn to_backend_string(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// 1〜2桁の10進数字のみを受け付ける
fn parse_component(part: &str) -> Option<u8> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl fmt::Display for TimeOfDay {
    /// UI 表示用の `HH:MM`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = ShiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ShiftError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_backend_string()
    }
}
