//! # ShiftInterval Entity
//!
//! 出勤から退勤までの1勤務

use serde::{Deserialize, Serialize};

use super::time_of_day::TimeOfDay;

/// 勤務の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShiftStatus {
    /// 出勤済み・未退勤
    InProgress,
    /// 退勤済み
    Completed,
}

/// 出勤・退勤の組
///
/// 出勤時に `check_out = None` で作られ、退勤時に完了する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftInterval {
    pub check_in: TimeOfDay,
    pub check_out: Option<TimeOfDay>,
}

impl ShiftInterval {
    /// 出勤して勤務を開始する
    pub fn open(check_in: TimeOfDay) -> Self {
        Self {
            check_in,
            check_out: None,
        }
    }

    /// 出勤・退勤の揃った勤務
    pub fn completed(check_in: TimeOfDay, check_out: TimeOfDay) -> Self {
        Self {
            check_in,
            check_out: Some(check_out),
        }
    }

    /// 退勤を記録する
    ///
    /// 既に退勤済みの場合は退勤時刻を上書きする
    pub fn record_check_out(&mut self, at: TimeOfDay) {
        self.check_out = Some(at);
    }

    pub fn status(&self) -> ShiftStatus {
        match self.check_out {
            Some(_) => ShiftStatus::Completed,
            None => ShiftStatus::InProgress,
        }
    }

    #[inline]
    pub fn is_in_progress(&self) -> bool {
        self.check_out.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        TimeOfDay::parse(s).unwrap()
    }

    #[test]
    fn test_open_is_in_progress() {
        let shift = ShiftInterval::open(t("09:00:00"));
        assert!(shift.is_in_progress());
        assert_eq!(shift.status(), ShiftStatus::InProgress);
    }

    #[test]
    fn test_check_out_completes() {
        let mut shift = ShiftInterval::open(t("22:00:00"));
        shift.record_check_out(t("06:00:00"));

        assert!(!shift.is_in_progress());
        assert_eq!(shift.status(), ShiftStatus::Completed);
        assert_eq!(shift, ShiftInterval::completed(t("22:00"), t("06:00")));
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&ShiftStatus::InProgress).unwrap(),
            "\"IN_PROGRESS\""
        );
        assert_eq!(
            serde_json::to_string(&ShiftStatus::Completed).unwrap(),
            "\"COMPLETED\""
        );
    }
}
