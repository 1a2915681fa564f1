//! # Hours Aggregation Service
//!
//! 日・週・月単位の勤務時間集計
//!
//! 1つの勤務は出勤日の1日にだけ計上する。午前0時をまたいだ勤務でも、
//! 翌日分を翌日に振り分けることはしない。

use std::collections::BTreeMap;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::Serialize;

use super::shift_duration_calculator::ShiftDurationCalculator;
use crate::domain::entities::attendance_record::AttendanceRecord;
use crate::domain::entities::shift_duration::HoursTotal;

/// 日付の範囲（両端を含む）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// 1日だけの範囲
    pub fn day(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    /// `date` を含む週
    ///
    /// # Arguments
    ///
    /// * `date` - 基準日
    /// * `week_start` - 週の始まりの曜日
    pub fn week_of(date: NaiveDate, week_start: Weekday) -> Self {
        let offset = (date.weekday().num_days_from_monday() + 7
            - week_start.num_days_from_monday())
            % 7;
        let start = date - Days::new(u64::from(offset));
        Self::new(start, start + Days::new(6))
    }

    /// `date` を含む月
    pub fn month_of(date: NaiveDate) -> Self {
        let start = date - Days::new(u64::from(date.day0()));
        let end = start
            .checked_add_months(Months::new(1))
            .map(|next| next - Days::new(1))
            .unwrap_or(NaiveDate::MAX);
        Self::new(start, end)
    }

    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// 週の目標時間に対する進捗
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeeklyProgress {
    pub worked: HoursTotal,
    pub target: HoursTotal,
    /// 達成率（%）
    pub percent: f64,
    /// 残り時間（0 未満にはならない）
    pub remaining: HoursTotal,
}

/// 勤務時間集計サービス
pub struct HoursAggregationService;

impl HoursAggregationService {
    /// 範囲内の勤務時間の合計
    ///
    /// 出勤日が範囲内にある退勤済みの勤務のみを分単位で合計する
    pub fn total(records: &[AttendanceRecord], window: DateWindow) -> HoursTotal {
        records
            .iter()
            .filter(|record| window.contains(record.date))
            .filter_map(|record| ShiftDurationCalculator::duration_of(&record.shift))
            .map(HoursTotal::from)
            .sum()
    }

    /// 出勤日ごとの勤務時間の合計
    ///
    /// 退勤済みの勤務がない日は含まない
    pub fn daily_totals(records: &[AttendanceRecord]) -> BTreeMap<NaiveDate, HoursTotal> {
        let mut totals = BTreeMap::new();
        for record in records {
            if let Some(duration) = ShiftDurationCalculator::duration_of(&record.shift) {
                let total = totals.entry(record.date).or_insert_with(HoursTotal::default);
                *total = *total + HoursTotal::from(duration);
            }
        }
        totals
    }

    /// 範囲内の未退勤の勤務
    pub fn in_progress<'a>(
        records: &'a [AttendanceRecord],
        window: DateWindow,
    ) -> Vec<&'a AttendanceRecord> {
        records
            .iter()
            .filter(|record| window.contains(record.date) && record.shift.is_in_progress())
            .collect()
    }

    /// 週の目標時間に対する進捗
    ///
    /// # Arguments
    ///
    /// * `worked` - 週の勤務時間の合計
    /// * `target_hours` - 週の目標時間
    pub fn weekly_progress(worked: HoursTotal, target_hours: f64) -> WeeklyProgress {
        let target = HoursTotal::from_hours(target_hours);
        let percent = if target.total_minutes > 0 {
            f64::from(worked.total_minutes) / f64::from(target.total_minutes) * 100.0
        } else {
            0.0
        };

        WeeklyProgress {
            worked,
            target,
            percent,
            remaining: target.saturating_sub(worked),
        }
    }
}
