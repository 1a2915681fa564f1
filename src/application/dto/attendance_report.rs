//! # Attendance Report DTO
//!
//! 勤務時間レポートのData Transfer Object

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::attendance_record::AttendanceRecord;
use crate::domain::entities::shift_duration::{HoursTotal, ShiftDuration};
use crate::domain::services::hours_aggregation::{DateWindow, WeeklyProgress};
use crate::domain::services::hours_reconciliation::Reconciliation;

/// 読み込みでスキップされた不正なレコード
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedRecord {
    pub source_file: String,
    /// ファイル内の位置（0始まり）
    pub index: usize,
    pub reason: String,
}

/// 読み込み結果
#[derive(Debug, Clone, Default)]
pub struct LoadedAttendance {
    pub records: Vec<AttendanceRecord>,
    pub skipped: Vec<SkippedRecord>,
}

/// レポートの1行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub record: AttendanceRecord,
    /// 未退勤なら None
    pub duration: Option<ShiftDuration>,
    /// 未退勤なら None
    pub reconciliation: Option<Reconciliation>,
}

/// 勤務時間レポート
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceReport {
    pub reference_date: NaiveDate,
    pub entries: Vec<ReportEntry>,
    pub day_total: HoursTotal,
    pub week: DateWindow,
    pub week_total: HoursTotal,
    pub month: DateWindow,
    pub month_total: HoursTotal,
    pub weekly_progress: WeeklyProgress,
    pub skipped: Vec<SkippedRecord>,
}

impl AttendanceReport {
    /// 参考値と食い違ったレコード
    pub fn divergences(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.reconciliation.is_some_and(|r| r.is_diverged()))
    }

    /// 未退勤のレコード
    pub fn in_progress(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|entry| entry.duration.is_none())
    }
}
