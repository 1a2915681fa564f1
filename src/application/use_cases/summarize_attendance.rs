//! # Summarize Attendance Use Case
//!
//! 勤務時間の計算と集計ユースケース

use chrono::NaiveDate;
use log::warn;

use crate::application::dto::attendance_report::{AttendanceReport, LoadedAttendance, ReportEntry};
use crate::application::dto::report_config::ReportConfig;
use crate::domain::services::hours_aggregation::{DateWindow, HoursAggregationService};
use crate::domain::services::hours_reconciliation::{
    HoursReconciliationService, Reconciliation,
};
use crate::domain::services::shift_duration_calculator::ShiftDurationCalculator;

/// 勤務時間の集計ユースケース
///
/// 各レコードの勤務時間を出勤・退勤時刻から再計算し、基準日を含む
/// 日・週・月の合計を求める。バックエンドの参考値は突き合わせにのみ使う。
pub struct SummarizeAttendanceUseCase {
    config: ReportConfig,
}

impl SummarizeAttendanceUseCase {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `config` - レポート設定
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// レポートを作成する
    ///
    /// # Arguments
    ///
    /// * `loaded` - 読み込み済みの勤怠データ
    /// * `reference_date` - 基準日
    pub fn execute(&self, loaded: LoadedAttendance, reference_date: NaiveDate) -> AttendanceReport {
        let LoadedAttendance {
            mut records,
            skipped,
        } = loaded;
        records.sort_by_key(|record| (record.date, record.shift.check_in));

        let week = DateWindow::week_of(reference_date, self.config.week_starts_on);
        let month = DateWindow::month_of(reference_date);

        let day_total = HoursAggregationService::total(&records, DateWindow::day(reference_date));
        let week_total = HoursAggregationService::total(&records, week);
        let month_total = HoursAggregationService::total(&records, month);
        let weekly_progress =
            HoursAggregationService::weekly_progress(week_total, self.config.weekly_target_hours);

        let entries = records
            .into_iter()
            .map(|record| {
                let duration = ShiftDurationCalculator::duration_of(&record.shift);
                let reconciliation = duration.map(|duration| {
                    HoursReconciliationService::reconcile(
                        record.reported_hours,
                        duration.hours,
                        self.config.hours_hint_tolerance,
                    )
                });

                if let Some(Reconciliation::Diverged { reported, computed }) = reconciliation {
                    warn!(
                        "Reported hours {} differ from computed {:.3} for record {:?} on {}",
                        reported, computed, record.id, record.date
                    );
                }

                ReportEntry {
                    record,
                    duration,
                    reconciliation,
                }
            })
            .collect();

        AttendanceReport {
            reference_date,
            entries,
            day_total,
            week,
            week_total,
            month,
            month_total,
            weekly_progress,
            skipped,
        }
    }
}
