//! # Report Configuration DTO
//!
//! 勤務時間レポート設定のData Transfer Object

use chrono::Weekday;

/// 勤務時間レポートの設定
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// 週の始まりの曜日
    pub week_starts_on: Weekday,
    /// 週の目標勤務時間
    pub weekly_target_hours: f64,
    /// 参考値と再計算値を一致とみなす差（時間）
    pub hours_hint_tolerance: f64,
    /// 不正なレコードをスキップするかどうか（false なら最初の不正レコードでエラー）
    pub skip_malformed: bool,
    /// 対象の従業員ID（None なら全員）
    pub employee_id: Option<u64>,
}

impl ReportConfig {
    /// 新しいレポート設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use chrono::Weekday;
    /// use shiftcalc::application::dto::report_config::ReportConfig;
    ///
    /// let config = ReportConfig::new(Weekday::Mon, 37.5, 0.05, false, Some(42));
    ///
    /// assert_eq!(config.week_starts_on, Weekday::Mon);
    /// assert_eq!(config.weekly_target_hours, 37.5);
    /// assert!(!config.skip_malformed);
    /// ```
    pub fn new(
        week_starts_on: Weekday,
        weekly_target_hours: f64,
        hours_hint_tolerance: f64,
        skip_malformed: bool,
        employee_id: Option<u64>,
    ) -> Self {
        Self {
            week_starts_on,
            weekly_target_hours,
            hours_hint_tolerance,
            skip_malformed,
            employee_id,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new(Weekday::Sun, 40.0, 0.05, true, None)
    }
}
