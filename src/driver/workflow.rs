//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use log::info;
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::repositories::json_attendance_repository::JsonAttendanceRepository;
use crate::application::dto::attendance_report::AttendanceReport;
use crate::application::use_cases::discover_exports::DiscoverExportsUseCase;
use crate::application::use_cases::load_attendance::LoadAttendanceUseCase;
use crate::application::use_cases::summarize_attendance::SummarizeAttendanceUseCase;
use crate::domain::entities::shift_duration::ShiftDuration;
use crate::domain::entities::time_of_day::TimeOfDay;
use crate::domain::services::hours_reconciliation::Reconciliation;
use crate::domain::services::shift_duration_calculator::ShiftDurationCalculator;

use super::cli::{Args, Command, ReportArgs};

/// Format a single shift for display
pub fn render_duration(check_in: TimeOfDay, check_out: Option<TimeOfDay>) -> String {
    match check_out {
        None => format!("Shift in progress since {}", check_in),
        Some(check_out) => {
            let duration = ShiftDurationCalculator::compute_duration(check_in, check_out);
            format!(
                "{} ({} → {}{})",
                duration,
                check_in,
                check_out,
                midnight_marker(&duration)
            )
        }
    }
}

fn midnight_marker(duration: &ShiftDuration) -> &'static str {
    if duration.crossed_midnight {
        ", crossed midnight"
    } else {
        ""
    }
}

/// Format a report as plain text
pub fn render_report(report: &AttendanceReport) -> String {
    let mut lines = vec![format!("Attendance on {}:", report.reference_date)];

    for entry in &report.entries {
        let record = &entry.record;
        let who = match (&record.employee_name, record.employee_id) {
            (Some(name), _) => format!("  {}", name),
            (None, Some(id)) => format!("  #{}", id),
            (None, None) => String::new(),
        };
        let line = match (entry.duration, record.shift.check_out) {
            (Some(duration), Some(check_out)) => format!(
                "{} {} → {} {:>6}{}",
                record.date,
                record.shift.check_in,
                check_out,
                duration.to_string(),
                if duration.crossed_midnight { " (+1 day)" } else { "" }
            ),
            _ => format!(
                "{} {} → --:-- {:>6}",
                record.date, record.shift.check_in, "in progress"
            ),
        };
        lines.push(format!("  {}{}", line, who));
    }

    lines.push(String::new());
    lines.push(format!("Day   {}: {}", report.reference_date, report.day_total));
    lines.push(format!(
        "Week  {} – {}: {}",
        report.week.start, report.week.end, report.week_total
    ));
    lines.push(format!(
        "Month {} – {}: {}",
        report.month.start, report.month.end, report.month_total
    ));

    let progress = &report.weekly_progress;
    lines.push(format!(
        "Weekly target: {:.1} of {:.1} hours ({}% complete, {} remaining)",
        progress.worked.rounded_hours(),
        progress.target.rounded_hours(),
        progress.percent.round(),
        progress.remaining
    ));

    let in_progress = report.in_progress().count();
    if in_progress > 0 {
        lines.push(format!("In progress: {} shift(s)", in_progress));
    }

    let divergences: Vec<_> = report.divergences().collect();
    if !divergences.is_empty() {
        lines.push("⚠ Reported hours differ from computed hours:".to_string());
        lines.extend(divergences.into_iter().filter_map(|entry| match entry.reconciliation {
            Some(Reconciliation::Diverged { reported, computed }) => Some(format!(
                "    {} {}: reported {:.2}h, computed {:.2}h",
                entry.record.date, entry.record.shift.check_in, reported, computed
            )),
            _ => None,
        }));
    }

    if !report.skipped.is_empty() {
        lines.push(format!("⚠ Skipped {} malformed record(s):", report.skipped.len()));
        lines.extend(report.skipped.iter().map(|skipped| {
            format!(
                "    {} #{}: {}",
                skipped.source_file, skipped.index, skipped.reason
            )
        }));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Run the selected command
///
/// Configuration is only read for `report`; `duration` needs none.
pub async fn run(args: Args) -> Result<()> {
    if let Command::Duration {
        check_in,
        check_out,
    } = &args.command
    {
        return print_duration(check_in, check_out.as_deref());
    }

    let config = Config::load(&args.config)?;
    let workflow = AttendanceReportWorkflow::new(config);
    workflow.execute(args).await
}

fn print_duration(check_in: &str, check_out: Option<&str>) -> Result<()> {
    let line = AttendanceReportWorkflow::duration(check_in, check_out)?;
    println!("✓ {}", line);
    Ok(())
}

/// Attendance Report Workflow
pub struct AttendanceReportWorkflow {
    config: Config,
    discover_use_case: Arc<DiscoverExportsUseCase<JsonAttendanceRepository>>,
    load_use_case: Arc<LoadAttendanceUseCase<JsonAttendanceRepository>>,
}

impl AttendanceReportWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Self {
        let attendance_repo = Arc::new(JsonAttendanceRepository::new());

        let discover_use_case = Arc::new(DiscoverExportsUseCase::new(attendance_repo.clone()));
        let load_use_case = Arc::new(LoadAttendanceUseCase::new(attendance_repo));

        Self {
            config,
            discover_use_case,
            load_use_case,
        }
    }

    /// Execute the selected command
    pub async fn execute(&self, args: Args) -> Result<()> {
        match args.command {
            Command::Duration {
                check_in,
                check_out,
            } => print_duration(&check_in, check_out.as_deref()),
            Command::Report(report_args) => {
                let json = report_args.json;
                let Some(report) = self.report(report_args).await? else {
                    return Ok(());
                };
                if json {
                    let rendered = serde_json::to_string_pretty(&report)
                        .context("Failed to serialize report")?;
                    println!("{}", rendered);
                } else {
                    print!("{}", render_report(&report));
                }
                Ok(())
            }
        }
    }

    /// Compute and format one shift
    pub fn duration(check_in: &str, check_out: Option<&str>) -> Result<String> {
        let check_in = TimeOfDay::parse(check_in).context("Invalid check-in time")?;
        let check_out = check_out
            .map(TimeOfDay::parse)
            .transpose()
            .context("Invalid check-out time")?;
        Ok(render_duration(check_in, check_out))
    }

    /// Build the report, or `None` when there is nothing to report on
    pub async fn report(&self, args: ReportArgs) -> Result<Option<AttendanceReport>> {
        info!("Starting attendance report...");

        let reference_date: NaiveDate = args.date.unwrap_or_else(|| Local::now().date_naive());
        let location = args.input.unwrap_or_else(|| self.config.input_dir.clone());
        let report_config = self.config.report_config(args.employee);

        println!("✓ Using configuration:");
        println!("  Week starts on: {}", report_config.week_starts_on);
        println!("  Weekly target: {:.1}h", report_config.weekly_target_hours);
        if let Some(employee_id) = report_config.employee_id {
            println!("  Employee: {}", employee_id);
        }

        let export_files = self.discover_use_case.execute(&location).await?;
        println!("✓ Found {} export files in {}", export_files.len(), location);

        if export_files.is_empty() {
            println!("No attendance exports to process. Exiting.");
            return Ok(None);
        }

        let loaded = self
            .load_use_case
            .execute(&export_files, &report_config)
            .await?;
        println!(
            "✓ Loaded {} records ({} skipped)",
            loaded.records.len(),
            loaded.skipped.len()
        );

        let summarize_use_case = SummarizeAttendanceUseCase::new(report_config);
        Ok(Some(summarize_use_case.execute(loaded, reference_date)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::attendance_report::{LoadedAttendance, SkippedRecord};
    use crate::application::dto::report_config::ReportConfig;
    use crate::domain::entities::attendance_record::AttendanceRecord;
    use crate::domain::entities::shift_interval::ShiftInterval;

    fn t(s: &str) -> TimeOfDay {
        TimeOfDay::parse(s).unwrap()
    }

    #[test]
    fn test_render_duration_same_day() {
        assert_eq!(
            render_duration(t("09:00:00"), Some(t("17:30:00"))),
            "8.5h (09:00 → 17:30)"
        );
    }

    #[test]
    fn test_render_duration_overnight() {
        assert_eq!(
            render_duration(t("22:00:00"), Some(t("06:00:00"))),
            "8.0h (22:00 → 06:00, crossed midnight)"
        );
    }

    #[test]
    fn test_render_duration_in_progress() {
        assert_eq!(
            render_duration(t("09:15:00"), None),
            "Shift in progress since 09:15"
        );
    }

    #[test]
    fn test_workflow_duration_invalid_time() {
        let err = AttendanceReportWorkflow::duration("25:00:00", Some("06:00:00")).unwrap_err();

        assert!(err
            .downcast_ref::<crate::domain::error::ShiftError>()
            .is_some());
    }

    #[test]
    fn test_workflow_duration_valid() {
        let line = AttendanceReportWorkflow::duration("23:59", Some("00:00")).unwrap();

        assert_eq!(line, "0.0h (23:59 → 00:00, crossed midnight)");
    }

    #[test]
    fn test_render_report() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        let mut overnight = AttendanceRecord::new(
            day,
            ShiftInterval::completed(t("22:00:00"), t("06:00:00")),
        );
        overnight.reported_hours = Some(-16.0);
        overnight.employee_name = Some("Ana Ruiz".to_string());
        let open = AttendanceRecord::new(day, ShiftInterval::open(t("09:00:00")));

        let loaded = LoadedAttendance {
            records: vec![overnight, open],
            skipped: vec![SkippedRecord {
                source_file: "a.json".to_string(),
                index: 2,
                reason: "invalid time format: \"25:00:00\"".to_string(),
            }],
        };
        let report = SummarizeAttendanceUseCase::new(ReportConfig::default()).execute(loaded, day);

        let text = render_report(&report);

        assert!(text.contains("2024-03-06 22:00 → 06:00   8.0h (+1 day)  Ana Ruiz"));
        assert!(text.contains("2024-03-06 09:00 → --:-- in progress"));
        assert!(text.contains("Day   2024-03-06: 8.0h"));
        assert!(text.contains("Week  2024-03-03 – 2024-03-09: 8.0h"));
        assert!(text.contains("Weekly target: 8.0 of 40.0 hours (20% complete, 32.0h remaining)"));
        assert!(text.contains("In progress: 1 shift(s)"));
        assert!(text.contains("reported -16.00h, computed 8.00h"));
        assert!(text.contains("a.json #2"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_render_report_rounds_totals_from_minutes() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        let loaded = LoadedAttendance {
            records: vec![
                AttendanceRecord::new(day, ShiftInterval::completed(t("09:00"), t("09:08"))),
                AttendanceRecord::new(day, ShiftInterval::completed(t("10:00"), t("19:55"))),
            ],
            skipped: vec![],
        };
        let report = SummarizeAttendanceUseCase::new(ReportConfig::default()).execute(loaded, day);

        let text = render_report(&report);

        assert!(text.contains("Day   2024-03-06: 10.1h"));
        assert!(text.contains("Week  2024-03-03 – 2024-03-09: 10.1h"));
        assert!(text.contains("Weekly target: 10.1 of 40.0 hours (25% complete, 30.0h remaining)"));
    }
}
