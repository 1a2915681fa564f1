//! # Load Attendance Use Case
//!
//! 勤怠エクスポートの読み込みと正規化ユースケース

use std::path::Path;
use std::sync::Arc;
use anyhow::{Context, Result};
use log::{debug, warn};

use crate::application::dto::attendance_report::{LoadedAttendance, SkippedRecord};
use crate::application::dto::report_config::ReportConfig;
use crate::domain::entities::attendance_record::AttendanceRecord;
use crate::domain::repositories::attendance_repository::AttendanceRepository;

/// 勤怠エクスポートの読み込みユースケース
///
/// エクスポートファイルを読み込み、`AttendanceRecord` に正規化する。
/// 不正なレコードの扱いは `ReportConfig::skip_malformed` に従う。
pub struct LoadAttendanceUseCase<R: AttendanceRepository> {
    attendance_repository: Arc<R>,
}

impl<R: AttendanceRepository> LoadAttendanceUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `attendance_repository` - 勤怠リポジトリ
    pub fn new(attendance_repository: Arc<R>) -> Self {
        Self {
            attendance_repository,
        }
    }

    /// エクスポートファイルを読み込む
    ///
    /// # Arguments
    ///
    /// * `file_paths` - エクスポートファイルのパスのリスト
    /// * `config` - レポート設定
    ///
    /// # Returns
    ///
    /// 正規化済みのレコードとスキップされたレコード
    ///
    /// # Errors
    ///
    /// ファイルの読み込みに失敗した場合、または `skip_malformed` が無効で
    /// 不正なレコードがあった場合にエラーを返す
    pub async fn execute(
        &self,
        file_paths: &[impl AsRef<Path>],
        config: &ReportConfig,
    ) -> Result<LoadedAttendance> {
        let mut loaded = LoadedAttendance::default();

        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let inputs = self.attendance_repository.load_records(file_path).await?;
            debug!("{} raw records in {}", inputs.len(), file_path.display());

            for (index, raw) in inputs.into_iter().enumerate() {
                match raw.and_then(AttendanceRecord::try_from) {
                    Ok(record) => {
                        if matches_employee(&record, config.employee_id) {
                            loaded.records.push(record);
                        }
                    }
                    Err(e) if config.skip_malformed => {
                        warn!(
                            "Skipping record {} in {}: {}",
                            index,
                            file_path.display(),
                            e
                        );
                        loaded.skipped.push(SkippedRecord {
                            source_file: file_path.to_string_lossy().to_string(),
                            index,
                            reason: e.to_string(),
                        });
                    }
                    Err(e) => {
                        return Err(e).context(format!(
                            "Malformed attendance record {} in {}",
                            index,
                            file_path.display()
                        ));
                    }
                }
            }
        }

        Ok(loaded)
    }
}

fn matches_employee(record: &AttendanceRecord, employee_id: Option<u64>) -> bool {
    match employee_id {
        Some(id) => record.employee_id == Some(id),
        None => true,
    }
}
