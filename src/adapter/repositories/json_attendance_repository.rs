//! JSON Attendance Repository Implementation
//!
//! AttendanceRepositoryのファイルシステム実装（バックエンドのJSONエクスポートを読む）

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::domain::entities::attendance_record::AttendanceRecordInput;
use crate::domain::error::ShiftError;
use crate::domain::repositories::attendance_repository::{AttendanceRepository, RawRecord};

/// JSONエクスポートファイルベースの勤怠リポジトリ
pub struct JsonAttendanceRepository;

/// エクスポートファイルの形式
///
/// バックエンドは配列をそのまま返す場合と、ページオブジェクトで返す場合がある
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ExportPayload {
    Records(Vec<serde_json::Value>),
    Page(ExportPage),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExportPage {
    content: Vec<serde_json::Value>,
    #[serde(default)]
    total_elements: Option<u64>,
}

impl JsonAttendanceRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// エクスポートファイルを発見する（内部実装）
    fn discover_export_files_internal(location: &str) -> Result<Vec<PathBuf>> {
        let expanded_path = shellexpand::tilde(location);
        let location = PathBuf::from(expanded_path.as_ref());

        if !location.exists() {
            warn!("Export location does not exist: {}", location.display());
            return Ok(Vec::new());
        }

        if location.is_file() {
            return Ok(vec![location]);
        }

        let mut export_files = Vec::new();

        for entry in WalkDir::new(&location)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json") {
                export_files.push(path.to_path_buf());
            }
        }

        info!(
            "Found {} export files in {}",
            export_files.len(),
            location.display()
        );

        Ok(export_files)
    }

    /// エクスポートファイルを読み込む（正規化前のレコードのみ）
    fn load_records_raw(file_path: &Path) -> Result<Vec<RawRecord>> {
        let content = fs::read_to_string(file_path)
            .context(format!("Failed to read export file: {}", file_path.display()))?;

        let payload: ExportPayload = serde_json::from_str(&content)
            .context(format!("Failed to parse export file: {}", file_path.display()))?;

        let values = match payload {
            ExportPayload::Records(values) => values,
            ExportPayload::Page(page) => {
                if let Some(total) = page.total_elements {
                    if total as usize > page.content.len() {
                        warn!(
                            "{} holds one page ({} of {} records)",
                            file_path.display(),
                            page.content.len(),
                            total
                        );
                    }
                }
                page.content
            }
        };

        let records: Vec<RawRecord> = values
            .into_iter()
            .map(|value| {
                serde_json::from_value::<AttendanceRecordInput>(value)
                    .map_err(|e| ShiftError::MalformedRecord(e.to_string()))
            })
            .collect();

        info!("Loaded {} records from {}", records.len(), file_path.display());

        Ok(records)
    }
}

#[async_trait]
impl AttendanceRepository for JsonAttendanceRepository {
    async fn discover_export_files(&self, location: &str) -> Result<Vec<PathBuf>> {
        let location = location.to_string();
        tokio::task::spawn_blocking(move || Self::discover_export_files_internal(&location))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    async fn load_records(&self, file_path: &Path) -> Result<Vec<RawRecord>> {
        let file_path = file_path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::load_records_raw(&file_path))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

impl Default for JsonAttendanceRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_discover_missing_location() {
        let files =
            JsonAttendanceRepository::discover_export_files_internal("/nonexistent/exports")
                .unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_discover_json_files_recursively() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "2024-03.json", "[]");
        write(temp_dir.path(), "archive/2024-02.json", "[]");
        write(temp_dir.path(), "notes.txt", "ignore me");

        let mut files = JsonAttendanceRepository::discover_export_files_internal(
            temp_dir.path().to_str().unwrap(),
        )
        .unwrap();
        files.sort();

        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| p.extension().unwrap() == "json"));
    }

    #[test]
    fn test_discover_single_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(temp_dir.path(), "export.json", "[]");

        let files =
            JsonAttendanceRepository::discover_export_files_internal(path.to_str().unwrap())
                .unwrap();

        assert_eq!(files, vec![path]);
    }

    #[test]
    fn test_load_bare_array() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(
            temp_dir.path(),
            "a.json",
            r#"[
                {"id": 1, "date": "2024-03-04", "checkInTime": "09:00:00", "checkOutTime": "17:30:00"},
                {"idAttendance": 2, "attendanceDate": "2024-03-05", "checkInTime": "22:00:00"}
            ]"#,
        );

        let records: Vec<_> = JsonAttendanceRepository::load_records_raw(&path)
            .unwrap()
            .into_iter()
            .map(Result::unwrap)
            .collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, Some(1));
        assert_eq!(records[1].id, Some(2));
        assert_eq!(records[1].date, "2024-03-05");
        assert!(records[1].check_out_time.is_none());
    }

    #[test]
    fn test_load_page_object() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(
            temp_dir.path(),
            "page.json",
            r#"{
                "content": [
                    {"id": 1, "date": "2024-03-04", "checkInTime": "09:00:00", "checkOutTime": "17:30:00"}
                ],
                "totalElements": 1,
                "totalPages": 1,
                "size": 10,
                "number": 0
            }"#,
        );

        let records = JsonAttendanceRepository::load_records_raw(&path).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].as_ref().unwrap().check_in_time, "09:00:00");
    }

    #[test]
    fn test_load_page_with_empty_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(
            temp_dir.path(),
            "empty.json",
            r#"{"content": [], "totalElements": 0}"#,
        );

        let records = JsonAttendanceRepository::load_records_raw(&path).unwrap();

        assert!(records.is_empty());
    }

    #[test]
    fn test_load_rejects_object_without_content() {
        let temp_dir = TempDir::new().unwrap();
        let no_content = write(temp_dir.path(), "no-content.json", r#"{"totalElements": 0}"#);
        let single_record = write(
            temp_dir.path(),
            "single.json",
            r#"{"id": 1, "date": "2024-03-04", "checkInTime": "09:00:00"}"#,
        );

        assert!(JsonAttendanceRepository::load_records_raw(&no_content).is_err());
        assert!(JsonAttendanceRepository::load_records_raw(&single_record).is_err());
    }

    #[test]
    fn test_load_reports_structurally_invalid_records_in_place() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(
            temp_dir.path(),
            "mixed.json",
            r#"[
                {"date": "2024-03-04", "checkInTime": "09:00:00"},
                {"date": "2024-03-04"},
                {"date": "2024-03-04", "checkInTime": null},
                "not a record"
            ]"#,
        );

        let records = JsonAttendanceRepository::load_records_raw(&path).unwrap();

        assert_eq!(records.len(), 4);
        assert!(records[0].is_ok());
        for record in &records[1..] {
            assert!(
                matches!(record, Err(ShiftError::MalformedRecord(_))),
                "expected MalformedRecord, got {:?}",
                record
            );
        }
    }

    #[test]
    fn test_load_keeps_bad_times_for_the_caller() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(
            temp_dir.path(),
            "bad.json",
            r#"[{"date": "2024-03-04", "checkInTime": "25:00:00"}]"#,
        );

        let records = JsonAttendanceRepository::load_records_raw(&path).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].as_ref().unwrap().check_in_time, "25:00:00");
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(temp_dir.path(), "broken.json", "{ nope");

        assert!(JsonAttendanceRepository::load_records_raw(&path).is_err());
    }

    #[tokio::test]
    async fn test_repository_trait_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        write(
            temp_dir.path(),
            "a.json",
            r#"[{"date": "2024-03-04", "checkInTime": "09:00:00", "checkOutTime": "10:00:00"}]"#,
        );
        let repo = JsonAttendanceRepository::new();

        let files = repo
            .discover_export_files(temp_dir.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(files.len(), 1);

        let records = repo.load_records(&files[0]).await.unwrap();
        assert_eq!(records.len(), 1);
    }
}
