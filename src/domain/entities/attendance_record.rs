//! # AttendanceRecord Entity
//!
//! 勤怠レコードのドメインエンティティ

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::shift_interval::{ShiftInterval, ShiftStatus};
use super::time_of_day::TimeOfDay;
use crate::domain::error::ShiftError;

/// 勤怠レコード
///
/// ある従業員のある日（出勤日）の出勤・退勤の組。
/// 日付をまたいだ勤務でも `date` は出勤日のまま。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceRecord {
    pub id: Option<u64>,
    pub employee_id: Option<u64>,
    pub employee_name: Option<String>,
    /// 出勤日
    pub date: NaiveDate,
    pub shift: ShiftInterval,
    pub notes: Option<String>,
    /// バックエンドが返した勤務時間（参考値）
    pub reported_hours: Option<f64>,
}

impl AttendanceRecord {
    /// 最小限の情報から勤怠レコードを作成
    pub fn new(date: NaiveDate, shift: ShiftInterval) -> Self {
        Self {
            id: None,
            employee_id: None,
            employee_name: None,
            date,
            shift,
            notes: None,
            reported_hours: None,
        }
    }

    pub fn status(&self) -> ShiftStatus {
        self.shift.status()
    }
}

/// バックエンドからの入力用構造体
///
/// バックエンドはいくつかのフィールドで2種類の名前を使うため、両方を受け付ける。
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecordInput {
    #[serde(default, alias = "idAttendance")]
    pub id: Option<u64>,
    #[serde(default, alias = "idEmployee")]
    pub employee_id: Option<u64>,
    #[serde(alias = "attendanceDate")]
    pub date: String,
    pub check_in_time: String,
    #[serde(default)]
    pub check_out_time: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, alias = "workedHours")]
    pub total_hours: Option<f64>,
    #[serde(default, alias = "fullName")]
    pub employee_name: Option<String>,
}

impl TryFrom<AttendanceRecordInput> for AttendanceRecord {
    type Error = ShiftError;

    fn try_from(input: AttendanceRecordInput) -> Result<Self, Self::Error> {
        let date = NaiveDate::parse_from_str(input.date.trim(), "%Y-%m-%d")
            .map_err(|_| ShiftError::InvalidDate(input.date.clone()))?;

        let check_in = TimeOfDay::parse(&input.check_in_time)?;
        // 空文字の退勤時刻は未退勤として扱う
        let check_out = match input.check_out_time.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => Some(TimeOfDay::parse(s)?),
            _ => None,
        };

        Ok(Self {
            id: input.id,
            employee_id: input.employee_id,
            employee_name: input.employee_name,
            date,
            shift: ShiftInterval {
                check_in,
                check_out,
            },
            notes: input.notes,
            reported_hours: input.total_hours,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_input(json: &str) -> AttendanceRecordInput {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_canonical_field_names() {
        let input = parse_input(
            r#"{
                "id": 7,
                "employeeId": 42,
                "date": "2024-03-04",
                "checkInTime": "09:00:00",
                "checkOutTime": "17:30:00",
                "notes": "office",
                "totalHours": 8.5,
                "employeeName": "Ana Ruiz"
            }"#,
        );

        let record = AttendanceRecord::try_from(input).unwrap();

        assert_eq!(record.id, Some(7));
        assert_eq!(record.employee_id, Some(42));
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
        assert_eq!(record.shift.check_in, TimeOfDay::hm(9, 0).unwrap());
        assert_eq!(record.shift.check_out, Some(TimeOfDay::hm(17, 30).unwrap()));
        assert_eq!(record.notes.as_deref(), Some("office"));
        assert_eq!(record.reported_hours, Some(8.5));
        assert_eq!(record.employee_name.as_deref(), Some("Ana Ruiz"));
        assert_eq!(record.status(), ShiftStatus::Completed);
    }

    #[test]
    fn test_backend_alias_field_names() {
        let input = parse_input(
            r#"{
                "idAttendance": 9,
                "idEmployee": 3,
                "attendanceDate": "2024-03-05",
                "checkInTime": "22:00:00",
                "checkOutTime": "06:00:00",
                "workedHours": 8.0,
                "fullName": "Luis Gil"
            }"#,
        );

        let record = AttendanceRecord::try_from(input).unwrap();

        assert_eq!(record.id, Some(9));
        assert_eq!(record.employee_id, Some(3));
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(record.reported_hours, Some(8.0));
        assert_eq!(record.employee_name.as_deref(), Some("Luis Gil"));
    }

    #[test]
    fn test_missing_or_empty_check_out_is_in_progress() {
        let missing = parse_input(r#"{"date":"2024-03-04","checkInTime":"09:00:00"}"#);
        let null = parse_input(r#"{"date":"2024-03-04","checkInTime":"09:00:00","checkOutTime":null}"#);
        let empty = parse_input(r#"{"date":"2024-03-04","checkInTime":"09:00:00","checkOutTime":""}"#);

        for input in [missing, null, empty] {
            let record = AttendanceRecord::try_from(input).unwrap();
            assert_eq!(record.status(), ShiftStatus::InProgress);
        }
    }

    #[test]
    fn test_invalid_check_in_time() {
        let input = parse_input(r#"{"date":"2024-03-04","checkInTime":"25:00:00"}"#);
        let err = AttendanceRecord::try_from(input).unwrap_err();
        assert_eq!(err, ShiftError::InvalidTimeFormat("25:00:00".to_string()));
    }

    #[test]
    fn test_invalid_check_out_time() {
        let input = parse_input(
            r#"{"date":"2024-03-04","checkInTime":"09:00:00","checkOutTime":"17:75:00"}"#,
        );
        assert!(matches!(
            AttendanceRecord::try_from(input),
            Err(ShiftError::InvalidTimeFormat(_))
        ));
    }

    #[test]
    fn test_invalid_date() {
        let input = parse_input(r#"{"date":"04/03/2024","checkInTime":"09:00:00"}"#);
        let err = AttendanceRecord::try_from(input).unwrap_err();
        assert_eq!(err, ShiftError::InvalidDate("04/03/2024".to_string()));
    }
}
