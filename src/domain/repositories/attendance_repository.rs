//! # Attendance Repository Trait
//!
//! 勤怠データへのアクセスを抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::attendance_record::AttendanceRecordInput;
use crate::domain::error::ShiftError;

/// ファイル内の1レコードの読み込み結果
///
/// 構造が不正なレコードは `ShiftError::MalformedRecord` として位置を保ったまま返す
pub type RawRecord = std::result::Result<AttendanceRecordInput, ShiftError>;

/// 勤怠リポジトリ
///
/// バックエンドからエクスポートされた勤怠データを読み込むリポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// エクスポートファイルを発見する
    ///
    /// # Arguments
    ///
    /// * `location` - ディレクトリまたはファイルのパス
    ///
    /// # Returns
    ///
    /// 発見されたエクスポートファイルのパスのリスト
    async fn discover_export_files(&self, location: &str) -> Result<Vec<PathBuf>>;

    /// エクスポートファイルを読み込む
    ///
    /// # Arguments
    ///
    /// * `file_path` - エクスポートファイルのパス
    ///
    /// # Returns
    ///
    /// ファイル内の順序どおりの、正規化前の勤怠レコードのリスト
    ///
    /// # Errors
    ///
    /// ファイル全体を読めない場合のみエラーを返す
    async fn load_records(&self, file_path: &Path) -> Result<Vec<RawRecord>>;
}
