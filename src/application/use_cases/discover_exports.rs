//! # Discover Exports Use Case
//!
//! 勤怠エクスポートファイル発見ユースケース

use std::path::PathBuf;
use std::sync::Arc;
use anyhow::Result;

use crate::domain::repositories::attendance_repository::AttendanceRepository;

/// 勤怠エクスポートファイル発見ユースケース
///
/// 指定されたディレクトリ（またはファイル）からエクスポートファイルを発見する
pub struct DiscoverExportsUseCase<R: AttendanceRepository> {
    attendance_repository: Arc<R>,
}

impl<R: AttendanceRepository> DiscoverExportsUseCase<R> {
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

    /// エクスポートファイルを発見する
    ///
    /// # Arguments
    ///
    /// * `location` - ディレクトリまたはファイルのパス
    ///
    /// # Returns
    ///
    /// 発見されたファイルのパスのリスト（パス順）
    ///
    /// # Errors
    ///
    /// ディレクトリの読み取りに失敗した場合にエラーを返す
    pub async fn execute(&self, location: &str) -> Result<Vec<PathBuf>> {
        let mut files = self
            .attendance_repository
            .discover_export_files(location)
            .await?;
        files.sort();
        Ok(files)
    }
}
