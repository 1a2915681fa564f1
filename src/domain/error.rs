//! # Domain Errors
//!
//! ドメイン層のエラー定義

use thiserror::Error;

/// ドメイン層のエラー
///
/// 計算機自体が返すのは `InvalidTimeFormat` のみ。
/// `InvalidDate` と `MalformedRecord` は勤怠レコードの読み込みでのみ発生する。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShiftError {
    /// 時刻文字列を範囲内の時・分に解釈できない
    #[error("invalid time format: {0:?}")]
    InvalidTimeFormat(String),

    /// 日付文字列を YYYY-MM-DD として解釈できない
    #[error("invalid date: {0:?}")]
    InvalidDate(String),

    /// レコードの構造が不正（必須フィールドの欠落、型の不一致など）
    #[error("malformed record: {0}")]
    MalformedRecord(String),
}
