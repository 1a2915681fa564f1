//! # Domain Services
//!
//! - **ShiftDurationCalculator**: 勤務時間の計算
//! - **HoursAggregationService**: 日・週・月の集計
//! - **HoursReconciliationService**: 参考値との突き合わせ

pub mod hours_aggregation;
pub mod hours_reconciliation;
pub mod shift_duration_calculator;
