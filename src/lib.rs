//! # Shiftcalc
//!
//! 勤怠の出勤・退勤時刻から勤務時間を計算し、日・週・月単位で集計するツール
//!
//! 中心となるのは [`domain::services::shift_duration_calculator::ShiftDurationCalculator`]。
//! 退勤時刻が出勤時刻より前なら午前0時をまたいだ勤務として扱う純粋関数で、
//! 状態を持たないためどのスレッドからでも呼び出せる。
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: 時刻・勤務・勤務時間の計算ルール（I/Oなし）
//! - **Application層**: エクスポートの読み込みと集計（ユースケース）
//! - **Adapter層**: 設定ファイル、JSONエクスポートの読み込み
//! - **Driver層**: CLI、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
