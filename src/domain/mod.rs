//! # Domain Layer
//!
//! このモジュールは勤務時間計算の核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - I/Oを持たない（Rust標準ライブラリと最小限の依存のみ）
//! - フレームワークに依存しない
//! - バックエンドやファイルについて何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: エンティティとバリューオブジェクト（TimeOfDay, ShiftIntervalなど）
//! - **error**: ドメインエラー
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（勤務時間計算、集計、突き合わせ）

pub mod entities;
pub mod error;
pub mod repositories;
pub mod services;
