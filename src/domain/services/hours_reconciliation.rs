//! # Hours Reconciliation Service
//!
//! バックエンドが返す勤務時間（参考値）と再計算値の突き合わせ

use serde::Serialize;

/// 突き合わせ結果
///
/// 再計算値が常に正。参考値は検証にのみ使う。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reconciliation {
    /// 参考値なし
    Missing,
    /// 許容誤差内で一致
    Agreed,
    /// 許容誤差を超えて不一致
    Diverged { reported: f64, computed: f64 },
}

impl Reconciliation {
    pub fn is_diverged(&self) -> bool {
        matches!(self, Reconciliation::Diverged { .. })
    }
}

/// 突き合わせサービス
pub struct HoursReconciliationService;

impl HoursReconciliationService {
    /// 参考値と再計算値を比較する
    ///
    /// # Arguments
    ///
    /// * `reported` - バックエンドが返した勤務時間
    /// * `computed` - 出勤・退勤時刻から再計算した勤務時間
    /// * `tolerance` - 一致とみなす差（時間）
    pub fn reconcile(reported: Option<f64>, computed: f64, tolerance: f64) -> Reconciliation {
        match reported {
            None => Reconciliation::Missing,
            Some(reported) if (reported - computed).abs() <= tolerance => Reconciliation::Agreed,
            Some(reported) => Reconciliation::Diverged { reported, computed },
        }
    }
}
