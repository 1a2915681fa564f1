//! Shiftcalc - Worked Hours Calculator
//!
//! 出勤・退勤時刻から勤務時間を計算

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use shiftcalc::driver::{run, Args};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    run(args).await
}
