//! # Repository Traits
//!
//! 外部データへのアクセスを抽象化するトレイト

pub mod attendance_repository;
