//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **AccountUseCase**: アカウントの検索・登録・更新・削除

pub mod account_use_case;
