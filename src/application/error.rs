//! # Use Case Errors

use thiserror::Error;

pub const INVALID_ACCOUNT_ID: &str = "accountId can not be nil, negative or zero";
pub const INVALID_OFFSET: &str = "offset can not be negative";
pub const EMPTY_EMAIL_ADDRESS: &str = "emailAddress can not be empty";

/// アカウントユースケースのエラー
#[derive(Debug, Error)]
pub enum AccountError {
    /// 入力検証エラー（リポジトリ呼び出し前に発生）
    #[error("{0}")]
    Validation(String),

    /// 主処理のリポジトリエラー（そのまま透過する）
    #[error(transparent)]
    Repository(#[from] anyhow::Error),
}

impl AccountError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
