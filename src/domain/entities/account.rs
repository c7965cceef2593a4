//! # Account Entity
//!
//! アカウントのドメインエンティティ

use serde::{Deserialize, Serialize};

/// アカウントのドメインエンティティ
///
/// 都市と州は数値IDで参照する。表示名への変換はユースケース層で行う。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Account {
    /// サーバー側で採番されるID（0 は未永続化）
    pub account_id: u64,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    /// 都市ID
    pub city: u64,
    /// 州ID
    pub province: u64,
    pub zipcode: String,
    /// メールアドレス（自然キーとして検索に使用）
    pub email_address: String,
    pub phone_number: String,
}

impl Account {
    /// IDだけを持つ検索用の部分エンティティを作成
    pub fn with_id(account_id: u64) -> Self {
        Self {
            account_id,
            ..Self::default()
        }
    }

    /// メールアドレスだけを持つ検索用の部分エンティティを作成
    pub fn with_email(email_address: impl Into<String>) -> Self {
        Self {
            email_address: email_address.into(),
            ..Self::default()
        }
    }

    /// 永続化済みかどうか
    ///
    /// ```
    /// use argopuro::domain::entities::Account;
    ///
    /// assert!(!Account::default().is_persisted());
    /// assert!(Account::with_id(5).is_persisted());
    /// ```
    #[inline]
    pub fn is_persisted(&self) -> bool {
        self.account_id > 0
    }
}
