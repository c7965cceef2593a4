//! # Account DTO
//!
//! アカウントのData Transfer Object（呼び出し側に公開する表現）

use serde::{Deserialize, Serialize};

use crate::domain::entities::Account;

/// アカウントDTO
///
/// 都市と州はIDではなく表示名で保持する
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountDto {
    /// 未永続化なら 0
    pub account_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    /// 都市名
    pub city: String,
    /// 州名
    pub province: String,
    pub zipcode: String,
    pub email_address: String,
    pub phone_number: String,
}

impl AccountDto {
    /// エンティティと解決済みの名前からDTOを組み立てる
    ///
    /// `i64` に収まらない `account_id` は `i64::MAX` に丸める
    ///
    /// ```
    /// use argopuro::application::dto::account_dto::AccountDto;
    /// use argopuro::domain::entities::Account;
    ///
    /// let account = Account { account_id: 5, city: 10, province: 20, ..Account::default() };
    /// let dto = AccountDto::from_entity(&account, "Malang", "East Java");
    ///
    /// assert_eq!(dto.account_id, 5);
    /// assert_eq!(dto.city, "Malang");
    /// assert_eq!(dto.province, "East Java");
    /// ```
    pub fn from_entity(
        account: &Account,
        city_name: impl Into<String>,
        province_name: impl Into<String>,
    ) -> Self {
        Self {
            account_id: i64::try_from(account.account_id).unwrap_or(i64::MAX),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            address: account.address.clone(),
            city: city_name.into(),
            province: province_name.into(),
            zipcode: account.zipcode.clone(),
            email_address: account.email_address.clone(),
            phone_number: account.phone_number.clone(),
        }
    }

    /// 解決済みのIDを使ってエンティティに変換する
    ///
    /// 負の `account_id` は未永続化（0）として扱う
    pub fn to_entity(&self, city_id: u64, province_id: u64) -> Account {
        Account {
            account_id: u64::try_from(self.account_id).unwrap_or(0),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            address: self.address.clone(),
            city: city_id,
            province: province_id,
            zipcode: self.zipcode.clone(),
            email_address: self.email_address.clone(),
            phone_number: self.phone_number.clone(),
        }
    }
}
