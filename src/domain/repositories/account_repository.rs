//! # Account Repository Trait
//!
//! アカウント・都市・州の検索と更新を抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::{Account, City, Province};

/// アカウントリポジトリ
///
/// 検索系はすべて部分エンティティとオフセットを受け取り、
/// 一致する行のリストを返す。一致なしは空リストでありエラーではない。
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// アカウントIDでアカウントを検索する
    ///
    /// # Arguments
    ///
    /// * `account` - `account_id` を持つ部分エンティティ
    /// * `offset` - 読み飛ばす行数
    async fn select_account_by_id(&self, account: &Account, offset: u64) -> Result<Vec<Account>>;

    /// メールアドレスでアカウントを検索する
    ///
    /// # Arguments
    ///
    /// * `account` - `email_address` を持つ部分エンティティ
    /// * `offset` - 読み飛ばす行数
    async fn select_account_by_email(
        &self,
        account: &Account,
        offset: u64,
    ) -> Result<Vec<Account>>;

    /// 都市IDで都市を検索する
    async fn select_city_by_id(&self, city: &City, offset: u64) -> Result<Vec<City>>;

    /// 都市名で都市を検索する
    async fn select_city_by_name(&self, city: &City, offset: u64) -> Result<Vec<City>>;

    /// 州IDで州を検索する
    async fn select_province_by_id(&self, province: &Province, offset: u64)
        -> Result<Vec<Province>>;

    /// 州名で州を検索する
    async fn select_province_by_name(
        &self,
        province: &Province,
        offset: u64,
    ) -> Result<Vec<Province>>;

    /// アカウントを1件登録する
    ///
    /// # Returns
    ///
    /// 採番済みIDを含む登録後のアカウント
    ///
    /// # Errors
    ///
    /// 永続化に失敗した場合にエラーを返す
    async fn insert_single_account(&self, account: &Account) -> Result<Account>;

    /// アカウントIDをキーにアカウントを1件更新する
    ///
    /// # Returns
    ///
    /// 更新後のアカウント
    ///
    /// # Errors
    ///
    /// 対象が存在しない場合、または永続化に失敗した場合にエラーを返す
    async fn update_single_account_by_id(&self, account: &Account) -> Result<Account>;
}
