//! # Account Use Case
//!
//! アカウント管理ユースケース
//!
//! 入力検証 → 参照解決 → リポジトリ呼び出し → 名前の再付与 の順に
//! 1回の呼び出しの中で完結する。状態は持たない。

use std::sync::Arc;

use log::{debug, info};

use crate::application::dto::account_dto::AccountDto;
use crate::application::error::{
    AccountError, EMPTY_EMAIL_ADDRESS, INVALID_ACCOUNT_ID, INVALID_OFFSET,
};
use crate::domain::entities::{Account, City, Province};
use crate::domain::repositories::account_repository::AccountRepository;
use crate::domain::services::reference_resolution::{ReferenceResolution, Resolved};

/// アカウント管理ユースケース
///
/// DTOとエンティティの相互変換と、都市・州の参照解決を担当する
pub struct AccountUseCase<R: AccountRepository> {
    repository: Arc<R>,
}

impl<R: AccountRepository> AccountUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `repository` - アカウントリポジトリ
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// アカウントIDでアカウントを検索する
    ///
    /// # Arguments
    ///
    /// * `account_id` - 1以上のアカウントID
    /// * `offset` - 0以上のオフセット
    ///
    /// # Returns
    ///
    /// 都市名・州名を付与したDTOのリスト（リポジトリの返却順）
    ///
    /// # Errors
    ///
    /// 入力が不正な場合は検証エラー、アカウント検索が失敗した場合はリポジトリエラー。
    /// 都市・州の解決失敗はエラーにせず空の名前にする。
    pub async fn select_account_by_id(
        &self,
        account_id: i64,
        offset: i64,
    ) -> Result<Vec<AccountDto>, AccountError> {
        let account_id = validate_account_id(account_id)?;
        let offset = validate_offset(offset)?;

        debug!("Selecting account by id {} (offset {})", account_id, offset);

        let accounts = self
            .repository
            .select_account_by_id(&Account::with_id(account_id), offset)
            .await?;

        Ok(self.enrich_all(accounts).await)
    }

    /// メールアドレスでアカウントを検索する
    ///
    /// # Errors
    ///
    /// メールアドレスが空、またはオフセットが負の場合は検証エラー
    pub async fn select_account_by_email(
        &self,
        email_address: &str,
        offset: i64,
    ) -> Result<Vec<AccountDto>, AccountError> {
        validate_email(email_address)?;
        let offset = validate_offset(offset)?;

        debug!("Selecting account by email {} (offset {})", email_address, offset);

        let accounts = self
            .repository
            .select_account_by_email(&Account::with_email(email_address), offset)
            .await?;

        Ok(self.enrich_all(accounts).await)
    }

    /// アカウントを1件登録する
    ///
    /// 都市名・州名をIDに解決してから登録し、採番済みIDと解決時の名前でDTOを返す
    ///
    /// # Errors
    ///
    /// メールアドレスが空の場合は検証エラー、登録に失敗した場合はリポジトリエラー
    pub async fn insert_single_account(
        &self,
        body: AccountDto,
    ) -> Result<AccountDto, AccountError> {
        validate_email(&body.email_address)?;

        let (city, province) = self.resolve_names(&body).await;
        let mut account = body.to_entity(city.value.city_id, province.value.province_id);
        account.account_id = 0;

        let inserted = self.repository.insert_single_account(&account).await?;
        info!("Inserted account {}", inserted.account_id);

        Ok(AccountDto::from_entity(
            &inserted,
            city.value.name,
            province.value.name,
        ))
    }

    /// アカウントIDをキーにアカウントを1件更新する
    ///
    /// # Errors
    ///
    /// アカウントIDが1未満、またはメールアドレスが空の場合は検証エラー。
    /// 更新に失敗した場合はリポジトリエラー。
    pub async fn update_single_account_by_id(
        &self,
        body: AccountDto,
    ) -> Result<AccountDto, AccountError> {
        validate_account_id(body.account_id)?;
        validate_email(&body.email_address)?;

        let updated = self.resolve_and_update(&body).await?;
        info!("Updated account {}", updated.account_id);

        Ok(updated)
    }

    /// アカウントを1件削除する
    ///
    /// リポジトリに削除操作は無く、更新操作をそのまま呼び出す。
    /// 戻り値は更新と同じ形になる。
    ///
    /// # Errors
    ///
    /// アカウントIDが1未満の場合は検証エラー
    pub async fn delete_single_account_by_id(
        &self,
        body: AccountDto,
    ) -> Result<AccountDto, AccountError> {
        validate_account_id(body.account_id)?;

        let deleted = self.resolve_and_update(&body).await?;
        info!("Delete request applied to account {}", deleted.account_id);

        Ok(deleted)
    }

    async fn resolve_and_update(&self, body: &AccountDto) -> Result<AccountDto, AccountError> {
        let (city, province) = self.resolve_names(body).await;
        let account = body.to_entity(city.value.city_id, province.value.province_id);

        let updated = self.repository.update_single_account_by_id(&account).await?;

        Ok(AccountDto::from_entity(
            &updated,
            city.value.name,
            province.value.name,
        ))
    }

    /// 都市名・州名をIDに解決する（名前 → ID）
    async fn resolve_names(&self, body: &AccountDto) -> (Resolved<City>, Resolved<Province>) {
        let city = ReferenceResolution::first_or_fallback(
            self.repository
                .select_city_by_name(&City::with_name(body.city.as_str()), 0)
                .await,
            "city",
        );
        let province = ReferenceResolution::first_or_fallback(
            self.repository
                .select_province_by_name(&Province::with_name(body.province.as_str()), 0)
                .await,
            "province",
        );

        (city, province)
    }

    /// 都市ID・州IDを名前に解決する（ID → 名前）
    async fn resolve_ids(&self, account: &Account) -> (Resolved<City>, Resolved<Province>) {
        let city = ReferenceResolution::first_or_fallback(
            self.repository
                .select_city_by_id(&City::with_id(account.city), 0)
                .await,
            "city",
        );
        let province = ReferenceResolution::first_or_fallback(
            self.repository
                .select_province_by_id(&Province::with_id(account.province), 0)
                .await,
            "province",
        );

        (city, province)
    }

    async fn enrich_all(&self, accounts: Vec<Account>) -> Vec<AccountDto> {
        let mut results = Vec::with_capacity(accounts.len());
        for account in accounts {
            let (city, province) = self.resolve_ids(&account).await;
            results.push(AccountDto::from_entity(
                &account,
                city.value.name,
                province.value.name,
            ));
        }

        results
    }
}

fn validate_account_id(account_id: i64) -> Result<u64, AccountError> {
    if account_id < 1 {
        return Err(AccountError::validation(INVALID_ACCOUNT_ID));
    }
    Ok(account_id as u64)
}

fn validate_offset(offset: i64) -> Result<u64, AccountError> {
    if offset < 0 {
        return Err(AccountError::validation(INVALID_OFFSET));
    }
    Ok(offset as u64)
}

fn validate_email(email_address: &str) -> Result<(), AccountError> {
    if email_address.is_empty() {
        return Err(AccountError::validation(EMPTY_EMAIL_ADDRESS));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::account_repository::MockAccountRepository;

    fn create_test_account(account_id: u64) -> Account {
        Account {
            account_id,
            first_name: "Budi".to_string(),
            last_name: "Santoso".to_string(),
            address: "Jl. Ijen 1".to_string(),
            city: 10,
            province: 20,
            zipcode: "65119".to_string(),
            email_address: "budi@example.com".to_string(),
            phone_number: "0812".to_string(),
        }
    }

    fn create_test_body(account_id: i64) -> AccountDto {
        AccountDto {
            account_id,
            first_name: "Budi".to_string(),
            last_name: "Santoso".to_string(),
            address: "Jl. Ijen 1".to_string(),
            city: "Malang".to_string(),
            province: "East Java".to_string(),
            zipcode: "65119".to_string(),
            email_address: "budi@example.com".to_string(),
            phone_number: "0812".to_string(),
        }
    }

    fn expect_id_lookups(mock: &mut MockAccountRepository) {
        mock.expect_select_city_by_id()
            .withf(|city: &City, offset: &u64| city.city_id == 10 && *offset == 0)
            .returning(|_, _| Ok(vec![City::new(10, "Malang")]));
        mock.expect_select_province_by_id()
            .withf(|province: &Province, offset: &u64| province.province_id == 20 && *offset == 0)
            .returning(|_, _| Ok(vec![Province::new(20, "East Java")]));
    }

    fn expect_name_lookups(mock: &mut MockAccountRepository) {
        mock.expect_select_city_by_name()
            .withf(|city: &City, offset: &u64| city.name == "Malang" && *offset == 0)
            .returning(|_, _| Ok(vec![City::new(10, "Malang")]));
        mock.expect_select_province_by_name()
            .withf(|province: &Province, offset: &u64| province.name == "East Java" && *offset == 0)
            .returning(|_, _| Ok(vec![Province::new(20, "East Java")]));
    }

    fn use_case(mock: MockAccountRepository) -> AccountUseCase<MockAccountRepository> {
        AccountUseCase::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_select_by_id_enriches_names() {
        let mut mock = MockAccountRepository::new();
        mock.expect_select_account_by_id()
            .withf(|account: &Account, offset: &u64| account.account_id == 5 && *offset == 0)
            .times(1)
            .returning(|_, _| Ok(vec![create_test_account(5)]));
        expect_id_lookups(&mut mock);

        let result = use_case(mock).select_account_by_id(5, 0).await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].account_id, 5);
        assert_eq!(result[0].city, "Malang");
        assert_eq!(result[0].province, "East Java");
        assert_eq!(result[0].email_address, "budi@example.com");
    }

    #[tokio::test]
    async fn test_select_by_id_city_lookup_error_falls_back() {
        let mut mock = MockAccountRepository::new();
        mock.expect_select_account_by_id()
            .returning(|_, _| Ok(vec![create_test_account(5)]));
        mock.expect_select_city_by_id()
            .returning(|_, _| Err(anyhow::anyhow!("city table unavailable")));
        mock.expect_select_province_by_id()
            .returning(|_, _| Ok(vec![Province::new(20, "East Java")]));

        let result = use_case(mock).select_account_by_id(5, 0).await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].city, "");
        assert_eq!(result[0].province, "East Java");
    }

    #[tokio::test]
    async fn test_select_by_id_province_missing_falls_back() {
        let mut mock = MockAccountRepository::new();
        mock.expect_select_account_by_id()
            .returning(|_, _| Ok(vec![create_test_account(5)]));
        mock.expect_select_city_by_id()
            .returning(|_, _| Ok(vec![City::new(10, "Malang")]));
        mock.expect_select_province_by_id()
            .returning(|_, _| Ok(vec![]));

        let result = use_case(mock).select_account_by_id(5, 0).await.unwrap();

        assert_eq!(result[0].city, "Malang");
        assert_eq!(result[0].province, "");
    }

    #[tokio::test]
    async fn test_select_by_id_preserves_repository_order() {
        let mut mock = MockAccountRepository::new();
        mock.expect_select_account_by_id()
            .returning(|_, _| Ok(vec![create_test_account(9), create_test_account(4)]));
        mock.expect_select_city_by_id()
            .times(2)
            .returning(|_, _| Ok(vec![City::new(10, "Malang")]));
        mock.expect_select_province_by_id()
            .times(2)
            .returning(|_, _| Ok(vec![Province::new(20, "East Java")]));

        let result = use_case(mock).select_account_by_id(9, 0).await.unwrap();

        let ids: Vec<i64> = result.iter().map(|dto| dto.account_id).collect();
        assert_eq!(ids, vec![9, 4]);
    }

    #[tokio::test]
    async fn test_select_by_id_empty_result() {
        let mut mock = MockAccountRepository::new();
        mock.expect_select_account_by_id().returning(|_, _| Ok(vec![]));

        let result = use_case(mock).select_account_by_id(1, 3).await.unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_select_by_id_rejects_invalid_input() {
        // 期待値を設定していないモックは呼び出されるとパニックする
        let use_case = use_case(MockAccountRepository::new());

        for (account_id, offset) in [(0, 0), (-1, 0), (1, -1)] {
            let err = use_case
                .select_account_by_id(account_id, offset)
                .await
                .unwrap_err();
            assert!(err.is_validation());
        }

        let err = use_case.select_account_by_id(0, 0).await.unwrap_err();
        assert_eq!(err.to_string(), INVALID_ACCOUNT_ID);
        let err = use_case.select_account_by_id(1, -5).await.unwrap_err();
        assert_eq!(err.to_string(), INVALID_OFFSET);
    }

    #[tokio::test]
    async fn test_select_by_id_propagates_repository_error() {
        let mut mock = MockAccountRepository::new();
        mock.expect_select_account_by_id()
            .returning(|_, _| Err(anyhow::anyhow!("connection refused")));

        let err = use_case(mock).select_account_by_id(5, 0).await.unwrap_err();

        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "connection refused");
    }

    #[tokio::test]
    async fn test_select_by_email() {
        let mut mock = MockAccountRepository::new();
        mock.expect_select_account_by_email()
            .withf(|account: &Account, offset: &u64| {
                account.email_address == "budi@example.com" && *offset == 2
            })
            .times(1)
            .returning(|_, _| Ok(vec![create_test_account(5)]));
        expect_id_lookups(&mut mock);

        let result = use_case(mock)
            .select_account_by_email("budi@example.com", 2)
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].city, "Malang");
        assert_eq!(result[0].province, "East Java");
    }

    #[tokio::test]
    async fn test_select_by_email_rejects_invalid_input() {
        let use_case = use_case(MockAccountRepository::new());

        let err = use_case.select_account_by_email("", 0).await.unwrap_err();
        assert_eq!(err.to_string(), EMPTY_EMAIL_ADDRESS);

        let err = use_case
            .select_account_by_email("budi@example.com", -1)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), INVALID_OFFSET);
    }

    #[tokio::test]
    async fn test_insert_resolves_names_to_ids() {
        let mut mock = MockAccountRepository::new();
        expect_name_lookups(&mut mock);
        mock.expect_insert_single_account()
            .withf(|account: &Account| {
                account.account_id == 0 && account.city == 10 && account.province == 20
            })
            .times(1)
            .returning(|account| {
                let mut inserted = account.clone();
                inserted.account_id = 77;
                Ok(inserted)
            });

        let result = use_case(mock)
            .insert_single_account(create_test_body(0))
            .await
            .unwrap();

        assert_eq!(result.account_id, 77);
        assert_eq!(result.city, "Malang");
        assert_eq!(result.province, "East Java");
        assert_eq!(result.first_name, "Budi");
    }

    #[tokio::test]
    async fn test_insert_unknown_city_falls_back_to_zero_id() {
        let mut mock = MockAccountRepository::new();
        mock.expect_select_city_by_name().returning(|_, _| Ok(vec![]));
        mock.expect_select_province_by_name()
            .returning(|_, _| Err(anyhow::anyhow!("timeout")));
        mock.expect_insert_single_account()
            .withf(|account: &Account| account.city == 0 && account.province == 0)
            .returning(|account| {
                let mut inserted = account.clone();
                inserted.account_id = 1;
                Ok(inserted)
            });

        let result = use_case(mock)
            .insert_single_account(create_test_body(0))
            .await
            .unwrap();

        assert_eq!(result.account_id, 1);
        assert_eq!(result.city, "");
        assert_eq!(result.province, "");
    }

    #[tokio::test]
    async fn test_insert_rejects_empty_email() {
        let body = AccountDto {
            email_address: String::new(),
            ..create_test_body(0)
        };

        let err = use_case(MockAccountRepository::new())
            .insert_single_account(body)
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(err.to_string(), EMPTY_EMAIL_ADDRESS);
    }

    #[tokio::test]
    async fn test_insert_propagates_repository_error() {
        let mut mock = MockAccountRepository::new();
        expect_name_lookups(&mut mock);
        mock.expect_insert_single_account()
            .returning(|_| Err(anyhow::anyhow!("duplicate email address")));

        let err = use_case(mock)
            .insert_single_account(create_test_body(0))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "duplicate email address");
    }

    #[tokio::test]
    async fn test_update_returns_province_name_from_province_lookup() {
        let mut mock = MockAccountRepository::new();
        expect_name_lookups(&mut mock);
        mock.expect_update_single_account_by_id()
            .withf(|account: &Account| {
                account.account_id == 5 && account.city == 10 && account.province == 20
            })
            .times(1)
            .returning(|account| Ok(account.clone()));

        let result = use_case(mock)
            .update_single_account_by_id(create_test_body(5))
            .await
            .unwrap();

        assert_eq!(result.account_id, 5);
        assert_eq!(result.city, "Malang");
        assert_eq!(result.province, "East Java");
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_input() {
        let use_case = use_case(MockAccountRepository::new());

        let err = use_case
            .update_single_account_by_id(create_test_body(0))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), INVALID_ACCOUNT_ID);

        let body = AccountDto {
            email_address: String::new(),
            ..create_test_body(5)
        };
        let err = use_case.update_single_account_by_id(body).await.unwrap_err();
        assert_eq!(err.to_string(), EMPTY_EMAIL_ADDRESS);
    }

    #[tokio::test]
    async fn test_delete_calls_update() {
        let mut mock = MockAccountRepository::new();
        expect_name_lookups(&mut mock);
        mock.expect_update_single_account_by_id()
            .withf(|account: &Account| account.account_id == 5)
            .times(1)
            .returning(|account| Ok(account.clone()));

        let result = use_case(mock)
            .delete_single_account_by_id(create_test_body(5))
            .await
            .unwrap();

        assert_eq!(result.account_id, 5);
        assert_eq!(result.city, "Malang");
        assert_eq!(result.province, "East Java");
    }

    #[tokio::test]
    async fn test_delete_allows_empty_email() {
        let mut mock = MockAccountRepository::new();
        expect_name_lookups(&mut mock);
        mock.expect_update_single_account_by_id()
            .returning(|account| Ok(account.clone()));
        let body = AccountDto {
            email_address: String::new(),
            ..create_test_body(5)
        };

        let result = use_case(mock).delete_single_account_by_id(body).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_rejects_invalid_account_id() {
        let err = use_case(MockAccountRepository::new())
            .delete_single_account_by_id(create_test_body(-3))
            .await
            .unwrap_err();

        assert!(err.is_validation());
    }
}
