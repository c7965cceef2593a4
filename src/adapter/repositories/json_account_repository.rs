//! JSON Account Repository Implementation
//!
//! AccountRepositoryのJSON実装（アカウント・都市・州をJSONファイルで永続化）

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tokio::sync::Mutex;

use crate::domain::entities::{Account, City, Province};
use crate::domain::repositories::account_repository::AccountRepository;

/// JSONファイルベースのアカウントリポジトリ
///
/// 書き込みは読み込み→変更→保存の間ロックを保持し、保存は一時ファイルの
/// リネームで行う。読み込み側が書きかけのファイルを見ることはない。
pub struct JsonAccountRepository {
    path: String,
    query_limit: usize,
    write_lock: Mutex<()>,
}

/// データファイルの内容（JSON永続化用の内部表現）
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AccountStoreJson {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub cities: Vec<City>,
    #[serde(default)]
    pub provinces: Vec<Province>,
}

impl JsonAccountRepository {
    /// 新しいリポジトリを作成
    ///
    /// # Arguments
    ///
    /// * `path` - データファイルのパス
    /// * `query_limit` - 1回の検索で返す最大行数
    pub fn new(path: impl Into<String>, query_limit: usize) -> Self {
        Self {
            path: path.into(),
            query_limit,
            write_lock: Mutex::new(()),
        }
    }

    /// ファイルからデータを読み込む（同期処理）
    pub fn load_sync(path: &str) -> Result<AccountStoreJson> {
        let path = Path::new(path);

        if !path.exists() {
            debug!("No data file at {}, starting with an empty store", path.display());
            return Ok(AccountStoreJson::default());
        }

        let content = fs::read_to_string(path).context("Failed to read account data file")?;

        serde_json::from_str(&content).context("Failed to parse account data JSON")
    }

    /// ファイルにデータを保存する（同期処理）
    pub fn save_sync(path: &str, store: &AccountStoreJson) -> Result<()> {
        let path = Path::new(path);
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        fs::create_dir_all(dir).context("Failed to create data directory")?;

        let json =
            serde_json::to_string_pretty(store).context("Failed to serialize account data")?;

        let mut file =
            NamedTempFile::new_in(dir).context("Failed to create temporary data file")?;
        file.write_all(json.as_bytes())
            .context("Failed to write account data file")?;
        file.persist(path).context("Failed to replace account data file")?;

        Ok(())
    }

    /// オフセットと上限を適用して行を切り出す
    fn page<'a, T: Clone + 'a>(
        rows: impl Iterator<Item = &'a T>,
        offset: u64,
        limit: usize,
    ) -> Vec<T> {
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        rows.skip(offset).take(limit).cloned().collect()
    }

    async fn read<T, F>(&self, select: F) -> Result<Vec<T>>
    where
        T: Send + 'static,
        F: FnOnce(&AccountStoreJson, usize) -> Vec<T> + Send + 'static,
    {
        let path = self.path.clone();
        let limit = self.query_limit;
        tokio::task::spawn_blocking(move || {
            Self::load_sync(&path).map(|store| select(&store, limit))
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    async fn write<F>(&self, mutate: F) -> Result<Account>
    where
        F: FnOnce(&mut AccountStoreJson) -> Result<Account> + Send + 'static,
    {
        let _guard = self.write_lock.lock().await;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || -> Result<Account> {
            let mut store = Self::load_sync(&path)?;
            let account = mutate(&mut store)?;
            Self::save_sync(&path, &store)?;
            Ok(account)
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

#[async_trait]
impl AccountRepository for JsonAccountRepository {
    async fn select_account_by_id(&self, account: &Account, offset: u64) -> Result<Vec<Account>> {
        let account_id = account.account_id;
        self.read(move |store, limit| {
            Self::page(
                store.accounts.iter().filter(|a| a.account_id == account_id),
                offset,
                limit,
            )
        })
        .await
    }

    async fn select_account_by_email(
        &self,
        account: &Account,
        offset: u64,
    ) -> Result<Vec<Account>> {
        let email_address = account.email_address.clone();
        self.read(move |store, limit| {
            Self::page(
                store
                    .accounts
                    .iter()
                    .filter(|a| a.email_address == email_address),
                offset,
                limit,
            )
        })
        .await
    }

    async fn select_city_by_id(&self, city: &City, offset: u64) -> Result<Vec<City>> {
        let city_id = city.city_id;
        self.read(move |store, limit| {
            Self::page(
                store.cities.iter().filter(|c| c.city_id == city_id),
                offset,
                limit,
            )
        })
        .await
    }

    async fn select_city_by_name(&self, city: &City, offset: u64) -> Result<Vec<City>> {
        let name = city.name.clone();
        self.read(move |store, limit| {
            Self::page(store.cities.iter().filter(|c| c.name == name), offset, limit)
        })
        .await
    }

    async fn select_province_by_id(
        &self,
        province: &Province,
        offset: u64,
    ) -> Result<Vec<Province>> {
        let province_id = province.province_id;
        self.read(move |store, limit| {
            Self::page(
                store
                    .provinces
                    .iter()
                    .filter(|p| p.province_id == province_id),
                offset,
                limit,
            )
        })
        .await
    }

    async fn select_province_by_name(
        &self,
        province: &Province,
        offset: u64,
    ) -> Result<Vec<Province>> {
        let name = province.name.clone();
        self.read(move |store, limit| {
            Self::page(store.provinces.iter().filter(|p| p.name == name), offset, limit)
        })
        .await
    }

    async fn insert_single_account(&self, account: &Account) -> Result<Account> {
        let mut account = account.clone();
        let inserted = self
            .write(move |store| {
                if store
                    .accounts
                    .iter()
                    .any(|a| a.email_address == account.email_address)
                {
                    anyhow::bail!(
                        "Email address already registered: {}",
                        account.email_address
                    );
                }

                account.account_id = store
                    .accounts
                    .iter()
                    .map(|a| a.account_id)
                    .max()
                    .unwrap_or(0)
                    + 1;
                store.accounts.push(account.clone());
                Ok(account)
            })
            .await?;

        info!("Stored account {} in {}", inserted.account_id, self.path);

        Ok(inserted)
    }

    async fn update_single_account_by_id(&self, account: &Account) -> Result<Account> {
        let account = account.clone();
        let updated = self
            .write(move |store| {
                if store.accounts.iter().any(|a| {
                    a.account_id != account.account_id && a.email_address == account.email_address
                }) {
                    anyhow::bail!(
                        "Email address already registered: {}",
                        account.email_address
                    );
                }

                let slot = store
                    .accounts
                    .iter_mut()
                    .find(|a| a.account_id == account.account_id)
                    .with_context(|| format!("Account not found: {}", account.account_id))?;
                *slot = account.clone();
                Ok(account)
            })
            .await?;

        info!("Rewrote account {} in {}", updated.account_id, self.path);

        Ok(updated)
    }
}
