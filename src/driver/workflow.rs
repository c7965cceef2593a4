//! Workflow Orchestration
//!
//! コマンド実行のオーケストレーション

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::repositories::json_account_repository::JsonAccountRepository;
use crate::application::use_cases::account_use_case::AccountUseCase;
use crate::domain::repositories::account_repository::AccountRepository;

use super::cli::AccountCommand;

/// Render a use case result as pretty-printed JSON
pub fn render<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to render result as JSON")
}

/// Account Command Workflow
pub struct AccountWorkflow<R: AccountRepository> {
    use_case: AccountUseCase<R>,
}

impl AccountWorkflow<JsonAccountRepository> {
    /// Create a workflow backed by the JSON data file named in the config
    pub fn new(config: &Config) -> Self {
        let repository = Arc::new(JsonAccountRepository::new(
            config.expanded_data_path(),
            config.query_limit,
        ));
        Self::with_repository(repository)
    }
}

impl<R: AccountRepository> AccountWorkflow<R> {
    /// Create a workflow with an injected repository
    pub fn with_repository(repository: Arc<R>) -> Self {
        Self {
            use_case: AccountUseCase::new(repository),
        }
    }

    /// Run a single command and return its JSON output
    pub async fn execute(&self, command: AccountCommand) -> Result<String> {
        match command {
            AccountCommand::SelectById { account_id, offset } => {
                info!("select-by-id account_id={} offset={}", account_id, offset);
                let accounts = self.use_case.select_account_by_id(account_id, offset).await?;
                render(&accounts)
            }
            AccountCommand::SelectByEmail { email, offset } => {
                info!("select-by-email email={} offset={}", email, offset);
                let accounts = self.use_case.select_account_by_email(&email, offset).await?;
                render(&accounts)
            }
            AccountCommand::Insert(fields) => {
                let account = self.use_case.insert_single_account(fields.into()).await?;
                render(&account)
            }
            AccountCommand::Update(fields) => {
                let account = self
                    .use_case
                    .update_single_account_by_id(fields.into())
                    .await?;
                render(&account)
            }
            AccountCommand::Delete(fields) => {
                let account = self
                    .use_case
                    .delete_single_account_by_id(fields.into())
                    .await?;
                render(&account)
            }
        }
    }
}
