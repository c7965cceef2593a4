//! Argopuro - Account Record Manager
//!
//! アカウントレコードの検索・登録・更新・削除

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use argopuro::adapter::config::Config;
use argopuro::driver::{AccountWorkflow, Args};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let config = Config::load(&args.config)?;

    // Create workflow with injected dependencies
    let workflow = AccountWorkflow::new(&config);

    let output = workflow.execute(args.command).await?;
    println!("{}", output);

    Ok(())
}
