//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::{Parser, Subcommand};

use crate::application::dto::account_dto::AccountDto;

/// アカウントレコードを管理するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "argopuro")]
#[command(about = "Manage account records", long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(short, long, default_value = "./argopuro.json")]
    pub config: String,

    #[command(subcommand)]
    pub command: AccountCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum AccountCommand {
    /// Look up accounts by id
    SelectById {
        #[arg(long, allow_negative_numbers = true)]
        account_id: i64,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i64,
    },
    /// Look up accounts by email address
    SelectByEmail {
        #[arg(long)]
        email: String,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i64,
    },
    /// Register a new account
    Insert(AccountFields),
    /// Rewrite an existing account
    Update(AccountFields),
    /// Delete an account
    Delete(AccountFields),
}

/// Account fields accepted by the mutating subcommands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct AccountFields {
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub account_id: i64,
    #[arg(long, default_value = "")]
    pub first_name: String,
    #[arg(long, default_value = "")]
    pub last_name: String,
    #[arg(long, default_value = "")]
    pub address: String,
    /// City name
    #[arg(long, default_value = "")]
    pub city: String,
    /// Province name
    #[arg(long, default_value = "")]
    pub province: String,
    #[arg(long, default_value = "")]
    pub zipcode: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone_number: String,
}

impl From<AccountFields> for AccountDto {
    fn from(fields: AccountFields) -> Self {
        Self {
            account_id: fields.account_id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            address: fields.address,
            city: fields.city,
            province: fields.province,
            zipcode: fields.zipcode,
            email_address: fields.email,
            phone_number: fields.phone_number,
        }
    }
}
