//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod json_account_repository;
