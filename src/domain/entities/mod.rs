//! # Domain Entities
//!
//! ビジネスエンティティを定義するモジュール
//!
//! ## エンティティ
//!
//! - **Account**: アカウントの内部表現（都市・州はIDで参照）
//! - **City**: 都市（ID ⇔ 名前の解決対象）
//! - **Province**: 州（ID ⇔ 名前の解決対象）

pub mod account;
pub mod city;
pub mod province;

pub use account::Account;
pub use city::City;
pub use province::Province;
