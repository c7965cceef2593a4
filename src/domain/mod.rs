//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - データベースやAPIについて何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（Account, City, Province）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（参照解決のフォールバック規則）

pub mod entities;
pub mod repositories;
pub mod services;
