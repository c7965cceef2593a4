//! # City Entity

use serde::{Deserialize, Serialize};

/// 都市
///
/// アカウントの `city` が参照する解決対象
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct City {
    pub city_id: u64,
    pub name: String,
}

impl City {
    /// 新しい都市を作成
    pub fn new(city_id: u64, name: impl Into<String>) -> Self {
        Self {
            city_id,
            name: name.into(),
        }
    }

    /// ID検索用の部分エンティティ
    pub fn with_id(city_id: u64) -> Self {
        Self {
            city_id,
            ..Self::default()
        }
    }

    /// 名前検索用の部分エンティティ
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
