//! # Province Entity

use serde::{Deserialize, Serialize};

/// 州
///
/// アカウントの `province` が参照する解決対象
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Province {
    pub province_id: u64,
    pub name: String,
}

impl Province {
    /// 新しい州を作成
    pub fn new(province_id: u64, name: impl Into<String>) -> Self {
        Self {
            province_id,
            name: name.into(),
        }
    }

    /// ID検索用の部分エンティティ
    pub fn with_id(province_id: u64) -> Self {
        Self {
            province_id,
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
