//! # Reference Resolution Service
//!
//! 都市・州の ID ⇔ 名前解決におけるフォールバック規則

use anyhow::Result;
use log::warn;

/// 解決結果
///
/// 解決できなかった場合は `value` が既定値（空の名前、ID 0）になる
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    pub value: T,
    pub resolved: bool,
}

/// 参照解決サービス
///
/// 補助的な検索の失敗で主処理を止めないためのビジネスルール
pub struct ReferenceResolution;

impl ReferenceResolution {
    /// 検索結果の先頭行を取り出す
    ///
    /// 検索がエラー、または結果が空の場合は `T::default()` を返し、
    /// `resolved` を `false` にする。エラーは呼び出し元へ伝播しない。
    ///
    /// # Arguments
    ///
    /// * `lookup` - 検索結果
    /// * `target` - ログ出力用の対象名（"city" など）
    ///
    /// # 例
    ///
    /// ```
    /// use argopuro::domain::services::reference_resolution::ReferenceResolution;
    ///
    /// let hit = ReferenceResolution::first_or_fallback(Ok(vec!["Malang".to_string()]), "city");
    /// assert!(hit.resolved);
    /// assert_eq!(hit.value, "Malang");
    ///
    /// let miss = ReferenceResolution::first_or_fallback::<String>(Ok(vec![]), "city");
    /// assert!(!miss.resolved);
    /// assert_eq!(miss.value, "");
    /// ```
    pub fn first_or_fallback<T: Default>(lookup: Result<Vec<T>>, target: &str) -> Resolved<T> {
        match lookup {
            Ok(rows) => match rows.into_iter().next() {
                Some(value) => Resolved {
                    value,
                    resolved: true,
                },
                None => {
                    warn!("No {} matched, falling back to empty value", target);
                    Self::fallback()
                }
            },
            Err(e) => {
                warn!("Failed to resolve {}: {:#}", target, e);
                Self::fallback()
            }
        }
    }

    fn fallback<T: Default>() -> Resolved<T> {
        Resolved {
            value: T::default(),
            resolved: false,
        }
    }
}
