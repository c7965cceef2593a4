//! # Domain Services
//!
//! - **reference_resolution**: 参照解決とフォールバック規則

pub mod reference_resolution;
