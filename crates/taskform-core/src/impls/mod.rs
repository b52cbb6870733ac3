//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **Catalog**: TOML / JSON から読み込む翻訳テーブル（`Translator`）
//! - **FlashMessages**: 通知を溜めておくだけの `MessageSink`

pub mod catalog;
pub mod flash;

pub use self::catalog::{Catalog, CatalogError};
pub use self::flash::{FlashMessage, FlashMessages};
