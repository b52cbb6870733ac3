//! Typed - 型付き provider API
//!
//! task_type ごとの provider を型で結び付け、host からは型消去された
//! `DynProvider` として扱えるようにします。
//!
//! # 二層構造
//! - **表層（Typed）**: `SchedulerTask` trait, `FieldProvider<T>` trait - 型安全
//! - **Host 境界**: `AdditionalFieldProvider<T, P>` - エラーを通知に変換して握りつぶす
//! - **内部（Dyn）**: `DynProvider` trait - object-safe、task record は JSON

pub mod adapter;
pub mod provider;
pub mod registry;
pub mod submission;
pub mod task;

pub use self::adapter::{AdditionalFieldProvider, DynProvider};
pub use self::provider::FieldProvider;
pub use self::registry::{ProviderRegistry, RegistryError};
pub use self::submission::ValidatedSubmission;
pub use self::task::SchedulerTask;
