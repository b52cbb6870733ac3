//! SchedulerTask trait - task_type と task record の型を対応付ける
//!
//! # 学習ポイント
//! - Associated Constants (`const TYPE`)
//! - Trait bounds の組み合わせ (Serialize + DeserializeOwned + Default + Send + Sync + 'static)

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::BaseSettings;

/// A task record type the scheduler stores for one task type.
///
/// # Trait Bounds
/// - `Serialize` / `DeserializeOwned`: host は task record を JSON で保存する
/// - `Default`: 新規作成時（add）は空の record から始める
/// - `Send + Sync + 'static`: registry の `Arc<dyn DynProvider>` に格納するため
pub trait SchedulerTask: Serialize + DeserializeOwned + Default + Send + Sync + 'static {
    /// task_type の定義（例: `aimeos.email`）
    const TYPE: &'static str;

    /// Settings shared with every other Aimeos task type.
    fn base(&self) -> &BaseSettings;

    fn base_mut(&mut self) -> &mut BaseSettings;
}
