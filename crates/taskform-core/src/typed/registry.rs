//! ProviderRegistry - task_type ごとの provider の登録と管理
//!
//! # 学習ポイント
//! - HashMap での型消去された trait object の管理
//! - Generic methods での登録と型安全性
//! - Arc による共有所有権

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::ProviderError;

use super::adapter::{AdditionalFieldProvider, DynProvider};
use super::provider::FieldProvider;
use super::task::SchedulerTask;

/// ProviderRegistry は型付き provider を登録・管理
///
/// # 使用例
/// ```ignore
/// let mut registry = ProviderRegistry::new();
/// registry.register::<EmailTask, _>(EmailProvider::new())?;
///
/// let provider = registry.get("aimeos.email");
/// ```
///
/// # 内部実装
/// - 内部的に `AdditionalFieldProvider` でラップして `DynProvider` に変換
/// - `HashMap<String, Arc<dyn DynProvider>>` で管理
#[derive(Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn DynProvider>>,
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("field provider for task type '{0}' is already registered")]
    AlreadyRegistered(String),
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    pub fn register<T: SchedulerTask, P: FieldProvider<T> + 'static>(
        &mut self,
        provider: P,
    ) -> Result<(), RegistryError> {
        let task_type = T::TYPE.to_string();
        if self.providers.contains_key(&task_type) {
            return Err(RegistryError::AlreadyRegistered(task_type));
        }
        let adapter = AdditionalFieldProvider::<T, P>::new(provider);
        self.providers.insert(task_type, Arc::new(adapter));
        Ok(())
    }

    pub fn get(&self, task_type: &str) -> Option<Arc<dyn DynProvider>> {
        self.providers.get(task_type).cloned()
    }

    /// Like [`get`](Self::get), but an unknown task type is an error.
    pub fn require(&self, task_type: &str) -> Result<Arc<dyn DynProvider>, ProviderError> {
        self.get(task_type)
            .ok_or_else(|| ProviderError::UnknownTaskType(task_type.to_string()))
    }

    /// Registered task types, sorted.
    pub fn registered_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.providers.keys().cloned().collect();
        types.sort();
        types
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
