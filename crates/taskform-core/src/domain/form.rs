//! Form state passed in by the host scheduler module.
//!
//! - `TaskInfo`: add/edit 画面の入力状態（provider が既定値を書き戻す）
//! - `SubmittedData`: POST された生の値（読み取り専用）
//! - `FormContext`: host から渡される文脈（add/edit、選択可能な site / controller）

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::field::FieldKey;

/// The action the scheduler module is currently performing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormAction {
    #[default]
    Add,
    Edit,
}

/// In-progress form state, keyed by field identifier.
///
/// Created per request by the host and filled in place with edit-time
/// defaults by the providers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TaskInfo(HashMap<String, String>);

impl TaskInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.0.get(key.as_str()).map(String::as_str)
    }

    pub fn set(&mut self, key: FieldKey, value: impl Into<String>) {
        self.0.insert(key.as_str().to_string(), value.into());
    }

    /// True when the form carries no usable value for `key` (absent or empty).
    pub fn is_blank(&self, key: FieldKey) -> bool {
        self.get(key).is_none_or(str::is_empty)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TaskInfo {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Raw values as received from the form post.
///
/// Multi-valued fields (`tx_scheduler[<id>][]`) arrive as a list and are
/// kept comma separated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SubmittedData(HashMap<String, String>);

impl SubmittedData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: FieldKey, value: impl Into<String>) -> Self {
        self.0.insert(key.as_str().to_string(), value.into());
        self
    }

    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.0.get(key.as_str()).map(String::as_str)
    }

    /// The submitted value, or the empty string when the key is absent.
    pub fn value(&self, key: FieldKey) -> &str {
        self.get(key).unwrap_or("")
    }

    /// Comma separated multi-value field, trimmed, empty items dropped.
    pub fn list(&self, key: FieldKey) -> Vec<&str> {
        split_list(self.value(key))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SubmittedData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// A posted value: one string, or a list for `[]`-named fields.
#[derive(Deserialize)]
#[serde(untagged)]
enum PostedValue {
    One(String),
    Many(Vec<String>),
}

impl PostedValue {
    fn into_joined(self) -> String {
        match self {
            PostedValue::One(value) => value,
            PostedValue::Many(values) => values.join(","),
        }
    }
}

fn deserialize_posted<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<HashMap<String, String>, D::Error> {
    let raw = HashMap::<String, PostedValue>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|(k, v)| (k, v.into_joined())).collect())
}

impl<'de> Deserialize<'de> for TaskInfo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_posted(deserializer).map(Self)
    }
}

impl<'de> Deserialize<'de> for SubmittedData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_posted(deserializer).map(Self)
    }
}

pub(crate) fn split_list(raw: &str) -> Vec<&str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).collect()
}

/// What the host module knows about the current request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormContext {
    #[serde(default)]
    pub action: FormAction,

    /// Site codes that can be selected for a task.
    #[serde(default)]
    pub sites: Vec<String>,

    /// Job controller names that can be selected for a task.
    #[serde(default)]
    pub controllers: Vec<String>,
}

impl FormContext {
    pub fn new(action: FormAction) -> Self {
        Self {
            action,
            sites: Vec::new(),
            controllers: Vec::new(),
        }
    }

    pub fn with_sites<I, S>(mut self, sites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sites = sites.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_controllers<I, S>(mut self, controllers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.controllers = controllers.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_edit(&self) -> bool {
        self.action == FormAction::Edit
    }
}
