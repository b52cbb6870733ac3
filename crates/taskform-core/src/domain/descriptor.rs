//! Field descriptors returned to the host for rendering.

use serde::{Deserialize, Serialize};

use super::field::{CSH_KEY, FieldKey};

/// Everything the host needs to render one additional field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Rendered HTML markup of the input element.
    pub code: String,

    /// Localization key of the label (resolved by the host).
    pub label: String,

    /// Help topic shared by all fields of the task type.
    pub csh_key: String,

    /// Help entry of this field inside the topic.
    pub csh_label: String,
}

impl FieldDescriptor {
    pub fn new(key: FieldKey, code: String) -> Self {
        Self {
            code,
            label: key.label_key(),
            csh_key: CSH_KEY.to_string(),
            csh_label: key.as_str().to_string(),
        }
    }
}

/// One entry of a [`FieldSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEntry {
    pub key: FieldKey,
    #[serde(flatten)]
    pub descriptor: FieldDescriptor,
}

/// Ordered descriptor map. Keys are unique; insertion order is render order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSet {
    entries: Vec<FieldEntry>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a descriptor unless the key is already present.
    ///
    /// Returns `false` when an entry for `key` already existed (it is kept).
    pub fn insert(&mut self, key: FieldKey, descriptor: FieldDescriptor) -> bool {
        if self.contains(key) {
            return false;
        }
        self.entries.push(FieldEntry { key, descriptor });
        true
    }

    /// Append the entries of `other` whose keys are not present yet.
    pub fn merge_missing(&mut self, other: FieldSet) {
        for entry in other.entries {
            self.insert(entry.key, entry.descriptor);
        }
    }

    pub fn get(&self, key: FieldKey) -> Option<&FieldDescriptor> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| &e.descriptor)
    }

    pub fn contains(&self, key: FieldKey) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    pub fn keys(&self) -> Vec<FieldKey> {
        self.entries.iter().map(|e| e.key).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
