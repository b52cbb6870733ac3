//! Catalog - 設定ファイルから読み込む翻訳テーブル
//!
//! キーは完全な `LLL:EXT:...:email.error.from-email.invalid` 形式でも、
//! prefix を省いた `email.error.from-email.invalid` 形式でも登録できます。

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::LABEL_PREFIX;
use crate::ports::Translator;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("toml decode: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json decode: {0}")]
    Json(#[from] serde_json::Error),
}

/// Key → message table. Unknown keys translate to themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.messages.insert(key.into(), message.into());
    }

    pub fn from_toml_str(s: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translator for Catalog {
    fn translate(&self, key: &str) -> String {
        if let Some(message) = self.messages.get(key) {
            return message.clone();
        }
        key.strip_prefix(LABEL_PREFIX)
            .and_then(|short| self.messages.get(short))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            messages: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldKey;

    #[test]
    fn resolves_full_and_short_keys() {
        let catalog = Catalog::from_toml_str(
            r#"
            "email.error.from-email.invalid" = "Invalid sender e-mail address"
            "LLL:EXT:aimeos/Resources/Private/Language/scheduler.xlf:email.error.page-login.invalid" = "Invalid login page"
            "#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.translate(&FieldKey::SenderEmail.error_key()),
            "Invalid sender e-mail address"
        );
        assert_eq!(
            catalog.translate(&FieldKey::PageLogin.error_key()),
            "Invalid login page"
        );
    }

    #[test]
    fn unknown_key_translates_to_itself() {
        let catalog = Catalog::new();
        assert_eq!(catalog.translate("some.key"), "some.key");
    }

    #[test]
    fn loads_from_json() {
        let catalog = Catalog::from_json_str(r#"{ "a": "b" }"#).unwrap();
        assert_eq!(catalog.translate("a"), "b");
    }

    #[test]
    fn rejects_non_string_values() {
        let err = Catalog::from_toml_str("a = 1").unwrap_err();
        assert!(matches!(err, CatalogError::Toml(_)));
    }
}
