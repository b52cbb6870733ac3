//! Field identifiers shared by every provider.
//!
//! The identifiers are a stable wire contract: they name the keys of the
//! submitted form (`tx_scheduler[<id>]`) and the attributes of the persisted
//! task record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix of every localization key used by the providers.
pub const LABEL_PREFIX: &str = "LLL:EXT:aimeos/Resources/Private/Language/scheduler.xlf:";

/// Help topic (CSH key) shared by all Aimeos task fields.
pub const CSH_KEY: &str = "xMOD_tx_aimeos";

/// A named form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldKey {
    #[serde(rename = "aimeos_sitecode")]
    SiteCode,
    #[serde(rename = "aimeos_controller")]
    Controller,
    #[serde(rename = "aimeos_config")]
    Config,
    #[serde(rename = "aimeos_sender_from")]
    SenderFrom,
    #[serde(rename = "aimeos_sender_email")]
    SenderEmail,
    #[serde(rename = "aimeos_reply_email")]
    ReplyEmail,
    #[serde(rename = "aimeos_pageid_login")]
    PageLogin,
    #[serde(rename = "aimeos_pageid_detail")]
    PageDetail,
    #[serde(rename = "aimeos_pageid_catalog")]
    PageCatalog,
    #[serde(rename = "aimeos_pageid_download")]
    PageDownload,
}

/// Fields owned by the base provider, in render order.
pub const BASE_FIELDS: [FieldKey; 3] = [FieldKey::SiteCode, FieldKey::Controller, FieldKey::Config];

/// Fields owned by the e-mail provider, in render order.
pub const EMAIL_FIELDS: [FieldKey; 7] = [
    FieldKey::SenderFrom,
    FieldKey::SenderEmail,
    FieldKey::ReplyEmail,
    FieldKey::PageCatalog,
    FieldKey::PageDetail,
    FieldKey::PageDownload,
    FieldKey::PageLogin,
];

impl FieldKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::SiteCode => "aimeos_sitecode",
            FieldKey::Controller => "aimeos_controller",
            FieldKey::Config => "aimeos_config",
            FieldKey::SenderFrom => "aimeos_sender_from",
            FieldKey::SenderEmail => "aimeos_sender_email",
            FieldKey::ReplyEmail => "aimeos_reply_email",
            FieldKey::PageLogin => "aimeos_pageid_login",
            FieldKey::PageDetail => "aimeos_pageid_detail",
            FieldKey::PageCatalog => "aimeos_pageid_catalog",
            FieldKey::PageDownload => "aimeos_pageid_download",
        }
    }

    /// Localization key suffix of the field label.
    fn label_suffix(&self) -> &'static str {
        match self {
            FieldKey::SiteCode => "default.label.sitecode",
            FieldKey::Controller => "default.label.controller",
            FieldKey::Config => "default.label.config",
            FieldKey::SenderFrom => "email.label.from-name",
            FieldKey::SenderEmail => "email.label.from-email",
            FieldKey::ReplyEmail => "email.label.reply-email",
            FieldKey::PageLogin => "email.label.page-login",
            FieldKey::PageDetail => "email.label.page-detail",
            FieldKey::PageCatalog => "email.label.page-catalog",
            FieldKey::PageDownload => "email.label.page-download",
        }
    }

    /// Full localization key of the field label, e.g.
    /// `LLL:EXT:aimeos/...scheduler.xlf:email.label.from-email`.
    pub fn label_key(&self) -> String {
        format!("{LABEL_PREFIX}{}", self.label_suffix())
    }

    /// Full localization key of the message shown when the field is invalid.
    ///
    /// `aimeos_sender_from` and `aimeos_config` are never validated; they
    /// still get a key so every field has one.
    pub fn error_key(&self) -> String {
        let suffix = match self {
            FieldKey::SiteCode => "default.error.sitecode",
            FieldKey::Controller => "default.error.controller",
            FieldKey::Config => "default.error.config",
            FieldKey::SenderFrom => "email.error.from-name.invalid",
            FieldKey::SenderEmail => "email.error.from-email.invalid",
            FieldKey::ReplyEmail => "email.error.reply-email.invalid",
            FieldKey::PageLogin => "email.error.page-login.invalid",
            FieldKey::PageDetail => "email.error.page-detail.invalid",
            FieldKey::PageCatalog => "email.error.page-catalog.invalid",
            FieldKey::PageDownload => "email.error.page-download.invalid",
        };
        format!("{LABEL_PREFIX}{suffix}")
    }

    /// Look up a field by its wire identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        BASE_FIELDS
            .iter()
            .chain(EMAIL_FIELDS.iter())
            .copied()
            .find(|key| key.as_str() == id)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn identifiers_are_unique() {
        let ids: HashSet<&str> = BASE_FIELDS
            .iter()
            .chain(EMAIL_FIELDS.iter())
            .map(|k| k.as_str())
            .collect();
        assert_eq!(ids.len(), BASE_FIELDS.len() + EMAIL_FIELDS.len());
    }

    #[test]
    fn serde_name_matches_wire_identifier() {
        for key in BASE_FIELDS.iter().chain(EMAIL_FIELDS.iter()) {
            let s = serde_json::to_string(key).unwrap();
            assert_eq!(s, format!("\"{}\"", key.as_str()));
            assert_eq!(FieldKey::from_id(key.as_str()), Some(*key));
        }
    }

    #[test]
    fn label_key_carries_the_extension_prefix() {
        assert_eq!(
            FieldKey::SenderEmail.label_key(),
            "LLL:EXT:aimeos/Resources/Private/Language/scheduler.xlf:email.label.from-email"
        );
        assert!(FieldKey::PageCatalog.error_key().ends_with("email.error.page-catalog.invalid"));
    }

    #[test]
    fn unknown_identifier_is_none() {
        assert_eq!(FieldKey::from_id("aimeos_unknown"), None);
    }
}
