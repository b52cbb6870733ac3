//! Task records as stored by the host's persistence layer.
//!
//! Every field identifier is an attribute of the same name in the persisted
//! JSON object, so a record written by one provider version can be read by
//! the host without knowing these types.

use serde::{Deserialize, Serialize};

use super::field::FieldKey;
use crate::typed::SchedulerTask;

/// Settings shared by every Aimeos task type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseSettings {
    #[serde(rename = "aimeos_sitecode", default)]
    pub sites: Vec<String>,

    #[serde(rename = "aimeos_controller", default)]
    pub controllers: Vec<String>,

    #[serde(rename = "aimeos_config", default)]
    pub config: String,
}

impl BaseSettings {
    /// Stored value of a base field in its form representation.
    pub fn form_value(&self, key: FieldKey) -> Option<String> {
        match key {
            FieldKey::SiteCode => Some(self.sites.join(",")),
            FieldKey::Controller => Some(self.controllers.join(",")),
            FieldKey::Config => Some(self.config.clone()),
            _ => None,
        }
    }
}

/// The e-mail task: base settings plus sender and page references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailTask {
    #[serde(flatten)]
    pub base: BaseSettings,

    #[serde(rename = "aimeos_sender_from", default)]
    pub sender_from: String,

    #[serde(rename = "aimeos_sender_email", default)]
    pub sender_email: String,

    #[serde(rename = "aimeos_reply_email", default)]
    pub reply_email: String,

    #[serde(rename = "aimeos_pageid_catalog", default)]
    pub page_catalog: String,

    #[serde(rename = "aimeos_pageid_detail", default)]
    pub page_detail: String,

    #[serde(rename = "aimeos_pageid_login", default)]
    pub page_login: String,

    #[serde(rename = "aimeos_pageid_download", default)]
    pub page_download: String,
}

impl EmailTask {
    /// Stored value of one of the seven e-mail fields.
    pub fn get(&self, key: FieldKey) -> Option<&str> {
        let value = match key {
            FieldKey::SenderFrom => &self.sender_from,
            FieldKey::SenderEmail => &self.sender_email,
            FieldKey::ReplyEmail => &self.reply_email,
            FieldKey::PageCatalog => &self.page_catalog,
            FieldKey::PageDetail => &self.page_detail,
            FieldKey::PageLogin => &self.page_login,
            FieldKey::PageDownload => &self.page_download,
            _ => return None,
        };
        Some(value.as_str())
    }

    pub(crate) fn slot_mut(&mut self, key: FieldKey) -> Option<&mut String> {
        match key {
            FieldKey::SenderFrom => Some(&mut self.sender_from),
            FieldKey::SenderEmail => Some(&mut self.sender_email),
            FieldKey::ReplyEmail => Some(&mut self.reply_email),
            FieldKey::PageCatalog => Some(&mut self.page_catalog),
            FieldKey::PageDetail => Some(&mut self.page_detail),
            FieldKey::PageLogin => Some(&mut self.page_login),
            FieldKey::PageDownload => Some(&mut self.page_download),
            _ => None,
        }
    }
}

impl SchedulerTask for EmailTask {
    const TYPE: &'static str = "aimeos.email";

    fn base(&self) -> &BaseSettings {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseSettings {
        &mut self.base
    }
}

/// The generic jobs task: only the base settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobsTask {
    #[serde(flatten)]
    pub base: BaseSettings,
}

impl SchedulerTask for JobsTask {
    const TYPE: &'static str = "aimeos.jobs";

    fn base(&self) -> &BaseSettings {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseSettings {
        &mut self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EMAIL_FIELDS;

    #[test]
    fn email_task_is_a_flat_record_of_named_attributes() {
        let task = EmailTask {
            base: BaseSettings {
                sites: vec!["default".to_string()],
                controllers: vec!["customer/email/account".to_string()],
                config: String::new(),
            },
            sender_email: "shop@example.com".to_string(),
            page_login: "12".to_string(),
            ..EmailTask::default()
        };

        let v = serde_json::to_value(&task).unwrap();
        assert_eq!(v["aimeos_sender_email"], "shop@example.com");
        assert_eq!(v["aimeos_pageid_login"], "12");
        assert_eq!(v["aimeos_sitecode"][0], "default");
    }

    #[test]
    fn missing_attributes_default_to_empty() {
        let task: EmailTask = serde_json::from_str(r#"{ "aimeos_sender_from": "Shop" }"#).unwrap();
        assert_eq!(task.sender_from, "Shop");
        assert_eq!(task.reply_email, "");
        assert!(task.base.sites.is_empty());
    }

    #[test]
    fn every_email_field_has_a_slot() {
        let mut task = EmailTask::default();
        for key in EMAIL_FIELDS {
            *task.slot_mut(key).unwrap() = key.as_str().to_string();
        }
        for key in EMAIL_FIELDS {
            assert_eq!(task.get(key), Some(key.as_str()));
        }
        assert_eq!(task.get(FieldKey::SiteCode), None);
    }

    #[test]
    fn base_form_value_joins_lists() {
        let base = BaseSettings {
            sites: vec!["a".to_string(), "b".to_string()],
            ..BaseSettings::default()
        };
        assert_eq!(base.form_value(FieldKey::SiteCode).as_deref(), Some("a,b"));
        assert_eq!(base.form_value(FieldKey::PageLogin), None);
    }
}
