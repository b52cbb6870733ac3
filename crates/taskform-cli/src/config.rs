//! CLI configuration: the host form context and the translation catalog.
//!
//! ```toml
//! sites = ["default"]
//! controllers = ["order/email/payment"]
//!
//! [messages]
//! "email.error.from-email.invalid" = "Invalid sender e-mail address"
//! ```

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use taskform_core::domain::{FormAction, FormContext};
use taskform_core::impls::Catalog;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sites: Vec<String>,

    #[serde(default)]
    pub controllers: Vec<String>,

    #[serde(default)]
    pub messages: Catalog,
}

impl Config {
    /// Load from `path`, or an empty config when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn form_context(&self, action: FormAction) -> FormContext {
        FormContext::new(action)
            .with_sites(self.sites.iter().cloned())
            .with_controllers(self.controllers.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskform_core::ports::Translator;

    #[test]
    fn parses_context_and_messages() {
        let config: Config = toml::from_str(
            r#"
            sites = ["default", "b2b"]
            controllers = ["order/email/payment"]

            [messages]
            "email.error.from-email.invalid" = "Invalid sender"
            "#,
        )
        .unwrap();

        let ctx = config.form_context(FormAction::Edit);
        assert!(ctx.is_edit());
        assert_eq!(ctx.sites, vec!["default", "b2b"]);
        assert_eq!(
            config.messages.translate("email.error.from-email.invalid"),
            "Invalid sender"
        );
    }

    #[test]
    fn missing_path_gives_empty_config() {
        let config = Config::load(None).unwrap();
        assert!(config.sites.is_empty());
        assert!(config.messages.is_empty());
    }
}
