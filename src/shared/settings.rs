//! App Settings
//!
//! Branding, contact, social and footer-link settings shown by every page.
//! Defaults are hard-coded, then overridden per field from the environment,
//! then (optionally) by the remote `/public/app-settings` payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::shared::error::SharedError;

/// Effective branding and contact settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub brand_name: String,
    pub tagline: String,
    pub logo_url: String,
    pub support_email: String,
    pub social: SocialLinks,
    pub footer_links: Vec<FooterLink>,
}

/// Social profile links. Empty string means "not shown".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub twitter: String,
    pub linkedin: String,
    pub facebook: String,
    pub instagram: String,
    pub youtube: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

impl FooterLink {
    fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            brand_name: "Droobi".to_string(),
            tagline: "Knowledge, people and projects in one place".to_string(),
            logo_url: "/logo.svg".to_string(),
            support_email: "support@droobi.com".to_string(),
            social: SocialLinks::default(),
            footer_links: vec![
                FooterLink::new("About", "/about"),
                FooterLink::new("Privacy", "/privacy"),
                FooterLink::new("Terms", "/terms"),
                FooterLink::new("Contact", "/contact"),
            ],
        }
    }
}

impl AppSettings {
    /// Hard-coded defaults with per-field environment overrides applied.
    ///
    /// `lookup` returns the value of an environment variable; empty values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut settings = Self::default();

        if let Some(value) = get("NEXT_PUBLIC_BRAND_NAME") {
            settings.brand_name = value;
        }
        if let Some(value) = get("NEXT_PUBLIC_TAGLINE") {
            settings.tagline = value;
        }
        if let Some(value) = get("NEXT_PUBLIC_LOGO_URL") {
            settings.logo_url = value;
        }
        if let Some(value) = get("NEXT_PUBLIC_SUPPORT_EMAIL") {
            settings.support_email = value;
        }

        let social = &mut settings.social;
        for (key, slot) in [
            ("NEXT_PUBLIC_SOCIAL_TWITTER", &mut social.twitter),
            ("NEXT_PUBLIC_SOCIAL_LINKEDIN", &mut social.linkedin),
            ("NEXT_PUBLIC_SOCIAL_FACEBOOK", &mut social.facebook),
            ("NEXT_PUBLIC_SOCIAL_INSTAGRAM", &mut social.instagram),
            ("NEXT_PUBLIC_SOCIAL_YOUTUBE", &mut social.youtube),
        ] {
            if let Some(value) = get(key) {
                *slot = value;
            }
        }

        settings
    }

    /// Shallow-merge a remote mapping over these settings.
    ///
    /// Remote keys replace whole fields (`social` is replaced, not merged).
    /// `null` values are ignored, and so is any key whose value does not fit
    /// its field; the remaining keys still apply.
    pub fn overlay(&self, remote: &Map<String, Value>) -> Result<AppSettings, SharedError> {
        let mut merged = match serde_json::to_value(self)? {
            Value::Object(map) => map,
            _ => return Err(SharedError::serialization("settings did not serialize to an object")),
        };

        for (key, value) in remote {
            if value.is_null() {
                continue;
            }
            let previous = merged.insert(key.clone(), value.clone());
            if serde_json::from_value::<AppSettings>(Value::Object(merged.clone())).is_err() {
                tracing::debug!("Ignoring remote setting '{}' with unexpected shape: {}", key, value);
                match previous {
                    Some(previous) => merged.insert(key.clone(), previous),
                    None => merged.remove(key),
                };
            }
        }

        Ok(serde_json::from_value(Value::Object(merged))?)
    }
}
