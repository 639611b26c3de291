use std::rc::Rc;

use log::error;
use serde::Deserialize;
use thiserror::Error;
use yew::prelude::*;

const TUTORING_SITE: &str = include_str!("../sites/tutoring.json");
const SPA_SITE: &str = include_str!("../sites/spa.json");

pub const FALLBACK_PHONE: &str = "+254 748 699 460";
pub const FALLBACK_EMAIL: &str = "hello@tech24.co.ke";
pub const FALLBACK_ADDRESS: &str = "Nairobi, Kenya";
pub const FALLBACK_WHATSAPP: &str = "254748699460";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse {variant:?} site configuration: {source}")]
    Parse {
        variant: Variant,
        #[source]
        source: serde_json::Error,
    },
}

/// Which brand this build serves. Each variant is its own static build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Tutoring,
    Spa,
}

impl Variant {
    #[cfg(not(feature = "spa"))]
    pub const fn current() -> Self {
        Variant::Tutoring
    }

    #[cfg(feature = "spa")]
    pub const fn current() -> Self {
        Variant::Spa
    }

    fn document(self) -> &'static str {
        match self {
            Variant::Tutoring => TUTORING_SITE,
            Variant::Spa => SPA_SITE,
        }
    }

    fn default_brand(self) -> &'static str {
        match self {
            Variant::Tutoring => "Elimu Tutors",
            Variant::Spa => "Spa Lounge",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub whatsapp: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub accent: String,
    pub cta: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: "#0B1B3A".to_string(),
            cta: "#25D366".to_string(),
        }
    }
}

/// Static site record. Built once in `main` and handed to the view layer
/// through a context; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    #[serde(skip)]
    pub variant: Variant,
    pub brand: String,
    pub tagline: String,
    pub base_url: String,
    pub meta_title: String,
    pub meta_description: String,
    pub address: String,
    pub contact: ContactInfo,
    pub theme: Theme,
    pub logo: Option<String>,
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

impl SiteConfig {
    pub fn from_json(variant: Variant, json: &str) -> Result<Self, ConfigError> {
        let mut config: SiteConfig = serde_json::from_str(json)
            .map_err(|source| ConfigError::Parse { variant, source })?;
        config.variant = variant;
        Ok(config)
    }

    /// Loads the embedded configuration for the variant this build targets.
    /// A broken document degrades to an empty config so every accessor falls
    /// back to its literal.
    pub fn load() -> Self {
        let variant = Variant::current();
        match Self::from_json(variant, variant.document()) {
            Ok(config) => config,
            Err(e) => {
                error!("{}", e);
                SiteConfig {
                    variant,
                    ..Default::default()
                }
            }
        }
    }

    pub fn brand(&self) -> &str {
        or_fallback(&self.brand, self.variant.default_brand())
    }

    pub fn phone(&self) -> &str {
        or_fallback(&self.contact.phone, FALLBACK_PHONE)
    }

    pub fn email(&self) -> &str {
        or_fallback(&self.contact.email, FALLBACK_EMAIL)
    }

    pub fn address(&self) -> &str {
        or_fallback(&self.address, FALLBACK_ADDRESS)
    }

    /// WHATSAPP_NUMBER set at build time wins over the document.
    pub fn whatsapp(&self) -> &str {
        match option_env!("WHATSAPP_NUMBER") {
            Some(number) if !number.trim().is_empty() => number,
            _ => or_fallback(&self.contact.whatsapp, FALLBACK_WHATSAPP),
        }
    }
}

#[hook]
pub fn use_site() -> Rc<SiteConfig> {
    use_context::<Rc<SiteConfig>>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_documents_parse() {
        let tutoring = SiteConfig::from_json(Variant::Tutoring, TUTORING_SITE).unwrap();
        assert_eq!(tutoring.variant, Variant::Tutoring);
        assert_eq!(tutoring.address(), "Riverside Drive, Nairobi");
        assert_eq!(tutoring.theme.accent, "#0B1B3A");

        let spa = SiteConfig::from_json(Variant::Spa, SPA_SITE).unwrap();
        assert_eq!(spa.brand(), "Spa Lounge");
        assert_eq!(spa.contact.whatsapp, "254748699460");
        assert_eq!(spa.theme.accent, "#7A5C6A");
    }

    #[test]
    fn blank_fields_use_fallback_literals() {
        let config = SiteConfig::from_json(
            Variant::Spa,
            r#"{ "brand": "  ", "contact": { "email": "" } }"#,
        )
        .unwrap();
        assert_eq!(config.brand(), "Spa Lounge");
        assert_eq!(config.email(), FALLBACK_EMAIL);
        assert_eq!(config.phone(), FALLBACK_PHONE);
        assert_eq!(config.address(), FALLBACK_ADDRESS);
        assert_eq!(config.theme, Theme::default());
        assert!(config.logo.is_none());
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = SiteConfig::from_json(Variant::Tutoring, "{ brand: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { variant: Variant::Tutoring, .. }));
        assert!(err.to_string().starts_with("failed to parse Tutoring site configuration"));
    }

    #[test]
    fn load_matches_build_variant() {
        let config = SiteConfig::load();
        assert_eq!(config.variant, Variant::current());
        assert!(!config.brand().is_empty());
    }
}
