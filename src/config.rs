//! Configuration handling for the TUI

use crate::lead::PhoneRule;
use crate::relay::{EmailJsCredentials, DEFAULT_ENDPOINT};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

const ENV_SERVICE_ID: &str = "AIOH_EMAILJS_SERVICE_ID";
const ENV_TEMPLATE_ID: &str = "AIOH_EMAILJS_TEMPLATE_ID";
const ENV_PUBLIC_KEY: &str = "AIOH_EMAILJS_PUBLIC_KEY";
const ENV_ENDPOINT: &str = "AIOH_EMAILJS_ENDPOINT";

const DEFAULT_CAROUSEL_INTERVAL_MS: u64 = 5000;
const DEFAULT_HOVER_CLOSE_DELAY_MS: u64 = 200;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    /// EmailJS service id
    pub emailjs_service_id: Option<String>,
    /// EmailJS template id
    pub emailjs_template_id: Option<String>,
    /// EmailJS public key (sent as `user_id`)
    pub emailjs_public_key: Option<String>,
    /// EmailJS API host
    pub emailjs_endpoint: Option<String>,
    /// Phone number rule applied on submit
    pub phone_rule: Option<PhoneRule>,
    /// Time each carousel slide stays up
    pub carousel_interval_ms: Option<u64>,
    /// Grace period before a dropdown closes after the pointer leaves
    pub hover_close_delay_ms: Option<u64>,
    /// Page to open on start
    pub initial_route: Option<String>,
}

impl SiteConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "allinoneholdings", "aioh-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: SiteConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Override relay settings from the environment (non-empty values only)
    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get(ENV_SERVICE_ID) {
            self.emailjs_service_id = Some(v);
        }
        if let Some(v) = get(ENV_TEMPLATE_ID) {
            self.emailjs_template_id = Some(v);
        }
        if let Some(v) = get(ENV_PUBLIC_KEY) {
            self.emailjs_public_key = Some(v);
        }
        if let Some(v) = get(ENV_ENDPOINT) {
            self.emailjs_endpoint = Some(v);
        }
    }

    /// Relay credentials, present only when all three ids are set
    pub fn emailjs_credentials(&self) -> Option<EmailJsCredentials> {
        Some(EmailJsCredentials {
            service_id: self.emailjs_service_id.clone()?,
            template_id: self.emailjs_template_id.clone()?,
            public_key: self.emailjs_public_key.clone()?,
        })
    }

    pub fn emailjs_endpoint(&self) -> &str {
        self.emailjs_endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn phone_rule(&self) -> PhoneRule {
        self.phone_rule.unwrap_or_default()
    }

    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(
            self.carousel_interval_ms
                .filter(|ms| *ms > 0)
                .unwrap_or(DEFAULT_CAROUSEL_INTERVAL_MS),
        )
    }

    pub fn hover_close_delay(&self) -> Duration {
        Duration::from_millis(
            self.hover_close_delay_ms
                .unwrap_or(DEFAULT_HOVER_CLOSE_DELAY_MS),
        )
    }

    pub fn initial_route(&self) -> &str {
        self.initial_route.as_deref().unwrap_or("/")
    }
}
