use crate::provider::{VoiceSettings, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, warn};

pub const CONFIG_FILE: &str = "config.json";

pub const ENV_API_KEY: &str = "AUTOTTS_API_KEY";
pub const ENV_BASE_URL: &str = "AUTOTTS_BASE_URL";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "AUTOTTS_HTTP_TIMEOUT_SECS";

/// Contents of `config.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AppConfig {
    pub api_key: String,
    pub stability: f32,
    pub similarity_boost: f32,
    pub style: i32,
    pub use_speaker_boost: bool,
    /// Speaker label to voice name or ID.
    #[serde(default)]
    pub voices: BTreeMap<String, String>,
}

impl AppConfig {
    /// Starter configuration written on first run.
    pub fn starter(api_key: impl Into<String>) -> Self {
        let defaults = VoiceSettings::default();
        Self {
            api_key: api_key.into(),
            stability: defaults.stability,
            similarity_boost: defaults.similarity_boost,
            style: defaults.style,
            use_speaker_boost: defaults.use_speaker_boost,
            voices: [
                ("Speaker1".to_string(), "ErXwobaYiN019PkySvjV".to_string()),
                ("Speaker2".to_string(), "VR6AewLTigWG4xSOukaG".to_string()),
            ]
            .into_iter()
            .collect(),
        }
    }

    /// Load the configuration file, apply environment overrides and validate.
    ///
    /// A missing file is reported as [`Error::ConfigMissing`] so the caller can bootstrap.
    pub fn load(path: &Path) -> Result<Self> {
        Self::load_with(path, |name| std::env::var(name).ok())
    }

    /// [`AppConfig::load`] with overrides taken from `lookup` instead of the environment.
    pub fn load_with(path: &Path, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigMissing {
                path: path.display().to_string(),
            });
        }
        let raw = std::fs::read_to_string(path)?;
        let mut config: AppConfig = serde_json::from_str(&raw).map_err(|e| {
            Error::configuration_with_context(
                format!("failed to parse {}", path.display()),
                ErrorContext::new()
                    .with_details(e.to_string())
                    .with_source("config"),
            )
        })?;
        config.apply_overrides(lookup);
        config.validate()?;
        info!(path = %path.display(), speakers = config.voices.len(), "config loaded");
        Ok(config)
    }

    /// Write a starter configuration holding `api_key`. Never overwrites an existing file.
    pub fn bootstrap(path: &Path, api_key: &str) -> Result<Self> {
        if path.exists() {
            return Err(Error::configuration_with_context(
                "refusing to overwrite existing configuration",
                ErrorContext::new().with_details(path.display().to_string()),
            ));
        }
        let config = Self::starter(api_key.trim());
        config.save(path)?;
        info!(path = %path.display(), "starter config written");
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "API key is empty",
                ErrorContext::new().with_field_path("api-key"),
            ));
        }
        for (field, value) in [
            ("stability", self.stability),
            ("similarity-boost", self.similarity_boost),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::configuration_with_context(
                    format!("{} must be between 0 and 1", field),
                    ErrorContext::new()
                        .with_field_path(field)
                        .with_details(value.to_string()),
                ));
            }
        }
        Ok(())
    }

    /// Apply overrides from `lookup` (normally the process environment).
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup(ENV_API_KEY).filter(|k| !k.trim().is_empty()) {
            self.api_key = key;
        }
    }

    pub fn voice_settings(&self) -> VoiceSettings {
        VoiceSettings {
            stability: self.stability,
            similarity_boost: self.similarity_boost,
            style: self.style,
            use_speaker_boost: self.use_speaker_boost,
        }
    }
}

/// How to reach the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ConnectionSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();
        if let Some(url) = lookup(ENV_BASE_URL).filter(|u| !u.trim().is_empty()) {
            settings.base_url = url;
        }
        if let Some(raw) = lookup(ENV_HTTP_TIMEOUT_SECS) {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => settings.timeout_secs = secs,
                _ => warn!(value = %raw, "ignoring invalid {}", ENV_HTTP_TIMEOUT_SECS),
            }
        }
        settings
    }
}
