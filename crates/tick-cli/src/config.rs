//! Configuration loading and management.

use std::fmt;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Deserializer, Serialize};
use tick_core::{ApiUrls, Credentials, DEFAULT_BASE_URL};

/// Application configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Tick account username (`TICKSPOT_USERNAME`).
    #[serde(default, deserialize_with = "loose_text")]
    pub username: Option<String>,
    /// Tick account password (`TICKSPOT_PASSWORD`).
    #[serde(default, deserialize_with = "loose_text")]
    pub password: Option<String>,
    /// API host, without the `/api/v2` suffix.
    pub base_url: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: None,
            password: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (TICKSPOT_*)
        figment = figment.merge(Env::prefixed("TICKSPOT_").ignore(&CREDENTIAL_KEYS));

        // Credentials are taken verbatim; `Env` would read `007` as the integer 7
        for key in CREDENTIAL_KEYS {
            if let Ok(value) = std::env::var(format!("TICKSPOT_{}", key.to_uppercase())) {
                figment = figment.merge(Serialized::default(key, value));
            }
        }

        figment.extract()
    }

    /// Credentials for the roles lookup.
    ///
    /// Unset values become empty strings; the server then rejects them as an
    /// authorization failure.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(
            self.username.clone().unwrap_or_default(),
            self.password.clone().unwrap_or_default(),
        )
    }

    pub fn urls(&self) -> ApiUrls {
        ApiUrls::new(self.base_url.as_str())
    }
}

const CREDENTIAL_KEYS: [&str; 2] = ["username", "password"];

/// Reads a string, number or boolean as text, for credentials written
/// unquoted in `config.toml`.
fn loose_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
        Bool(bool),
    }

    Ok(
        Option::<Loose>::deserialize(deserializer)?.map(|value| match value {
            Loose::Text(text) => text,
            Loose::Unsigned(number) => number.to_string(),
            Loose::Signed(number) => number.to_string(),
            Loose::Float(number) => number.to_string(),
            Loose::Bool(flag) => flag.to_string(),
        }),
    )
}

/// Returns the platform-specific config directory for ticker.
///
/// On Linux: `~/.config/ticker`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("ticker"))
}
