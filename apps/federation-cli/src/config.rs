//! Host configuration: YAML file merged with `FEDERATION_` environment variables.

use std::path::Path;

use connect::AuthProtocol;
use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use serde::Deserialize;
use static_social_authn_plugin::StaticSocialAuthnPluginConfig;

use crate::apis::KnownApi;

/// Prefix of environment overrides; nested keys are separated by `__`.
pub const ENV_PREFIX: &str = "FEDERATION_";

/// Top-level sections read from the environment; other `FEDERATION_*`
/// variables are left to their owners.
const ENV_SECTIONS: [&str; 3] = ["logging", "providers", "static_plugin"];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub providers: Vec<ProviderConfig>,
    pub static_plugin: StaticSocialAuthnPluginConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            json: false,
        }
    }
}

/// One registered provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    pub id: String,
    pub api: KnownApi,
    #[serde(default)]
    pub protocol: Option<AuthProtocol>,
}

impl ProviderConfig {
    #[must_use]
    pub fn protocol(&self) -> AuthProtocol {
        self.protocol.unwrap_or_else(|| self.api.default_protocol())
    }
}

impl AppConfig {
    /// Load from an optional YAML file, then apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the merged
    /// configuration does not match the schema.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            anyhow::ensure!(path.exists(), "config file {} not found", path.display());
            figment = figment.merge(Yaml::file(path));
        }
        let env = Env::prefixed(ENV_PREFIX)
            .filter(|key| is_config_section(key.as_str()))
            .split("__");
        Self::from_figment(&figment.merge(env))
    }

    /// Extract from an already assembled figment.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not match the schema.
    pub fn from_figment(figment: &Figment) -> anyhow::Result<Self> {
        Ok(figment.extract()?)
    }
}

/// Whether an unprefixed variable name such as `LOGGING__LEVEL` targets a
/// known section.
fn is_config_section(key: &str) -> bool {
    let section = key.split("__").next().unwrap_or_default();
    ENV_SECTIONS
        .iter()
        .any(|known| section.eq_ignore_ascii_case(known))
}
