//! Configuration for the static social `AuthN` plugin.

use serde::Deserialize;

/// Plugin configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticSocialAuthnPluginConfig {
    /// External accounts and the local users they are connected to.
    pub connections: Vec<ConnectionMapping>,

    /// Local user profiles.
    pub users: Vec<UserConfig>,
}

/// Links one external account to local user ids.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConnectionMapping {
    pub provider_id: String,
    pub provider_user_id: String,
    /// Usually exactly one; more than one makes the connection ambiguous.
    #[serde(default)]
    pub user_ids: Vec<String>,
}

/// Local user profile.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserConfig {
    pub user_id: String,
    pub username: String,
    #[serde(default)]
    pub authorities: Vec<String>,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}
