//! Service implementation for the static social `AuthN` plugin.

use std::collections::{BTreeSet, HashMap};

use connect_sdk::ConnectionKey;
use social_authn_sdk::SocialUserDetails;

use crate::config::StaticSocialAuthnPluginConfig;

/// Static connection repository and user store.
///
/// Repeated mappings for the same external account append to its user ids
/// in configured order.
pub struct Service {
    connections: HashMap<ConnectionKey, Vec<String>>,
    users: HashMap<String, SocialUserDetails>,
}

impl Service {
    /// Create a service from plugin configuration.
    #[must_use]
    pub fn from_config(cfg: &StaticSocialAuthnPluginConfig) -> Self {
        let mut connections: HashMap<ConnectionKey, Vec<String>> = HashMap::new();
        for mapping in &cfg.connections {
            let key = ConnectionKey::new(
                mapping.provider_id.as_str(),
                mapping.provider_user_id.as_str(),
            );
            connections
                .entry(key)
                .or_default()
                .extend(mapping.user_ids.iter().cloned());
        }

        let users = cfg
            .users
            .iter()
            .map(|u| {
                let details = SocialUserDetails {
                    user_id: u.user_id.clone(),
                    username: u.username.clone(),
                    authorities: u.authorities.clone(),
                    enabled: u.enabled,
                };
                (u.user_id.clone(), details)
            })
            .collect();

        Self { connections, users }
    }

    /// User ids connected to `key`, in configured order.
    #[must_use]
    pub fn user_ids_for(&self, key: &ConnectionKey) -> &[String] {
        self.connections.get(key).map_or(&[], Vec::as_slice)
    }

    /// User ids connected to any of `provider_user_ids` at `provider_id`.
    #[must_use]
    pub fn user_ids_connected_to(
        &self,
        provider_id: &str,
        provider_user_ids: &[String],
    ) -> BTreeSet<String> {
        provider_user_ids
            .iter()
            .map(|id| ConnectionKey::new(provider_id, id.as_str()))
            .flat_map(|key| self.user_ids_for(&key))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn find_user(&self, user_id: &str) -> Option<&SocialUserDetails> {
        self.users.get(user_id)
    }
}
