//! Client implementations for the static social `AuthN` plugin.
//!
//! Implements `UsersConnectionRepository` and `SocialUserDetailsService`
//! using the domain service.

use std::collections::BTreeSet;

use async_trait::async_trait;
use connect_sdk::{ConnectError, Connection, UsersConnectionRepository};
use social_authn_sdk::{SocialUserDetails, SocialUserDetailsService, UserDetailsError};

use super::service::Service;

#[async_trait]
impl UsersConnectionRepository for Service {
    async fn find_user_ids_with_connection(
        &self,
        connection: &Connection,
    ) -> Result<Vec<String>, ConnectError> {
        let user_ids = self.user_ids_for(connection.key()).to_vec();
        tracing::debug!(
            connection = %connection.key(),
            candidates = user_ids.len(),
            "Looked up static connection"
        );
        Ok(user_ids)
    }

    async fn find_user_ids_connected_to(
        &self,
        provider_id: &str,
        provider_user_ids: &[String],
    ) -> Result<BTreeSet<String>, ConnectError> {
        Ok(self.user_ids_connected_to(provider_id, provider_user_ids))
    }
}

#[async_trait]
impl SocialUserDetailsService for Service {
    async fn load_user_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<SocialUserDetails, UserDetailsError> {
        self.find_user(user_id)
            .cloned()
            .ok_or_else(|| UserDetailsError::NotFound {
                user_id: user_id.to_owned(),
            })
    }
}
