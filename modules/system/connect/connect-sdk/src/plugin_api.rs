//! Repository API implemented by connection storage backends.
//!
//! Persistence itself lives outside this workspace; backends implement
//! this trait and the authentication resolver consumes it.

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::error::ConnectError;
use crate::models::Connection;

/// Maps external connections to local user ids.
#[async_trait]
pub trait UsersConnectionRepository: Send + Sync {
    /// Local user ids connected to the connection's (provider id, provider user id).
    ///
    /// The result may be empty and must be deterministic for a given
    /// persisted state. Callers treat it as a set.
    ///
    /// # Errors
    ///
    /// - `Repository` if the backend cannot answer
    async fn find_user_ids_with_connection(
        &self,
        connection: &Connection,
    ) -> Result<Vec<String>, ConnectError>;

    /// Local user ids connected to any of `provider_user_ids` at `provider_id`.
    ///
    /// # Errors
    ///
    /// - `Repository` if the backend cannot answer
    async fn find_user_ids_connected_to(
        &self,
        provider_id: &str,
        provider_user_ids: &[String],
    ) -> Result<BTreeSet<String>, ConnectError>;
}
