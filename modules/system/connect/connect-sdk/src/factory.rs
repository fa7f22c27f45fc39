//! Connection factory trait.
//!
//! One implementation per external provider. A factory owns exactly one
//! (provider id, API type) pair and is immutable once registered.

use std::fmt;

use crate::error::ConnectError;
use crate::models::{ApiType, Connection, ConnectionData};

/// Produces [`Connection`]s for a single provider.
pub trait ConnectionFactory: Send + Sync + fmt::Debug {
    /// Provider id this factory serves, e.g. `"twitter"`.
    fn provider_id(&self) -> &str;

    /// Native API type the produced connections target.
    fn api_type(&self) -> ApiType;

    /// Build a connection from data handed over by the OAuth flow.
    ///
    /// # Errors
    ///
    /// - `ProviderMismatch` if `data` belongs to another provider
    /// - `InvalidConnectionData` if `data` is incomplete for this provider
    fn create_connection(&self, data: ConnectionData) -> Result<Connection, ConnectError>;
}
