//! Error types for the connect module.

use std::fmt;

use thiserror::Error;

/// Which registry index a registration or lookup refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationKey {
    /// Lookup by provider id, e.g. `"twitter"`.
    ProviderId(String),
    /// Lookup by native API type (carries the type name).
    ApiType(&'static str),
}

impl fmt::Display for RegistrationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProviderId(id) => write!(f, "provider id '{id}'"),
            Self::ApiType(name) => write!(f, "api type '{name}'"),
        }
    }
}

/// Errors that can occur when using the connect API.
#[derive(Debug, Error)]
pub enum ConnectError {
    /// A factory is already registered under the same provider id or API type.
    #[error("a connection factory is already registered for {key}")]
    DuplicateRegistration { key: RegistrationKey },

    /// No factory is registered for the requested provider id or API type.
    #[error("no connection factory registered for {key}")]
    NotFound { key: RegistrationKey },

    /// Connection data was produced for a different provider.
    #[error("connection data is for provider '{actual}', factory serves '{expected}'")]
    ProviderMismatch { expected: String, actual: String },

    /// Connection data is incomplete for the factory's protocol.
    #[error("invalid connection data: {0}")]
    InvalidConnectionData(String),

    /// The connection repository backend failed.
    #[error("connection repository error: {0}")]
    Repository(String),
}

impl ConnectError {
    #[must_use]
    pub fn provider_not_found(provider_id: &str) -> Self {
        Self::NotFound {
            key: RegistrationKey::ProviderId(provider_id.to_owned()),
        }
    }

    #[must_use]
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidConnectionData(message.into())
    }
}
