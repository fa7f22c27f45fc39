//! Domain errors for social authentication.

use connect_sdk::ConnectError;
use social_authn_sdk::SocialAuthnError;

/// Internal domain errors.
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("no local user connected to {provider_id}:{provider_user_id}")]
    NoSuchConnection {
        provider_id: String,
        provider_user_id: String,
    },

    #[error("{candidates} local users connected to {provider_id}:{provider_user_id}")]
    AmbiguousConnection {
        provider_id: String,
        provider_user_id: String,
        candidates: usize,
    },

    #[error("profile of user '{user_id}' not found")]
    ProfileMissing { user_id: String },

    #[error("connection repository failed: {0}")]
    Repository(String),

    #[error("user store failed: {0}")]
    UserStore(String),
}

impl From<ConnectError> for DomainError {
    fn from(e: ConnectError) -> Self {
        Self::Repository(e.to_string())
    }
}

impl From<DomainError> for SocialAuthnError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NoSuchConnection {
                provider_id,
                provider_user_id,
            } => Self::NoSuchConnection {
                provider_id,
                provider_user_id,
            },
            DomainError::AmbiguousConnection {
                provider_id,
                provider_user_id,
                candidates,
            } => Self::AmbiguousConnection {
                provider_id,
                provider_user_id,
                candidates,
            },
            DomainError::ProfileMissing { user_id } => Self::ProfileMissing { user_id },
            DomainError::Repository(_) | DomainError::UserStore(_) => {
                Self::Internal(err.to_string())
            }
        }
    }
}
