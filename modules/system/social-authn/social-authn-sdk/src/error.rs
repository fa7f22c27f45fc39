//! Error types for the social `AuthN` module.

use thiserror::Error;

/// Errors returned by social authentication.
///
/// The first three variants are authentication denials and are kept
/// distinct on purpose: callers react differently to each of them.
#[derive(Debug, Error)]
pub enum SocialAuthnError {
    /// No local user is connected to the external account.
    #[error("unknown connection {provider_id}:{provider_user_id}")]
    NoSuchConnection {
        provider_id: String,
        provider_user_id: String,
    },

    /// More than one local user is connected to the external account.
    #[error("connection {provider_id}:{provider_user_id} is linked to {candidates} local users")]
    AmbiguousConnection {
        provider_id: String,
        provider_user_id: String,
        candidates: usize,
    },

    /// The connection maps to a local user whose profile cannot be loaded.
    #[error("no profile found for user '{user_id}'")]
    ProfileMissing { user_id: String },

    /// A collaborator (connection repository, user store) failed.
    #[error("internal error: {0}")]
    Internal(String),
}

impl SocialAuthnError {
    /// Whether this is one of the authentication-denied outcomes.
    #[must_use]
    pub fn is_authentication_denied(&self) -> bool {
        matches!(
            self,
            Self::NoSuchConnection { .. }
                | Self::AmbiguousConnection { .. }
                | Self::ProfileMissing { .. }
        )
    }
}

/// Errors returned by a [`crate::SocialUserDetailsService`].
#[derive(Debug, Error)]
pub enum UserDetailsError {
    /// No local user with this id.
    #[error("user '{user_id}' not found")]
    NotFound { user_id: String },

    /// The user store failed.
    #[error("user store error: {0}")]
    Internal(String),
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn denial_kinds_are_classified() {
        let denials = [
            SocialAuthnError::NoSuchConnection {
                provider_id: "twitter".to_owned(),
                provider_user_id: "u3".to_owned(),
            },
            SocialAuthnError::AmbiguousConnection {
                provider_id: "twitter".to_owned(),
                provider_user_id: "u2".to_owned(),
                candidates: 2,
            },
            SocialAuthnError::ProfileMissing {
                user_id: "carol".to_owned(),
            },
        ];
        for denial in &denials {
            assert!(denial.is_authentication_denied(), "{denial}");
        }

        let internal = SocialAuthnError::Internal("db down".to_owned());
        assert!(!internal.is_authentication_denied());
    }

    #[test]
    fn ambiguous_message_reports_candidate_count() {
        let err = SocialAuthnError::AmbiguousConnection {
            provider_id: "twitter".to_owned(),
            provider_user_id: "u2".to_owned(),
            candidates: 2,
        };
        assert_eq!(
            err.to_string(),
            "connection twitter:u2 is linked to 2 local users"
        );
    }
}
