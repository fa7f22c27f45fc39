//! [`AuthenticationProvider`] backed by the social authentication service.

use std::sync::Arc;

use async_trait::async_trait;
use connect_sdk::{Connection, UsersConnectionRepository};
use social_authn_sdk::{
    AuthenticationProvider, AuthenticationToken, SocialAuthenticationToken, SocialAuthnError,
    SocialUserDetailsService, TokenKind,
};

use super::Service;

/// Authenticates social tokens; every other token kind is declined.
pub struct SocialAuthenticationProvider {
    svc: Arc<Service>,
}

impl SocialAuthenticationProvider {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }

    #[must_use]
    pub fn from_collaborators(
        repository: Arc<dyn UsersConnectionRepository>,
        user_details: Arc<dyn SocialUserDetailsService>,
    ) -> Self {
        Self::new(Arc::new(Service::new(repository, user_details)))
    }

    /// Local user id for `connection`, `None` unless exactly one user is connected.
    ///
    /// # Errors
    ///
    /// Returns `Internal` if the connection repository fails.
    pub async fn to_user_id(
        &self,
        connection: &Connection,
    ) -> Result<Option<String>, SocialAuthnError> {
        self.svc
            .to_user_id(connection)
            .await
            .map_err(SocialAuthnError::from)
    }
}

#[async_trait]
impl AuthenticationProvider for SocialAuthenticationProvider {
    fn supports(&self, kind: TokenKind) -> bool {
        kind == TokenKind::Social
    }

    async fn authenticate(
        &self,
        token: AuthenticationToken,
    ) -> Result<Option<SocialAuthenticationToken>, SocialAuthnError> {
        let AuthenticationToken::Social(token) = token else {
            return Ok(None);
        };

        self.svc
            .authenticate(&token)
            .await
            .map(Some)
            .map_err(SocialAuthnError::from)
    }
}
