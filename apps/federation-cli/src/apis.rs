//! Built-in API marker types and their connection factories.

use std::sync::Arc;

use connect::{AuthProtocol, ProviderConnectionFactory};
use connect_sdk::ConnectionFactory;
use serde::Deserialize;

pub struct TwitterApi;
pub struct FacebookApi;
pub struct GitHubApi;
pub struct GoogleApi;

/// API a configured provider targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KnownApi {
    Twitter,
    Facebook,
    GitHub,
    Google,
}

impl KnownApi {
    /// Protocol used when the provider entry does not name one.
    #[must_use]
    pub fn default_protocol(self) -> AuthProtocol {
        match self {
            Self::Twitter => AuthProtocol::OAuth1,
            Self::Facebook | Self::GitHub | Self::Google => AuthProtocol::OAuth2,
        }
    }

    #[must_use]
    pub fn connection_factory(
        self,
        provider_id: &str,
        protocol: AuthProtocol,
    ) -> Arc<dyn ConnectionFactory> {
        match self {
            Self::Twitter => factory::<TwitterApi>(provider_id, protocol),
            Self::Facebook => factory::<FacebookApi>(provider_id, protocol),
            Self::GitHub => factory::<GitHubApi>(provider_id, protocol),
            Self::Google => factory::<GoogleApi>(provider_id, protocol),
        }
    }
}

fn factory<A: 'static>(provider_id: &str, protocol: AuthProtocol) -> Arc<dyn ConnectionFactory> {
    Arc::new(ProviderConnectionFactory::<A>::new(provider_id, protocol))
}
