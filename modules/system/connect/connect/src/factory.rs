//! Provider connection factories.
//!
//! A single generic factory covers every provider; the API marker type `A`
//! and the [`AuthProtocol`] are fixed at configuration time.

use std::fmt;
use std::marker::PhantomData;

use connect_sdk::{
    ApiType, ConnectError, Connection, ConnectionData, ConnectionFactory, ConnectionKey,
};
use serde::Deserialize;

/// OAuth protocol generation a provider speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum AuthProtocol {
    /// Token + token secret (e.g. Twitter).
    #[serde(rename = "oauth1")]
    OAuth1,
    /// Bearer access token, optional refresh token.
    #[serde(rename = "oauth2")]
    OAuth2,
}

impl fmt::Display for AuthProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OAuth1 => f.write_str("oauth1"),
            Self::OAuth2 => f.write_str("oauth2"),
        }
    }
}

/// Connection factory for provider `provider_id` targeting API type `A`.
pub struct ProviderConnectionFactory<A: ?Sized> {
    provider_id: String,
    protocol: AuthProtocol,
    _api: PhantomData<fn(&A)>,
}

impl<A: ?Sized + 'static> ProviderConnectionFactory<A> {
    #[must_use]
    pub fn new(provider_id: impl Into<String>, protocol: AuthProtocol) -> Self {
        Self {
            provider_id: provider_id.into(),
            protocol,
            _api: PhantomData,
        }
    }

    /// Factory for an OAuth 1.0a provider.
    #[must_use]
    pub fn oauth1(provider_id: impl Into<String>) -> Self {
        Self::new(provider_id, AuthProtocol::OAuth1)
    }

    /// Factory for an OAuth 2 provider.
    #[must_use]
    pub fn oauth2(provider_id: impl Into<String>) -> Self {
        Self::new(provider_id, AuthProtocol::OAuth2)
    }

    #[must_use]
    pub fn protocol(&self) -> AuthProtocol {
        self.protocol
    }
}

impl<A: ?Sized> fmt::Debug for ProviderConnectionFactory<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConnectionFactory")
            .field("provider_id", &self.provider_id)
            .field("protocol", &self.protocol)
            .field("api_type", &std::any::type_name::<A>())
            .finish()
    }
}

impl<A: ?Sized + 'static> ConnectionFactory for ProviderConnectionFactory<A> {
    fn provider_id(&self) -> &str {
        &self.provider_id
    }

    fn api_type(&self) -> ApiType {
        ApiType::of::<A>()
    }

    fn create_connection(&self, data: ConnectionData) -> Result<Connection, ConnectError> {
        if data.provider_id() != self.provider_id {
            return Err(ConnectError::ProviderMismatch {
                expected: self.provider_id.clone(),
                actual: data.provider_id().to_owned(),
            });
        }

        let Some(provider_user_id) = data
            .provider_user_id()
            .filter(|id| !id.is_empty())
            .map(str::to_owned)
        else {
            return Err(ConnectError::invalid_data(format!(
                "provider user id is required for provider '{}'",
                self.provider_id
            )));
        };

        if self.protocol == AuthProtocol::OAuth1 && data.secret().is_none() {
            return Err(ConnectError::invalid_data(format!(
                "oauth1 provider '{}' requires a token secret",
                self.provider_id
            )));
        }

        let key = ConnectionKey::new(self.provider_id.clone(), provider_user_id);
        Ok(Connection::new(key, ApiType::of::<A>(), data))
    }
}
