//! Domain models for the social `AuthN` module.

use std::fmt;

use connect_sdk::{Connection, ProviderAccountData};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Local account profile loaded for an authenticated connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialUserDetails {
    /// Local user id the connection resolved to.
    pub user_id: String,
    /// Display username of the local account.
    pub username: String,
    /// Granted authorities, e.g. `["ROLE_USER"]`.
    pub authorities: Vec<String>,
    /// Whether the local account is enabled.
    pub enabled: bool,
}

impl SocialUserDetails {
    /// Enabled profile without authorities.
    #[must_use]
    pub fn new(user_id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
            authorities: Vec::new(),
            enabled: true,
        }
    }
}

/// Kind tag of an [`AuthenticationToken`], used by `supports` checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Social,
    UsernamePassword,
    Bearer,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Social => f.write_str("social"),
            Self::UsernamePassword => f.write_str("username_password"),
            Self::Bearer => f.write_str("bearer"),
        }
    }
}

/// Credentials presented to an authentication provider.
#[derive(Debug, Clone)]
pub enum AuthenticationToken {
    /// An externally verified social connection.
    Social(Box<SocialAuthenticationToken>),
    /// Local username and password.
    UsernamePassword {
        username: String,
        password: SecretString,
    },
    /// Raw bearer token.
    Bearer(SecretString),
}

impl AuthenticationToken {
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::Social(_) => TokenKind::Social,
            Self::UsernamePassword { .. } => TokenKind::UsernamePassword,
            Self::Bearer(_) => TokenKind::Bearer,
        }
    }
}

impl From<SocialAuthenticationToken> for AuthenticationToken {
    fn from(token: SocialAuthenticationToken) -> Self {
        Self::Social(Box::new(token))
    }
}

/// Token wrapping a [`Connection`].
///
/// Unauthenticated when built with [`Self::new`]; authenticated tokens
/// carry the loaded [`SocialUserDetails`] as principal together with the
/// original connection and provider account data.
#[derive(Debug, Clone)]
pub struct SocialAuthenticationToken {
    connection: Connection,
    provider_account_data: ProviderAccountData,
    principal: Option<SocialUserDetails>,
}

impl SocialAuthenticationToken {
    /// Unauthenticated token; account data defaults to the connection's own.
    #[must_use]
    pub fn new(connection: Connection) -> Self {
        let provider_account_data = connection.account_data().clone();
        Self {
            connection,
            provider_account_data,
            principal: None,
        }
    }

    /// Replace the provider account data carried by the token.
    #[must_use]
    pub fn with_provider_account_data(mut self, data: ProviderAccountData) -> Self {
        self.provider_account_data = data;
        self
    }

    /// Authenticated token for `principal`.
    #[must_use]
    pub fn authenticated(
        connection: Connection,
        provider_account_data: ProviderAccountData,
        principal: SocialUserDetails,
    ) -> Self {
        Self {
            connection,
            provider_account_data,
            principal: Some(principal),
        }
    }

    #[must_use]
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    #[must_use]
    pub fn provider_id(&self) -> &str {
        self.connection.provider_id()
    }

    #[must_use]
    pub fn provider_account_data(&self) -> &ProviderAccountData {
        &self.provider_account_data
    }

    #[must_use]
    pub fn principal(&self) -> Option<&SocialUserDetails> {
        self.principal.as_ref()
    }

    /// Authorities granted to the principal; empty while unauthenticated.
    #[must_use]
    pub fn authorities(&self) -> &[String] {
        self.principal
            .as_ref()
            .map_or(&[], |p| p.authorities.as_slice())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.principal.is_some()
    }

    /// Username of the principal, if authenticated.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.principal.as_ref().map(|p| p.username.as_str())
    }
}
