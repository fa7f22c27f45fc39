//! Public API trait for authentication providers.
//!
//! A host may hold several providers and try them in sequence; each one
//! declares which token kinds it handles through [`AuthenticationProvider::supports`].

use async_trait::async_trait;

use crate::error::SocialAuthnError;
use crate::models::{AuthenticationToken, SocialAuthenticationToken, TokenKind};

/// Public API trait for authentication providers.
///
/// ```ignore
/// for provider in &providers {
///     if !provider.supports(token.kind()) {
///         continue;
///     }
///     if let Some(authenticated) = provider.authenticate(token.clone()).await? {
///         return Ok(authenticated);
///     }
/// }
/// ```
#[async_trait]
pub trait AuthenticationProvider: Send + Sync {
    /// Whether this provider handles tokens of `kind`.
    fn supports(&self, kind: TokenKind) -> bool;

    /// Authenticate `token`.
    ///
    /// Returns `Ok(None)` when the token kind is not handled by this provider.
    ///
    /// # Errors
    ///
    /// - `NoSuchConnection` if no local user is connected
    /// - `AmbiguousConnection` if several local users are connected
    /// - `ProfileMissing` if the connected user's profile cannot be loaded
    /// - `Internal` if a collaborator fails
    async fn authenticate(
        &self,
        token: AuthenticationToken,
    ) -> Result<Option<SocialAuthenticationToken>, SocialAuthnError>;
}
