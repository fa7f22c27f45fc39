//! `providers` and `authenticate` command implementations.

use std::sync::Arc;

use connect::ConnectionFactoryRegistry;
use connect_sdk::{ConnectError, ConnectionData, ConnectionFactoryLocator};
use social_authn::SocialAuthenticationProvider;
use social_authn_sdk::{
    AuthenticationProvider, AuthenticationToken, SocialAuthenticationToken, SocialAuthnError,
};
use static_social_authn_plugin::Service as StaticPlugin;

use crate::config::AppConfig;

/// Exit code for a denied sign-in with no connected local user.
pub const EXIT_NO_SUCH_CONNECTION: u8 = 2;
/// Exit code for a denied sign-in with several connected local users.
pub const EXIT_AMBIGUOUS: u8 = 3;
/// Exit code for a denied sign-in whose local user has no profile.
pub const EXIT_PROFILE_MISSING: u8 = 4;

/// Register one factory per configured provider.
///
/// # Errors
///
/// Returns `DuplicateRegistration` if two providers share an id or an API.
pub fn build_registry(cfg: &AppConfig) -> Result<ConnectionFactoryRegistry, ConnectError> {
    ConnectionFactoryRegistry::with_factories(
        cfg.providers
            .iter()
            .map(|p| p.api.connection_factory(&p.id, p.protocol())),
    )
}

/// Sorted `id  api  protocol` lines for every registered provider.
///
/// # Errors
///
/// Returns an error if the registry cannot be built.
pub fn providers(cfg: &AppConfig) -> anyhow::Result<Vec<String>> {
    let registry = build_registry(cfg)?;

    let mut lines = Vec::with_capacity(registry.len());
    for id in registry.registered_provider_ids() {
        let factory = registry.get_connection_factory(&id)?;
        let protocol = cfg
            .providers
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.protocol().to_string())
            .unwrap_or_default();
        lines.push(format!("{id}\t{}\t{protocol}", factory.api_type()));
    }
    Ok(lines)
}

/// Arguments of the `authenticate` command.
#[derive(Debug, Clone)]
pub struct SignIn {
    pub provider_id: String,
    pub provider_user_id: String,
    pub access_token: String,
    pub secret: Option<String>,
}

/// Build the connection for `sign_in` and run it through the resolver.
///
/// The outer error covers configuration and connection-creation problems;
/// the inner result is the authentication outcome.
///
/// # Errors
///
/// Returns an error if the registry cannot be built, the provider is not
/// registered, or the connection data is rejected by the factory.
pub async fn authenticate(
    cfg: &AppConfig,
    sign_in: SignIn,
) -> anyhow::Result<Result<SocialAuthenticationToken, SocialAuthnError>> {
    let registry = build_registry(cfg)?;
    let factory = registry.get_connection_factory(&sign_in.provider_id)?;

    let mut data = ConnectionData::builder(sign_in.provider_id, sign_in.access_token)
        .provider_user_id(sign_in.provider_user_id);
    if let Some(secret) = sign_in.secret {
        data = data.secret(secret);
    }
    let connection = factory.create_connection(data.build())?;

    let plugin = Arc::new(StaticPlugin::from_config(&cfg.static_plugin));
    let provider = SocialAuthenticationProvider::from_collaborators(plugin.clone(), plugin);

    let token = AuthenticationToken::from(SocialAuthenticationToken::new(connection));
    match provider.authenticate(token).await {
        Ok(Some(authenticated)) => Ok(Ok(authenticated)),
        Ok(None) => anyhow::bail!("social token was not handled"),
        Err(e) => Ok(Err(e)),
    }
}

/// Process exit code for a failed authentication.
#[must_use]
pub fn exit_code(err: &SocialAuthnError) -> u8 {
    match err {
        SocialAuthnError::NoSuchConnection { .. } => EXIT_NO_SUCH_CONNECTION,
        SocialAuthnError::AmbiguousConnection { .. } => EXIT_AMBIGUOUS,
        SocialAuthnError::ProfileMissing { .. } => EXIT_PROFILE_MISSING,
        SocialAuthnError::Internal(_) => 1,
    }
}
