#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Sign-in through a registered Twitter factory backed by the static plugin.

use std::sync::Arc;

use connect::{ConnectionFactoryRegistry, ProviderConnectionFactory};
use connect_sdk::{Connection, ConnectionData, ConnectionFactoryLocator};
use social_authn::SocialAuthenticationProvider;
use social_authn_sdk::{
    AuthenticationProvider, AuthenticationToken, SocialAuthenticationToken, SocialAuthnError,
};
use static_social_authn_plugin::{Service as StaticPlugin, StaticSocialAuthnPluginConfig};

struct TwitterApi;

fn registry() -> ConnectionFactoryRegistry {
    let mut registry = ConnectionFactoryRegistry::new();
    let twitter = ProviderConnectionFactory::<TwitterApi>::oauth1("twitter");
    registry.add_connection_factory(Arc::new(twitter)).unwrap();
    registry
}

fn provider() -> SocialAuthenticationProvider {
    let cfg: StaticSocialAuthnPluginConfig = serde_json::from_value(serde_json::json!({
        "connections": [
            { "provider_id": "twitter", "provider_user_id": "u1", "user_ids": ["alice"] },
            { "provider_id": "twitter", "provider_user_id": "u2", "user_ids": ["alice", "bob"] },
            { "provider_id": "twitter", "provider_user_id": "u3", "user_ids": [] },
            { "provider_id": "twitter", "provider_user_id": "u4", "user_ids": ["carol"] }
        ],
        "users": [
            { "user_id": "alice", "username": "Alice", "authorities": ["ROLE_USER"] }
        ]
    }))
    .unwrap();
    let plugin = Arc::new(StaticPlugin::from_config(&cfg));
    SocialAuthenticationProvider::from_collaborators(plugin.clone(), plugin)
}

fn twitter_connection(registry: &ConnectionFactoryRegistry, user_id: &str) -> Connection {
    let data = ConnectionData::builder("twitter", "access".to_owned())
        .provider_user_id(user_id)
        .secret("secret".to_owned())
        .display_name("@someone")
        .build();
    registry
        .get_connection_factory_for::<TwitterApi>()
        .unwrap()
        .create_connection(data)
        .unwrap()
}

async fn sign_in(
    provider_user_id: &str,
) -> Result<Option<SocialAuthenticationToken>, SocialAuthnError> {
    let registry = registry();
    let connection = twitter_connection(&registry, provider_user_id);
    let token = SocialAuthenticationToken::new(connection);
    provider().authenticate(token.into()).await
}

#[tokio::test]
async fn single_connected_user_signs_in() {
    let authenticated = sign_in("u1").await.unwrap().expect("social token handled");

    let principal = authenticated.principal().unwrap();
    assert_eq!(principal.user_id, "alice");
    assert_eq!(authenticated.name(), Some("Alice"));
    assert_eq!(authenticated.authorities(), &["ROLE_USER"]);
    assert_eq!(authenticated.provider_id(), "twitter");
    assert_eq!(authenticated.connection().provider_user_id(), "u1");
    assert_eq!(authenticated.connection().display_name(), Some("@someone"));
}

#[tokio::test]
async fn shared_account_is_ambiguous() {
    let err = sign_in("u2").await.unwrap_err();
    assert!(err.is_authentication_denied());
    assert!(
        matches!(err, SocialAuthnError::AmbiguousConnection { candidates: 2, .. }),
        "unexpected: {err:?}"
    );
}

#[tokio::test]
async fn unconnected_account_is_rejected() {
    let err = sign_in("u3").await.unwrap_err();
    match err {
        SocialAuthnError::NoSuchConnection {
            provider_id,
            provider_user_id,
        } => {
            assert_eq!(provider_id, "twitter");
            assert_eq!(provider_user_id, "u3");
        }
        other => panic!("Expected NoSuchConnection, got: {other:?}"),
    }
}

#[tokio::test]
async fn account_without_profile_is_rejected() {
    let err = sign_in("u4").await.unwrap_err();
    assert!(
        matches!(&err, SocialAuthnError::ProfileMissing { user_id } if user_id == "carol"),
        "unexpected: {err:?}"
    );
}

#[tokio::test]
async fn to_user_id_matches_authentication_outcome() {
    let registry = registry();
    let provider = provider();

    assert_eq!(
        provider
            .to_user_id(&twitter_connection(&registry, "u1"))
            .await
            .unwrap(),
        Some("alice".to_owned())
    );
    assert_eq!(
        provider
            .to_user_id(&twitter_connection(&registry, "u2"))
            .await
            .unwrap(),
        None
    );
}

#[tokio::test]
async fn providers_are_tried_in_sequence() {
    let registry = registry();
    let providers: Vec<Arc<dyn AuthenticationProvider>> = vec![Arc::new(provider())];
    let connection = twitter_connection(&registry, "u1");
    let token = AuthenticationToken::from(SocialAuthenticationToken::new(connection));

    let mut authenticated = None;
    for provider in &providers {
        if !provider.supports(token.kind()) {
            continue;
        }
        if let Some(result) = provider.authenticate(token.clone()).await.unwrap() {
            authenticated = Some(result);
            break;
        }
    }

    assert_eq!(authenticated.unwrap().name(), Some("Alice"));
}
