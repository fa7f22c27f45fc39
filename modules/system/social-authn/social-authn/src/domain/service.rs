//! Domain service for social authentication.

use std::collections::BTreeSet;
use std::sync::Arc;

use connect_sdk::{Connection, UsersConnectionRepository};
use social_authn_sdk::{
    SocialAuthenticationToken, SocialUserDetails, SocialUserDetailsService, UserDetailsError,
};
use tracing::debug;

use super::error::DomainError;

/// Social authentication service.
///
/// Holds only its collaborators; every call is independent.
pub struct Service {
    repository: Arc<dyn UsersConnectionRepository>,
    user_details: Arc<dyn SocialUserDetailsService>,
}

impl Service {
    #[must_use]
    pub fn new(
        repository: Arc<dyn UsersConnectionRepository>,
        user_details: Arc<dyn SocialUserDetailsService>,
    ) -> Self {
        Self {
            repository,
            user_details,
        }
    }

    /// Resolve the single local user connected to `connection`.
    ///
    /// Candidates are treated as a set, so duplicates collapse.
    ///
    /// # Errors
    ///
    /// - `NoSuchConnection` for zero candidates
    /// - `AmbiguousConnection` for more than one candidate
    /// - `Repository` if the repository fails
    #[tracing::instrument(
        skip_all,
        fields(
            provider_id = %connection.provider_id(),
            provider_user_id = %connection.provider_user_id(),
        )
    )]
    pub async fn resolve_user_id(&self, connection: &Connection) -> Result<String, DomainError> {
        let mut candidates: BTreeSet<String> = self
            .repository
            .find_user_ids_with_connection(connection)
            .await?
            .into_iter()
            .collect();

        if candidates.len() > 1 {
            return Err(DomainError::AmbiguousConnection {
                provider_id: connection.provider_id().to_owned(),
                provider_user_id: connection.provider_user_id().to_owned(),
                candidates: candidates.len(),
            });
        }

        candidates
            .pop_first()
            .ok_or_else(|| DomainError::NoSuchConnection {
                provider_id: connection.provider_id().to_owned(),
                provider_user_id: connection.provider_user_id().to_owned(),
            })
    }

    /// Local user id for `connection`, or `None` unless exactly one is connected.
    ///
    /// # Errors
    ///
    /// Returns `Repository` if the repository fails.
    pub async fn to_user_id(&self, connection: &Connection) -> Result<Option<String>, DomainError> {
        match self.resolve_user_id(connection).await {
            Ok(user_id) => Ok(Some(user_id)),
            Err(DomainError::NoSuchConnection { .. } | DomainError::AmbiguousConnection { .. }) => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Load the profile of `user_id`.
    ///
    /// # Errors
    ///
    /// - `ProfileMissing` if the user store has no such user
    /// - `UserStore` if the user store fails
    pub async fn load_profile(&self, user_id: &str) -> Result<SocialUserDetails, DomainError> {
        self.user_details
            .load_user_by_user_id(user_id)
            .await
            .map_err(|e| match e {
                UserDetailsError::NotFound { user_id } => DomainError::ProfileMissing { user_id },
                UserDetailsError::Internal(msg) => DomainError::UserStore(msg),
            })
    }

    /// Authenticate an unauthenticated social token.
    ///
    /// The returned token carries the input connection and provider account
    /// data unchanged, with the loaded profile as principal.
    ///
    /// # Errors
    ///
    /// Any error from [`Self::resolve_user_id`] or [`Self::load_profile`].
    pub async fn authenticate(
        &self,
        token: &SocialAuthenticationToken,
    ) -> Result<SocialAuthenticationToken, DomainError> {
        let user_id = self.resolve_user_id(token.connection()).await?;
        let profile = self.load_profile(&user_id).await?;

        debug!(
            provider_id = %token.provider_id(),
            user_id = %profile.user_id,
            "Resolved social connection to local user"
        );

        Ok(SocialAuthenticationToken::authenticated(
            token.connection().clone(),
            token.provider_account_data().clone(),
            profile,
        ))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use connect_sdk::{ApiType, ConnectError, ConnectionData, ConnectionKey};
    use tracing_test::traced_test;

    use super::*;

    struct TwitterApi;

    #[derive(Default)]
    struct MockRepository {
        links: HashMap<(String, String), Vec<String>>,
        unavailable: bool,
    }

    impl MockRepository {
        fn link(mut self, provider_user_id: &str, user_ids: &[&str]) -> Self {
            self.links.insert(
                ("twitter".to_owned(), provider_user_id.to_owned()),
                user_ids.iter().map(|&id| id.to_owned()).collect(),
            );
            self
        }
    }

    #[async_trait]
    impl UsersConnectionRepository for MockRepository {
        async fn find_user_ids_with_connection(
            &self,
            connection: &Connection,
        ) -> Result<Vec<String>, ConnectError> {
            if self.unavailable {
                return Err(ConnectError::Repository("connection refused".to_owned()));
            }
            let key = (
                connection.provider_id().to_owned(),
                connection.provider_user_id().to_owned(),
            );
            Ok(self.links.get(&key).cloned().unwrap_or_default())
        }

        async fn find_user_ids_connected_to(
            &self,
            _provider_id: &str,
            _provider_user_ids: &[String],
        ) -> Result<BTreeSet<String>, ConnectError> {
            Ok(BTreeSet::new())
        }
    }

    #[derive(Default)]
    struct MockUsers {
        users: HashMap<String, SocialUserDetails>,
        unavailable: bool,
    }

    impl MockUsers {
        fn with(mut self, user_id: &str) -> Self {
            let mut details = SocialUserDetails::new(user_id, user_id.to_uppercase());
            details.authorities = vec!["ROLE_USER".to_owned()];
            self.users.insert(user_id.to_owned(), details);
            self
        }
    }

    #[async_trait]
    impl SocialUserDetailsService for MockUsers {
        async fn load_user_by_user_id(
            &self,
            user_id: &str,
        ) -> Result<SocialUserDetails, UserDetailsError> {
            if self.unavailable {
                return Err(UserDetailsError::Internal("timeout".to_owned()));
            }
            self.users
                .get(user_id)
                .cloned()
                .ok_or_else(|| UserDetailsError::NotFound {
                    user_id: user_id.to_owned(),
                })
        }
    }

    fn service(repository: MockRepository, users: MockUsers) -> Service {
        Service::new(Arc::new(repository), Arc::new(users))
    }

    fn twitter_connection(provider_user_id: &str) -> Connection {
        let data = ConnectionData::builder("twitter", "token".to_owned())
            .provider_user_id(provider_user_id)
            .secret("secret".to_owned())
            .build();
        Connection::new(
            ConnectionKey::new("twitter", provider_user_id),
            ApiType::of::<TwitterApi>(),
            data,
        )
    }

    #[tokio::test]
    async fn single_candidate_resolves() {
        let svc = service(
            MockRepository::default().link("u1", &["alice"]),
            MockUsers::default(),
        );
        let connection = twitter_connection("u1");

        let user_id = svc.resolve_user_id(&connection).await.unwrap();
        assert_eq!(user_id, "alice");
    }

    #[tokio::test]
    async fn duplicate_candidates_collapse() {
        let svc = service(
            MockRepository::default().link("u1", &["alice", "alice"]),
            MockUsers::default(),
        );
        let connection = twitter_connection("u1");

        let user_id = svc.resolve_user_id(&connection).await.unwrap();
        assert_eq!(user_id, "alice");
    }

    #[tokio::test]
    async fn zero_candidates_is_no_such_connection() {
        let svc = service(MockRepository::default(), MockUsers::default());

        let err = svc
            .resolve_user_id(&twitter_connection("u3"))
            .await
            .unwrap_err();
        match err {
            DomainError::NoSuchConnection {
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
    async fn several_candidates_is_ambiguous() {
        let repository = MockRepository::default();
        let svc = service(
            repository.link("u2", &["bob", "alice", "bob"]),
            MockUsers::default(),
        );

        let err = svc
            .resolve_user_id(&twitter_connection("u2"))
            .await
            .unwrap_err();
        assert!(
            matches!(err, DomainError::AmbiguousConnection { candidates: 2, .. }),
            "unexpected: {err:?}"
        );
    }

    #[tokio::test]
    async fn repository_failure_is_not_a_denial() {
        let repository = MockRepository {
            unavailable: true,
            ..MockRepository::default()
        };
        let svc = service(repository, MockUsers::default());

        let connection = twitter_connection("u1");

        let err = svc.to_user_id(&connection).await.unwrap_err();
        assert!(
            matches!(err, DomainError::Repository(_)),
            "unexpected: {err:?}"
        );
    }

    #[tokio::test]
    async fn to_user_id_is_some_only_for_one_candidate() {
        let svc = service(
            MockRepository::default()
                .link("u1", &["alice"])
                .link("u2", &["alice", "bob"]),
            MockUsers::default(),
        );

        assert_eq!(
            svc.to_user_id(&twitter_connection("u1")).await.unwrap(),
            Some("alice".to_owned())
        );
        for unresolved in ["u2", "u3"] {
            let connection = twitter_connection(unresolved);
            assert_eq!(svc.to_user_id(&connection).await.unwrap(), None);
        }
    }

    #[tokio::test]
    async fn missing_profile_is_reported_with_user_id() {
        let svc = service(
            MockRepository::default().link("u1", &["carol"]),
            MockUsers::default().with("alice"),
        );
        let token = SocialAuthenticationToken::new(twitter_connection("u1"));

        let err = svc.authenticate(&token).await.unwrap_err();
        match err {
            DomainError::ProfileMissing { user_id } => assert_eq!(user_id, "carol"),
            other => panic!("Expected ProfileMissing, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn user_store_failure_is_not_a_denial() {
        let users = MockUsers {
            unavailable: true,
            ..MockUsers::default()
        };
        let svc = service(MockRepository::default().link("u1", &["alice"]), users);
        let token = SocialAuthenticationToken::new(twitter_connection("u1"));

        let err = svc.authenticate(&token).await.unwrap_err();
        assert!(
            matches!(err, DomainError::UserStore(_)),
            "unexpected: {err:?}"
        );
    }

    #[tokio::test]
    #[traced_test]
    async fn authenticate_carries_connection_and_account_data() {
        let svc = service(
            MockRepository::default().link("u1", &["alice"]),
            MockUsers::default().with("alice"),
        );
        let mut account = connect_sdk::ProviderAccountData::new();
        account.insert("screen_name".to_owned(), serde_json::json!("al1ce"));
        let connection = twitter_connection("u1");
        let token = SocialAuthenticationToken::new(connection.clone())
            .with_provider_account_data(account.clone());

        let authenticated = svc.authenticate(&token).await.unwrap();

        assert!(authenticated.is_authenticated());
        assert_eq!(authenticated.connection(), &connection);
        assert_eq!(authenticated.provider_id(), "twitter");
        assert_eq!(authenticated.provider_account_data(), &account);
        assert_eq!(authenticated.name(), Some("ALICE"));
        assert_eq!(authenticated.authorities(), &["ROLE_USER"]);
        assert!(logs_contain("Resolved social connection to local user"));
    }
}
