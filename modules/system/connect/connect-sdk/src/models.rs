//! Domain models for the connect module.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Opaque provider account data carried alongside a connection.
pub type ProviderAccountData = serde_json::Map<String, serde_json::Value>;

/// Identity of an external account: (provider id, provider user id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConnectionKey {
    provider_id: String,
    provider_user_id: String,
}

impl ConnectionKey {
    #[must_use]
    pub fn new(provider_id: impl Into<String>, provider_user_id: impl Into<String>) -> Self {
        Self {
            provider_id: provider_id.into(),
            provider_user_id: provider_user_id.into(),
        }
    }

    #[must_use]
    pub fn provider_id(&self) -> &str {
        &self.provider_id
    }

    #[must_use]
    pub fn provider_user_id(&self) -> &str {
        &self.provider_user_id
    }
}

impl fmt::Display for ConnectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.provider_id, self.provider_user_id)
    }
}

/// Type tag for the native API surface a connection factory targets.
///
/// Two tags are equal when they were built from the same Rust type.
/// The type name is kept for diagnostics only.
#[derive(Clone, Copy)]
pub struct ApiType {
    id: TypeId,
    name: &'static str,
}

impl ApiType {
    /// Tag for the API type `A`.
    #[must_use]
    pub fn of<A: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<A>(),
            name: std::any::type_name::<A>(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ApiType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ApiType {}

impl Hash for ApiType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ApiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiType").field(&self.name).finish()
    }
}

impl fmt::Display for ApiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Persistable form of a connection, as handed over by the OAuth flow.
///
/// Token material is wrapped in `SecretString` so `Debug` redacts it.
#[derive(Debug, Clone)]
pub struct ConnectionData {
    provider_id: String,
    provider_user_id: Option<String>,
    display_name: Option<String>,
    profile_url: Option<String>,
    image_url: Option<String>,
    access_token: SecretString,
    secret: Option<SecretString>,
    refresh_token: Option<SecretString>,
    expire_time: Option<DateTime<Utc>>,
    account_data: ProviderAccountData,
}

impl ConnectionData {
    /// Start building connection data for a provider.
    #[must_use]
    pub fn builder(
        provider_id: impl Into<String>,
        access_token: impl Into<SecretString>,
    ) -> ConnectionDataBuilder {
        ConnectionDataBuilder {
            provider_id: provider_id.into(),
            provider_user_id: None,
            display_name: None,
            profile_url: None,
            image_url: None,
            access_token: access_token.into(),
            secret: None,
            refresh_token: None,
            expire_time: None,
            account_data: ProviderAccountData::new(),
        }
    }

    #[must_use]
    pub fn provider_id(&self) -> &str {
        &self.provider_id
    }

    #[must_use]
    pub fn provider_user_id(&self) -> Option<&str> {
        self.provider_user_id.as_deref()
    }

    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    #[must_use]
    pub fn profile_url(&self) -> Option<&str> {
        self.profile_url.as_deref()
    }

    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    #[must_use]
    pub fn access_token(&self) -> &SecretString {
        &self.access_token
    }

    #[must_use]
    pub fn secret(&self) -> Option<&SecretString> {
        self.secret.as_ref()
    }

    #[must_use]
    pub fn refresh_token(&self) -> Option<&SecretString> {
        self.refresh_token.as_ref()
    }

    #[must_use]
    pub fn expire_time(&self) -> Option<DateTime<Utc>> {
        self.expire_time
    }

    #[must_use]
    pub fn account_data(&self) -> &ProviderAccountData {
        &self.account_data
    }
}

pub struct ConnectionDataBuilder {
    provider_id: String,
    provider_user_id: Option<String>,
    display_name: Option<String>,
    profile_url: Option<String>,
    image_url: Option<String>,
    access_token: SecretString,
    secret: Option<SecretString>,
    refresh_token: Option<SecretString>,
    expire_time: Option<DateTime<Utc>>,
    account_data: ProviderAccountData,
}

impl ConnectionDataBuilder {
    #[must_use]
    pub fn provider_user_id(mut self, provider_user_id: impl Into<String>) -> Self {
        self.provider_user_id = Some(provider_user_id.into());
        self
    }

    #[must_use]
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    #[must_use]
    pub fn profile_url(mut self, profile_url: impl Into<String>) -> Self {
        self.profile_url = Some(profile_url.into());
        self
    }

    #[must_use]
    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    #[must_use]
    pub fn secret(mut self, secret: impl Into<SecretString>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    #[must_use]
    pub fn refresh_token(mut self, refresh_token: impl Into<SecretString>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }

    #[must_use]
    pub fn expire_time(mut self, expire_time: DateTime<Utc>) -> Self {
        self.expire_time = Some(expire_time);
        self
    }

    #[must_use]
    pub fn account_data(mut self, account_data: ProviderAccountData) -> Self {
        self.account_data = account_data;
        self
    }

    #[must_use]
    pub fn build(self) -> ConnectionData {
        ConnectionData {
            provider_id: self.provider_id,
            provider_user_id: self.provider_user_id,
            display_name: self.display_name,
            profile_url: self.profile_url,
            image_url: self.image_url,
            access_token: self.access_token,
            secret: self.secret,
            refresh_token: self.refresh_token,
            expire_time: self.expire_time,
            account_data: self.account_data,
        }
    }
}

/// One externally authenticated identity.
///
/// Created by a [`crate::ConnectionFactory`]; read-only afterwards.
/// Equality compares the [`ConnectionKey`] only.
#[derive(Debug, Clone)]
pub struct Connection {
    key: ConnectionKey,
    api_type: ApiType,
    display_name: Option<String>,
    profile_url: Option<String>,
    image_url: Option<String>,
    access_token: SecretString,
    secret: Option<SecretString>,
    refresh_token: Option<SecretString>,
    expire_time: Option<DateTime<Utc>>,
    account_data: ProviderAccountData,
}

impl Connection {
    /// Bind validated connection data to its key and API type.
    ///
    /// The provider id of `data` is ignored in favour of `key`.
    #[must_use]
    pub fn new(key: ConnectionKey, api_type: ApiType, data: ConnectionData) -> Self {
        Self {
            key,
            api_type,
            display_name: data.display_name,
            profile_url: data.profile_url,
            image_url: data.image_url,
            access_token: data.access_token,
            secret: data.secret,
            refresh_token: data.refresh_token,
            expire_time: data.expire_time,
            account_data: data.account_data,
        }
    }

    #[must_use]
    pub fn key(&self) -> &ConnectionKey {
        &self.key
    }

    #[must_use]
    pub fn provider_id(&self) -> &str {
        self.key.provider_id()
    }

    #[must_use]
    pub fn provider_user_id(&self) -> &str {
        self.key.provider_user_id()
    }

    #[must_use]
    pub fn api_type(&self) -> ApiType {
        self.api_type
    }

    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    #[must_use]
    pub fn profile_url(&self) -> Option<&str> {
        self.profile_url.as_deref()
    }

    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    #[must_use]
    pub fn access_token(&self) -> &SecretString {
        &self.access_token
    }

    #[must_use]
    pub fn secret(&self) -> Option<&SecretString> {
        self.secret.as_ref()
    }

    #[must_use]
    pub fn refresh_token(&self) -> Option<&SecretString> {
        self.refresh_token.as_ref()
    }

    #[must_use]
    pub fn expire_time(&self) -> Option<DateTime<Utc>> {
        self.expire_time
    }

    /// Opaque provider account metadata.
    #[must_use]
    pub fn account_data(&self) -> &ProviderAccountData {
        &self.account_data
    }

    /// Whether the access token has an expire time that is already past.
    #[must_use]
    pub fn has_expired(&self) -> bool {
        self.expire_time.is_some_and(|at| at <= Utc::now())
    }

    /// Snapshot the connection back into its persistable form.
    #[must_use]
    pub fn create_data(&self) -> ConnectionData {
        ConnectionData {
            provider_id: self.key.provider_id.clone(),
            provider_user_id: Some(self.key.provider_user_id.clone()),
            display_name: self.display_name.clone(),
            profile_url: self.profile_url.clone(),
            image_url: self.image_url.clone(),
            access_token: self.access_token.clone(),
            secret: self.secret.clone(),
            refresh_token: self.refresh_token.clone(),
            expire_time: self.expire_time,
            account_data: self.account_data.clone(),
        }
    }
}

impl PartialEq for Connection {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Connection {}
