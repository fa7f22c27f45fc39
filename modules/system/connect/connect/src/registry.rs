//! Dual-keyed registry of connection factories.

use std::collections::HashMap;
use std::sync::Arc;

use connect_sdk::{
    ApiType, ConnectError, ConnectionFactory, ConnectionFactoryLocator, RegistrationKey,
};
use tracing::debug;

/// Registry of connection factories keyed by provider id and by API type.
///
/// Both indices always point at the same `Arc` for a given factory, and no
/// two factories share a provider id or an API type. Registration takes
/// `&mut self`, so it cannot race with lookups once the registry is shared.
#[derive(Debug, Default)]
pub struct ConnectionFactoryRegistry {
    by_provider_id: HashMap<String, Arc<dyn ConnectionFactory>>,
    by_api_type: HashMap<ApiType, Arc<dyn ConnectionFactory>>,
}

impl ConnectionFactoryRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a set of factories.
    ///
    /// # Errors
    ///
    /// - `DuplicateRegistration` on the first colliding factory; no
    ///   registry is returned in that case
    pub fn with_factories<I>(factories: I) -> Result<Self, ConnectError>
    where
        I: IntoIterator<Item = Arc<dyn ConnectionFactory>>,
    {
        let mut registry = Self::new();
        for factory in factories {
            registry.add_connection_factory(factory)?;
        }
        Ok(registry)
    }

    /// Register a factory under its provider id and its API type.
    ///
    /// Both keys are checked before either index is touched, so a failed
    /// call leaves the registry unchanged.
    ///
    /// # Errors
    ///
    /// - `DuplicateRegistration` if the provider id or the API type is taken
    #[tracing::instrument(
        skip_all,
        fields(provider_id = %factory.provider_id(), api_type = %factory.api_type())
    )]
    pub fn add_connection_factory(
        &mut self,
        factory: Arc<dyn ConnectionFactory>,
    ) -> Result<(), ConnectError> {
        let provider_id = factory.provider_id().to_owned();
        let api_type = factory.api_type();

        if self.by_provider_id.contains_key(&provider_id) {
            return Err(ConnectError::DuplicateRegistration {
                key: RegistrationKey::ProviderId(provider_id),
            });
        }
        if self.by_api_type.contains_key(&api_type) {
            return Err(ConnectError::DuplicateRegistration {
                key: RegistrationKey::ApiType(api_type.name()),
            });
        }

        self.by_api_type.insert(api_type, Arc::clone(&factory));
        self.by_provider_id.insert(provider_id, factory);
        debug!(
            registered = self.by_provider_id.len(),
            "Registered connection factory"
        );
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_provider_id.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_provider_id.is_empty()
    }
}

impl ConnectionFactoryLocator for ConnectionFactoryRegistry {
    fn get_connection_factory(
        &self,
        provider_id: &str,
    ) -> Result<Arc<dyn ConnectionFactory>, ConnectError> {
        self.by_provider_id
            .get(provider_id)
            .cloned()
            .ok_or_else(|| ConnectError::provider_not_found(provider_id))
    }

    fn get_connection_factory_by_api(
        &self,
        api_type: ApiType,
    ) -> Result<Arc<dyn ConnectionFactory>, ConnectError> {
        self.by_api_type
            .get(&api_type)
            .cloned()
            .ok_or(ConnectError::NotFound {
                key: RegistrationKey::ApiType(api_type.name()),
            })
    }

    fn registered_provider_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.by_provider_id.keys().cloned().collect();
        ids.sort_unstable();
        ids
    }
}
