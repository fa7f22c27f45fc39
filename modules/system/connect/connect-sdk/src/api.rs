//! Public lookup API over registered connection factories.

use std::sync::Arc;

use crate::error::ConnectError;
use crate::factory::ConnectionFactory;
use crate::models::ApiType;

/// Resolves the connection factory for a provider.
///
/// Implemented by the registry in the connect module; consumers that only
/// need lookups should depend on this trait:
///
/// ```ignore
/// let factory = locator.get_connection_factory("twitter")?;
/// let same = locator.get_connection_factory_by_api(ApiType::of::<TwitterApi>())?;
/// assert!(Arc::ptr_eq(&factory, &same));
/// ```
pub trait ConnectionFactoryLocator: Send + Sync {
    /// Look up a factory by provider id (exact, case-sensitive match).
    ///
    /// # Errors
    ///
    /// - `NotFound` if no factory is registered for `provider_id`
    fn get_connection_factory(
        &self,
        provider_id: &str,
    ) -> Result<Arc<dyn ConnectionFactory>, ConnectError>;

    /// Look up a factory by the native API type it targets.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no factory is registered for `api_type`
    fn get_connection_factory_by_api(
        &self,
        api_type: ApiType,
    ) -> Result<Arc<dyn ConnectionFactory>, ConnectError>;

    /// Registered provider ids, sorted.
    fn registered_provider_ids(&self) -> Vec<String>;

    /// Typed form of [`Self::get_connection_factory_by_api`].
    ///
    /// # Errors
    ///
    /// - `NotFound` if no factory is registered for `A`
    fn get_connection_factory_for<A: ?Sized + 'static>(
        &self,
    ) -> Result<Arc<dyn ConnectionFactory>, ConnectError>
    where
        Self: Sized,
    {
        self.get_connection_factory_by_api(ApiType::of::<A>())
    }
}
