//! Connect Module
//!
//! Central directory of connection factories. Translates either a provider
//! id or a native API type into the one factory able to produce connections
//! for that provider.
//!
//! The registry is populated once at startup and shared read-only afterwards:
//!
//! ```ignore
//! let mut registry = ConnectionFactoryRegistry::new();
//! registry.add_connection_factory(Arc::new(ProviderConnectionFactory::<TwitterApi>::oauth1("twitter")))?;
//! let registry = Arc::new(registry);
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod factory;
pub mod registry;

pub use factory::{AuthProtocol, ProviderConnectionFactory};
pub use registry::ConnectionFactoryRegistry;
