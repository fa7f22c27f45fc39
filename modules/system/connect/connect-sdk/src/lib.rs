//! Connect SDK
//!
//! This crate provides the public API for the connect module:
//!
//! - [`Connection`] / [`ConnectionData`] - An externally authenticated identity
//! - [`ApiType`] - Type tag for the native API a connection targets
//! - [`ConnectionFactory`] - Per-provider factory trait
//! - [`ConnectionFactoryLocator`] - Lookup API over registered factories
//! - [`UsersConnectionRepository`] - Connection-to-local-user mapping
//! - [`ConnectError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use connect_sdk::ConnectionFactoryLocator;
//!
//! let factory = locator.get_connection_factory("twitter")?;
//! let connection = factory.create_connection(data)?;
//! let user_ids = repository.find_user_ids_with_connection(&connection).await?;
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod error;
pub mod factory;
pub mod models;
pub mod plugin_api;

pub use api::ConnectionFactoryLocator;
pub use error::{ConnectError, RegistrationKey};
pub use factory::ConnectionFactory;
pub use models::{ApiType, Connection, ConnectionData, ConnectionKey, ProviderAccountData};
pub use plugin_api::UsersConnectionRepository;
