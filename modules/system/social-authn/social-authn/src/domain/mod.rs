//! Domain layer for social authentication.

pub mod error;
pub mod provider;
pub mod service;

pub use error::DomainError;
pub use provider::SocialAuthenticationProvider;
pub use service::Service;
