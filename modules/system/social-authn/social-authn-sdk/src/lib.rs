//! Social `AuthN` SDK
//!
//! This crate provides the public API for the `social_authn` module:
//!
//! - [`AuthenticationProvider`] - Public API trait for consumers
//! - [`SocialUserDetailsService`] - Plugin API trait for user stores
//! - [`AuthenticationToken`] / [`SocialAuthenticationToken`] - Token models
//! - [`SocialUserDetails`] - Loaded local profile
//! - [`SocialAuthnError`] / [`UserDetailsError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use social_authn_sdk::{AuthenticationProvider, AuthenticationToken, SocialAuthenticationToken};
//!
//! let token: AuthenticationToken = SocialAuthenticationToken::new(connection).into();
//! match provider.authenticate(token).await? {
//!     Some(authenticated) => println!("signed in as {}", authenticated.name().unwrap_or_default()),
//!     None => { /* not a social token, try the next provider */ }
//! }
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod error;
pub mod models;
pub mod plugin_api;

pub use api::AuthenticationProvider;
pub use error::{SocialAuthnError, UserDetailsError};
pub use models::{AuthenticationToken, SocialAuthenticationToken, SocialUserDetails, TokenKind};
pub use plugin_api::SocialUserDetailsService;
