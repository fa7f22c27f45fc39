//! Social `AuthN` Module
//!
//! Resolves an externally verified connection to exactly one local user and
//! loads that user's profile. Candidate user ids come from a
//! [`connect_sdk::UsersConnectionRepository`], profiles from a
//! [`social_authn_sdk::SocialUserDetailsService`].
//!
//! Provides [`SocialAuthenticationProvider`], an implementation of
//! [`social_authn_sdk::AuthenticationProvider`] that hosts can hold next to
//! other providers.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod domain;

pub use domain::{DomainError, Service, SocialAuthenticationProvider};
