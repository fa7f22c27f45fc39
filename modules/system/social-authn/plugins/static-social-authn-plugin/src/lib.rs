#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static Social `AuthN` Plugin
//!
//! In-memory connection repository and user store built from configuration.
//! Serves development, tests and the command-line host.
//!
//! ## Configuration
//!
//! ```yaml
//! static_plugin:
//!   connections:
//!     - provider_id: twitter
//!       provider_user_id: "u1"
//!       user_ids: ["alice"]
//!   users:
//!     - user_id: alice
//!       username: Alice
//!       authorities: ["ROLE_USER"]
//! ```

pub mod config;
pub mod domain;

pub use config::StaticSocialAuthnPluginConfig;
pub use domain::Service;
