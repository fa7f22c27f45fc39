//! Plugin API trait for local user stores.
//!
//! User stores implement this trait so the social authentication provider
//! can load the profile of a resolved local user.

use async_trait::async_trait;

use crate::error::UserDetailsError;
use crate::models::SocialUserDetails;

/// Loads local account profiles by user id.
#[async_trait]
pub trait SocialUserDetailsService: Send + Sync {
    /// Load the profile of `user_id`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no such user exists
    /// - `Internal` if the store cannot answer
    async fn load_user_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<SocialUserDetails, UserDetailsError>;
}
