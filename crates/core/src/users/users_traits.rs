//! User repository and service traits.
//!
//! These traits define the contract for user operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::users_model::{NewUser, User};
use crate::errors::Result;

/// Trait defining the contract for User repository operations.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    /// Retrieves a user by id.
    fn get_by_id(&self, user_id: &str) -> Result<User>;

    /// Looks a user up by e-mail address. Returns `None` when no user is
    /// registered under that address.
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Inserts a new user record.
    async fn create(&self, new_user: NewUser) -> Result<User>;
}

/// Trait defining the contract for User service operations.
///
/// Deliberately narrow: the API exposes no list, no lookup by id, and no
/// update/delete for identities.
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    /// Registers a new user, rejecting duplicate e-mail addresses.
    async fn register_user(&self, new_user: NewUser) -> Result<User>;

    /// Retrieves a user by id (used for self-lookup and token resolution).
    fn get_user(&self, user_id: &str) -> Result<User>;

    /// Looks a user up by e-mail address (used by the login flow).
    fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
}
