use log::debug;
use std::sync::Arc;

use async_trait::async_trait;

use super::users_model::{NewUser, User};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::errors::Result;
use crate::Error;

/// Service for managing user identities.
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn register_user(&self, mut new_user: NewUser) -> Result<User> {
        // E-mail addresses are matched case-insensitively; store them folded.
        new_user.email = new_user.email.trim().to_lowercase();
        debug!("Registering user with e-mail {}", new_user.email);

        if self.repository.find_by_email(&new_user.email)?.is_some() {
            return Err(Error::ConstraintViolation(format!(
                "the e-mail {} is already registered",
                new_user.email
            )));
        }

        self.repository.create(new_user).await
    }

    fn get_user(&self, user_id: &str) -> Result<User> {
        self.repository.get_by_id(user_id)
    }

    fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.repository.find_by_email(&email.trim().to_lowercase())
    }
}
