use log::debug;
use std::sync::Arc;

use async_trait::async_trait;

use super::ambitions_model::{Ambition, AmbitionUpdate, NewAmbition};
use super::ambitions_traits::{AmbitionRepositoryTrait, AmbitionServiceTrait};
use crate::errors::{DatabaseError, Result, ValidationError};
use crate::users::User;
use crate::Error;

/// Service for managing ambitions.
pub struct AmbitionService {
    repository: Arc<dyn AmbitionRepositoryTrait>,
}

impl AmbitionService {
    pub fn new(repository: Arc<dyn AmbitionRepositoryTrait>) -> Self {
        Self { repository }
    }

    /// Resolves an ambition the given user is allowed to touch. A foreign or
    /// unknown id is reported the same way, as not found.
    fn find_owned(&self, user: &User, ambition_id: &str) -> Result<Ambition> {
        self.repository
            .find_by_id(ambition_id)?
            .filter(|ambition| user.can_access(&ambition.user_id))
            .ok_or_else(|| {
                Error::Database(DatabaseError::NotFound(
                    "the ambition does not exist".to_string(),
                ))
            })
    }
}

#[async_trait]
impl AmbitionServiceTrait for AmbitionService {
    fn get_ambitions(&self, user_id: &str) -> Result<Vec<Ambition>> {
        self.repository.list_by_user(user_id)
    }

    async fn create_ambition(&self, new_ambition: NewAmbition) -> Result<Ambition> {
        new_ambition.validate()?;
        debug!(
            "Creating ambition {:?} for user {}",
            new_ambition.course, new_ambition.user_id
        );
        self.repository.create(new_ambition).await
    }

    async fn update_ambition(&self, user: &User, update: AmbitionUpdate) -> Result<Ambition> {
        update.validate()?;
        let ambition_id = update.id.as_deref().ok_or_else(|| {
            Error::Validation(ValidationError::MissingField("id".to_string()))
        })?;
        let existing = self.find_owned(user, ambition_id)?;
        self.repository.update(update.apply_to(existing)).await
    }

    async fn delete_ambition(&self, user: &User, ambition_id: &str) -> Result<()> {
        let existing = self.find_owned(user, ambition_id)?;
        self.repository.delete(&existing.id).await?;
        Ok(())
    }
}
