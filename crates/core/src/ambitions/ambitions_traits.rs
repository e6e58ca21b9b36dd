//! Ambition repository and service traits.

use async_trait::async_trait;

use super::ambitions_model::{Ambition, AmbitionUpdate, NewAmbition};
use crate::errors::Result;
use crate::users::User;

/// Trait for ambition repository operations.
#[async_trait]
pub trait AmbitionRepositoryTrait: Send + Sync {
    /// Lists the ambitions owned by one user, in insertion order.
    fn list_by_user(&self, user_id: &str) -> Result<Vec<Ambition>>;

    /// Looks an ambition up by id.
    fn find_by_id(&self, ambition_id: &str) -> Result<Option<Ambition>>;

    /// Inserts a new ambition.
    async fn create(&self, new_ambition: NewAmbition) -> Result<Ambition>;

    /// Overwrites an existing ambition record.
    async fn update(&self, ambition: Ambition) -> Result<Ambition>;

    /// Deletes an ambition by id. Dependent simulations go with it.
    ///
    /// Returns the number of deleted records.
    async fn delete(&self, ambition_id: &str) -> Result<usize>;
}

/// Trait for ambition service operations.
///
/// Single-item retrieval is deliberately absent: the API only exposes the
/// owner-scoped collection.
#[async_trait]
pub trait AmbitionServiceTrait: Send + Sync {
    /// Lists the requesting user's ambitions.
    fn get_ambitions(&self, user_id: &str) -> Result<Vec<Ambition>>;

    /// Creates an ambition after validation.
    async fn create_ambition(&self, new_ambition: NewAmbition) -> Result<Ambition>;

    /// Replaces every mutable field of an owned ambition.
    async fn update_ambition(&self, user: &User, update: AmbitionUpdate) -> Result<Ambition>;

    /// Deletes an owned ambition and, by cascade, its simulations.
    async fn delete_ambition(&self, user: &User, ambition_id: &str) -> Result<()>;
}
