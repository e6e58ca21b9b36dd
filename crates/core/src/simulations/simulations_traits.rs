//! Simulation repository and service traits.

use async_trait::async_trait;

use super::simulations_model::{NewSimulation, Simulation, SimulationSubmission, SimulationUpdate};
use crate::errors::Result;
use crate::users::User;

/// Trait for simulation repository operations.
#[async_trait]
pub trait SimulationRepositoryTrait: Send + Sync {
    /// Lists the simulations owned by one user, in insertion order.
    fn list_by_user(&self, user_id: &str) -> Result<Vec<Simulation>>;

    /// Looks a simulation up by id.
    fn find_by_id(&self, simulation_id: &str) -> Result<Option<Simulation>>;

    /// Inserts one simulation row.
    async fn create(&self, new_simulation: NewSimulation) -> Result<Simulation>;

    /// Overwrites an existing simulation record.
    async fn update(&self, simulation: Simulation) -> Result<Simulation>;

    /// Deletes a simulation by id.
    ///
    /// Returns the number of deleted records.
    async fn delete(&self, simulation_id: &str) -> Result<usize>;
}

/// Trait for simulation service operations.
///
/// Creation is bulk-only: one submission produces one simulation per ambition
/// the submitting user owns. Single-item retrieval is deliberately absent.
#[async_trait]
pub trait SimulationServiceTrait: Send + Sync {
    /// Lists the requesting user's simulations.
    fn get_simulations(&self, user_id: &str) -> Result<Vec<Simulation>>;

    /// Scores a submission against every ambition the user owns and persists
    /// one simulation per ambition. Returns the created rows in creation
    /// order.
    async fn submit_simulations(
        &self,
        user_id: &str,
        submission: SimulationSubmission,
    ) -> Result<Vec<Simulation>>;

    /// Updates one owned simulation, recomputing its final score with the
    /// linked ambition's current weights.
    async fn update_simulation(&self, user: &User, update: SimulationUpdate)
        -> Result<Simulation>;

    /// Deletes one owned simulation.
    async fn delete_simulation(&self, user: &User, simulation_id: &str) -> Result<()>;
}
