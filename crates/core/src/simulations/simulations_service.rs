use log::debug;
use std::sync::Arc;

use async_trait::async_trait;

use super::scoring::compute_final_score;
use super::simulations_model::{NewSimulation, Simulation, SimulationSubmission, SimulationUpdate};
use super::simulations_traits::{SimulationRepositoryTrait, SimulationServiceTrait};
use crate::ambitions::AmbitionRepositoryTrait;
use crate::errors::{DatabaseError, Result, ValidationError};
use crate::users::User;
use crate::Error;

/// Orchestrates score submissions: fans a submission out over the user's
/// ambitions, scores each one, and persists the results.
pub struct SimulationService {
    repository: Arc<dyn SimulationRepositoryTrait>,
    ambition_repository: Arc<dyn AmbitionRepositoryTrait>,
}

impl SimulationService {
    pub fn new(
        repository: Arc<dyn SimulationRepositoryTrait>,
        ambition_repository: Arc<dyn AmbitionRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            ambition_repository,
        }
    }

    /// Resolves a simulation the given user is allowed to touch. A foreign or
    /// unknown id is reported the same way, as not found.
    fn find_owned(&self, user: &User, simulation_id: &str) -> Result<Simulation> {
        self.repository
            .find_by_id(simulation_id)?
            .filter(|simulation| user.can_access(&simulation.user_id))
            .ok_or_else(|| {
                Error::Database(DatabaseError::NotFound(
                    "the simulation does not exist".to_string(),
                ))
            })
    }
}

#[async_trait]
impl SimulationServiceTrait for SimulationService {
    fn get_simulations(&self, user_id: &str) -> Result<Vec<Simulation>> {
        self.repository.list_by_user(user_id)
    }

    async fn submit_simulations(
        &self,
        user_id: &str,
        submission: SimulationSubmission,
    ) -> Result<Vec<Simulation>> {
        submission.validate()?;

        let ambitions = self.ambition_repository.list_by_user(user_id)?;
        if ambitions.is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "no ambition registered".to_string(),
            )));
        }

        let scores = submission.scores();
        let base_name = submission.name.clone().unwrap_or_default();
        let score_kind = submission.score_kind.unwrap_or_default();
        debug!(
            "Scoring submission '{}' for user {} against {} ambition(s)",
            base_name,
            user_id,
            ambitions.len()
        );

        // One insert per ambition. The inserts are deliberately not batched
        // into a single transaction: a mid-loop failure leaves the rows
        // created so far in place.
        let mut created = Vec::with_capacity(ambitions.len());
        for ambition in &ambitions {
            let final_score = compute_final_score(&scores, &ambition.weights())?;
            let new_simulation = NewSimulation {
                id: None,
                user_id: user_id.to_string(),
                ambition_id: ambition.id.clone(),
                name: format!("{} - {}", base_name, ambition.describe()),
                math: scores.math,
                languages: scores.languages,
                natural_science: scores.natural_science,
                human_science: scores.human_science,
                essay: scores.essay,
                score_kind,
                final_score,
            };
            created.push(self.repository.create(new_simulation).await?);
        }
        Ok(created)
    }

    async fn update_simulation(
        &self,
        user: &User,
        update: SimulationUpdate,
    ) -> Result<Simulation> {
        update.fields.validate()?;
        let simulation_id = update.id.as_deref().ok_or_else(|| {
            Error::Validation(ValidationError::MissingField("id".to_string()))
        })?;
        let mut simulation = self.find_owned(user, simulation_id)?;

        // The linked ambition always outlives its simulations (deletes
        // cascade), so a miss here is a consistency violation, not a caller
        // error.
        let ambition = self
            .ambition_repository
            .find_by_id(&simulation.ambition_id)?
            .ok_or_else(|| {
                Error::Unexpected(format!(
                    "simulation {} references missing ambition {}",
                    simulation.id, simulation.ambition_id
                ))
            })?;

        let scores = update.fields.scores();
        // Recomputed with the ambition's current weights. The name is stored
        // verbatim: only creation decorates it with the ambition descriptors.
        simulation.final_score = compute_final_score(&scores, &ambition.weights())?;
        simulation.name = update.fields.name.clone().unwrap_or_default();
        simulation.math = scores.math;
        simulation.languages = scores.languages;
        simulation.natural_science = scores.natural_science;
        simulation.human_science = scores.human_science;
        simulation.essay = scores.essay;
        simulation.score_kind = update.fields.score_kind.unwrap_or_default();

        self.repository.update(simulation).await
    }

    async fn delete_simulation(&self, user: &User, simulation_id: &str) -> Result<()> {
        let simulation = self.find_owned(user, simulation_id)?;
        self.repository.delete(&simulation.id).await?;
        Ok(())
    }
}
