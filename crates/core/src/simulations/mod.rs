//! Simulations module - scoring engine, domain models, services, and traits.

pub mod scoring;

mod simulations_model;
mod simulations_service;
mod simulations_traits;

#[cfg(test)]
mod simulations_service_tests;

// Re-export the public interface
pub use scoring::{compute_final_score, SubjectScores, SubjectWeights};
pub use simulations_model::{
    NewSimulation, ScoreKind, Simulation, SimulationSubmission, SimulationUpdate,
};
pub use simulations_service::SimulationService;
pub use simulations_traits::{SimulationRepositoryTrait, SimulationServiceTrait};
